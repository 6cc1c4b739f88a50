//! dogparks - Madison, WI dog park dataset and its front-end exporters

pub mod catalog;
pub mod config;
pub mod data;
pub mod domain;
pub mod export;
pub mod logging;

pub use catalog::ParkCatalog;
pub use data::dog_parks;
pub use domain::{AreaBounds, ParkRecord};
