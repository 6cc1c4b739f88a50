pub mod park;

pub use park::{AreaBounds, ParkRecord};
