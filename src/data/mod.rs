//! Bundled park datasets.

pub mod madison;

pub use madison::{MADISON_LOCATION, MADISON_SOURCE, dog_parks};
