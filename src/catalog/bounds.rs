use geo::{Intersects, Rect, coord};

use crate::domain::ParkRecord;

/// Rough bounding box a city's parks are expected to fall inside.
///
/// Used as a sanity report on coordinates, never to reject records.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CityBounds {
    rect: Rect<f64>,
}

impl CityBounds {
    pub fn new(min_lat: f64, max_lat: f64, min_lng: f64, max_lng: f64) -> Self {
        Self {
            rect: Rect::new(
                coord! { x: min_lng, y: min_lat },
                coord! { x: max_lng, y: max_lat },
            ),
        }
    }

    /// Madison, WI and its outlying county parks.
    pub fn madison() -> Self {
        Self::new(42.9, 43.2, -89.6, -89.2)
    }

    /// Boundary inclusive.
    pub fn contains(&self, park: &ParkRecord) -> bool {
        self.rect.intersects(&park.location().0)
    }

    pub fn outside<'a>(&self, parks: &'a [ParkRecord]) -> Vec<&'a ParkRecord> {
        parks.iter().filter(|p| !self.contains(p)).collect()
    }
}
