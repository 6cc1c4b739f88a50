use serde::{Deserialize, Serialize};

/// Polygon outline of a park as `[lat, lng]` pairs.
///
/// Reserved for parks mapped as areas rather than points. Nothing in the
/// bundled dataset populates it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AreaBounds(pub Vec<[f64; 2]>);

impl AreaBounds {
    pub fn is_valid(&self) -> bool {
        self.0.len() >= 3
    }
}

/// A single dog park: identity, location and visitor-facing metadata.
///
/// Field order matches the serialized record consumed by the map front-end.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParkRecord {
    pub name: String,
    pub lat: f64,
    pub lng: f64,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub amenities: Vec<String>,
    #[serde(default)]
    pub area_bounds: Option<AreaBounds>,
    #[serde(default)]
    pub source: String,
}

impl ParkRecord {
    pub fn new(name: impl Into<String>, lat: f64, lng: f64) -> Self {
        Self {
            name: name.into(),
            lat,
            lng,
            description: String::new(),
            address: String::new(),
            amenities: Vec::new(),
            area_bounds: None,
            source: String::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }

    pub fn with_amenities<I, S>(mut self, amenities: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.amenities = amenities.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_area_bounds(mut self, bounds: AreaBounds) -> Self {
        self.area_bounds = Some(bounds);
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }

    /// Location as a `geo` point (x = longitude, y = latitude).
    pub fn location(&self) -> geo::Point<f64> {
        geo::Point::new(self.lng, self.lat)
    }
}
