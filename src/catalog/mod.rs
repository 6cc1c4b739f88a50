pub mod bounds;
pub mod dedup;

pub use bounds::CityBounds;
pub use dedup::{DUPLICATE_THRESHOLD_DEG, DedupReport, remove_duplicates};

use crate::data::{MADISON_LOCATION, dog_parks};
use crate::domain::ParkRecord;

/// Number of parks attributed to one source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceCount {
    pub source: String,
    pub count: usize,
}

/// A working copy of parks for one location, as handed to the exporters.
#[derive(Debug, Clone, PartialEq)]
pub struct ParkCatalog {
    pub location: String,
    pub parks: Vec<ParkRecord>,
}

impl ParkCatalog {
    pub fn new(location: impl Into<String>, parks: Vec<ParkRecord>) -> Self {
        Self {
            location: location.into(),
            parks,
        }
    }

    /// Catalog of the bundled Madison dataset.
    pub fn madison() -> Self {
        Self::new(MADISON_LOCATION, dog_parks().to_vec())
    }

    pub fn len(&self) -> usize {
        self.parks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parks.is_empty()
    }

    /// Park counts per source, in order of first appearance.
    pub fn summary_by_source(&self) -> Vec<SourceCount> {
        let mut counts: Vec<SourceCount> = Vec::new();

        for park in &self.parks {
            match counts.iter_mut().find(|c| c.source == park.source) {
                Some(entry) => entry.count += 1,
                None => counts.push(SourceCount {
                    source: park.source.clone(),
                    count: 1,
                }),
            }
        }

        counts
    }

    pub fn sample(&self, n: usize) -> &[ParkRecord] {
        &self.parks[..n.min(self.parks.len())]
    }

    /// Drop near-duplicate parks in place, returning how many were removed.
    pub fn dedup(&mut self) -> usize {
        let report = remove_duplicates(std::mem::take(&mut self.parks));
        self.parks = report.parks;
        report.removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::MADISON_SOURCE;

    #[test]
    fn test_madison_catalog() {
        let catalog = ParkCatalog::madison();
        assert_eq!(catalog.location, "Madison, WI");
        assert_eq!(catalog.len(), 5);
        assert_eq!(catalog.parks.as_slice(), dog_parks());
    }

    #[test]
    fn test_summary_by_source() {
        let mut parks = dog_parks().to_vec();
        parks.push(ParkRecord::new("Extra", 43.0, -89.4).with_source("OpenStreetMap"));
        parks.push(ParkRecord::new("Extra 2", 43.01, -89.41).with_source("OpenStreetMap"));
        let catalog = ParkCatalog::new("Madison, WI", parks);

        let summary = catalog.summary_by_source();
        assert_eq!(
            summary,
            vec![
                SourceCount {
                    source: MADISON_SOURCE.to_string(),
                    count: 5
                },
                SourceCount {
                    source: "OpenStreetMap".to_string(),
                    count: 2
                },
            ]
        );
    }

    #[test]
    fn test_sample_clamps() {
        let catalog = ParkCatalog::madison();
        assert_eq!(catalog.sample(2).len(), 2);
        assert_eq!(catalog.sample(50).len(), 5);
        assert!(ParkCatalog::new("Nowhere", Vec::new()).sample(3).is_empty());
    }

    #[test]
    fn test_dedup_keeps_madison_intact() {
        let mut catalog = ParkCatalog::madison();
        assert_eq!(catalog.dedup(), 0);
        assert_eq!(catalog.parks.as_slice(), dog_parks());
    }
}
