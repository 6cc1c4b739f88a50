use tracing::debug;

use crate::domain::ParkRecord;

/// Two parks closer than this on both axes (degrees, roughly 100m) are the same park.
pub const DUPLICATE_THRESHOLD_DEG: f64 = 0.001;

/// Outcome of [`remove_duplicates`].
#[derive(Debug, Clone, PartialEq)]
pub struct DedupReport {
    pub parks: Vec<ParkRecord>,
    pub removed: usize,
}

fn is_near(a: &ParkRecord, b: &ParkRecord) -> bool {
    (a.lat - b.lat).abs() < DUPLICATE_THRESHOLD_DEG
        && (a.lng - b.lng).abs() < DUPLICATE_THRESHOLD_DEG
}

fn merge_into(kept: &mut ParkRecord, duplicate: ParkRecord) {
    if kept.description.is_empty() && !duplicate.description.is_empty() {
        kept.description = duplicate.description;
    }
    if kept.area_bounds.is_none()
        && let Some(bounds) = duplicate.area_bounds.filter(|b| b.is_valid())
    {
        kept.area_bounds = Some(bounds);
    }
    if !duplicate.amenities.is_empty() {
        let mut merged: Vec<String> = Vec::with_capacity(kept.amenities.len());
        for amenity in kept.amenities.drain(..).chain(duplicate.amenities) {
            if !merged.contains(&amenity) {
                merged.push(amenity);
            }
        }
        kept.amenities = merged;
    }
}

/// Collapse parks that sit on top of each other.
///
/// # Algorithm
/// 1. Walk parks in input order
/// 2. A park within [`DUPLICATE_THRESHOLD_DEG`] of an already kept park is
///    folded into it: its description and a usable outline fill empty ones,
///    and the two amenity lists become one list without repeated tags (kept
///    park's tags first)
/// 3. Otherwise it is kept as a new park
pub fn remove_duplicates(parks: Vec<ParkRecord>) -> DedupReport {
    let total = parks.len();
    let mut unique: Vec<ParkRecord> = Vec::with_capacity(total);

    for park in parks {
        match unique.iter_mut().find(|kept| is_near(kept, &park)) {
            Some(kept) => {
                debug!(kept = %kept.name, duplicate = %park.name, "merging duplicate park");
                merge_into(kept, park);
            }
            None => unique.push(park),
        }
    }

    let removed = total - unique.len();
    DedupReport {
        parks: unique,
        removed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::AreaBounds;

    #[test]
    fn test_distinct_parks_untouched() {
        let parks = vec![
            ParkRecord::new("A", 43.0, -89.4),
            ParkRecord::new("B", 43.01, -89.4),
        ];
        let report = remove_duplicates(parks.clone());
        assert_eq!(report.removed, 0);
        assert_eq!(report.parks, parks);
    }

    #[test]
    fn test_merges_nearby_park() {
        let parks = vec![
            ParkRecord::new("Sycamore Dog Park", 43.0848, -89.4445)
                .with_amenities(["Fenced", "Water fountain"]),
            ParkRecord::new("Unnamed Dog Park", 43.0850, -89.4441)
                .with_description("Surface: grass")
                .with_amenities(["Lighting", "Fenced"]),
        ];

        let report = remove_duplicates(parks);

        assert_eq!(report.removed, 1);
        assert_eq!(report.parks.len(), 1);
        let park = &report.parks[0];
        assert_eq!(park.name, "Sycamore Dog Park");
        assert_eq!(park.description, "Surface: grass");
        assert_eq!(park.amenities, vec!["Fenced", "Water fountain", "Lighting"]);
    }

    #[test]
    fn test_merge_collapses_repeated_tags() {
        let parks = vec![
            ParkRecord::new("A", 43.0, -89.4).with_amenities(["Fenced", "Parking", "Fenced"]),
            ParkRecord::new("B", 43.0001, -89.4001).with_amenities(["Parking", "Trails"]),
        ];
        let report = remove_duplicates(parks);
        assert_eq!(report.parks[0].amenities, vec!["Fenced", "Parking", "Trails"]);
    }

    #[test]
    fn test_merge_takes_area_outline() {
        let outline = AreaBounds(vec![[43.0, -89.4], [43.001, -89.4], [43.001, -89.399]]);
        let parks = vec![
            ParkRecord::new("Point park", 43.0005, -89.3995),
            ParkRecord::new("Area park", 43.0006, -89.3996).with_area_bounds(outline.clone()),
            ParkRecord::new("Degenerate", 43.0004, -89.3994)
                .with_area_bounds(AreaBounds(vec![[43.0, -89.4]])),
        ];

        let report = remove_duplicates(parks);

        assert_eq!(report.removed, 2);
        assert_eq!(report.parks[0].area_bounds, Some(outline));
    }

    #[test]
    fn test_degenerate_outline_ignored() {
        let parks = vec![
            ParkRecord::new("A", 43.0, -89.4),
            ParkRecord::new("B", 43.0001, -89.4001)
                .with_area_bounds(AreaBounds(vec![[43.0, -89.4], [43.1, -89.4]])),
        ];
        let report = remove_duplicates(parks);
        assert!(report.parks[0].area_bounds.is_none());
    }

    #[test]
    fn test_existing_description_wins() {
        let parks = vec![
            ParkRecord::new("A", 43.0, -89.4).with_description("first"),
            ParkRecord::new("B", 43.0005, -89.4005).with_description("second"),
        ];
        let report = remove_duplicates(parks);
        assert_eq!(report.parks[0].description, "first");
    }

    #[test]
    fn test_threshold_needs_both_axes() {
        let parks = vec![
            ParkRecord::new("A", 43.0, -89.4),
            ParkRecord::new("B", 43.0002, -89.402),
        ];
        assert_eq!(remove_duplicates(parks).removed, 0);
    }

    #[test]
    fn test_empty_input() {
        let report = remove_duplicates(Vec::new());
        assert!(report.parks.is_empty());
        assert_eq!(report.removed, 0);
    }
}
