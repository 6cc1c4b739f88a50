//! Dog parks in and around Madison, WI.
//!
//! The table is transcribed once into owned [`ParkRecord`]s on first access and
//! shared read-only for the life of the process.

use std::sync::LazyLock;

use crate::domain::ParkRecord;

/// Attribution carried by every record in this dataset.
pub const MADISON_SOURCE: &str = "Madison Parks Department";

/// Location label the dataset was compiled for.
pub const MADISON_LOCATION: &str = "Madison, WI";

struct ParkEntry {
    name: &'static str,
    lat: f64,
    lng: f64,
    description: &'static str,
    address: &'static str,
    amenities: &'static [&'static str],
}

const MADISON_PARKS: [ParkEntry; 5] = [
    ParkEntry {
        name: "Sycamore Dog Park",
        lat: 43.0848,
        lng: -89.4445,
        description: "Large fenced area with separate small dog section",
        address: "Sycamore Ave, Madison, WI",
        amenities: &["Fenced", "Separate small dog area", "Water fountain"],
    },
    ParkEntry {
        name: "Yahara Heights Park",
        lat: 43.1101,
        lng: -89.3156,
        description: "Popular dog-friendly park with trails",
        address: "Yahara Heights Rd, Madison, WI",
        amenities: &["Trails", "Parking"],
    },
    ParkEntry {
        name: "Warner Park Dog Exercise Area",
        lat: 43.1141,
        lng: -89.3537,
        description: "Spacious off-leash area near the lake",
        address: "Warner Park, Madison, WI",
        amenities: &["Fenced", "Lake access", "Parking"],
    },
    ParkEntry {
        name: "Quann Dog Park",
        lat: 43.0245,
        lng: -89.5137,
        description: "Well-maintained dog park on the west side",
        address: "Quann Park, Madison, WI",
        amenities: &["Fenced", "Water fountain", "Parking"],
    },
    ParkEntry {
        name: "Token Creek Dog Park",
        lat: 43.1499,
        lng: -89.2561,
        description: "Large rural dog park with nature trails",
        address: "Token Creek County Park, WI",
        amenities: &["Large area", "Trails", "Parking"],
    },
];

static DOG_PARKS: LazyLock<Vec<ParkRecord>> = LazyLock::new(|| {
    MADISON_PARKS
        .iter()
        .map(|entry| {
            ParkRecord::new(entry.name, entry.lat, entry.lng)
                .with_description(entry.description)
                .with_address(entry.address)
                .with_amenities(entry.amenities.iter().copied())
                .with_source(MADISON_SOURCE)
        })
        .collect()
});

/// The full ordered list of Madison dog parks.
///
/// Always succeeds and always returns the same slice.
pub fn dog_parks() -> &'static [ParkRecord] {
    &DOG_PARKS
}
