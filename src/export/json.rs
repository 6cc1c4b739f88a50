use std::path::Path;

use serde::Serialize;
use tracing::info;

use super::{Result, write_file};
use crate::catalog::ParkCatalog;
use crate::domain::ParkRecord;

/// Top-level JSON document: location label, count and the parks themselves.
#[derive(Debug, Serialize)]
pub struct ParksDocument<'a> {
    pub location: &'a str,
    pub total_parks: usize,
    pub parks: &'a [ParkRecord],
}

impl<'a> ParksDocument<'a> {
    pub fn new(catalog: &'a ParkCatalog) -> Self {
        Self {
            location: &catalog.location,
            total_parks: catalog.parks.len(),
            parks: &catalog.parks,
        }
    }
}

/// Pretty-printed JSON with two-space indentation.
pub fn render_json(catalog: &ParkCatalog) -> Result<String> {
    Ok(serde_json::to_string_pretty(&ParksDocument::new(catalog))?)
}

pub fn write_json(path: &Path, catalog: &ParkCatalog) -> Result<()> {
    let contents = render_json(catalog)?;
    write_file(path, &contents)?;
    info!(path = %path.display(), parks = catalog.len(), "wrote JSON export");
    Ok(())
}
