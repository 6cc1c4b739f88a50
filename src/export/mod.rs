//! Artifacts consumed by the map front-end.
//!
//! The same park list is published two ways: a JSON document for fetch-based
//! loaders and a JavaScript file that works both when included with a
//! `<script>` tag and when required as a CommonJS module.

pub mod js;
pub mod json;

pub use js::{render_js, write_js};
pub use json::{ParksDocument, render_json, write_json};

use std::path::{Path, PathBuf};

use thiserror::Error;

pub const DEFAULT_JSON_FILE: &str = "dog_parks.json";
pub const DEFAULT_JS_FILE: &str = "dog_parks.js";

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to serialize parks: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, ExportError>;

fn write_file(path: &Path, contents: &str) -> Result<()> {
    std::fs::write(path, contents).map_err(|source| ExportError::Write {
        path: path.to_path_buf(),
        source,
    })
}
