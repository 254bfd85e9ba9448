use std::{
    fs,
    path::{Path, PathBuf},
};

use serde_json::Value;
use thiserror::Error;
use tracing::{error, info, warn};

mod catalog;

pub use catalog::{Catalog, CatalogStatus, Project};

pub const ROOT_KEY: &str = "Projets";

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Malformed catalog: {0}")]
    Schema(String),
}

/// Loads the catalog, falling back to an unavailable one on any failure.
pub fn load_catalog(path: impl AsRef<Path>) -> Catalog {
    let path = path.as_ref();

    match get_catalog(path) {
        Ok(catalog) => catalog,
        Err(e) => {
            error!("Catalog unavailable: {e}");
            Catalog::unavailable(e.to_string())
        }
    }
}

pub fn get_catalog(path: impl AsRef<Path>) -> Result<Catalog, LoadError> {
    let path = path.as_ref();
    info!("Reading catalog from {}", path.display());

    let data = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    parse_catalog(&data)
}

pub fn parse_catalog(data: &str) -> Result<Catalog, LoadError> {
    let mut document: Value = serde_json::from_str(data)?;

    let entries = match document.get_mut(ROOT_KEY).map(Value::take) {
        Some(Value::Array(entries)) => entries,
        Some(_) => return Err(LoadError::Schema(format!("`{ROOT_KEY}` is not an array"))),
        None => return Err(LoadError::Schema(format!("missing `{ROOT_KEY}` key"))),
    };

    let mut projects = Vec::with_capacity(entries.len());
    let mut rejected = 0;

    for (index, entry) in entries.into_iter().enumerate() {
        match serde_json::from_value::<Project>(entry) {
            Ok(project) => projects.push(project),
            Err(e) => {
                warn!("Skipping catalog entry {index}: {e}");
                rejected += 1;
            }
        }
    }

    info!("Loaded Projects: {}", projects.len());
    if rejected > 0 {
        warn!("Rejected Entries: {rejected}");
    }

    Ok(Catalog::from_parts(projects, rejected))
}
