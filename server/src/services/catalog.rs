//! Catalog loading.
//!
//! The catalog is read once at startup, either from `CATALOG_PATH` or from the
//! document bundled with the binary, then validated so the budget service can
//! rely on every fixed product ID being present.

use std::path::{Path, PathBuf};

use heating::Catalog;
use heating::catalog::CatalogError;

/// Catalog document compiled into the binary.
pub const BUNDLED_CATALOG: &str = include_str!("../../data/catalog.json");

#[derive(Debug, thiserror::Error)]
pub enum CatalogLoadError {
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid catalog: {0}")]
    Invalid(#[from] CatalogError),
}

/// Load the catalog from `path`, or the bundled document when `None`.
///
/// # Errors
///
/// Returns an error if the file cannot be read, parsed or validated.
pub fn load(path: Option<&Path>) -> Result<Catalog, CatalogLoadError> {
    match path {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .map_err(|source| CatalogLoadError::Io { path: path.to_path_buf(), source })?;
            parse(&raw)
        }
        None => bundled(),
    }
}

/// Parse and validate the bundled catalog.
///
/// # Errors
///
/// Only fails if the bundled document itself is broken.
pub fn bundled() -> Result<Catalog, CatalogLoadError> {
    parse(BUNDLED_CATALOG)
}

/// Parse a catalog document and validate it.
///
/// # Errors
///
/// Returns `Parse` for malformed JSON and `Invalid` for missing products.
pub fn parse(raw: &str) -> Result<Catalog, CatalogLoadError> {
    let catalog = serde_json::from_str::<Catalog>(raw)?.normalized();
    catalog.validate()?;
    Ok(catalog)
}

#[cfg(test)]
#[path = "catalog_test.rs"]
mod tests;
