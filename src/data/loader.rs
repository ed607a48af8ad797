// ============================================================
// Layer 4 — Catalog Loader
// ============================================================
// Reads the catalog JSON file and parses it into the typed
// Catalog tree from Layer 3.
//
// The whole file is read into memory before parsing; the
// file handle is closed before any traversal starts.
//
// Reference: serde_json crate documentation
//            Rust Book §9 (Error Handling)

use std::{fs, path::PathBuf};

use crate::domain::catalog::Catalog;
use crate::domain::error::{FlattenError, FlattenResult};
use crate::domain::traits::CatalogSource;

/// Loads a question catalog from a JSON file on disk.
pub struct CatalogLoader {
    path: PathBuf,
}

impl CatalogLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CatalogSource for CatalogLoader {
    fn load(&self) -> FlattenResult<Catalog> {
        let text = fs::read_to_string(&self.path).map_err(|source| FlattenError::Read {
            path: self.path.clone(),
            source,
        })?;

        tracing::debug!("Read {} bytes from '{}'", text.len(), self.path.display());

        let catalog: Catalog = serde_json::from_str(&text).map_err(|source| {
            FlattenError::Parse {
                path: self.path.clone(),
                source,
            }
        })?;

        tracing::debug!(
            "Parsed catalog with {} top-level sections",
            catalog.sections.len()
        );
        Ok(catalog)
    }
}
