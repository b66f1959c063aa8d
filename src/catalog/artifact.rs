use super::Catalog;
use crate::error::CatalogError;
use bincode::config::standard;
use bincode::serde::{decode_from_slice, encode_to_vec};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{Read, Write};

/// Bumped whenever the binary layout of `Catalog` changes.
pub const ARTIFACT_FORMAT_VERSION: u32 = 1;

/// A validated catalog in a compact binary form, for fast startup.
#[derive(Serialize, Deserialize, Debug)]
pub struct CatalogArtifact {
    pub format_version: u32,
    pub catalog: Catalog,
}

impl CatalogArtifact {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            format_version: ARTIFACT_FORMAT_VERSION,
            catalog,
        }
    }

    /// Saves the artifact to a file using the bincode format.
    pub fn save(&self, path: &str) -> Result<(), CatalogError> {
        let bytes = self.to_bytes()?;
        let mut file = fs::File::create(path).map_err(|e| CatalogError::Io {
            path: path.to_string(),
            message: e.to_string(),
        })?;
        file.write_all(&bytes).map_err(|e| CatalogError::Io {
            path: path.to_string(),
            message: e.to_string(),
        })?;
        Ok(())
    }

    /// Loads an artifact from a file.
    pub fn from_file(path: &str) -> Result<Self, CatalogError> {
        let mut file = fs::File::open(path).map_err(|e| CatalogError::Io {
            path: path.to_string(),
            message: e.to_string(),
        })?;
        let mut bytes = Vec::new();
        file.read_to_end(&mut bytes).map_err(|e| CatalogError::Io {
            path: path.to_string(),
            message: e.to_string(),
        })?;
        Self::from_bytes(&bytes)
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, CatalogError> {
        encode_to_vec(self, standard())
            .map_err(|e| CatalogError::Artifact(format!("Serialization failed: {}", e)))
    }

    /// Deserializes an artifact and re-validates the catalog inside it.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CatalogError> {
        let (artifact, _): (Self, usize) = decode_from_slice(bytes, standard())
            .map_err(|e| CatalogError::Artifact(format!("Deserialization failed: {}", e)))?;

        if artifact.format_version != ARTIFACT_FORMAT_VERSION {
            return Err(CatalogError::Artifact(format!(
                "Unsupported artifact version {} (expected {})",
                artifact.format_version, ARTIFACT_FORMAT_VERSION
            )));
        }
        artifact.catalog.validate()?;
        Ok(artifact)
    }

    pub fn into_catalog(self) -> Catalog {
        self.catalog
    }
}
