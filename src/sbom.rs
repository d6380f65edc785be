use serde::Deserialize;
use std::path::Path;
use tracing::{debug, warn};
use crate::error::{LoadError, Result};

/// SBOM document under audit. Only `artifacts` is read; everything else the
/// generator emits is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct Sbom {
    pub artifacts: Vec<SbomArtifact>,
}

/// A single dependency listed in the SBOM.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SbomArtifact {
    pub name: String,
    /// Ecosystem tag, e.g. "npm", "cargo", "go-module"
    #[serde(rename = "type")]
    pub ecosystem: String,
    /// Declared licenses, any one of which satisfies the allow-list
    pub licenses: Vec<String>,
}

impl SbomArtifact {
    pub fn new(name: &str, ecosystem: &str, licenses: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            ecosystem: ecosystem.to_string(),
            licenses: licenses.iter().map(|l| l.to_string()).collect(),
        }
    }
}

pub struct SbomParser;

impl SbomParser {
    /// Read and parse an SBOM JSON file
    pub fn parse_sbom<P: AsRef<Path>>(path: P) -> Result<Sbom> {
        let path_ref = path.as_ref();

        let content = std::fs::read_to_string(path_ref).map_err(|source| LoadError::Read {
            path: path_ref.to_path_buf(),
            source,
        })?;

        let sbom: Sbom = serde_json::from_str(&content).map_err(|source| LoadError::Parse {
            path: path_ref.to_path_buf(),
            source,
        })?;

        if sbom.artifacts.is_empty() {
            warn!(path = %path_ref.display(), "SBOM contains no artifacts");
        }
        debug!(path = %path_ref.display(), artifacts = sbom.artifacts.len(), "loaded SBOM");

        Ok(sbom)
    }
}
