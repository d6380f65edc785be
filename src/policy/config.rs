use indexmap::IndexSet;
use serde::Deserialize;
use std::path::Path;
use tracing::debug;
use crate::error::{LoadError, Result};

/// `.licensee.json` as written for the licensee tool. Only `licenses.spdx` is read.
#[derive(Debug, Clone, Deserialize)]
pub struct LicenseeConfig {
    pub licenses: LicenseSelection,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LicenseSelection {
    /// Allowed SPDX identifiers or free-text phrases
    pub spdx: Vec<String>,
}

/// Normalized allow-list: lower-cased entries, first-seen order, no duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AllowList {
    entries: IndexSet<String>,
}

impl AllowList {
    pub fn new<I, S>(licenses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            entries: licenses
                .into_iter()
                .map(|license| license.as_ref().to_lowercase())
                .collect(),
        }
    }

    pub fn entries(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    pub(crate) fn contains(&self, normalized: &str) -> bool {
        self.entries.contains(normalized)
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    /// Load the allow-list from a `.licensee.json` file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path_ref = path.as_ref();

        let content = std::fs::read_to_string(path_ref).map_err(|source| LoadError::Read {
            path: path_ref.to_path_buf(),
            source,
        })?;

        let config: LicenseeConfig = serde_json::from_str(&content).map_err(|source| LoadError::Parse {
            path: path_ref.to_path_buf(),
            source,
        })?;

        let allow_list = Self::new(&config.licenses.spdx);
        debug!(path = %path_ref.display(), entries = allow_list.len(), "loaded allow-list");

        Ok(allow_list)
    }
}
