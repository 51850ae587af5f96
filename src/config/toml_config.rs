use crate::config::AppConfig;
use crate::utils::error::{GisError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// File-based configuration:
///
/// ```toml
/// [store]
/// data_dir = "./data"
///
/// [ingest]
/// csv_file = "./locations.csv"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub store: StoreSection,
    #[serde(default)]
    pub ingest: IngestSection,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreSection {
    pub data_dir: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IngestSection {
    pub csv_file: Option<String>,
}

impl TomlConfig {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            GisError::config(format!("cannot read config file {}: {}", path.display(), e))
        })?;
        toml::from_str(&content).map_err(|e| {
            GisError::config(format!(
                "cannot parse config file {}: {}",
                path.display(),
                e
            ))
        })
    }

    /// Fills in fields the CLI left unset; explicit CLI flags win.
    pub fn resolve(self, data_dir: Option<String>, csv_file: Option<String>) -> AppConfig {
        AppConfig {
            data_dir: data_dir
                .or(self.store.data_dir)
                .unwrap_or_else(|| "./data".to_string()),
            csv_file: csv_file.or(self.ingest.csv_file),
        }
    }
}
