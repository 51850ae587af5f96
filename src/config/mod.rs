#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};

/// Source-agnostic view of the settings the binary needs. CLI flags and
/// the TOML file both resolve into this.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub data_dir: String,
    pub csv_file: Option<String>,
}

impl AppConfig {
    pub fn locations_path(&self) -> std::path::PathBuf {
        std::path::Path::new(&self.data_dir).join("locations.json")
    }

    pub fn boundaries_path(&self) -> std::path::PathBuf {
        std::path::Path::new(&self.data_dir).join("boundaries.json")
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        validate_path("data_dir", &self.data_dir)?;
        if let Some(csv_file) = &self.csv_file {
            validate_path("csv_file", csv_file)?;
        }
        Ok(())
    }
}
