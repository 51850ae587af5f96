use crate::config::toml_config::TomlConfig;
use crate::config::AppConfig;
use crate::utils::error::Result;
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "geostore")]
#[command(about = "Location/boundary store with planar spatial queries")]
pub struct CliConfig {
    /// Directory holding the JSON snapshot files
    #[arg(long)]
    pub data_dir: Option<String>,

    /// CSV file of locations to bulk-load
    #[arg(long)]
    pub csv_file: Option<String>,

    /// Optional TOML config file; explicit flags override it
    #[arg(long)]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    pub fn resolve(self) -> Result<AppConfig> {
        let file_config = match &self.config {
            Some(path) => TomlConfig::from_file(path)?,
            None => TomlConfig::default(),
        };
        Ok(file_config.resolve(self.data_dir, self.csv_file))
    }
}
