pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::cli::CliConfig;
pub use crate::config::AppConfig;

pub use crate::adapters::store::MemoryStore;
pub use crate::core::ingest::{IngestReport, LocationLoader};
pub use crate::core::service::GisService;
pub use crate::domain::geometry::{Point, Polygon};
pub use crate::domain::model::{Boundary, GeometryInput, Location};
pub use crate::domain::ports::EntityStore;
pub use crate::utils::error::{GisError, Result};
