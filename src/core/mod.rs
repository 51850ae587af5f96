pub mod ingest;
pub mod service;

pub use crate::domain::geometry::{Point, Polygon};
pub use crate::domain::model::{Boundary, Entity, GeometryInput, Location};
pub use crate::domain::ports::EntityStore;
pub use crate::utils::error::Result;
