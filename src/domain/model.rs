use crate::domain::geometry::{Point, Polygon};
use crate::utils::error::{GisError, Result};
use crate::utils::validation::validate_non_empty_string;
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const DEFAULT_DESCRIPTION: &str = "No description available";

/// A persisted record with a generated id and creation/update stamps.
///
/// `build` and `apply` own all field validation so every store
/// implementation enforces the same rules.
pub trait Entity: Clone + Send + Sync + Serialize + DeserializeOwned + 'static {
    type Draft: Send;
    type Patch: Send;

    /// Human-readable kind used in not-found errors ("Location",
    /// "Boundary").
    const KIND: &'static str;

    fn id(&self) -> Uuid;

    fn build(id: Uuid, draft: Self::Draft, now: DateTime<Utc>) -> Result<Self>;

    /// Applies a partial update: only supplied fields change, geometry
    /// is replaced wholesale, `updated_at` is stamped.
    fn apply(&mut self, patch: Self::Patch, now: DateTime<Utc>) -> Result<()>;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub coordinates: Point,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct LocationDraft {
    pub name: String,
    pub description: Option<String>,
    pub coordinates: Point,
}

#[derive(Debug, Clone, Default)]
pub struct LocationPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub coordinates: Option<Point>,
}

impl Entity for Location {
    type Draft = LocationDraft;
    type Patch = LocationPatch;

    const KIND: &'static str = "Location";

    fn id(&self) -> Uuid {
        self.id
    }

    fn build(id: Uuid, draft: LocationDraft, now: DateTime<Utc>) -> Result<Self> {
        validate_non_empty_string("name", &draft.name)?;
        let description = match draft.description {
            Some(text) if !text.is_empty() => text,
            _ => DEFAULT_DESCRIPTION.to_string(),
        };
        Ok(Self {
            id,
            name: draft.name,
            description,
            coordinates: draft.coordinates,
            created_at: now,
            updated_at: now,
        })
    }

    fn apply(&mut self, patch: LocationPatch, now: DateTime<Utc>) -> Result<()> {
        if let Some(name) = &patch.name {
            validate_non_empty_string("name", name)?;
        }
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(coordinates) = patch.coordinates {
            self.coordinates = coordinates;
        }
        self.updated_at = now;
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Boundary {
    pub id: Uuid,
    pub name: String,
    pub area: Polygon,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct BoundaryDraft {
    pub name: String,
    pub area: Polygon,
}

#[derive(Debug, Clone, Default)]
pub struct BoundaryPatch {
    pub name: Option<String>,
    pub area: Option<Polygon>,
}

impl Entity for Boundary {
    type Draft = BoundaryDraft;
    type Patch = BoundaryPatch;

    const KIND: &'static str = "Boundary";

    fn id(&self) -> Uuid {
        self.id
    }

    fn build(id: Uuid, draft: BoundaryDraft, now: DateTime<Utc>) -> Result<Self> {
        validate_non_empty_string("name", &draft.name)?;
        Ok(Self {
            id,
            name: draft.name,
            area: draft.area,
            created_at: now,
            updated_at: now,
        })
    }

    fn apply(&mut self, patch: BoundaryPatch, now: DateTime<Utc>) -> Result<()> {
        if let Some(name) = &patch.name {
            validate_non_empty_string("name", name)?;
        }
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(area) = patch.area {
            self.area = area;
        }
        self.updated_at = now;
        Ok(())
    }
}

/// Loosely-typed geometry payload accepted at the service boundary,
/// shaped like the GeoJSON fragments the API consumes:
/// `{"type": "Point", "coordinates": [lon, lat]}` or
/// `{"type": "Polygon", "coordinates": [[[lon, lat], ...]]}`.
///
/// Only the outer ring of a polygon payload is used.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GeometryInput {
    Point { coordinates: [f64; 2] },
    Polygon { coordinates: Vec<Vec<[f64; 2]>> },
}

impl GeometryInput {
    pub fn into_point(self) -> Result<Point> {
        match self {
            GeometryInput::Point { coordinates } => Point::new(coordinates[0], coordinates[1]),
            GeometryInput::Polygon { .. } => Err(GisError::validation(
                "expected a Point geometry, got a Polygon",
            )),
        }
    }

    pub fn into_polygon(self) -> Result<Polygon> {
        match self {
            GeometryInput::Polygon { coordinates } => {
                let outer = coordinates
                    .into_iter()
                    .next()
                    .ok_or_else(|| GisError::validation("polygon payload has no rings"))?;
                let ring = outer
                    .into_iter()
                    .map(|pair| Point::new(pair[0], pair[1]))
                    .collect::<Result<Vec<_>>>()?;
                Polygon::new(ring)
            }
            GeometryInput::Point { .. } => Err(GisError::validation(
                "expected a Polygon geometry, got a Point",
            )),
        }
    }
}
