use crate::domain::model::{
    Boundary, BoundaryDraft, BoundaryPatch, GeometryInput, Location, LocationDraft, LocationPatch,
};
use crate::domain::ports::EntityStore;
use crate::utils::error::Result;
use crate::utils::validation::validate_required_field;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Deserialize)]
pub struct CreateLocationRequest {
    pub name: String,
    pub description: Option<String>,
    pub coordinates: GeometryInput,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateLocationRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub coordinates: Option<GeometryInput>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateBoundaryRequest {
    pub name: String,
    pub area: GeometryInput,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateBoundaryRequest {
    pub name: Option<String>,
    pub area: Option<GeometryInput>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DistanceRequest {
    pub location1_id: Option<Uuid>,
    pub location2_id: Option<Uuid>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DistanceResponse {
    pub location1_id: Uuid,
    pub location2_id: Uuid,
    pub distance: f64,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct WithinBoundaryRequest {
    pub location_id: Option<Uuid>,
    pub boundary_id: Option<Uuid>,
}

#[derive(Debug, Clone, Serialize)]
pub struct WithinBoundaryResponse {
    pub is_within: bool,
}

/// Stateless operations over the two entity stores: CRUD passthroughs
/// plus the two spatial queries. Authentication happens upstream; a
/// request that reaches this service is already authorized.
pub struct GisService<L, B>
where
    L: EntityStore<Location>,
    B: EntityStore<Boundary>,
{
    locations: L,
    boundaries: B,
}

impl<L, B> GisService<L, B>
where
    L: EntityStore<Location>,
    B: EntityStore<Boundary>,
{
    pub fn new(locations: L, boundaries: B) -> Self {
        Self {
            locations,
            boundaries,
        }
    }

    pub fn locations(&self) -> &L {
        &self.locations
    }

    pub fn boundaries(&self) -> &B {
        &self.boundaries
    }

    pub async fn list_locations(&self) -> Result<Vec<Location>> {
        self.locations.list().await
    }

    pub async fn create_location(&self, request: CreateLocationRequest) -> Result<Location> {
        let draft = LocationDraft {
            name: request.name,
            description: request.description,
            coordinates: request.coordinates.into_point()?,
        };
        self.locations.create(draft).await
    }

    pub async fn get_location(&self, id: Uuid) -> Result<Location> {
        self.locations.get(id).await
    }

    pub async fn update_location(
        &self,
        id: Uuid,
        request: UpdateLocationRequest,
    ) -> Result<Location> {
        let coordinates = request
            .coordinates
            .map(GeometryInput::into_point)
            .transpose()?;
        let patch = LocationPatch {
            name: request.name,
            description: request.description,
            coordinates,
        };
        self.locations.update(id, patch).await
    }

    pub async fn delete_location(&self, id: Uuid) -> Result<()> {
        self.locations.delete(id).await
    }

    pub async fn list_boundaries(&self) -> Result<Vec<Boundary>> {
        self.boundaries.list().await
    }

    pub async fn create_boundary(&self, request: CreateBoundaryRequest) -> Result<Boundary> {
        let draft = BoundaryDraft {
            name: request.name,
            area: request.area.into_polygon()?,
        };
        self.boundaries.create(draft).await
    }

    pub async fn get_boundary(&self, id: Uuid) -> Result<Boundary> {
        self.boundaries.get(id).await
    }

    pub async fn update_boundary(
        &self,
        id: Uuid,
        request: UpdateBoundaryRequest,
    ) -> Result<Boundary> {
        let area = request.area.map(GeometryInput::into_polygon).transpose()?;
        let patch = BoundaryPatch {
            name: request.name,
            area,
        };
        self.boundaries.update(id, patch).await
    }

    pub async fn delete_boundary(&self, id: Uuid) -> Result<()> {
        self.boundaries.delete(id).await
    }

    /// Planar distance between two stored locations. Each lookup fails
    /// independently; the first missing id surfaces without attempting
    /// the second fetch.
    pub async fn calculate_distance(&self, request: DistanceRequest) -> Result<DistanceResponse> {
        let location1_id = *validate_required_field("location1_id", &request.location1_id)?;
        let location2_id = *validate_required_field("location2_id", &request.location2_id)?;

        let first = self.locations.get(location1_id).await?;
        let second = self.locations.get(location2_id).await?;
        let distance = first.coordinates.distance(&second.coordinates);
        tracing::debug!(
            "distance between {} and {}: {}",
            location1_id,
            location2_id,
            distance
        );

        Ok(DistanceResponse {
            location1_id,
            location2_id,
            distance,
        })
    }

    /// Whether a stored location lies within a stored boundary.
    pub async fn check_within_boundary(
        &self,
        request: WithinBoundaryRequest,
    ) -> Result<WithinBoundaryResponse> {
        let location_id = *validate_required_field("location_id", &request.location_id)?;
        let boundary_id = *validate_required_field("boundary_id", &request.boundary_id)?;

        let location = self.locations.get(location_id).await?;
        let boundary = self.boundaries.get(boundary_id).await?;

        Ok(WithinBoundaryResponse {
            is_within: boundary.area.contains(&location.coordinates),
        })
    }
}
