use geostore::core::service::{
    CreateBoundaryRequest, CreateLocationRequest, DistanceRequest, UpdateBoundaryRequest,
    UpdateLocationRequest, WithinBoundaryRequest,
};
use geostore::{Boundary, GeometryInput, GisError, GisService, Location, MemoryStore};
use uuid::Uuid;

fn service() -> GisService<MemoryStore<Location>, MemoryStore<Boundary>> {
    GisService::new(MemoryStore::new(), MemoryStore::new())
}

fn point(lon: f64, lat: f64) -> GeometryInput {
    GeometryInput::Point {
        coordinates: [lon, lat],
    }
}

fn agra_square() -> GeometryInput {
    GeometryInput::Polygon {
        coordinates: vec![vec![
            [78.030155, 27.180015],
            [78.030155, 27.170015],
            [78.050155, 27.170015],
            [78.050155, 27.180015],
            [78.030155, 27.180015],
        ]],
    }
}

#[tokio::test]
async fn test_location_crud_flow() {
    let service = service();

    let created = service
        .create_location(CreateLocationRequest {
            name: "Taj Mahal".to_string(),
            description: Some("Mausoleum in Agra".to_string()),
            coordinates: point(78.042155, 27.175015),
        })
        .await
        .unwrap();

    let fetched = service.get_location(created.id).await.unwrap();
    assert_eq!(fetched, created);

    let updated = service
        .update_location(
            created.id,
            UpdateLocationRequest {
                description: Some("UNESCO site".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.name, "Taj Mahal");
    assert_eq!(updated.description, "UNESCO site");
    assert_eq!(updated.coordinates, created.coordinates);

    assert_eq!(service.list_locations().await.unwrap().len(), 1);

    service.delete_location(created.id).await.unwrap();
    assert!(service.list_locations().await.unwrap().is_empty());
    assert!(matches!(
        service.get_location(created.id).await.unwrap_err(),
        GisError::NotFoundError { .. }
    ));
}

#[tokio::test]
async fn test_boundary_crud_flow() {
    let service = service();

    let created = service
        .create_boundary(CreateBoundaryRequest {
            name: "Agra district".to_string(),
            area: agra_square(),
        })
        .await
        .unwrap();

    let renamed = service
        .update_boundary(
            created.id,
            UpdateBoundaryRequest {
                name: Some("Agra".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(renamed.area, created.area);
    assert_eq!(renamed.name, "Agra");

    service.delete_boundary(created.id).await.unwrap();
    assert!(matches!(
        service.delete_boundary(created.id).await.unwrap_err(),
        GisError::NotFoundError { .. }
    ));
}

#[tokio::test]
async fn test_create_rejects_bad_input() {
    let service = service();

    let err = service
        .create_location(CreateLocationRequest {
            name: "".to_string(),
            description: None,
            coordinates: point(78.042155, 27.175015),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, GisError::ValidationError { .. }));

    // Polygon payload where a point is required.
    let err = service
        .create_location(CreateLocationRequest {
            name: "Bad geometry".to_string(),
            description: None,
            coordinates: agra_square(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, GisError::ValidationError { .. }));

    // Open ring.
    let err = service
        .create_boundary(CreateBoundaryRequest {
            name: "Open ring".to_string(),
            area: GeometryInput::Polygon {
                coordinates: vec![vec![
                    [0.0, 0.0],
                    [1.0, 0.0],
                    [1.0, 1.0],
                    [0.0, 1.0],
                ]],
            },
        })
        .await
        .unwrap_err();
    assert!(matches!(err, GisError::ValidationError { .. }));
}

#[tokio::test]
async fn test_calculate_distance() {
    let service = service();

    let taj = service
        .create_location(CreateLocationRequest {
            name: "Taj Mahal".to_string(),
            description: None,
            coordinates: point(78.042155, 27.175015),
        })
        .await
        .unwrap();
    let delhi = service
        .create_location(CreateLocationRequest {
            name: "New Delhi".to_string(),
            description: None,
            coordinates: point(77.185455, 28.524428),
        })
        .await
        .unwrap();

    let response = service
        .calculate_distance(DistanceRequest {
            location1_id: Some(taj.id),
            location2_id: Some(delhi.id),
        })
        .await
        .unwrap();
    assert!((response.distance - 1.59839).abs() < 1e-5);

    let reversed = service
        .calculate_distance(DistanceRequest {
            location1_id: Some(delhi.id),
            location2_id: Some(taj.id),
        })
        .await
        .unwrap();
    assert_eq!(response.distance, reversed.distance);
}

#[tokio::test]
async fn test_distance_requires_both_ids() {
    let service = service();
    let err = service
        .calculate_distance(DistanceRequest {
            location1_id: Some(Uuid::new_v4()),
            location2_id: None,
        })
        .await
        .unwrap_err();
    assert!(matches!(err, GisError::ValidationError { .. }));

    // Both ids present but unknown: lookup failure, not a bad request.
    let err = service
        .calculate_distance(DistanceRequest {
            location1_id: Some(Uuid::new_v4()),
            location2_id: Some(Uuid::new_v4()),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, GisError::NotFoundError { .. }));
}

#[tokio::test]
async fn test_check_within_boundary() {
    let service = service();

    let boundary = service
        .create_boundary(CreateBoundaryRequest {
            name: "Agra district".to_string(),
            area: agra_square(),
        })
        .await
        .unwrap();
    let inside = service
        .create_location(CreateLocationRequest {
            name: "Taj Mahal".to_string(),
            description: None,
            coordinates: point(78.0421, 27.1751),
        })
        .await
        .unwrap();
    let outside = service
        .create_location(CreateLocationRequest {
            name: "New Delhi".to_string(),
            description: None,
            coordinates: point(77.185455, 28.524428),
        })
        .await
        .unwrap();

    let within = service
        .check_within_boundary(WithinBoundaryRequest {
            location_id: Some(inside.id),
            boundary_id: Some(boundary.id),
        })
        .await
        .unwrap();
    assert!(within.is_within);

    let not_within = service
        .check_within_boundary(WithinBoundaryRequest {
            location_id: Some(outside.id),
            boundary_id: Some(boundary.id),
        })
        .await
        .unwrap();
    assert!(!not_within.is_within);

    let err = service
        .check_within_boundary(WithinBoundaryRequest {
            location_id: None,
            boundary_id: Some(boundary.id),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, GisError::ValidationError { .. }));

    let err = service
        .check_within_boundary(WithinBoundaryRequest {
            location_id: Some(inside.id),
            boundary_id: Some(Uuid::new_v4()),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, GisError::NotFoundError { .. }));
}

#[tokio::test]
async fn test_update_geometry_replaces_whole_value() {
    let service = service();

    let created = service
        .create_location(CreateLocationRequest {
            name: "Somewhere".to_string(),
            description: None,
            coordinates: point(10.0, 20.0),
        })
        .await
        .unwrap();

    let updated = service
        .update_location(
            created.id,
            UpdateLocationRequest {
                coordinates: Some(point(30.0, 40.0)),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.coordinates.longitude(), 30.0);
    assert_eq!(updated.coordinates.latitude(), 40.0);
    assert_eq!(updated.name, "Somewhere");
}
