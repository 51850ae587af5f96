use crate::utils::error::{GisError, Result};
use crate::utils::validation::validate_range;
use serde::{Deserialize, Serialize};

/// A (longitude, latitude) coordinate pair on a flat Cartesian plane.
///
/// Coordinates are plain degrees treated as planar units; no geodesic
/// correction is applied anywhere in this crate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    longitude: f64,
    latitude: f64,
}

impl Point {
    pub fn new(longitude: f64, latitude: f64) -> Result<Self> {
        validate_range("longitude", longitude, -180.0, 180.0)?;
        validate_range("latitude", latitude, -90.0, 90.0)?;
        Ok(Self {
            longitude,
            latitude,
        })
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Planar Euclidean distance in coordinate units.
    pub fn distance(&self, other: &Point) -> f64 {
        let dx = self.longitude - other.longitude;
        let dy = self.latitude - other.latitude;
        (dx * dx + dy * dy).sqrt()
    }
}

/// A closed ring of at least four points (last point equals the first),
/// describing a single planar region.
///
/// Self-intersecting rings are accepted; containment then follows the
/// even-odd rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polygon {
    ring: Vec<Point>,
}

impl Polygon {
    pub fn new(ring: Vec<Point>) -> Result<Self> {
        if ring.len() < 4 {
            return Err(GisError::validation(format!(
                "polygon ring needs at least 4 points, got {}",
                ring.len()
            )));
        }
        if ring.first() != ring.last() {
            return Err(GisError::validation(
                "polygon ring must be closed (first and last points equal)",
            ));
        }
        Ok(Self { ring })
    }

    pub fn ring(&self) -> &[Point] {
        &self.ring
    }

    /// True when the point lies inside the ring or exactly on its
    /// boundary.
    ///
    /// Ray casting over the closed ring's consecutive edges; the
    /// closing edge appears exactly once because the ring already
    /// repeats the first point, so `windows(2)` never double-counts.
    /// Points on an edge or vertex are checked explicitly and count as
    /// contained.
    pub fn contains(&self, point: &Point) -> bool {
        let px = point.longitude;
        let py = point.latitude;
        let mut inside = false;

        for edge in self.ring.windows(2) {
            let (a, b) = (&edge[0], &edge[1]);
            if on_segment(a, b, point) {
                return true;
            }
            let (ax, ay) = (a.longitude, a.latitude);
            let (bx, by) = (b.longitude, b.latitude);
            if (ay > py) != (by > py) {
                let crossing_x = ax + (py - ay) * (bx - ax) / (by - ay);
                if px < crossing_x {
                    inside = !inside;
                }
            }
        }
        inside
    }
}

fn on_segment(a: &Point, b: &Point, p: &Point) -> bool {
    let cross = (b.longitude - a.longitude) * (p.latitude - a.latitude)
        - (b.latitude - a.latitude) * (p.longitude - a.longitude);
    if cross != 0.0 {
        return false;
    }
    let within_x = p.longitude >= a.longitude.min(b.longitude)
        && p.longitude <= a.longitude.max(b.longitude);
    let within_y =
        p.latitude >= a.latitude.min(b.latitude) && p.latitude <= a.latitude.max(b.latitude);
    within_x && within_y
}
