use crate::domain::geometry::Point;
use crate::domain::model::{Location, LocationDraft};
use crate::domain::ports::EntityStore;
use crate::utils::error::Result;
use serde::Deserialize;
use std::collections::HashSet;
use std::io::Read;

/// Bulk-loads locations from a CSV source, skipping malformed rows and
/// suppressing duplicate coordinate pairs within a single run.
///
/// Row errors are warnings, never fatal; each accepted row is one store
/// create with no batching or rollback.
pub struct LocationLoader<'a, S: EntityStore<Location>> {
    store: &'a S,
}

#[derive(Debug, Default, PartialEq)]
pub struct IngestReport {
    /// Rows that produced a Location.
    pub accepted: usize,
    /// Rows skipped with a warning (missing fields, bad numbers,
    /// rejected create).
    pub skipped: usize,
    /// Rows dropped silently because their coordinate pair was already
    /// seen in this run.
    pub duplicates: usize,
}

#[derive(Debug, Deserialize)]
struct RawRow {
    #[serde(default)]
    name: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    latitude: String,
    #[serde(default)]
    longitude: String,
}

impl<'a, S: EntityStore<Location>> LocationLoader<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    pub async fn load_csv<R: Read>(&self, reader: R) -> Result<IngestReport> {
        let mut csv_reader = csv::Reader::from_reader(reader);
        let mut report = IngestReport::default();
        // Dedup on the bit patterns of the parsed pair, i.e. the values
        // exactly as parsed.
        let mut seen: HashSet<(u64, u64)> = HashSet::new();

        for row in csv_reader.deserialize::<RawRow>() {
            let row = match row {
                Ok(row) => row,
                Err(e) => {
                    tracing::warn!("skipping unreadable row: {}", e);
                    report.skipped += 1;
                    continue;
                }
            };

            if row.name.is_empty() || row.latitude.is_empty() || row.longitude.is_empty() {
                tracing::warn!(?row, "skipping row with missing required data");
                report.skipped += 1;
                continue;
            }

            let (latitude, longitude) =
                match (row.latitude.parse::<f64>(), row.longitude.parse::<f64>()) {
                    (Ok(lat), Ok(lon)) => (lat, lon),
                    _ => {
                        tracing::warn!(?row, "skipping row with invalid coordinates");
                        report.skipped += 1;
                        continue;
                    }
                };

            if !seen.insert((latitude.to_bits(), longitude.to_bits())) {
                report.duplicates += 1;
                continue;
            }

            let coordinates = match Point::new(longitude, latitude) {
                Ok(point) => point,
                Err(e) => {
                    tracing::warn!(?row, "skipping row with out-of-range coordinates: {}", e);
                    report.skipped += 1;
                    continue;
                }
            };

            let draft = LocationDraft {
                name: row.name,
                description: if row.description.is_empty() {
                    None
                } else {
                    Some(row.description)
                },
                coordinates,
            };

            match self.store.create(draft).await {
                Ok(_) => report.accepted += 1,
                Err(e) => {
                    tracing::warn!("skipping row rejected by store: {}", e);
                    report.skipped += 1;
                }
            }
        }

        tracing::info!(
            "ingest finished: {} accepted, {} skipped, {} duplicates",
            report.accepted,
            report.skipped,
            report.duplicates
        );
        Ok(report)
    }
}
