use crate::domain::model::Entity;
use crate::domain::ports::EntityStore;
use crate::utils::error::{GisError, Result};
use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tokio::sync::RwLock;
use uuid::Uuid;

/// In-memory, insertion-ordered store with an optional JSON snapshot
/// file. One instance per entity kind; the snapshot file is that kind's
/// logical table.
///
/// All mutations run under the write lock and rewrite the snapshot
/// before the lock is released, so concurrent writers are serialized
/// and the file never lags a committed mutation.
pub struct MemoryStore<T: Entity> {
    table: RwLock<Table<T>>,
    snapshot: Option<PathBuf>,
}

struct Table<T> {
    order: Vec<Uuid>,
    by_id: HashMap<Uuid, T>,
}

impl<T> Table<T> {
    fn empty() -> Self {
        Self {
            order: Vec::new(),
            by_id: HashMap::new(),
        }
    }
}

impl<T: Entity> MemoryStore<T> {
    /// Volatile store with no snapshot file.
    pub fn new() -> Self {
        Self {
            table: RwLock::new(Table::empty()),
            snapshot: None,
        }
    }

    /// Snapshot-backed store. Loads the JSON array at `path` when the
    /// file exists, preserving its order as insertion order.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let mut table = Table::empty();

        if path.exists() {
            let data = fs::read(&path)?;
            let rows: Vec<T> = serde_json::from_slice(&data)?;
            tracing::debug!("loaded {} {} rows from {}", rows.len(), T::KIND, path.display());
            for row in rows {
                table.order.push(row.id());
                table.by_id.insert(row.id(), row);
            }
        }

        Ok(Self {
            table: RwLock::new(table),
            snapshot: Some(path),
        })
    }

    fn persist(&self, table: &Table<T>) -> Result<()> {
        let Some(path) = &self.snapshot else {
            return Ok(());
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let rows: Vec<&T> = table
            .order
            .iter()
            .filter_map(|id| table.by_id.get(id))
            .collect();
        let data = serde_json::to_vec_pretty(&rows)?;
        fs::write(path, data)?;
        Ok(())
    }
}

impl<T: Entity> Default for MemoryStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: Entity> EntityStore<T> for MemoryStore<T> {
    async fn create(&self, draft: T::Draft) -> Result<T> {
        let entity = T::build(Uuid::new_v4(), draft, Utc::now())?;
        let mut table = self.table.write().await;
        table.order.push(entity.id());
        table.by_id.insert(entity.id(), entity.clone());
        self.persist(&table)?;
        tracing::debug!("created {} {}", T::KIND, entity.id());
        Ok(entity)
    }

    async fn list(&self) -> Result<Vec<T>> {
        let table = self.table.read().await;
        Ok(table
            .order
            .iter()
            .filter_map(|id| table.by_id.get(id).cloned())
            .collect())
    }

    async fn get(&self, id: Uuid) -> Result<T> {
        let table = self.table.read().await;
        table
            .by_id
            .get(&id)
            .cloned()
            .ok_or_else(|| GisError::not_found(T::KIND, id))
    }

    async fn update(&self, id: Uuid, patch: T::Patch) -> Result<T> {
        let mut table = self.table.write().await;
        let entity = table
            .by_id
            .get_mut(&id)
            .ok_or_else(|| GisError::not_found(T::KIND, id))?;
        entity.apply(patch, Utc::now())?;
        let updated = entity.clone();
        self.persist(&table)?;
        Ok(updated)
    }

    async fn delete(&self, id: Uuid) -> Result<()> {
        let mut table = self.table.write().await;
        if table.by_id.remove(&id).is_none() {
            return Err(GisError::not_found(T::KIND, id));
        }
        table.order.retain(|existing| *existing != id);
        self.persist(&table)?;
        tracing::debug!("deleted {} {}", T::KIND, id);
        Ok(())
    }
}
