use crate::domain::model::Entity;
use crate::utils::error::Result;
use async_trait::async_trait;
use uuid::Uuid;

/// Repository port over one entity kind. Implementations own the
/// persistence handle and are responsible for serializing concurrent
/// writes; the core never touches storage directly.
#[async_trait]
pub trait EntityStore<T: Entity>: Send + Sync {
    async fn create(&self, draft: T::Draft) -> Result<T>;
    async fn list(&self) -> Result<Vec<T>>;
    async fn get(&self, id: Uuid) -> Result<T>;
    async fn update(&self, id: Uuid, patch: T::Patch) -> Result<T>;
    async fn delete(&self, id: Uuid) -> Result<()>;
}
