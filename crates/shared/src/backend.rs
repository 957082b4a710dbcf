use async_trait::async_trait;

use crate::{Entity, Result};

/// Persistence collaborator for one entity kind, scoped by owning user.
#[async_trait]
pub trait Backend<T>: Send + Sync
where
    T: Entity + Send + Sync + 'static,
{
    async fn list(&self, user_id: &str) -> Result<Vec<T>>;

    async fn create(&self, user_id: &str, entity: &T) -> Result<()>;

    async fn update(&self, user_id: &str, entity: &T) -> Result<()>;

    async fn delete(&self, user_id: &str, id: &str) -> Result<()>;
}
