use async_trait::async_trait;
use fridgeplan_shared::{Entity, Result, backend::Backend, collection};
use std::{collections::HashMap, sync::RwLock};

/// Keeps every user's entities in a map, in insertion order.
pub struct MemoryBackend<T> {
    store: RwLock<HashMap<String, Vec<T>>>,
}

impl<T> Default for MemoryBackend<T> {
    fn default() -> Self {
        Self {
            store: RwLock::new(HashMap::new()),
        }
    }
}

impl<T> MemoryBackend<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Backend pre-filled with `items` for `user_id`.
    pub fn with_items(user_id: impl Into<String>, items: Vec<T>) -> Self {
        Self {
            store: RwLock::new(HashMap::from([(user_id.into(), items)])),
        }
    }
}

#[async_trait]
impl<T> Backend<T> for MemoryBackend<T>
where
    T: Entity + Clone + Send + Sync + 'static,
{
    async fn list(&self, user_id: &str) -> Result<Vec<T>> {
        let store = super::read(&self.store)?;

        Ok(store.get(user_id).cloned().unwrap_or_default())
    }

    async fn create(&self, user_id: &str, entity: &T) -> Result<()> {
        let mut store = super::write(&self.store)?;
        let items = store.entry(user_id.to_owned()).or_default();

        if collection::find(items, entity.id()).is_some() {
            fridgeplan_shared::bail!("{} already exists", entity.id());
        }

        items.push(entity.clone());

        Ok(())
    }

    async fn update(&self, user_id: &str, entity: &T) -> Result<()> {
        let mut store = super::write(&self.store)?;
        let items = store.entry(user_id.to_owned()).or_default();

        let Some(index) = collection::position(items, entity.id()) else {
            fridgeplan_shared::not_found!("{}", entity.id());
        };

        items[index] = entity.clone();

        Ok(())
    }

    async fn delete(&self, user_id: &str, id: &str) -> Result<()> {
        let mut store = super::write(&self.store)?;

        if let Some(items) = store.get_mut(user_id) {
            items.retain(|item| item.id() != id);
        }

        Ok(())
    }
}
