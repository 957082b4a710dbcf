#![allow(dead_code)]

use async_trait::async_trait;
use fridgeplan_shared::{Entity, Result, backend::Backend};
use std::sync::atomic::{AtomicUsize, Ordering};
use time::{OffsetDateTime, macros::datetime};

pub const USER: &str = "user1";

/// A Wednesday, so the demo week runs 2025-01-20..2025-01-26.
pub fn now() -> OffsetDateTime {
    datetime!(2025-01-22 09:00:00 UTC)
}

/// Backend that accepts reads and rejects every write.
#[derive(Default)]
pub struct FailingBackend {
    pub writes: AtomicUsize,
}

impl FailingBackend {
    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl<T> Backend<T> for FailingBackend
where
    T: Entity + Send + Sync + 'static,
{
    async fn list(&self, _user_id: &str) -> Result<Vec<T>> {
        Ok(Vec::new())
    }

    async fn create(&self, _user_id: &str, _entity: &T) -> Result<()> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        fridgeplan_shared::bail!("backend unavailable");
    }

    async fn update(&self, _user_id: &str, _entity: &T) -> Result<()> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        fridgeplan_shared::bail!("backend unavailable");
    }

    async fn delete(&self, _user_id: &str, _id: &str) -> Result<()> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        fridgeplan_shared::bail!("backend unavailable");
    }
}
