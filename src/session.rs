//! Local-first editing: every mutation is applied to the in-memory collection
//! first and then pushed to the backend. A failed push is returned to the
//! caller and the local collection keeps the mutation.

use fridgeplan_ingredient::{Ingredient, IngredientInput, IngredientPatch};
use fridgeplan_shared::{Entity, Result, backend::Backend, collection};
use fridgeplan_shopping::{ShoppingItem, ShoppingItemInput, ShoppingItemPatch};
use std::marker::PhantomData;
use validator::Validate;

pub struct Session<T, B> {
    backend: B,
    user_id: String,
    items: Vec<T>,
    entity: PhantomData<fn() -> T>,
}

impl<T, B> Session<T, B>
where
    T: Entity + Validate + Clone + Send + Sync + 'static,
    B: Backend<T>,
{
    /// Loads the user's collection from `backend`. Stored records must pass
    /// the same rules as the forms.
    pub async fn load(backend: B, user_id: impl Into<String>) -> Result<Self> {
        let user_id = user_id.into();
        let items = backend.list(&user_id).await?;

        for item in items.iter() {
            item.validate()?;
        }

        tracing::debug!(user.id = %user_id, items = items.len(), "session loaded");

        Ok(Self {
            backend,
            user_id,
            items,
            entity: PhantomData,
        })
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// The created entity is the last one of `next`.
    async fn commit_created(&mut self, next: Vec<T>) -> Result<()> {
        self.items = next;

        let Some(created) = self.items.last() else {
            return Ok(());
        };

        self.backend.create(&self.user_id, created).await
    }

    async fn commit_updated(&mut self, next: Vec<T>, id: &str) -> Result<()> {
        self.items = next;

        let Some(updated) = collection::find(&self.items, id) else {
            return Ok(());
        };

        self.backend.update(&self.user_id, updated).await
    }

    async fn commit_deleted(&mut self, next: Vec<T>, ids: Vec<String>) -> Result<()> {
        self.items = next;

        for id in ids {
            self.backend.delete(&self.user_id, &id).await?;
        }

        Ok(())
    }
}

impl<B: Backend<Ingredient>> Session<Ingredient, B> {
    pub async fn create(&mut self, input: IngredientInput) -> Result<()> {
        let next = fridgeplan_ingredient::create(&self.items, input, self.user_id.to_owned())?;

        self.commit_created(next).await
    }

    pub async fn update(&mut self, id: &str, patch: IngredientPatch) -> Result<()> {
        let next = fridgeplan_ingredient::update(&self.items, id, patch)?;

        self.commit_updated(next, id).await
    }

    pub async fn delete(&mut self, id: &str) -> Result<()> {
        let next = fridgeplan_ingredient::delete(&self.items, id);

        self.commit_deleted(next, vec![id.to_owned()]).await
    }
}

impl<B: Backend<ShoppingItem>> Session<ShoppingItem, B> {
    pub async fn create(&mut self, input: ShoppingItemInput) -> Result<()> {
        let next = fridgeplan_shopping::create(&self.items, input)?;

        self.commit_created(next).await
    }

    pub async fn update(&mut self, id: &str, patch: ShoppingItemPatch) -> Result<()> {
        let next = fridgeplan_shopping::update(&self.items, id, patch)?;

        self.commit_updated(next, id).await
    }

    pub async fn delete(&mut self, id: &str) -> Result<()> {
        let next = fridgeplan_shopping::delete(&self.items, id);

        self.commit_deleted(next, vec![id.to_owned()]).await
    }

    pub async fn toggle(&mut self, id: &str) -> Result<()> {
        let next = fridgeplan_shopping::toggle(&self.items, id)?;

        self.commit_updated(next, id).await
    }

    pub async fn clear_completed(&mut self) -> Result<()> {
        let removed = self
            .items
            .iter()
            .filter(|item| item.is_completed)
            .map(|item| item.id.to_owned())
            .collect::<Vec<_>>();
        let next = fridgeplan_shopping::clear_completed(&self.items);

        self.commit_deleted(next, removed).await
    }
}
