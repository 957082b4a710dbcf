use fridgeplan_shared::{Result, collection};

use crate::ShoppingItem;

/// Flips the bought state of item `id`.
pub fn toggle(items: &[ShoppingItem], id: &str) -> Result<Vec<ShoppingItem>> {
    let next = collection::replace_with(items, id, "shopping item", |current| {
        Ok(ShoppingItem {
            is_completed: !current.is_completed,
            ..current.clone()
        })
    })?;

    tracing::debug!(id, "shopping item toggled");

    Ok(next)
}
