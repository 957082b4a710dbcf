use fridgeplan_shared::collection;

use crate::ShoppingItem;

/// Removes the item `id`. Unknown ids are ignored.
pub fn delete(items: &[ShoppingItem], id: &str) -> Vec<ShoppingItem> {
    let next = collection::remove(items, id);

    if next.len() == items.len() {
        tracing::debug!(id, "shopping item to delete not found");
    }

    next
}
