use crate::ShoppingItem;

/// Drops every bought item, keeping the order of the rest.
pub fn clear_completed(items: &[ShoppingItem]) -> Vec<ShoppingItem> {
    let next = items
        .iter()
        .filter(|item| !item.is_completed)
        .cloned()
        .collect::<Vec<_>>();

    tracing::debug!(removed = items.len() - next.len(), "completed shopping items cleared");

    next
}
