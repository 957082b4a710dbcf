use fridgeplan_shared::{Result, collection};
use validator::Validate;

use crate::{ShoppingItem, ShoppingItemInput, input::parse_category};

/// Validates `input` and appends a new, not yet bought item.
pub fn create(items: &[ShoppingItem], input: ShoppingItemInput) -> Result<Vec<ShoppingItem>> {
    input.validate()?;

    let item = ShoppingItem {
        id: collection::next_id(items),
        category: parse_category(&input.category)?,
        name: input.name,
        quantity: input.quantity,
        unit: input.unit,
        is_completed: false,
    };

    tracing::debug!(id = %item.id, name = %item.name, "shopping item created");

    Ok(collection::append(items, item))
}
