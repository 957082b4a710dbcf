use fridgeplan_shared::{Result, collection};
use validator::Validate;

use crate::{ShoppingItem, ShoppingItemPatch, input::parse_category};

pub fn update(
    items: &[ShoppingItem],
    id: &str,
    patch: ShoppingItemPatch,
) -> Result<Vec<ShoppingItem>> {
    patch.validate()?;

    let next = collection::replace_with(items, id, "shopping item", |current| {
        let mut item = current.clone();

        if let Some(name) = patch.name {
            item.name = name;
        }

        if let Some(quantity) = patch.quantity {
            item.quantity = quantity;
        }

        if let Some(unit) = patch.unit {
            item.unit = unit;
        }

        if let Some(category) = patch.category {
            item.category = parse_category(&category)?;
        }

        Ok(item)
    })?;

    tracing::debug!(id, "shopping item updated");

    Ok(next)
}
