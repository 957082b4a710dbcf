use fridgeplan_shared::{Result, collection};
use validator::Validate;

use crate::{
    Ingredient, IngredientPatch,
    input::{parse_category, parse_expiry_date},
};

/// Overwrites the fields present in `patch` on the ingredient `id`. The id,
/// owner and position in the list never change.
pub fn update(
    ingredients: &[Ingredient],
    id: &str,
    patch: IngredientPatch,
) -> Result<Vec<Ingredient>> {
    patch.validate()?;

    let next = collection::replace_with(ingredients, id, "ingredient", |current| {
        let mut ingredient = current.clone();

        if let Some(name) = patch.name {
            ingredient.name = name;
        }

        if let Some(quantity) = patch.quantity {
            ingredient.quantity = quantity;
        }

        if let Some(unit) = patch.unit {
            ingredient.unit = unit;
        }

        if let Some(expiry_date) = patch.expiry_date {
            ingredient.expiry_date = parse_expiry_date(&expiry_date)?;
        }

        if let Some(category) = patch.category {
            ingredient.category = parse_category(&category)?;
        }

        Ok(ingredient)
    })?;

    tracing::debug!(id, "ingredient updated");

    Ok(next)
}
