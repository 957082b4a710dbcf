use fridgeplan_shared::{Result, collection};
use validator::Validate;

use crate::{
    Ingredient, IngredientInput,
    input::{parse_category, parse_expiry_date},
};

/// Validates `input` and appends a new ingredient owned by `user_id`.
pub fn create(
    ingredients: &[Ingredient],
    input: IngredientInput,
    user_id: impl Into<String>,
) -> Result<Vec<Ingredient>> {
    input.validate()?;

    let ingredient = Ingredient {
        id: collection::next_id(ingredients),
        expiry_date: parse_expiry_date(&input.expiry_date)?,
        category: parse_category(&input.category)?,
        name: input.name,
        quantity: input.quantity,
        unit: input.unit,
        user_id: user_id.into(),
    };

    tracing::debug!(id = %ingredient.id, name = %ingredient.name, "ingredient created");

    Ok(collection::append(ingredients, ingredient))
}
