use fridgeplan_shared::collection;

use crate::Ingredient;

/// Removes the ingredient `id`. Unknown ids are ignored.
pub fn delete(ingredients: &[Ingredient], id: &str) -> Vec<Ingredient> {
    let next = collection::remove(ingredients, id);

    if next.len() == ingredients.len() {
        tracing::debug!(id, "ingredient to delete not found");
    }

    next
}
