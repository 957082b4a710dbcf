use fridgeplan_shared::{Category, Choice};
use serde::Deserialize;
use strum::{AsRefStr, Display, EnumString, VariantArray};
use time::OffsetDateTime;

use crate::{ExpiryStatus, Ingredient};

#[derive(Deserialize, Clone, Copy, Debug, Default, PartialEq)]
pub struct IngredientFilter {
    #[serde(default)]
    pub category: Choice<Category>,
    #[serde(default)]
    pub status: Choice<ExpiryStatus>,
}

impl IngredientFilter {
    pub fn matches(&self, ingredient: &Ingredient, now: OffsetDateTime) -> bool {
        self.category.matches(&ingredient.category)
            && self.status.matches(&ingredient.expiry_status(now))
    }

    pub fn apply(&self, ingredients: &[Ingredient], now: OffsetDateTime) -> Vec<Ingredient> {
        ingredients
            .iter()
            .filter(|ingredient| self.matches(ingredient, now))
            .cloned()
            .collect()
    }
}

#[derive(
    EnumString, Display, VariantArray, AsRefStr, Default, Clone, Copy, Debug, PartialEq, Eq, Deserialize,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[serde(rename_all = "snake_case")]
pub enum SortBy {
    #[default]
    Name,
    Expiry,
    Category,
}

/// Sorted copy of `ingredients`. Ties keep their list order.
pub fn sort(ingredients: &[Ingredient], by: SortBy) -> Vec<Ingredient> {
    let mut sorted = ingredients.to_vec();

    match by {
        SortBy::Name => sorted.sort_by(|a, b| a.name.cmp(&b.name)),
        SortBy::Expiry => sorted.sort_by_key(|ingredient| ingredient.expiry_date),
        SortBy::Category => {
            sorted.sort_by(|a, b| a.category.cmp(&b.category).then_with(|| a.name.cmp(&b.name)))
        }
    }

    sorted
}
