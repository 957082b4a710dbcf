mod catalog;
mod filter;
mod types;

pub use catalog::*;
pub use filter::*;
pub use types::*;

use fridgeplan_shared::Entity;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Ingredient line of a recipe. The name is free text and is not linked to
/// the user's fridge.
#[derive(Validate, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RecipeIngredient {
    #[validate(length(min = 1))]
    pub ingredient_name: String,
    #[validate(custom(function = "fridgeplan_shared::validate::quantity"))]
    pub quantity: f64,
    pub unit: String,
}

#[derive(Validate, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: String,
    #[validate(custom(function = "fridgeplan_shared::validate::not_blank"))]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[validate(nested)]
    #[serde(default)]
    pub ingredients: Vec<RecipeIngredient>,
    #[serde(default)]
    pub instructions: Vec<String>,
    /// Minutes.
    #[validate(range(min = 1))]
    pub cooking_time: u32,
    pub difficulty: Difficulty,
    #[validate(range(min = 1))]
    pub servings: u32,
    #[serde(default)]
    pub image_url: Option<String>,
    pub category: RecipeCategory,
    #[serde(default)]
    pub is_premium: bool,
}

impl Entity for Recipe {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Recipe {
    /// First `limit` ingredient lines and how many were left out.
    pub fn ingredient_preview(&self, limit: usize) -> (&[RecipeIngredient], usize) {
        let shown = self.ingredients.len().min(limit);

        (&self.ingredients[..shown], self.ingredients.len() - shown)
    }
}
