use fridgeplan_shared::Choice;
use serde::Deserialize;

use crate::{Difficulty, Recipe, RecipeCategory};

/// Search box, category and difficulty selects, and the premium toggle of
/// the recipe page. Every active criterion must hold.
#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
pub struct RecipeFilter {
    #[serde(default)]
    pub search: String,
    #[serde(default)]
    pub category: Choice<RecipeCategory>,
    #[serde(default)]
    pub difficulty: Choice<Difficulty>,
    #[serde(default)]
    pub premium_only: bool,
}

impl RecipeFilter {
    pub fn is_empty(&self) -> bool {
        self.search.trim().is_empty()
            && self.category.is_all()
            && self.difficulty.is_all()
            && !self.premium_only
    }

    pub fn matches(&self, recipe: &Recipe) -> bool {
        self.matches_with(recipe, &self.needle())
    }

    pub fn apply(&self, recipes: &[Recipe]) -> Vec<Recipe> {
        let needle = self.needle();

        recipes
            .iter()
            .filter(|recipe| self.matches_with(recipe, &needle))
            .cloned()
            .collect()
    }

    /// Lowercased search term. A blank term searches for nothing; any other
    /// term is matched as typed, surrounding spaces included.
    fn needle(&self) -> String {
        if self.search.trim().is_empty() {
            return String::new();
        }

        self.search.to_lowercase()
    }

    fn matches_with(&self, recipe: &Recipe, needle: &str) -> bool {
        matches_search(recipe, needle)
            && self.category.matches(&recipe.category)
            && self.difficulty.matches(&recipe.difficulty)
            && (!self.premium_only || recipe.is_premium)
    }
}

/// Case-insensitive substring match on name or description. `needle` is
/// already lowercased; an empty needle matches everything.
fn matches_search(recipe: &Recipe, needle: &str) -> bool {
    needle.is_empty()
        || recipe.name.to_lowercase().contains(needle)
        || recipe.description.to_lowercase().contains(needle)
}
