use anyhow::Context;
use fridgeplan_ingredient::Ingredient;
use fridgeplan_mealplan::WeeklyMealPlan;
use fridgeplan_recipe::{Catalog, Recipe};
use fridgeplan_shopping::ShoppingItem;
use serde::{Deserialize, Serialize};
use std::path::Path;
use validator::Validate;

/// Everything the views are derived from, as stored on disk.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Snapshot {
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
    #[serde(default)]
    pub recipes: Vec<Recipe>,
    #[serde(default)]
    pub shopping_items: Vec<ShoppingItem>,
    #[serde(default)]
    pub meal_plan: Option<WeeklyMealPlan>,
}

impl Snapshot {
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let data = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read snapshot {}", path.display()))?;
        let snapshot: Self = serde_json::from_str(&data)
            .with_context(|| format!("failed to parse snapshot {}", path.display()))?;
        snapshot
            .check()
            .with_context(|| format!("invalid snapshot {}", path.display()))?;

        tracing::info!(
            path = %path.display(),
            ingredients = snapshot.ingredients.len(),
            recipes = snapshot.recipes.len(),
            shopping_items = snapshot.shopping_items.len(),
            "snapshot loaded"
        );

        Ok(snapshot)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let path = path.as_ref();
        let data = serde_json::to_string_pretty(self)?;
        std::fs::write(path, data)
            .with_context(|| format!("failed to write snapshot {}", path.display()))?;

        Ok(())
    }

    /// Applies the form rules to every stored record, including the meal plan.
    pub fn check(&self) -> fridgeplan_shared::Result<()> {
        for ingredient in self.ingredients.iter() {
            ingredient.validate()?;
        }

        for item in self.shopping_items.iter() {
            item.validate()?;
        }

        if let Some(plan) = &self.meal_plan {
            for recipe in plan.meals.recipes() {
                recipe.validate()?;
            }

            for item in plan.shopping_list.iter() {
                item.validate()?;
            }
        }

        Ok(())
    }

    /// Recipes as a checked, read-only catalog.
    pub fn catalog(&self) -> fridgeplan_shared::Result<Catalog> {
        Catalog::new(self.recipes.clone())
    }
}
