use fridgeplan_shared::{Error, Result, collection};
use std::collections::HashSet;
use validator::Validate;

use crate::{Recipe, RecipeFilter};

/// Read-only recipe catalog, in the order the catalog source supplied it.
/// Recipes are curated upstream; nothing here edits them.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Catalog {
    recipes: Vec<Recipe>,
}

impl Catalog {
    /// Checks every recipe and rejects duplicate ids.
    pub fn new(recipes: Vec<Recipe>) -> Result<Self> {
        let mut ids = HashSet::new();

        for recipe in recipes.iter() {
            recipe.validate()?;

            if !ids.insert(recipe.id.as_str()) {
                return Err(Error::invalid("id", "duplicate_id"));
            }
        }

        tracing::debug!(recipes = recipes.len(), "recipe catalog loaded");

        Ok(Self { recipes })
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn get(&self, id: &str) -> Option<&Recipe> {
        collection::find(&self.recipes, id)
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    pub fn filter(&self, filter: &RecipeFilter) -> Vec<Recipe> {
        if filter.is_empty() {
            return self.recipes.clone();
        }

        filter.apply(&self.recipes)
    }
}
