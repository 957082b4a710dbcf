use fridgeplan_shared::{Category, Error, Result};
use serde::Deserialize;
use std::str::FromStr;
use validator::Validate;

/// Add-item form as submitted.
#[derive(Validate, Deserialize, Clone, Debug)]
pub struct ShoppingItemInput {
    #[validate(custom(function = "fridgeplan_shared::validate::not_blank"))]
    pub name: String,
    #[validate(custom(function = "fridgeplan_shared::validate::quantity"))]
    pub quantity: f64,
    #[validate(length(max = 20))]
    #[serde(default)]
    pub unit: String,
    #[validate(custom(function = "fridgeplan_shared::validate::category"))]
    pub category: String,
}

/// Edit form. Absent fields keep their current value; completion is only
/// changed through [`crate::toggle`].
#[derive(Validate, Deserialize, Clone, Debug, Default)]
pub struct ShoppingItemPatch {
    #[validate(custom(function = "fridgeplan_shared::validate::not_blank"))]
    pub name: Option<String>,
    #[validate(custom(function = "fridgeplan_shared::validate::quantity"))]
    pub quantity: Option<f64>,
    #[validate(length(max = 20))]
    pub unit: Option<String>,
    #[validate(custom(function = "fridgeplan_shared::validate::category"))]
    pub category: Option<String>,
}

pub(crate) fn parse_category(value: &str) -> Result<Category> {
    Category::from_str(value.trim()).map_err(|_| Error::invalid("category", "invalid_category"))
}
