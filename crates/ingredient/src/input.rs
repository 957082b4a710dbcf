use fridgeplan_shared::{Category, Error, Result, parse_date};
use serde::Deserialize;
use std::str::FromStr;
use time::Date;
use validator::Validate;

/// Add-ingredient form as submitted. Category and expiry date arrive as text
/// and are checked before an [`crate::Ingredient`] is built.
#[derive(Validate, Deserialize, Clone, Debug)]
pub struct IngredientInput {
    #[validate(custom(function = "fridgeplan_shared::validate::not_blank"))]
    pub name: String,
    #[validate(custom(function = "fridgeplan_shared::validate::quantity"))]
    pub quantity: f64,
    #[validate(length(max = 20))]
    pub unit: String,
    #[validate(custom(function = "fridgeplan_shared::validate::iso_date"))]
    pub expiry_date: String,
    #[validate(custom(function = "fridgeplan_shared::validate::category"))]
    pub category: String,
}

/// Edit form. Absent fields keep their current value.
#[derive(Validate, Deserialize, Clone, Debug, Default)]
pub struct IngredientPatch {
    #[validate(custom(function = "fridgeplan_shared::validate::not_blank"))]
    pub name: Option<String>,
    #[validate(custom(function = "fridgeplan_shared::validate::quantity"))]
    pub quantity: Option<f64>,
    #[validate(length(max = 20))]
    pub unit: Option<String>,
    #[validate(custom(function = "fridgeplan_shared::validate::iso_date"))]
    pub expiry_date: Option<String>,
    #[validate(custom(function = "fridgeplan_shared::validate::category"))]
    pub category: Option<String>,
}

pub(crate) fn parse_expiry_date(value: &str) -> Result<Date> {
    parse_date(value).ok_or_else(|| Error::invalid("expiry_date", "invalid_date"))
}

pub(crate) fn parse_category(value: &str) -> Result<Category> {
    Category::from_str(value.trim()).map_err(|_| Error::invalid("category", "invalid_category"))
}
