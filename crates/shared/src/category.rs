use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};

/// Storage category shared by fridge ingredients and shopping items.
///
/// Declaration order is the display order used when sorting or grouping by
/// category.
#[derive(
    EnumString,
    Display,
    VariantArray,
    AsRefStr,
    Default,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Vegetable,
    Meat,
    Dairy,
    Grain,
    Spice,
    #[default]
    Other,
}

impl Category {
    pub fn label(&self) -> &'static str {
        match self {
            Category::Vegetable => "채소",
            Category::Meat => "육류",
            Category::Dairy => "유제품",
            Category::Grain => "곡물",
            Category::Spice => "조미료",
            Category::Other => "기타",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Category::Vegetable => "🥬",
            Category::Meat => "🥩",
            Category::Dairy => "🥛",
            Category::Grain => "🌾",
            Category::Spice => "🧂",
            Category::Other => "🍽️",
        }
    }
}

/// Units offered by the ingredient and shopping forms. Units stay free-form
/// text; this list is only what the pickers suggest.
pub const UNITS: [&str; 10] = [
    "개", "팩", "봉", "kg", "g", "ml", "L", "컵", "큰술", "작은술",
];

pub fn is_known_unit(unit: &str) -> bool {
    UNITS.contains(&unit.trim())
}
