use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};

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
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Easy => "쉬움",
            Difficulty::Medium => "보통",
            Difficulty::Hard => "어려움",
        }
    }

    pub fn tone(&self) -> &'static str {
        match self {
            Difficulty::Easy => "green",
            Difficulty::Medium => "yellow",
            Difficulty::Hard => "red",
        }
    }
}

/// Meal slot a recipe is meant for.
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
pub enum RecipeCategory {
    Breakfast,
    Lunch,
    #[default]
    Dinner,
    Snack,
}

impl RecipeCategory {
    pub fn label(&self) -> &'static str {
        match self {
            RecipeCategory::Breakfast => "아침",
            RecipeCategory::Lunch => "점심",
            RecipeCategory::Dinner => "저녁",
            RecipeCategory::Snack => "간식",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            RecipeCategory::Breakfast => "🌅",
            RecipeCategory::Lunch => "☀️",
            RecipeCategory::Dinner => "🌙",
            RecipeCategory::Snack => "🍿",
        }
    }
}
