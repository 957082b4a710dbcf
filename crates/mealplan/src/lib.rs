mod meals;
mod service;
mod summary;

pub use meals::*;
pub use service::*;
pub use summary::*;

use fridgeplan_shopping::ShoppingItem;
use serde::{Deserialize, Serialize};
use time::Date;

/// Recipes picked for each day of one week, plus the list of things to buy
/// for them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WeeklyMealPlan {
    pub id: String,
    pub user_id: String,
    #[serde(with = "fridgeplan_shared::iso_date")]
    pub week_start_date: Date,
    #[serde(default)]
    pub meals: Meals,
    #[serde(default)]
    pub shopping_list: Vec<ShoppingItem>,
}

impl WeeklyMealPlan {
    pub fn week(&self) -> Week {
        Week::starting(self.week_start_date)
    }

    pub fn summary(&self) -> WeekSummary {
        WeekSummary::of(&self.meals)
    }
}
