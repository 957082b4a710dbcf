mod aggregation;
mod command;
mod filter;
mod input;

pub use aggregation::*;
pub use command::*;
pub use filter::*;
pub use input::*;

use fridgeplan_shared::{Category, Entity};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Validate, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ShoppingItem {
    pub id: String,
    #[validate(custom(function = "fridgeplan_shared::validate::not_blank"))]
    pub name: String,
    #[validate(custom(function = "fridgeplan_shared::validate::quantity"))]
    pub quantity: f64,
    #[validate(length(max = 20))]
    pub unit: String,
    #[serde(default)]
    pub is_completed: bool,
    pub category: Category,
}

impl Entity for ShoppingItem {
    fn id(&self) -> &str {
        &self.id
    }
}
