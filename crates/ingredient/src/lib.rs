mod command;
pub mod expiry;
mod filter;
mod input;

pub use command::*;
pub use expiry::{DEFAULT_EXPIRING_WINDOW_DAYS, ExpiryStatus, days_until, expiring_within};
pub use filter::*;
pub use input::*;

use fridgeplan_shared::{Category, Entity};
use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime};
use validator::Validate;

/// Something in the fridge.
#[derive(Validate, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub id: String,
    #[validate(custom(function = "fridgeplan_shared::validate::not_blank"))]
    pub name: String,
    #[validate(custom(function = "fridgeplan_shared::validate::quantity"))]
    pub quantity: f64,
    #[validate(length(max = 20))]
    pub unit: String,
    #[serde(with = "fridgeplan_shared::iso_date")]
    pub expiry_date: Date,
    pub category: Category,
    pub user_id: String,
}

impl Entity for Ingredient {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Ingredient {
    pub fn days_until_expiry(&self, now: OffsetDateTime) -> i64 {
        days_until(self.expiry_date, now)
    }

    pub fn expiry_status(&self, now: OffsetDateTime) -> ExpiryStatus {
        ExpiryStatus::from_days(self.days_until_expiry(now))
    }
}
