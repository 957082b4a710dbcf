use fridgeplan_ingredient::{Ingredient, expiring_within};
use fridgeplan_mealplan::{Meals, Week, WeekSummary};
use fridgeplan_shopping::ShoppingTotals;
use time::OffsetDateTime;

use crate::snapshot::Snapshot;

/// Weekly overview: the plan, what to use up first and the shopping progress.
#[derive(Clone, Debug, PartialEq)]
pub struct Dashboard {
    pub week: Week,
    pub meals: Meals,
    pub summary: WeekSummary,
    /// Sorted by days left, already expired ones first.
    pub expiring: Vec<Ingredient>,
    pub shopping: ShoppingTotals,
}

impl Dashboard {
    /// Without a meal plan the current week is shown empty.
    pub fn build(snapshot: &Snapshot, now: OffsetDateTime, expiring_window_days: i64) -> Self {
        let (week, meals) = match &snapshot.meal_plan {
            Some(plan) => (plan.week(), plan.meals.clone()),
            None => (Week::containing(now.date()), Meals::default()),
        };

        Self {
            week,
            summary: WeekSummary::of(&meals),
            meals,
            expiring: expiring_within(&snapshot.ingredients, now, expiring_window_days),
            shopping: ShoppingTotals::of(&snapshot.shopping_items),
        }
    }
}
