use serde::Serialize;
use time::Weekday;

use crate::Meals;

/// Numbers shown on the weekly dashboard.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct WeekSummary {
    pub meals_per_day: [(Weekday, usize); 7],
    pub meal_count: usize,
    /// Minutes. `None` for a week without meals.
    pub average_cooking_time: Option<f64>,
}

impl WeekSummary {
    pub fn of(meals: &Meals) -> Self {
        Self {
            meals_per_day: meals_per_day(meals),
            meal_count: meal_count(meals),
            average_cooking_time: average_cooking_time(meals),
        }
    }

    /// Average rounded to whole minutes, halves rounding up.
    pub fn rounded_cooking_time(&self) -> Option<u32> {
        self.average_cooking_time
            .map(|minutes| (minutes + 0.5).floor() as u32)
    }
}

pub fn meals_per_day(meals: &Meals) -> [(Weekday, usize); 7] {
    crate::WEEKDAYS.map(|day| (day, meals.day(day).len()))
}

pub fn meal_count(meals: &Meals) -> usize {
    meals.iter().map(|(_, recipes)| recipes.len()).sum()
}

pub fn average_cooking_time(meals: &Meals) -> Option<f64> {
    let count = meal_count(meals);
    if count == 0 {
        return None;
    }

    let total = meals
        .recipes()
        .map(|recipe| u64::from(recipe.cooking_time))
        .sum::<u64>();

    Some(total as f64 / count as f64)
}
