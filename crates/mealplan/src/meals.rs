use fridgeplan_recipe::Recipe;
use serde::{Deserialize, Serialize};
use time::Weekday;

/// Fixed display order of a plan, Monday first.
pub const WEEKDAYS: [Weekday; 7] = [
    Weekday::Monday,
    Weekday::Tuesday,
    Weekday::Wednesday,
    Weekday::Thursday,
    Weekday::Friday,
    Weekday::Saturday,
    Weekday::Sunday,
];

pub fn weekday_label(day: Weekday) -> &'static str {
    match day {
        Weekday::Monday => "월요일",
        Weekday::Tuesday => "화요일",
        Weekday::Wednesday => "수요일",
        Weekday::Thursday => "목요일",
        Weekday::Friday => "금요일",
        Weekday::Saturday => "토요일",
        Weekday::Sunday => "일요일",
    }
}

/// One ordered recipe list per weekday. Every day is always present, possibly
/// empty.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Meals {
    pub monday: Vec<Recipe>,
    pub tuesday: Vec<Recipe>,
    pub wednesday: Vec<Recipe>,
    pub thursday: Vec<Recipe>,
    pub friday: Vec<Recipe>,
    pub saturday: Vec<Recipe>,
    pub sunday: Vec<Recipe>,
}

impl Meals {
    pub fn day(&self, day: Weekday) -> &[Recipe] {
        match day {
            Weekday::Monday => &self.monday,
            Weekday::Tuesday => &self.tuesday,
            Weekday::Wednesday => &self.wednesday,
            Weekday::Thursday => &self.thursday,
            Weekday::Friday => &self.friday,
            Weekday::Saturday => &self.saturday,
            Weekday::Sunday => &self.sunday,
        }
    }

    pub fn day_mut(&mut self, day: Weekday) -> &mut Vec<Recipe> {
        match day {
            Weekday::Monday => &mut self.monday,
            Weekday::Tuesday => &mut self.tuesday,
            Weekday::Wednesday => &mut self.wednesday,
            Weekday::Thursday => &mut self.thursday,
            Weekday::Friday => &mut self.friday,
            Weekday::Saturday => &mut self.saturday,
            Weekday::Sunday => &mut self.sunday,
        }
    }

    /// Days in Monday..Sunday order.
    pub fn iter(&self) -> impl Iterator<Item = (Weekday, &[Recipe])> {
        WEEKDAYS.into_iter().map(|day| (day, self.day(day)))
    }

    pub fn recipes(&self) -> impl Iterator<Item = &Recipe> {
        self.iter().flat_map(|(_, recipes)| recipes.iter())
    }
}
