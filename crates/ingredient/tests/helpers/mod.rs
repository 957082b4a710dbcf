#![allow(dead_code)]

use fridgeplan_ingredient::{Ingredient, IngredientInput};
use fridgeplan_shared::Category;
use time::{Date, OffsetDateTime, macros::datetime};

pub const USER: &str = "user1";

pub fn now() -> OffsetDateTime {
    datetime!(2024-01-01 00:00:00 UTC)
}

fn days_from_now(days: i64) -> Date {
    (now() + time::Duration::days(days)).date()
}

pub fn ingredient(id: &str, name: &str, category: Category, days: i64) -> Ingredient {
    Ingredient {
        id: id.to_owned(),
        name: name.to_owned(),
        quantity: 1.0,
        unit: "개".to_owned(),
        expiry_date: days_from_now(days),
        category,
        user_id: USER.to_owned(),
    }
}

/// The fridge the ingredient page starts with.
pub fn fridge() -> Vec<Ingredient> {
    vec![
        ingredient("1", "우유", Category::Dairy, 2),
        ingredient("2", "계란", Category::Dairy, 3),
        ingredient("3", "김치", Category::Vegetable, 7),
        ingredient("4", "돼지고기", Category::Meat, 1),
    ]
}

pub fn input(name: &str) -> IngredientInput {
    IngredientInput {
        name: name.to_owned(),
        quantity: 2.0,
        unit: "팩".to_owned(),
        expiry_date: "2024-01-10".to_owned(),
        category: "dairy".to_owned(),
    }
}
