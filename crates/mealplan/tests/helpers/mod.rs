#![allow(dead_code)]

use fridgeplan_mealplan::{Meals, WeeklyMealPlan};
use fridgeplan_recipe::{Difficulty, Recipe, RecipeCategory};
use time::macros::date;

pub fn recipe(id: &str, name: &str, cooking_time: u32) -> Recipe {
    Recipe {
        id: id.to_owned(),
        name: name.to_owned(),
        description: String::new(),
        ingredients: vec![],
        instructions: vec![],
        cooking_time,
        difficulty: Difficulty::Easy,
        servings: 2,
        image_url: None,
        category: RecipeCategory::Dinner,
        is_premium: false,
    }
}

/// Eight meals, two of them on Monday.
pub fn meals() -> Meals {
    Meals {
        monday: vec![recipe("1", "계란볶음밥", 15), recipe("2", "김치찌개", 30)],
        tuesday: vec![recipe("5", "토스트 & 스크램블에그", 10)],
        wednesday: vec![recipe("6", "된장찌개", 25)],
        thursday: vec![recipe("7", "샐러드", 20)],
        friday: vec![recipe("8", "카르보나라", 35)],
        saturday: vec![recipe("9", "팬케이크", 20)],
        sunday: vec![recipe("10", "삼겹살 구이", 40)],
    }
}

pub fn plan(meals: Meals) -> WeeklyMealPlan {
    WeeklyMealPlan {
        id: "plan1".to_owned(),
        user_id: "user1".to_owned(),
        week_start_date: date!(2025 - 01 - 20),
        meals,
        shopping_list: vec![],
    }
}
