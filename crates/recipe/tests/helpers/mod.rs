#![allow(dead_code)]

use fridgeplan_recipe::{Difficulty, Recipe, RecipeCategory, RecipeIngredient};

fn line(name: &str, quantity: f64, unit: &str) -> RecipeIngredient {
    RecipeIngredient {
        ingredient_name: name.to_owned(),
        quantity,
        unit: unit.to_owned(),
    }
}

pub fn recipe(
    id: &str,
    name: &str,
    description: &str,
    category: RecipeCategory,
    difficulty: Difficulty,
    is_premium: bool,
) -> Recipe {
    Recipe {
        id: id.to_owned(),
        name: name.to_owned(),
        description: description.to_owned(),
        ingredients: vec![
            line("밥", 1.0, "공기"),
            line("계란", 2.0, "개"),
            line("대파", 1.0, "대"),
            line("간장", 1.0, "큰술"),
        ],
        instructions: vec!["재료를 준비해주세요".to_owned()],
        cooking_time: 20,
        difficulty,
        servings: 1,
        image_url: None,
        category,
        is_premium,
    }
}

/// Four-recipe sample catalog: two dinners, two premium.
pub fn catalog() -> Vec<Recipe> {
    vec![
        recipe(
            "1",
            "계란볶음밥",
            "간단하고 맛있는 계란볶음밥입니다. 남은 밥과 계란만 있으면 만들 수 있어요.",
            RecipeCategory::Breakfast,
            Difficulty::Easy,
            false,
        ),
        recipe(
            "2",
            "김치찌개",
            "매콤달콤한 김치찌개입니다. 김치와 돼지고기만 있으면 맛있게 만들 수 있어요.",
            RecipeCategory::Dinner,
            Difficulty::Medium,
            false,
        ),
        recipe(
            "3",
            "닭가슴살 샐러드",
            "건강하고 맛있는 닭가슴살 샐러드입니다. 다이어트 중에도 맛있게 먹을 수 있어요.",
            RecipeCategory::Lunch,
            Difficulty::Easy,
            true,
        ),
        recipe(
            "4",
            "Spaghetti Carbonara",
            "크림치즈와 베이컨으로 만드는 이탈리안 스파게티입니다.",
            RecipeCategory::Dinner,
            Difficulty::Hard,
            true,
        ),
    ]
}

pub fn ids(recipes: &[Recipe]) -> Vec<&str> {
    recipes.iter().map(|recipe| recipe.id.as_str()).collect()
}
