//! Demo data used when no snapshot is configured. Expiry dates are relative to
//! the given instant so the dashboard always has something to show.

use fridgeplan_ingredient::Ingredient;
use fridgeplan_mealplan::{Meals, Week, WeeklyMealPlan};
use fridgeplan_recipe::{Difficulty, Recipe, RecipeCategory, RecipeIngredient};
use fridgeplan_shared::Category;
use fridgeplan_shopping::ShoppingItem;
use time::{Duration, OffsetDateTime};

use crate::snapshot::Snapshot;

pub fn snapshot(user_id: &str, now: OffsetDateTime) -> Snapshot {
    let recipes = recipes();
    let meal_plan = meal_plan(user_id, now, &recipes);

    Snapshot {
        ingredients: ingredients(user_id, now),
        recipes,
        shopping_items: shopping_items(),
        meal_plan: Some(meal_plan),
    }
}

pub fn ingredients(user_id: &str, now: OffsetDateTime) -> Vec<Ingredient> {
    let ingredient = |id: &str, name: &str, quantity: f64, unit: &str, days: i64, category| {
        Ingredient {
            id: id.to_owned(),
            name: name.to_owned(),
            quantity,
            unit: unit.to_owned(),
            expiry_date: (now + Duration::days(days)).date(),
            category,
            user_id: user_id.to_owned(),
        }
    };

    vec![
        ingredient("1", "우유", 1.0, "팩", 2, Category::Dairy),
        ingredient("2", "계란", 6.0, "개", 3, Category::Dairy),
        ingredient("3", "김치", 1.0, "봉", 7, Category::Vegetable),
        ingredient("4", "돼지고기", 500.0, "g", 1, Category::Meat),
    ]
}

fn lines(items: &[(&str, f64, &str)]) -> Vec<RecipeIngredient> {
    items
        .iter()
        .map(|(name, quantity, unit)| RecipeIngredient {
            ingredient_name: (*name).to_owned(),
            quantity: *quantity,
            unit: (*unit).to_owned(),
        })
        .collect()
}

fn steps(items: &[&str]) -> Vec<String> {
    items.iter().map(|step| (*step).to_owned()).collect()
}

pub fn recipes() -> Vec<Recipe> {
    vec![
        Recipe {
            id: "1".to_owned(),
            name: "계란볶음밥".to_owned(),
            description: "간단하고 맛있는 계란볶음밥입니다. 남은 밥과 계란만 있으면 만들 수 있어요."
                .to_owned(),
            ingredients: lines(&[
                ("밥", 1.0, "공기"),
                ("계란", 2.0, "개"),
                ("대파", 1.0, "대"),
                ("간장", 1.0, "큰술"),
            ]),
            instructions: steps(&[
                "대파를 잘게 썰어주세요",
                "계란을 풀어주세요",
                "팬에 기름을 두르고 계란을 스크램블해주세요",
                "밥을 넣고 간장을 넣어 볶아주세요",
                "대파를 넣고 마무리해주세요",
            ]),
            cooking_time: 15,
            difficulty: Difficulty::Easy,
            servings: 1,
            image_url: None,
            category: RecipeCategory::Breakfast,
            is_premium: false,
        },
        Recipe {
            id: "2".to_owned(),
            name: "김치찌개".to_owned(),
            description: "매콤달콤한 김치찌개입니다. 김치와 돼지고기만 있으면 맛있게 만들 수 있어요."
                .to_owned(),
            ingredients: lines(&[
                ("김치", 200.0, "g"),
                ("돼지고기", 150.0, "g"),
                ("두부", 1.0, "모"),
                ("대파", 1.0, "대"),
            ]),
            instructions: steps(&[
                "김치를 적당한 크기로 썰어주세요",
                "돼지고기를 썰어주세요",
                "냄비에 기름을 두르고 돼지고기를 볶아주세요",
                "김치를 넣고 볶아주세요",
                "물을 넣고 끓여주세요",
                "두부와 대파를 넣고 마무리해주세요",
            ]),
            cooking_time: 30,
            difficulty: Difficulty::Medium,
            servings: 2,
            image_url: None,
            category: RecipeCategory::Dinner,
            is_premium: false,
        },
        Recipe {
            id: "3".to_owned(),
            name: "닭가슴살 샐러드".to_owned(),
            description:
                "건강하고 맛있는 닭가슴살 샐러드입니다. 다이어트 중에도 맛있게 먹을 수 있어요."
                    .to_owned(),
            ingredients: lines(&[
                ("닭가슴살", 200.0, "g"),
                ("상추", 100.0, "g"),
                ("토마토", 1.0, "개"),
                ("올리브오일", 1.0, "큰술"),
            ]),
            instructions: steps(&[
                "닭가슴살을 소금, 후추로 밑간해주세요",
                "팬에 올리브오일을 두르고 닭가슴살을 구워주세요",
                "상추와 토마토를 썰어주세요",
                "구운 닭가슴살을 썰어주세요",
                "모든 재료를 섞어주세요",
                "올리브오일과 소금으로 간해주세요",
            ]),
            cooking_time: 20,
            difficulty: Difficulty::Easy,
            servings: 1,
            image_url: None,
            category: RecipeCategory::Lunch,
            is_premium: true,
        },
        Recipe {
            id: "4".to_owned(),
            name: "스파게티 카르보나라".to_owned(),
            description: "크림치즈와 베이컨으로 만드는 이탈리안 스파게티입니다.".to_owned(),
            ingredients: lines(&[
                ("스파게티", 200.0, "g"),
                ("베이컨", 100.0, "g"),
                ("계란 노른자", 2.0, "개"),
                ("파마산 치즈", 50.0, "g"),
            ]),
            instructions: steps(&[
                "스파게티를 삶아주세요",
                "베이컨을 구워주세요",
                "계란 노른자와 파마산 치즈를 섞어주세요",
                "스파게티와 베이컨을 섞어주세요",
                "계란 노른자 소스를 넣고 섞어주세요",
            ]),
            cooking_time: 35,
            difficulty: Difficulty::Hard,
            servings: 2,
            image_url: None,
            category: RecipeCategory::Dinner,
            is_premium: true,
        },
    ]
}

pub fn shopping_items() -> Vec<ShoppingItem> {
    let item = |id: &str, name: &str, quantity: f64, unit: &str, category, is_completed| {
        ShoppingItem {
            id: id.to_owned(),
            name: name.to_owned(),
            quantity,
            unit: unit.to_owned(),
            is_completed,
            category,
        }
    };

    vec![
        item("1", "양파", 2.0, "개", Category::Vegetable, false),
        item("2", "당근", 3.0, "개", Category::Vegetable, false),
        item("3", "닭가슴살", 500.0, "g", Category::Meat, true),
        item("4", "우유", 2.0, "팩", Category::Dairy, false),
        item("5", "계란", 10.0, "개", Category::Dairy, false),
        item("6", "김치", 1.0, "봉", Category::Vegetable, true),
    ]
}

/// Eight meals over the week containing `now`, catalog recipes where the
/// catalog has them.
pub fn meal_plan(user_id: &str, now: OffsetDateTime, catalog: &[Recipe]) -> WeeklyMealPlan {
    let quick = |id: &str, name: &str, cooking_time, difficulty, category| Recipe {
        id: id.to_owned(),
        name: name.to_owned(),
        description: String::new(),
        ingredients: Vec::new(),
        instructions: Vec::new(),
        cooking_time,
        difficulty,
        servings: 1,
        image_url: None,
        category,
        is_premium: false,
    };
    let pick = |index: usize| catalog.get(index).cloned().into_iter().collect::<Vec<_>>();

    let meals = Meals {
        monday: [pick(0), pick(1)].concat(),
        tuesday: vec![quick(
            "5",
            "토스트 & 스크램블에그",
            10,
            Difficulty::Easy,
            RecipeCategory::Breakfast,
        )],
        wednesday: vec![quick(
            "6",
            "된장찌개",
            25,
            Difficulty::Medium,
            RecipeCategory::Dinner,
        )],
        thursday: pick(2),
        friday: pick(3),
        saturday: vec![quick(
            "7",
            "팬케이크",
            20,
            Difficulty::Medium,
            RecipeCategory::Breakfast,
        )],
        sunday: vec![quick(
            "8",
            "삼겹살 구이",
            40,
            Difficulty::Medium,
            RecipeCategory::Dinner,
        )],
    };

    WeeklyMealPlan {
        id: "demo-week".to_owned(),
        user_id: user_id.to_owned(),
        week_start_date: Week::containing(now.date()).start,
        meals,
        shopping_list: Vec::new(),
    }
}
