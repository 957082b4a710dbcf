#![allow(dead_code)]

use fridgeplan_shared::Category;
use fridgeplan_shopping::{ShoppingItem, ShoppingItemInput};

pub fn item(id: &str, name: &str, category: Category, is_completed: bool) -> ShoppingItem {
    ShoppingItem {
        id: id.to_owned(),
        name: name.to_owned(),
        quantity: 1.0,
        unit: "개".to_owned(),
        is_completed,
        category,
    }
}

/// Six items, two already bought.
pub fn list() -> Vec<ShoppingItem> {
    vec![
        item("1", "양파", Category::Vegetable, false),
        item("2", "당근", Category::Vegetable, false),
        item("3", "닭가슴살", Category::Meat, true),
        item("4", "우유", Category::Dairy, false),
        item("5", "계란", Category::Dairy, false),
        item("6", "김치", Category::Vegetable, true),
    ]
}

pub fn input(name: &str) -> ShoppingItemInput {
    ShoppingItemInput {
        name: name.to_owned(),
        quantity: 1.0,
        unit: "봉".to_owned(),
        category: "grain".to_owned(),
    }
}

pub fn ids(items: &[ShoppingItem]) -> Vec<&str> {
    items.iter().map(|item| item.id.as_str()).collect()
}
