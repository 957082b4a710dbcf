use fridgeplan_ingredient::{ExpiryStatus, Ingredient, IngredientFilter, SortBy, sort};
use fridgeplan_shared::{Category, Choice};

mod helpers;

fn names(ingredients: &[Ingredient]) -> Vec<&str> {
    ingredients.iter().map(|i| i.name.as_str()).collect()
}

#[test]
fn test_filter_all_returns_everything_in_order() {
    let fridge = helpers::fridge();

    assert_eq!(IngredientFilter::default().apply(&fridge, helpers::now()), fridge);
}

#[test]
fn test_filter_by_category() {
    let filter = IngredientFilter {
        category: Choice::Only(Category::Dairy),
        ..Default::default()
    };

    let dairy = filter.apply(&helpers::fridge(), helpers::now());

    assert_eq!(names(&dairy), vec!["우유", "계란"]);
}

#[test]
fn test_filter_by_status() {
    let filter = IngredientFilter {
        status: Choice::Only(ExpiryStatus::Urgent),
        ..Default::default()
    };

    let urgent = filter.apply(&helpers::fridge(), helpers::now());

    assert_eq!(names(&urgent), vec!["우유", "돼지고기"]);
}

#[test]
fn test_filters_compose_and_are_idempotent() {
    let filter = IngredientFilter {
        category: Choice::parse("dairy"),
        status: Choice::parse("soon"),
    };

    let once = filter.apply(&helpers::fridge(), helpers::now());
    let twice = filter.apply(&once, helpers::now());

    assert_eq!(names(&once), vec!["계란"]);
    assert_eq!(once, twice);
}

#[test]
fn test_unknown_filter_values_mean_all() -> anyhow::Result<()> {
    let filter: IngredientFilter =
        serde_json::from_str(r#"{"category": "fruit", "status": "stale"}"#)?;

    assert_eq!(filter, IngredientFilter::default());
    assert_eq!(filter.apply(&helpers::fridge(), helpers::now()).len(), 4);

    Ok(())
}

#[test]
fn test_sort_by_name() {
    let sorted = sort(&helpers::fridge(), SortBy::Name);

    assert_eq!(names(&sorted), vec!["계란", "김치", "돼지고기", "우유"]);
}

#[test]
fn test_sort_by_expiry() {
    let sorted = sort(&helpers::fridge(), SortBy::Expiry);

    assert_eq!(names(&sorted), vec!["돼지고기", "우유", "계란", "김치"]);
}

#[test]
fn test_sort_by_category() {
    let sorted = sort(&helpers::fridge(), SortBy::Category);

    assert_eq!(names(&sorted), vec!["김치", "돼지고기", "계란", "우유"]);
}
