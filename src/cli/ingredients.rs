use clap::Args;
use fridgeplan_ingredient::{
    ExpiryStatus, Ingredient, IngredientFilter, SortBy, expiry::remaining_label, sort,
};
use fridgeplan_shared::{Category, Choice, format_date};
use time::OffsetDateTime;

#[derive(Args, Debug, Clone)]
pub struct IngredientsArgs {
    /// Category to show (vegetable, meat, dairy, grain, spice, other or all)
    #[arg(long, default_value = "all")]
    pub category: Choice<Category>,

    /// Freshness to show (expired, urgent, soon, safe or all)
    #[arg(long, default_value = "all")]
    pub status: Choice<ExpiryStatus>,

    /// Sort order (name, expiry or category)
    #[arg(long, default_value = "name")]
    pub sort: SortBy,
}

pub fn render(ingredients: &[Ingredient], args: &IngredientsArgs, now: OffsetDateTime) -> String {
    let filter = IngredientFilter {
        category: args.category,
        status: args.status,
    };
    let shown = sort(&filter.apply(ingredients, now), args.sort);

    if shown.is_empty() {
        return "재료가 없습니다".to_owned();
    }

    shown
        .iter()
        .map(|ingredient| {
            let status = ingredient.expiry_status(now);

            format!(
                "{} {} {} {} · {} ({}, {})",
                ingredient.category.emoji(),
                ingredient.name,
                super::quantity(ingredient.quantity),
                ingredient.unit,
                format_date(ingredient.expiry_date),
                status.label(),
                remaining_label(ingredient.days_until_expiry(now))
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
