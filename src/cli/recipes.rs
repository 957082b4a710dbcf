use clap::Args;
use fridgeplan_recipe::{Catalog, Difficulty, RecipeCategory, RecipeFilter};
use fridgeplan_shared::Choice;

const PREVIEW_INGREDIENTS: usize = 3;

#[derive(Args, Debug, Clone)]
pub struct RecipesArgs {
    /// Text matched against recipe names and descriptions
    #[arg(long, default_value = "")]
    pub search: String,

    /// Meal category (breakfast, lunch, dinner, snack or all)
    #[arg(long, default_value = "all")]
    pub category: Choice<RecipeCategory>,

    /// Difficulty (easy, medium, hard or all)
    #[arg(long, default_value = "all")]
    pub difficulty: Choice<Difficulty>,

    /// Only premium recipes
    #[arg(long)]
    pub premium: bool,
}

impl From<&RecipesArgs> for RecipeFilter {
    fn from(args: &RecipesArgs) -> Self {
        Self {
            search: args.search.to_owned(),
            category: args.category,
            difficulty: args.difficulty,
            premium_only: args.premium,
        }
    }
}

pub fn render(catalog: &Catalog, args: &RecipesArgs) -> String {
    let recipes = catalog.filter(&RecipeFilter::from(args));

    if recipes.is_empty() {
        return "조건에 맞는 레시피가 없습니다".to_owned();
    }

    let mut lines = Vec::new();
    for recipe in recipes.iter() {
        let premium = if recipe.is_premium { " ⭐ 프리미엄" } else { "" };
        lines.push(format!(
            "{} {} · {}분 · {} · {}인분{}",
            recipe.category.emoji(),
            recipe.name,
            recipe.cooking_time,
            recipe.difficulty.label(),
            recipe.servings,
            premium
        ));

        if !recipe.description.is_empty() {
            lines.push(format!("  {}", recipe.description));
        }

        let (shown, hidden) = recipe.ingredient_preview(PREVIEW_INGREDIENTS);
        let mut preview = shown
            .iter()
            .map(|line| {
                format!(
                    "{} {}{}",
                    line.ingredient_name,
                    super::quantity(line.quantity),
                    line.unit
                )
            })
            .collect::<Vec<_>>()
            .join(", ");
        if hidden > 0 {
            preview.push_str(&format!(" 외 {hidden}개"));
        }
        if !preview.is_empty() {
            lines.push(format!("  재료: {preview}"));
        }
    }

    lines.join("\n")
}
