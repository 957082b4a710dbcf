use fridgeplan_ingredient::expiry::remaining_label;
use fridgeplan_mealplan::weekday_label;
use fridgeplan_shared::format_date;
use time::OffsetDateTime;

use crate::dashboard::Dashboard;

pub fn render(dashboard: &Dashboard, now: OffsetDateTime) -> String {
    let mut lines = vec![format!(
        "이번 주 식단 ({} ~ {})",
        format_date(dashboard.week.start),
        format_date(dashboard.week.end)
    )];

    for (day, recipes) in dashboard.meals.iter() {
        lines.push(format!("{} ({}개 메뉴)", weekday_label(day), recipes.len()));

        for recipe in recipes {
            lines.push(format!(
                "  - {} · {}분 · {}",
                recipe.name,
                recipe.cooking_time,
                recipe.difficulty.label()
            ));
        }
    }

    lines.push(String::new());
    lines.push("유통기한 임박 재료".to_owned());
    if dashboard.expiring.is_empty() {
        lines.push("  임박한 재료가 없습니다".to_owned());
    }
    for ingredient in dashboard.expiring.iter() {
        lines.push(format!(
            "  {} {} {} {} · {}",
            ingredient.category.emoji(),
            ingredient.name,
            super::quantity(ingredient.quantity),
            ingredient.unit,
            remaining_label(ingredient.days_until_expiry(now))
        ));
    }

    let average = dashboard
        .summary
        .rounded_cooking_time()
        .map(|minutes| format!("{minutes}분"))
        .unwrap_or_else(|| "-".to_owned());

    lines.push(String::new());
    lines.push("이번 주 통계".to_owned());
    lines.push(format!("  총 메뉴: {}개", dashboard.summary.meal_count));
    lines.push(format!("  평균 조리시간: {average}"));
    lines.push(format!(
        "  장보기: 전체 {} · 대기 {} · 완료 {}",
        dashboard.shopping.total, dashboard.shopping.pending, dashboard.shopping.completed
    ));

    lines.join("\n")
}
