use clap::Args;
use fridgeplan_shopping::{ShoppingFilter, ShoppingItem, ShoppingTotals, group_by_category};
use std::convert::Infallible;

#[derive(Args, Debug, Clone)]
pub struct ShoppingArgs {
    /// Items to show (all, pending or completed)
    #[arg(long, default_value = "all", value_parser = lenient_filter)]
    pub filter: ShoppingFilter,
}

fn lenient_filter(value: &str) -> Result<ShoppingFilter, Infallible> {
    Ok(ShoppingFilter::parse(value))
}

pub fn render(items: &[ShoppingItem], args: &ShoppingArgs) -> String {
    let filter = args.filter;
    let totals = ShoppingTotals::of(items);

    let mut lines = vec![format!(
        "전체 ({}) · 대기 ({}) · 완료 ({}) | 필터: {}",
        totals.total,
        totals.pending,
        totals.completed,
        filter.label()
    )];

    let shown = filter.apply(items);
    if shown.is_empty() {
        let (title, hint) = filter.empty_message();
        lines.push(title.to_owned());
        lines.push(hint.to_owned());

        return lines.join("\n");
    }

    for (category, group) in group_by_category(&shown) {
        lines.push(format!("{} {}", category.emoji(), category.label()));

        for item in group {
            let check = if item.is_completed { "[x]" } else { "[ ]" };
            lines.push(format!(
                "  {check} {} {} {}",
                item.name,
                super::quantity(item.quantity),
                item.unit
            ));
        }
    }

    lines.join("\n")
}
