use fridgeplan_shared::Category;
use serde::Serialize;
use strum::VariantArray;

use crate::{ShoppingFilter, ShoppingItem};

#[derive(Serialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ShoppingTotals {
    pub total: usize,
    pub pending: usize,
    pub completed: usize,
}

impl ShoppingTotals {
    pub fn of(items: &[ShoppingItem]) -> Self {
        let completed = items.iter().filter(|item| item.is_completed).count();

        Self {
            total: items.len(),
            pending: items.len() - completed,
            completed,
        }
    }

    pub fn count(&self, filter: ShoppingFilter) -> usize {
        match filter {
            ShoppingFilter::All => self.total,
            ShoppingFilter::Pending => self.pending,
            ShoppingFilter::Completed => self.completed,
        }
    }
}

/// Groups items by category in category declaration order. Empty categories
/// are left out; items keep their list order inside a group.
pub fn group_by_category(items: &[ShoppingItem]) -> Vec<(Category, Vec<ShoppingItem>)> {
    Category::VARIANTS
        .iter()
        .filter_map(|category| {
            let group = items
                .iter()
                .filter(|item| item.category == *category)
                .cloned()
                .collect::<Vec<_>>();

            (!group.is_empty()).then_some((*category, group))
        })
        .collect()
}
