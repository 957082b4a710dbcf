use fridgeplan_shared::Choice;
use serde::{Deserialize, Deserializer, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};

use crate::ShoppingItem;

/// Tabs of the shopping list.
#[derive(
    EnumString,
    Display,
    VariantArray,
    AsRefStr,
    Default,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Serialize,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[serde(rename_all = "snake_case")]
pub enum ShoppingFilter {
    #[default]
    All,
    Pending,
    Completed,
}

impl ShoppingFilter {
    /// Lenient parse: anything unrecognised shows every item.
    pub fn parse(value: &str) -> Self {
        match Choice::<Self>::parse(value) {
            Choice::Only(filter) => filter,
            Choice::All => Self::All,
        }
    }

    pub fn matches(&self, item: &ShoppingItem) -> bool {
        match self {
            ShoppingFilter::All => true,
            ShoppingFilter::Pending => !item.is_completed,
            ShoppingFilter::Completed => item.is_completed,
        }
    }

    pub fn apply(&self, items: &[ShoppingItem]) -> Vec<ShoppingItem> {
        items
            .iter()
            .filter(|item| self.matches(item))
            .cloned()
            .collect()
    }

    pub fn label(&self) -> &'static str {
        match self {
            ShoppingFilter::All => "전체",
            ShoppingFilter::Pending => "대기",
            ShoppingFilter::Completed => "완료",
        }
    }

    /// Heading and hint shown when the filtered list is empty.
    pub fn empty_message(&self) -> (&'static str, &'static str) {
        match self {
            ShoppingFilter::All => ("장보기 항목이 없습니다", "첫 번째 항목을 추가해보세요"),
            ShoppingFilter::Pending => ("구매 대기 항목이 없습니다", "모든 항목을 구매 완료했습니다!"),
            ShoppingFilter::Completed => ("구매 완료 항목이 없습니다", "아직 구매한 항목이 없습니다"),
        }
    }
}

impl<'de> Deserialize<'de> for ShoppingFilter {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Option::<String>::deserialize(deserializer)?;

        Ok(value.as_deref().map(Self::parse).unwrap_or_default())
    }
}
