//! Days-until-expiry and freshness buckets.
//!
//! An expiry date means midnight UTC of that day. The day count is the exact
//! remaining duration divided by one day, rounded up, so 2.1 days left reads
//! as 3 and anything already past rounds toward zero.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};
use time::{Date, OffsetDateTime};

use crate::Ingredient;

const DAY_NANOS: i128 = 86_400 * 1_000_000_000;

/// Window of the dashboard's "expiring soon" list.
pub const DEFAULT_EXPIRING_WINDOW_DAYS: i64 = 3;

pub fn days_until(expiry_date: Date, now: OffsetDateTime) -> i64 {
    let expires_at = expiry_date.midnight().assume_utc();
    let remaining = (expires_at - now).whole_nanoseconds();
    let days = remaining.div_euclid(DAY_NANOS) + i128::from(remaining.rem_euclid(DAY_NANOS) != 0);

    days as i64
}

pub fn days_until_from_now(expiry_date: Date) -> i64 {
    days_until(expiry_date, OffsetDateTime::now_utc())
}

#[derive(
    EnumString,
    Display,
    VariantArray,
    AsRefStr,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[serde(rename_all = "snake_case")]
pub enum ExpiryStatus {
    Expired,
    Urgent,
    Soon,
    Safe,
}

impl ExpiryStatus {
    pub fn from_days(days: i64) -> Self {
        match days {
            days if days < 0 => Self::Expired,
            0..=2 => Self::Urgent,
            3..=7 => Self::Soon,
            _ => Self::Safe,
        }
    }

    /// Display tone of the bucket, one of the palette names the UI styles.
    pub fn tone(&self) -> &'static str {
        match self {
            Self::Expired => "red",
            Self::Urgent => "yellow",
            Self::Soon => "orange",
            Self::Safe => "green",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Expired => "만료됨",
            Self::Urgent => "임박",
            Self::Soon => "곧 만료",
            Self::Safe => "여유",
        }
    }
}

/// Text shown next to an ingredient: expired, today, or days left.
pub fn remaining_label(days: i64) -> String {
    match days {
        days if days < 0 => ExpiryStatus::Expired.label().to_owned(),
        0 => "오늘".to_owned(),
        days => format!("{days}일 남음"),
    }
}

/// Ingredients with at most `window_days` left, expired ones included,
/// soonest first.
pub fn expiring_within(
    ingredients: &[Ingredient],
    now: OffsetDateTime,
    window_days: i64,
) -> Vec<Ingredient> {
    let mut expiring = ingredients
        .iter()
        .map(|ingredient| (ingredient.days_until_expiry(now), ingredient))
        .filter(|(days, _)| *days <= window_days)
        .collect::<Vec<_>>();

    expiring.sort_by_key(|(days, _)| *days);

    expiring
        .into_iter()
        .map(|(_, ingredient)| ingredient.clone())
        .collect()
}
