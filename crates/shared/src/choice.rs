use serde::{Deserialize, Deserializer};
use std::{convert::Infallible, fmt, str::FromStr};

/// A filter selection that is either "all" or one exact value.
///
/// Parsing never fails: an empty string, `all` or any value `T` does not
/// recognise all mean [`Choice::All`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice<T> {
    All,
    Only(T),
}

impl<T> Default for Choice<T> {
    fn default() -> Self {
        Self::All
    }
}

impl<T: PartialEq> Choice<T> {
    pub fn matches(&self, value: &T) -> bool {
        match self {
            Self::All => true,
            Self::Only(expected) => expected == value,
        }
    }
}

impl<T> Choice<T> {
    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }
}

impl<T: FromStr> Choice<T> {
    pub fn parse(value: &str) -> Self {
        let value = value.trim();
        if value.is_empty() || value.eq_ignore_ascii_case("all") {
            return Self::All;
        }

        match value.parse() {
            Ok(value) => Self::Only(value),
            Err(_) => {
                tracing::warn!(value, "unknown filter value, using all");
                Self::All
            }
        }
    }
}

impl<T: FromStr> FromStr for Choice<T> {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl<T> From<T> for Choice<T> {
    fn from(value: T) -> Self {
        Self::Only(value)
    }
}

impl<T: fmt::Display> fmt::Display for Choice<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("all"),
            Self::Only(value) => value.fmt(f),
        }
    }
}

impl<'de, T: FromStr> Deserialize<'de> for Choice<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Option::<String>::deserialize(deserializer)?;

        Ok(value.as_deref().map(Self::parse).unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Category;

    #[test]
    fn parse_falls_back_to_all() {
        assert_eq!(Choice::<Category>::parse(""), Choice::All);
        assert_eq!(Choice::<Category>::parse("all"), Choice::All);
        assert_eq!(Choice::<Category>::parse("ALL"), Choice::All);
        assert_eq!(Choice::<Category>::parse("fruit"), Choice::All);
        assert_eq!(
            Choice::<Category>::parse("meat"),
            Choice::Only(Category::Meat)
        );
    }

    #[test]
    fn matches_exact_value_or_everything() {
        let meat = Choice::Only(Category::Meat);

        assert!(meat.matches(&Category::Meat));
        assert!(!meat.matches(&Category::Dairy));
        assert!(Choice::All.matches(&Category::Dairy));
    }

    #[test]
    fn deserializes_leniently() -> Result<(), serde_json::Error> {
        let choice: Choice<Category> = serde_json::from_str("\"dairy\"")?;
        assert_eq!(choice, Choice::Only(Category::Dairy));

        let choice: Choice<Category> = serde_json::from_str("\"unknown\"")?;
        assert_eq!(choice, Choice::All);

        let choice: Choice<Category> = serde_json::from_str("null")?;
        assert_eq!(choice, Choice::All);

        Ok(())
    }

    #[test]
    fn displays_selection() {
        assert_eq!(Choice::<Category>::All.to_string(), "all");
        assert_eq!(Choice::Only(Category::Grain).to_string(), "grain");
    }
}
