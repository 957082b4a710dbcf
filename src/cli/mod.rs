//! Plain-text views printed by the `fridgeplan` binary.

pub mod dashboard;
pub mod ingredients;
pub mod recipes;
pub mod shopping;

/// `1` for whole quantities, `0.5` otherwise.
fn quantity(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        value.to_string()
    }
}
