//! Field validators shared by the ingredient and shopping forms, used through
//! `#[validate(custom(function = "..."))]`.

use std::str::FromStr;
use validator::ValidationError;

use crate::Category;

pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank").with_message("Name is required".into()));
    }

    Ok(())
}

pub fn quantity(value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(
            ValidationError::new("not_a_number").with_message("Quantity must be a number".into()),
        );
    }

    if value < 0.0 {
        return Err(
            ValidationError::new("negative").with_message("Quantity cannot be negative".into()),
        );
    }

    Ok(())
}

pub fn category(value: &str) -> Result<(), ValidationError> {
    if Category::from_str(value.trim()).is_err() {
        return Err(ValidationError::new("invalid_category")
            .with_message("Category must be one of vegetable, meat, dairy, grain, spice, other".into()));
    }

    Ok(())
}

pub fn iso_date(value: &str) -> Result<(), ValidationError> {
    if crate::parse_date(value).is_none() {
        return Err(
            ValidationError::new("invalid_date").with_message("Date must be YYYY-MM-DD".into()),
        );
    }

    Ok(())
}
