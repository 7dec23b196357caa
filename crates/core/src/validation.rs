//! Field-level rule helpers for hand-written [`validator::Validate`] impls.
//!
//! Inputs whose rules fit the derive macro (length, range, url) use
//! `#[derive(Validate)]`; inputs with price or [`Patch`](crate::patch::Patch)
//! fields accumulate errors through these helpers instead.

use std::borrow::Cow;

use validator::{ValidateUrl, ValidationError, ValidationErrors};

use crate::price;

fn error(code: &'static str, message: impl Into<Cow<'static, str>>) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(message.into());
    err
}

/// Required string: at least one character.
pub fn non_empty(errors: &mut ValidationErrors, field: &'static str, value: &str) {
    if value.is_empty() {
        errors.add(field, error("length", format!("{field} must not be empty")));
    }
}

/// URL-shaped string.
pub fn url(errors: &mut ValidationErrors, field: &'static str, value: &str) {
    if !value.validate_url() {
        errors.add(field, error("url", format!("{field} must be a valid URL")));
    }
}

/// Positive price the storage column can hold without rounding.
pub fn price(errors: &mut ValidationErrors, field: &'static str, value: f64) {
    if let Err(e) = price::to_storage(value) {
        errors.add(field, error("price", e.to_string()));
    }
}

/// String restricted to a fixed set of values.
pub fn one_of(
    errors: &mut ValidationErrors,
    field: &'static str,
    value: &str,
    allowed: &[&str],
) {
    if !allowed.contains(&value) {
        errors.add(
            field,
            error("one_of", format!("{field} must be one of: {}", allowed.join(", "))),
        );
    }
}

/// Explicit `null` sent for a column that cannot be cleared.
pub fn not_null(errors: &mut ValidationErrors, field: &'static str) {
    errors.add(field, error("not_null", format!("{field} cannot be null")));
}

/// Turn the accumulated errors into the `Validate` result.
pub fn finish(errors: ValidationErrors) -> Result<(), ValidationErrors> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
