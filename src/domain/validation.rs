//! Draft validation rules for user registration.
//!
//! Pure functions with no side effects. Checks run in a fixed order and
//! stop at the first failure; the order determines which message a
//! multiply-invalid draft gets back, so it is part of the contract.

use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::Decimal;

use crate::config::{BASE_SALARY_MAX, EMAIL_PATTERN};
use crate::domain::NewUser;
use crate::errors::{AppError, AppResult};

static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(EMAIL_PATTERN).expect("email pattern must compile"));

/// Validate a registration draft.
///
/// Check order: firstName, lastName, email presence, email format,
/// baseSalary presence, baseSalary range.
pub fn validate(draft: &NewUser) -> AppResult<()> {
    if is_blank(draft.first_name.as_deref()) {
        return Err(AppError::validation("Field 'firstName' is required"));
    }
    if is_blank(draft.last_name.as_deref()) {
        return Err(AppError::validation("Field 'lastName' is required"));
    }
    let email = match draft.email.as_deref() {
        Some(email) if !email.trim().is_empty() => email,
        _ => return Err(AppError::validation("Field 'email' is required")),
    };
    if !EMAIL_REGEX.is_match(email) {
        return Err(AppError::validation("Invalid email format"));
    }
    let base_salary = draft
        .base_salary
        .ok_or_else(|| AppError::validation("Field 'baseSalary' is required"))?;
    if base_salary < Decimal::ZERO || base_salary > Decimal::from(BASE_SALARY_MAX) {
        return Err(AppError::validation(
            "Field 'baseSalary' must be between 0 and 15,000,000",
        ));
    }
    Ok(())
}

/// Missing and whitespace-only both count as blank
fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, |s| s.trim().is_empty())
}
