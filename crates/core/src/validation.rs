//! Field validation for users, trees and members.
//!
//! Each function returns `Err` with a human-readable message; the API layer
//! wraps it in [`CoreError::Validation`](crate::error::CoreError::Validation).

use validator::ValidateEmail;

use crate::types::CalendarDate;

/// Minimum member name length, counted in characters after trimming.
pub const MIN_MEMBER_NAME_LEN: usize = 2;

/// Upper bound for any display name.
pub const MAX_NAME_LEN: usize = 200;

/// Maximum relation label length.
pub const MAX_RELATION_LEN: usize = 50;

/// Minimum password length accepted at signup.
pub const MIN_PASSWORD_LEN: usize = 6;

fn validate_name(field: &str, name: &str, min_len: usize) -> Result<(), String> {
    let len = name.trim().chars().count();
    if len < min_len {
        if min_len <= 1 {
            return Err(format!("{field} must not be empty"));
        }
        return Err(format!("{field} must be at least {min_len} characters"));
    }
    if len > MAX_NAME_LEN {
        return Err(format!("{field} must be at most {MAX_NAME_LEN} characters"));
    }
    Ok(())
}

pub fn validate_member_name(name: &str) -> Result<(), String> {
    validate_name("Name", name, MIN_MEMBER_NAME_LEN)
}

pub fn validate_tree_name(name: &str) -> Result<(), String> {
    validate_name("Tree name", name, 1)
}

pub fn validate_user_name(name: &str) -> Result<(), String> {
    validate_name("Name", name, 1)
}

/// Relation labels are free text but must be present.
pub fn validate_relation(relation: &str) -> Result<(), String> {
    let relation = relation.trim();
    if relation.is_empty() {
        return Err("Please select a relation".to_string());
    }
    if relation.chars().count() > MAX_RELATION_LEN {
        return Err(format!(
            "Relation must be at most {MAX_RELATION_LEN} characters"
        ));
    }
    Ok(())
}

pub fn validate_email(email: &str) -> Result<(), String> {
    if email.validate_email() {
        Ok(())
    } else {
        Err("Please enter a valid email".to_string())
    }
}

pub fn validate_password(password: &str) -> Result<(), String> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(format!(
            "Password must be at least {MIN_PASSWORD_LEN} characters long"
        ));
    }
    Ok(())
}

/// A death date, when both are known, cannot precede the birth date.
pub fn validate_life_span(
    birth: Option<CalendarDate>,
    death: Option<CalendarDate>,
) -> Result<(), String> {
    match (birth, death) {
        (Some(b), Some(d)) if d < b => Err(format!(
            "Death date {d} is before birth date {b}"
        )),
        _ => Ok(()),
    }
}
