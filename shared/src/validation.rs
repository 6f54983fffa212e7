//! Input validation utilities

use regex::Regex;
use std::sync::OnceLock;
use thiserror::Error;

/// Highest rating a customer can give an order
pub const MAX_RATING: u8 = 5;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Password is required")]
    PasswordRequired,
    /// Required-field check of a form; carries the message shown to the user
    #[error("{0}")]
    Required(&'static str),
    #[error("Quantity must be a positive integer")]
    InvalidQuantity,
    #[error("Price must be a decimal amount, got {0:?}")]
    InvalidAmount(String),
    #[error("Rating must be between 1 and 5, got {0}")]
    RatingOutOfRange(u8),
}

fn email_regex() -> &'static Regex {
    static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
    EMAIL_REGEX
        .get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"))
}

fn quantity_regex() -> &'static Regex {
    static QUANTITY_REGEX: OnceLock<Regex> = OnceLock::new();
    QUANTITY_REGEX.get_or_init(|| Regex::new(r"^[1-9]\d*$").expect("valid quantity regex"))
}

pub fn is_valid_email(email: &str) -> bool {
    email_regex().is_match(email)
}

/// Validate a login or registration form
pub fn validate_credentials(email: &str, password: &str) -> Result<(), ValidationError> {
    if !is_valid_email(email) {
        return Err(ValidationError::InvalidEmail);
    }
    if password.trim().is_empty() {
        return Err(ValidationError::PasswordRequired);
    }
    Ok(())
}

/// Whether `text` may stand in a quantity field.
///
/// Accepts a positive integer without leading zeros, or the empty string
/// while the user is still typing.
pub fn is_quantity_input(text: &str) -> bool {
    text.is_empty() || quantity_regex().is_match(text)
}

/// Parse a quantity field for submission. Unlike [`is_quantity_input`], the
/// empty string is rejected here.
pub fn parse_quantity(text: &str) -> Result<u32, ValidationError> {
    if !quantity_regex().is_match(text) {
        return Err(ValidationError::InvalidQuantity);
    }
    text.parse().map_err(|_| ValidationError::InvalidQuantity)
}

pub fn validate_rating(rating: u8) -> Result<u8, ValidationError> {
    if (1..=MAX_RATING).contains(&rating) {
        Ok(rating)
    } else {
        Err(ValidationError::RatingOutOfRange(rating))
    }
}

/// Fails with `message` unless every field has non-whitespace content
pub fn require_all(fields: &[&str], message: &'static str) -> Result<(), ValidationError> {
    if fields.iter().any(|f| f.trim().is_empty()) {
        return Err(ValidationError::Required(message));
    }
    Ok(())
}
