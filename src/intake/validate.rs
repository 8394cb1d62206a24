//! Parsing of raw dialogue responses into model values.

use thiserror::Error;

use crate::models::{Gender, Kind};

/// Why a response was rejected during pet intake.
///
/// Any of these aborts the whole add-pet attempt.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Invalid pet kind. Please enter Dog, Cat, Lizard, or Bird.")]
    InvalidKind,

    #[error("Invalid gender. Please enter Male or Female.")]
    InvalidGender,

    #[error("Pet name cannot be empty.")]
    EmptyName,

    #[error("Owner cannot be empty.")]
    EmptyOwner,

    #[error("Breed cannot be empty.")]
    EmptyBreed,

    /// `field` is the attribute being asked about, e.g. `"longhaired"`.
    #[error("Invalid {field} status. Please enter yes or no.")]
    InvalidYesNo { field: &'static str },
}

pub fn parse_kind(raw: &str) -> Result<Kind, ValidationError> {
    Kind::from_str(raw.trim()).ok_or(ValidationError::InvalidKind)
}

pub fn parse_gender(raw: &str) -> Result<Gender, ValidationError> {
    Gender::from_str(raw.trim()).ok_or(ValidationError::InvalidGender)
}

/// Trims `raw` and rejects it with `err` when nothing is left.
pub fn require_text(raw: &str, err: ValidationError) -> Result<String, ValidationError> {
    let text = raw.trim();
    if text.is_empty() {
        return Err(err);
    }
    Ok(text.to_string())
}

/// `yes` or `no` in any casing.
pub fn parse_yes_no(raw: &str, field: &'static str) -> Result<bool, ValidationError> {
    let answer = raw.trim();
    if answer.eq_ignore_ascii_case("yes") {
        Ok(true)
    } else if answer.eq_ignore_ascii_case("no") {
        Ok(false)
    } else {
        Err(ValidationError::InvalidYesNo { field })
    }
}
