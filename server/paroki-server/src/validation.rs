//! Request validation utilities for consistent validation across handlers
//!
//! The usher-name rules live here: uniqueness across the submitted list,
//! length bounds, a consecutive-repeat heuristic for catching typos, and a
//! letters-and-spaces-only charset. Error messages are the Indonesian strings
//! the frontend displays and must stay byte-for-byte stable.

use serde::Serialize;
use utoipa::ToSchema;

/// Maximum run of one character before a name is treated as a typo.
const MAX_CHAR_RUN: usize = 2;
const MIN_NAME_LEN: usize = 3;
const MAX_NAME_LEN: usize = 50;

/// Outcome of validating a batch of proposed usher names.
///
/// `is_valid` is false exactly when `error` carries a message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ValidationResult {
    pub is_valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ValidationResult {
    pub fn ok() -> Self {
        Self {
            is_valid: true,
            error: None,
        }
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            error: Some(message.into()),
        }
    }
}

/// Validate a batch of proposed usher names.
///
/// The duplicate check runs first over the whole list and wins over every
/// per-name check. Per-name checks run in input order; the first failing name
/// stops validation. An empty list is valid.
pub fn validate_usher_names<S: AsRef<str>>(names: &[S]) -> ValidationResult {
    let names: Vec<&str> = names.iter().map(|n| n.as_ref()).collect();

    // Every occurrence after the first of a repeated value, in input order.
    let duplicates: Vec<&str> = names
        .iter()
        .enumerate()
        .filter(|(i, name)| names[..*i].contains(name))
        .map(|(_, name)| *name)
        .collect();
    if !duplicates.is_empty() {
        return ValidationResult::fail(format!(
            "Nama petugas tidak boleh duplikat: {}",
            duplicates.join(", ")
        ));
    }

    for name in names {
        let len = name.chars().count();
        if !(MIN_NAME_LEN..=MAX_NAME_LEN).contains(&len) {
            return ValidationResult::fail(format!(
                "Panjang nama petugas minimum 3/maksimum 50 karakter: {name}"
            ));
        }

        if has_repeated_run(name) {
            return ValidationResult::fail(format!(
                "Mohon ketik nama petugas dengan benar: {name}"
            ));
        }

        if !name
            .chars()
            .all(|c| c.is_ascii_alphabetic() || c.is_whitespace())
        {
            return ValidationResult::fail(format!(
                "Nama petugas hanya boleh mengandung huruf: {name}"
            ));
        }
    }

    ValidationResult::ok()
}

/// True when any single character repeats more than [`MAX_CHAR_RUN`] times
/// consecutively, case-sensitively.
fn has_repeated_run(name: &str) -> bool {
    let mut run = 0usize;
    let mut previous: Option<char> = None;
    for c in name.chars() {
        if previous == Some(c) {
            run += 1;
            if run > MAX_CHAR_RUN {
                return true;
            }
        } else {
            run = 1;
            previous = Some(c);
        }
    }
    false
}
