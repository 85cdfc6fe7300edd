// ABOUTME: Validated traffic alias name.
// ABOUTME: Rejects purely numeric names so an alias can never shadow a version.

use std::fmt;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AliasNameError {
    #[error("alias name cannot be empty")]
    Empty,

    #[error("alias name exceeds maximum length of 128 characters")]
    TooLong,

    #[error("alias name cannot be purely numeric")]
    Numeric,

    #[error("invalid character in alias name: '{0}'")]
    InvalidChar(char),
}

/// A stable named pointer to one immutable function version (e.g. "live").
///
/// Purely numeric names are rejected because the platform's routing surface
/// accepts both aliases and raw version numbers in the same position.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AliasName(String);

impl AliasName {
    pub fn new(value: &str) -> Result<Self, AliasNameError> {
        if value.is_empty() {
            return Err(AliasNameError::Empty);
        }

        if value.len() > 128 {
            return Err(AliasNameError::TooLong);
        }

        if value.chars().all(|c| c.is_ascii_digit()) {
            return Err(AliasNameError::Numeric);
        }

        for c in value.chars() {
            if !c.is_ascii_alphanumeric() && c != '-' && c != '_' {
                return Err(AliasNameError::InvalidChar(c));
            }
        }

        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AliasName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
