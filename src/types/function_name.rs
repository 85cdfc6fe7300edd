// ABOUTME: Validated serverless function name.
// ABOUTME: Enforces the platform's 1-64 character name charset.

use std::fmt;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FunctionNameError {
    #[error("function name cannot be empty")]
    Empty,

    #[error("function name exceeds maximum length of 64 characters")]
    TooLong,

    #[error("function name cannot start with a hyphen")]
    StartsWithHyphen,

    #[error("invalid character in function name: '{0}'")]
    InvalidChar(char),
}

/// The name of a deployable function on the compute platform.
///
/// Alphanumeric plus hyphen and underscore, at most 64 characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FunctionName(String);

impl FunctionName {
    pub fn new(value: &str) -> Result<Self, FunctionNameError> {
        if value.is_empty() {
            return Err(FunctionNameError::Empty);
        }

        if value.len() > 64 {
            return Err(FunctionNameError::TooLong);
        }

        if value.starts_with('-') {
            return Err(FunctionNameError::StartsWithHyphen);
        }

        for c in value.chars() {
            if !c.is_ascii_alphanumeric() && c != '-' && c != '_' {
                return Err(FunctionNameError::InvalidChar(c));
            }
        }

        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FunctionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
