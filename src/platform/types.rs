// ABOUTME: Shared types for the platform traits.
// ABOUTME: Function readiness states and request/response value types.

use crate::types::{FunctionArn, FunctionName, VersionId};
use bytes::Bytes;
use std::fmt;

/// Readiness state of a function version, as reported by the platform.
///
/// Transitions are platform-owned: `Pending -> {Active, Failed}`. Active and
/// Failed are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FunctionState {
    Pending,
    Active,
    Failed,
}

impl FunctionState {
    /// Map a wire state string onto the closed state set.
    ///
    /// Anything that is neither Active nor Failed is an intermediate state
    /// and is treated as Pending (the waiter polls again).
    pub fn from_wire(state: &str) -> Self {
        match state {
            "Active" => FunctionState::Active,
            "Failed" => FunctionState::Failed,
            _ => FunctionState::Pending,
        }
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, FunctionState::Active | FunctionState::Failed)
    }
}

impl fmt::Display for FunctionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FunctionState::Pending => "Pending",
            FunctionState::Active => "Active",
            FunctionState::Failed => "Failed",
        };
        write!(f, "{s}")
    }
}

/// Request to create a function and publish its first version.
#[derive(Debug, Clone)]
pub struct CreateFunction {
    pub name: FunctionName,
    pub runtime: String,
    pub role: String,
    pub handler: String,
    pub description: String,
    pub code: Bytes,
    pub publish: bool,
}

/// Result of a publish call: the immutable version the platform minted.
#[derive(Debug, Clone)]
pub struct PublishedVersion {
    pub version: VersionId,
    pub arn: Option<FunctionArn>,
}

/// Current state of a function as observed via a get call.
#[derive(Debug, Clone)]
pub struct FunctionStatus {
    pub version: VersionId,
    pub state: FunctionState,
    /// The state string as the platform reported it, before mapping onto the
    /// closed state set. Retry logs show this, not the mapped state.
    pub raw_state: String,
    /// Platform-supplied failure reason; set when `state` is Failed.
    pub reason: Option<String>,
    pub arn: Option<FunctionArn>,
}

/// The version an alias currently points to.
#[derive(Debug, Clone)]
pub struct AliasTarget {
    pub version: VersionId,
    pub description: String,
}
