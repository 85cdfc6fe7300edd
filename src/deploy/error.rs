// ABOUTME: Error types for rollout operations.
// ABOUTME: Covers artifact, publish, readiness, alias, and gate failures.

use crate::artifact::ArtifactError;
use crate::gate::GateError;

/// Errors that abort a rollout. All variants are fatal; the conflict cases
/// the components recover from never reach this type.
#[derive(Debug, thiserror::Error)]
pub enum DeployError {
    /// Build payload could not be read.
    #[error(transparent)]
    Artifact(#[from] ArtifactError),

    /// The platform refused a publish call.
    #[error("failed to publish function: {0}")]
    PublishFailed(String),

    /// Publish-on-update was called for a function that does not exist.
    #[error("function does not exist: {0}")]
    FunctionMissing(String),

    /// Polling the function state failed at the platform level.
    #[error("failed to query function state: {0}")]
    StatusCheckFailed(String),

    /// The platform reported the version as Failed, with its reason.
    #[error("function failed to activate: {0}")]
    ActivationFailed(String),

    /// The version did not reach a terminal state within the wait deadline.
    #[error("function did not become active within {0}s")]
    ActivationTimeout(u64),

    /// Alias create or repoint failed.
    #[error("failed to switch alias: {0}")]
    AliasFailed(String),

    /// The confirmation gate closed without approving.
    #[error("confirmation gate failed: {0}")]
    Gate(#[from] GateError),
}
