// ABOUTME: Platform error types with SNAFU pattern.
// ABOUTME: Closed taxonomy so callers match on kinds, never on message text.

use snafu::Snafu;

/// Failure reported by (or while reaching) the compute platform.
///
/// The conflict variant is the only one the orchestrator recovers from;
/// everything else propagates with the platform-supplied message intact.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum PlatformError {
    #[snafu(display("resource already exists: {message}"))]
    AlreadyExists { message: String },

    #[snafu(display("resource not found: {message}"))]
    NotFound { message: String },

    #[snafu(display("platform rejected the request: {message}"))]
    Rejected { message: String },

    #[snafu(display("platform unreachable: {message}"))]
    Unavailable { message: String },
}

/// Error kind for programmatic handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformErrorKind {
    /// Create conflict: the function or alias is already there.
    AlreadyExists,
    /// The named function or alias does not exist.
    NotFound,
    /// The platform refused the request (bad artifact, permissions, malformed input).
    Rejected,
    /// Transport-level failure before a platform response was obtained.
    Unavailable,
}

impl PlatformError {
    /// Returns the error kind for programmatic handling.
    pub fn kind(&self) -> PlatformErrorKind {
        match self {
            PlatformError::AlreadyExists { .. } => PlatformErrorKind::AlreadyExists,
            PlatformError::NotFound { .. } => PlatformErrorKind::NotFound,
            PlatformError::Rejected { .. } => PlatformErrorKind::Rejected,
            PlatformError::Unavailable { .. } => PlatformErrorKind::Unavailable,
        }
    }

    /// The platform-supplied message, verbatim.
    pub fn message(&self) -> &str {
        match self {
            PlatformError::AlreadyExists { message }
            | PlatformError::NotFound { message }
            | PlatformError::Rejected { message }
            | PlatformError::Unavailable { message } => message,
        }
    }
}
