// ABOUTME: Compute-platform collaborator: traits, wire client, in-memory platform.
// ABOUTME: Everything the orchestrator knows about the control plane lives here.

mod error;
mod http;
mod memory;
mod sealed;
mod traits;
mod types;

pub use error::{PlatformError, PlatformErrorKind};
pub use http::HttpPlatform;
pub use memory::{CallCounts, MemoryPlatform};
pub use traits::{AliasOps, FunctionOps};
pub use types::{AliasTarget, CreateFunction, FunctionState, FunctionStatus, PublishedVersion};
