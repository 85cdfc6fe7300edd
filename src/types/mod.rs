// ABOUTME: Validated newtypes shared across the crate.
// ABOUTME: Exports phantom-typed IDs and resource name types.

mod alias_name;
mod function_name;
mod id;

pub use alias_name::{AliasName, AliasNameError};
pub use function_name::{FunctionName, FunctionNameError};
pub use id::{ArnMarker, FunctionArn, Id, VersionId, VersionMarker};
