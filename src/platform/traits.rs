// ABOUTME: Function and alias operations traits for the compute platform.
// ABOUTME: The orchestrator only talks to the platform through these seams.

use super::error::PlatformError;
use super::sealed::Sealed;
use super::types::{AliasTarget, CreateFunction, FunctionStatus, PublishedVersion};
use crate::types::{AliasName, FunctionName, VersionId};
use async_trait::async_trait;
use bytes::Bytes;

/// Function lifecycle operations.
#[async_trait]
pub trait FunctionOps: Sealed + Send + Sync {
    /// Create the function and publish its first immutable version.
    ///
    /// A pre-existing function of the same name surfaces as
    /// `PlatformError::AlreadyExists`.
    async fn create_function(
        &self,
        request: &CreateFunction,
    ) -> Result<PublishedVersion, PlatformError>;

    /// Get the current state and version of a function.
    async fn get_function(&self, name: &FunctionName) -> Result<FunctionStatus, PlatformError>;

    /// Push new code to an existing function; with `publish` the platform
    /// mints a new immutable version in the same call.
    async fn update_function_code(
        &self,
        name: &FunctionName,
        code: Bytes,
        publish: bool,
    ) -> Result<PublishedVersion, PlatformError>;
}

/// Alias operations: create, repoint, inspect.
#[async_trait]
pub trait AliasOps: Sealed + Send + Sync {
    /// Create a named alias pointing at the given version.
    ///
    /// An existing alias of the same name surfaces as
    /// `PlatformError::AlreadyExists`.
    async fn create_alias(
        &self,
        function: &FunctionName,
        alias: &AliasName,
        version: &VersionId,
        description: &str,
    ) -> Result<(), PlatformError>;

    /// Atomically repoint an existing alias to the given version.
    async fn update_alias(
        &self,
        function: &FunctionName,
        alias: &AliasName,
        version: &VersionId,
        description: &str,
    ) -> Result<(), PlatformError>;

    /// Get the version an alias currently points to.
    async fn get_alias(
        &self,
        function: &FunctionName,
        alias: &AliasName,
    ) -> Result<AliasTarget, PlatformError>;
}
