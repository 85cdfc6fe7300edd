// ABOUTME: Version publisher: creates the function or pushes new code.
// ABOUTME: A create conflict degrades to fetching the existing version.

use super::error::DeployError;
use crate::artifact::CodeArtifact;
use crate::config::Config;
use crate::platform::{CreateFunction, FunctionOps, PlatformErrorKind};
use crate::types::VersionId;

/// Create the function and publish its first version.
///
/// If the function already exists the conflict is not an error: the call
/// degrades to fetching the existing function's current version.
pub async fn publish_initial<P: FunctionOps>(
    platform: &P,
    config: &Config,
    artifact: CodeArtifact,
) -> Result<VersionId, DeployError> {
    let color = artifact.color();
    let request = CreateFunction {
        name: config.function.clone(),
        runtime: config.runtime.clone(),
        role: config.role.clone(),
        handler: config.handler.clone(),
        description: format!("{color} version of {}", config.function),
        code: artifact.into_bytes(),
        publish: true,
    };

    match platform.create_function(&request).await {
        Ok(published) => {
            tracing::info!(function = %config.function, version = %published.version, "function created");
            Ok(published.version)
        }
        Err(e) if e.kind() == PlatformErrorKind::AlreadyExists => {
            tracing::info!(function = %config.function, "function already exists, skipping creation");
            let status = platform
                .get_function(&config.function)
                .await
                .map_err(|e| DeployError::PublishFailed(e.to_string()))?;
            Ok(status.version)
        }
        Err(e) => Err(DeployError::PublishFailed(e.to_string())),
    }
}

/// Push new code to an existing function; the platform mints a new immutable
/// version in the same call.
pub async fn publish_update<P: FunctionOps>(
    platform: &P,
    config: &Config,
    artifact: CodeArtifact,
) -> Result<VersionId, DeployError> {
    let published = platform
        .update_function_code(&config.function, artifact.into_bytes(), true)
        .await
        .map_err(|e| match e.kind() {
            PlatformErrorKind::NotFound => {
                DeployError::FunctionMissing(config.function.to_string())
            }
            _ => DeployError::PublishFailed(e.to_string()),
        })?;

    tracing::info!(function = %config.function, version = %published.version, "new version published");
    Ok(published.version)
}
