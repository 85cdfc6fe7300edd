// ABOUTME: Alias switcher: create-or-repoint of the traffic alias.
// ABOUTME: The repoint itself is the platform's single atomic operation.

use super::error::DeployError;
use crate::platform::{AliasOps, PlatformErrorKind};
use crate::types::{AliasName, FunctionName, VersionId};

/// Point the alias at the given version.
///
/// Tries create first; a conflict falls back to an update-in-place repoint.
/// The net effect is idempotent. A failure during the fallback is fatal with
/// no further fallback.
pub async fn point_alias_to<P: AliasOps>(
    platform: &P,
    function: &FunctionName,
    alias: &AliasName,
    version: &VersionId,
) -> Result<(), DeployError> {
    let description = format!("Alias pointing to version {version}");

    match platform
        .create_alias(function, alias, version, &description)
        .await
    {
        Ok(()) => {
            tracing::info!(%alias, %version, "alias created");
            Ok(())
        }
        Err(e) if e.kind() == PlatformErrorKind::AlreadyExists => {
            tracing::info!(%alias, %version, "alias exists, repointing");
            let description = format!("Alias updated to version {version}");
            platform
                .update_alias(function, alias, version, &description)
                .await
                .map_err(|e| DeployError::AliasFailed(e.to_string()))
        }
        Err(e) => Err(DeployError::AliasFailed(e.to_string())),
    }
}
