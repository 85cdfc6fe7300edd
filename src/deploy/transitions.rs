// ABOUTME: State transition methods for the rollout machine.
// ABOUTME: Each method consumes self and returns the next state on success.

use std::marker::PhantomData;

use crate::artifact::CodeArtifact;
use crate::gate::Gate;
use crate::platform::{AliasOps, FunctionOps};
use crate::types::VersionId;

use super::Rollout;
use super::error::DeployError;
use super::state::{
    BluePromoted, BluePublished, GateCleared, GreenPromoted, GreenPublished, Initialized,
};
use super::{alias, publisher, waiter};

// =============================================================================
// Internal Helpers
// =============================================================================

impl<S> Rollout<S> {
    /// Internal helper to transition to a new state.
    fn transition<T>(self) -> Rollout<T> {
        Rollout {
            config: self.config,
            blue_version: self.blue_version,
            green_version: self.green_version,
            _state: PhantomData,
        }
    }

    /// Wait for the named version's function to become active, then point
    /// the alias at it. Shared by both promotions.
    async fn await_and_switch<P: FunctionOps + AliasOps>(
        &self,
        platform: &P,
        version: &VersionId,
    ) -> Result<(), DeployError> {
        waiter::await_active(platform, &self.config.function, &self.config.wait).await?;
        alias::point_alias_to(platform, &self.config.function, &self.config.alias, version).await
    }
}

// =============================================================================
// Initialized -> BluePublished
// =============================================================================

impl Rollout<Initialized> {
    /// Publish the blue artifact, creating the function if absent.
    ///
    /// # Errors
    ///
    /// Returns `DeployError::PublishFailed` if the platform refuses the
    /// request for any reason other than a pre-existing function.
    #[must_use = "rollout state must be used"]
    pub async fn publish_blue<P: FunctionOps>(
        self,
        platform: &P,
        artifact: CodeArtifact,
    ) -> Result<Rollout<BluePublished>, DeployError> {
        let version = publisher::publish_initial(platform, &self.config, artifact).await?;
        Ok(Rollout {
            config: self.config,
            blue_version: Some(version),
            green_version: None,
            _state: PhantomData,
        })
    }
}

// =============================================================================
// BluePublished -> BluePromoted
// =============================================================================

impl Rollout<BluePublished> {
    /// Await readiness of the blue version, then cut the alias over to it.
    ///
    /// # Errors
    ///
    /// Aborts on activation failure, wait deadline, or alias failure. No
    /// alias call is made unless the version is Active.
    #[must_use = "rollout state must be used"]
    pub async fn promote<P: FunctionOps + AliasOps>(
        self,
        platform: &P,
    ) -> Result<Rollout<BluePromoted>, DeployError> {
        let version = self.blue_version().clone();
        self.await_and_switch(platform, &version).await?;
        Ok(self.transition())
    }
}

// =============================================================================
// BluePromoted -> GateCleared
// =============================================================================

impl Rollout<BluePromoted> {
    /// Block on the external confirmation signal. No timeout; a closed gate
    /// aborts the rollout.
    #[must_use = "rollout state must be used"]
    pub async fn await_gate<G: Gate + ?Sized>(
        self,
        gate: &G,
    ) -> Result<Rollout<GateCleared>, DeployError> {
        gate.wait().await?;
        Ok(self.transition())
    }
}

// =============================================================================
// GateCleared -> GreenPublished
// =============================================================================

impl Rollout<GateCleared> {
    /// Publish the green artifact as a new immutable version of the
    /// existing function.
    ///
    /// # Errors
    ///
    /// Returns `DeployError::FunctionMissing` if the function has vanished
    /// since the blue phase.
    #[must_use = "rollout state must be used"]
    pub async fn publish_green<P: FunctionOps>(
        self,
        platform: &P,
        artifact: CodeArtifact,
    ) -> Result<Rollout<GreenPublished>, DeployError> {
        let version = publisher::publish_update(platform, &self.config, artifact).await?;
        Ok(Rollout {
            config: self.config,
            blue_version: self.blue_version,
            green_version: Some(version),
            _state: PhantomData,
        })
    }
}

// =============================================================================
// GreenPublished -> GreenPromoted
// =============================================================================

impl Rollout<GreenPublished> {
    /// Await readiness of the green version, then repoint the alias.
    ///
    /// On failure the alias keeps whatever target was last applied: traffic
    /// stays on blue. No compensation is attempted.
    #[must_use = "rollout state must be used"]
    pub async fn promote<P: FunctionOps + AliasOps>(
        self,
        platform: &P,
    ) -> Result<Rollout<GreenPromoted>, DeployError> {
        let version = self.green_version().clone();
        self.await_and_switch(platform, &version).await?;
        Ok(self.transition())
    }
}
