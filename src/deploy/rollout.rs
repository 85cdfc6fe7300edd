// ABOUTME: Generic rollout struct parameterized by state marker.
// ABOUTME: Holds the DeploymentRun tuple: blue version, green version, alias.

use std::marker::PhantomData;

use crate::config::Config;
use crate::types::{AliasName, FunctionName, VersionId};

use super::state::{BluePromoted, BluePublished, GreenPromoted, GreenPublished, Initialized};

/// A rollout in progress, parameterized by its current state.
///
/// The marker type `S` pins which transitions are available, so the green
/// artifact cannot be published before the blue cutover and the gate, and no
/// version reaches the alias switcher before its readiness is confirmed.
#[derive(Debug)]
pub struct Rollout<S> {
    pub(crate) config: Config,
    pub(crate) blue_version: Option<VersionId>,
    pub(crate) green_version: Option<VersionId>,
    pub(crate) _state: PhantomData<S>,
}

impl Rollout<Initialized> {
    pub fn new(config: Config) -> Self {
        Rollout {
            config,
            blue_version: None,
            green_version: None,
            _state: PhantomData,
        }
    }
}

impl<S> Rollout<S> {
    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn function(&self) -> &FunctionName {
        &self.config.function
    }

    pub fn alias(&self) -> &AliasName {
        &self.config.alias
    }
}

// State-specific accessors for the published versions

impl Rollout<BluePublished> {
    pub fn blue_version(&self) -> &VersionId {
        self.blue_version
            .as_ref()
            .expect("blue version must exist after publish")
    }
}

impl Rollout<BluePromoted> {
    pub fn blue_version(&self) -> &VersionId {
        self.blue_version
            .as_ref()
            .expect("blue version must exist after publish")
    }
}

impl Rollout<GreenPublished> {
    pub fn green_version(&self) -> &VersionId {
        self.green_version
            .as_ref()
            .expect("green version must exist after publish")
    }
}

impl Rollout<GreenPromoted> {
    /// Consume the terminal rollout and return what was deployed.
    pub fn finish(self) -> RolloutSummary {
        RolloutSummary {
            blue: self
                .blue_version
                .expect("completed rollout must have a blue version"),
            green: self
                .green_version
                .expect("completed rollout must have a green version"),
            alias: self.config.alias,
        }
    }
}

/// Outcome of a completed rollout: both published versions and the alias
/// that now routes traffic to green.
#[derive(Debug)]
pub struct RolloutSummary {
    pub blue: VersionId,
    pub green: VersionId,
    pub alias: AliasName,
}
