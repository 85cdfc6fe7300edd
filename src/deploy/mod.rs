// ABOUTME: Rollout orchestration using the type state pattern.
// ABOUTME: Exports state markers, the Rollout machine, and its leaf components.

mod alias;
mod error;
mod publisher;
mod rollout;
mod state;
mod transitions;
mod waiter;

pub use alias::point_alias_to;
pub use error::DeployError;
pub use publisher::{publish_initial, publish_update};
pub use rollout::{Rollout, RolloutSummary};
pub use state::{
    BluePromoted, BluePublished, GateCleared, GreenPromoted, GreenPublished, Initialized,
};
pub use waiter::await_active;
