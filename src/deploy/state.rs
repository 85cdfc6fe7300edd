// ABOUTME: Rollout state marker types for the type state pattern.
// ABOUTME: Zero-sized types enforce the blue-gate-green ordering at compile time.

/// Initial state: configuration loaded, nothing published.
/// Available actions: `publish_blue()`
#[derive(Debug, Clone, Copy, Default)]
pub struct Initialized;

/// Blue version published; readiness not yet confirmed.
/// Available actions: `promote()`
#[derive(Debug, Clone, Copy, Default)]
pub struct BluePublished;

/// Blue version active and the alias points at it.
/// Available actions: `await_gate()`
#[derive(Debug, Clone, Copy, Default)]
pub struct BluePromoted;

/// Confirmation gate signaled continue.
/// Available actions: `publish_green()`
#[derive(Debug, Clone, Copy, Default)]
pub struct GateCleared;

/// Green version published; readiness not yet confirmed.
/// Available actions: `promote()`
#[derive(Debug, Clone, Copy, Default)]
pub struct GreenPublished;

/// Terminal state: the alias points at the green version.
/// Available actions: `finish()`
#[derive(Debug, Clone, Copy, Default)]
pub struct GreenPromoted;
