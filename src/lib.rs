// ABOUTME: Library root for strofi - exposes the rollout core for testing.
// ABOUTME: The main binary is in main.rs.

pub mod artifact;
pub mod config;
pub mod deploy;
pub mod error;
pub mod gate;
pub mod output;
pub mod platform;
pub mod types;
