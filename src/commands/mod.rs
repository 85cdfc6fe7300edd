// ABOUTME: Command handler modules for the strofi binary.
// ABOUTME: Each submodule implements one CLI subcommand.

pub mod deploy;
pub mod status;
