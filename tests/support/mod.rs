// ABOUTME: Shared helpers for integration tests.
// ABOUTME: Builds configs with fast wait policies and canned names.

#![allow(dead_code)]

use std::path::PathBuf;
use std::time::Duration;
use strofi::config::{ArtifactsConfig, Config, PlatformConfig, WaitConfig};
use strofi::types::{AliasName, FunctionName};

/// A config pointed at nothing real, with a wait policy fast enough for tests.
pub fn test_config(function: &str) -> Config {
    Config {
        function: FunctionName::new(function).expect("test function name is valid"),
        region: "eu-west-1".to_string(),
        role: "test-execution-role".to_string(),
        runtime: "python3.12".to_string(),
        handler: "handler.main".to_string(),
        alias: AliasName::new("live").expect("test alias name is valid"),
        artifacts: ArtifactsConfig {
            blue: PathBuf::from("build/blue.zip"),
            green: PathBuf::from("build/green.zip"),
        },
        platform: PlatformConfig::default(),
        wait: fast_wait(),
    }
}

pub fn fast_wait() -> WaitConfig {
    WaitConfig {
        interval: Duration::from_millis(1),
        timeout: Duration::from_secs(2),
    }
}
