// ABOUTME: Configuration types and parsing for strofi.yml.
// ABOUTME: The deployment target is built here once and passed by parameter.

use crate::artifact::Color;
use crate::error::{Error, Result};
use crate::types::{AliasName, FunctionName};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const CONFIG_FILENAME: &str = "strofi.yml";
pub const CONFIG_FILENAME_ALT: &str = "strofi.yaml";

/// The deployment target plus rollout policy, loaded once at startup.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(deserialize_with = "deserialize_function_name")]
    pub function: FunctionName,

    pub region: String,

    /// Execution-role reference handed to the platform on create.
    pub role: String,

    #[serde(default = "default_runtime")]
    pub runtime: String,

    #[serde(default = "default_handler")]
    pub handler: String,

    #[serde(
        default = "default_alias",
        deserialize_with = "deserialize_alias_name"
    )]
    pub alias: AliasName,

    pub artifacts: ArtifactsConfig,

    #[serde(default)]
    pub platform: PlatformConfig,

    #[serde(default)]
    pub wait: WaitConfig,
}

/// Paths to the two build payloads, one per color.
#[derive(Debug, Clone, Deserialize)]
pub struct ArtifactsConfig {
    pub blue: PathBuf,
    pub green: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlatformConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
}

impl Default for PlatformConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
        }
    }
}

/// Readiness polling policy: fixed interval, bounded elapsed time.
#[derive(Debug, Clone, Deserialize)]
pub struct WaitConfig {
    #[serde(default = "default_poll_interval", with = "humantime_serde")]
    pub interval: Duration,

    #[serde(default = "default_wait_timeout", with = "humantime_serde")]
    pub timeout: Duration,
}

impl Default for WaitConfig {
    fn default() -> Self {
        Self {
            interval: default_poll_interval(),
            timeout: default_wait_timeout(),
        }
    }
}

fn default_runtime() -> String {
    "python3.12".to_string()
}

fn default_handler() -> String {
    "handler.main".to_string()
}

fn default_alias() -> AliasName {
    AliasName::new("live").expect("default alias name is valid")
}

fn default_endpoint() -> String {
    "http://127.0.0.1:9001".to_string()
}

fn default_poll_interval() -> Duration {
    Duration::from_secs(5)
}

fn default_wait_timeout() -> Duration {
    Duration::from_secs(300)
}

impl Config {
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).map_err(Error::from)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    pub fn discover(dir: &Path) -> Result<Self> {
        let candidates = [dir.join(CONFIG_FILENAME), dir.join(CONFIG_FILENAME_ALT)];

        for path in &candidates {
            if path.exists() {
                return Self::load(path);
            }
        }

        Err(Error::ConfigNotFound(dir.to_path_buf()))
    }

    /// Artifact path for the given rollout color.
    pub fn artifact_path(&self, color: Color) -> &Path {
        match color {
            Color::Blue => &self.artifacts.blue,
            Color::Green => &self.artifacts.green,
        }
    }

    pub fn template() -> Self {
        Config {
            function: FunctionName::new("my-function").expect("template name is valid"),
            region: "eu-west-1".to_string(),
            role: "deploy-execution-role".to_string(),
            runtime: default_runtime(),
            handler: default_handler(),
            alias: default_alias(),
            artifacts: ArtifactsConfig {
                blue: PathBuf::from("build/blue.zip"),
                green: PathBuf::from("build/green.zip"),
            },
            platform: PlatformConfig::default(),
            wait: WaitConfig::default(),
        }
    }
}

pub fn init_config(dir: &Path, function: Option<&str>, force: bool) -> Result<()> {
    let config_path = dir.join(CONFIG_FILENAME);

    if config_path.exists() && !force {
        return Err(Error::AlreadyExists(config_path));
    }

    let mut config = Config::template();

    if let Some(name) = function {
        config.function =
            FunctionName::new(name).map_err(|e| Error::InvalidConfig(e.to_string()))?;
    }

    let yaml = generate_template_yaml(&config);
    std::fs::write(&config_path, yaml)?;

    Ok(())
}

fn generate_template_yaml(config: &Config) -> String {
    format!(
        r#"function: {}
region: {}
role: {}
runtime: {}
handler: {}
alias: {}
artifacts:
  blue: {}
  green: {}
platform:
  endpoint: {}
wait:
  interval: 5s
  timeout: 5m
"#,
        config.function,
        config.region,
        config.role,
        config.runtime,
        config.handler,
        config.alias,
        config.artifacts.blue.display(),
        config.artifacts.green.display(),
        config.platform.endpoint,
    )
}

// Custom deserializers

fn deserialize_function_name<'de, D>(deserializer: D) -> std::result::Result<FunctionName, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    FunctionName::new(&s).map_err(serde::de::Error::custom)
}

fn deserialize_alias_name<'de, D>(deserializer: D) -> std::result::Result<AliasName, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    AliasName::new(&s).map_err(serde::de::Error::custom)
}
