// ABOUTME: In-memory platform with scriptable readiness and call counters.
// ABOUTME: Backs `deploy --dry-run` and the integration test suite.

use super::error::PlatformError;
use super::sealed::Sealed;
use super::traits::{AliasOps, FunctionOps};
use super::types::{AliasTarget, CreateFunction, FunctionState, FunctionStatus, PublishedVersion};
use crate::types::{AliasName, FunctionArn, FunctionName, VersionId};
use async_trait::async_trait;
use bytes::Bytes;
use parking_lot::Mutex;
use std::collections::{HashMap, VecDeque};

/// An in-process platform that honors the same conflict semantics as the
/// real control plane.
///
/// Readiness can be scripted per function: each `get_function` observation
/// consumes one scripted state; an exhausted script reports Active.
#[derive(Default)]
pub struct MemoryPlatform {
    inner: Mutex<Inner>,
}

#[derive(Default)]
struct Inner {
    functions: HashMap<String, FunctionRecord>,
    aliases: HashMap<(String, String), AliasRecord>,
    scripts: HashMap<String, VecDeque<(FunctionState, Option<String>)>>,
    counts: CallCounts,
}

struct FunctionRecord {
    version: u64,
    code: Bytes,
}

struct AliasRecord {
    version: VersionId,
    description: String,
}

/// Number of times each platform operation has been invoked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CallCounts {
    pub create_function: usize,
    pub get_function: usize,
    pub update_code: usize,
    pub create_alias: usize,
    pub update_alias: usize,
    pub get_alias: usize,
}

impl MemoryPlatform {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-register a function, as if a previous invocation created it.
    pub fn seed_function(&self, name: &FunctionName, version: u64, code: Bytes) {
        let mut inner = self.inner.lock();
        inner
            .functions
            .insert(name.as_str().to_string(), FunctionRecord { version, code });
    }

    /// Queue the readiness states future `get_function` calls will observe.
    pub fn script_states<I>(&self, name: &FunctionName, script: I)
    where
        I: IntoIterator<Item = (FunctionState, Option<String>)>,
    {
        let mut inner = self.inner.lock();
        inner
            .scripts
            .entry(name.as_str().to_string())
            .or_default()
            .extend(script);
    }

    /// Inspect an alias target without touching the call counters.
    pub fn alias_target(&self, function: &FunctionName, alias: &AliasName) -> Option<VersionId> {
        let inner = self.inner.lock();
        inner
            .aliases
            .get(&alias_key(function, alias))
            .map(|record| record.version.clone())
    }

    /// True once the alias has been created.
    pub fn alias_exists(&self, function: &FunctionName, alias: &AliasName) -> bool {
        self.inner.lock().aliases.contains_key(&alias_key(function, alias))
    }

    pub fn counts(&self) -> CallCounts {
        self.inner.lock().counts
    }

    /// Stored code for a function, if it exists.
    pub fn function_code(&self, name: &FunctionName) -> Option<Bytes> {
        let inner = self.inner.lock();
        inner
            .functions
            .get(name.as_str())
            .map(|record| record.code.clone())
    }
}

fn alias_key(function: &FunctionName, alias: &AliasName) -> (String, String) {
    (function.as_str().to_string(), alias.as_str().to_string())
}

fn arn_for(name: &str) -> FunctionArn {
    FunctionArn::new(format!("arn:platform:function:{name}"))
}

#[async_trait]
impl FunctionOps for MemoryPlatform {
    async fn create_function(
        &self,
        request: &CreateFunction,
    ) -> Result<PublishedVersion, PlatformError> {
        let mut inner = self.inner.lock();
        inner.counts.create_function += 1;

        let name = request.name.as_str().to_string();
        if inner.functions.contains_key(&name) {
            return Err(PlatformError::AlreadyExists {
                message: format!("function '{name}' already exists"),
            });
        }

        inner.functions.insert(
            name.clone(),
            FunctionRecord {
                version: 1,
                code: request.code.clone(),
            },
        );

        Ok(PublishedVersion {
            version: VersionId::new("1"),
            arn: Some(arn_for(&name)),
        })
    }

    async fn get_function(&self, name: &FunctionName) -> Result<FunctionStatus, PlatformError> {
        let mut inner = self.inner.lock();
        inner.counts.get_function += 1;

        let version = match inner.functions.get(name.as_str()) {
            Some(record) => record.version,
            None => {
                return Err(PlatformError::NotFound {
                    message: format!("function '{name}' not found"),
                });
            }
        };

        let (state, reason) = inner
            .scripts
            .get_mut(name.as_str())
            .and_then(|script| script.pop_front())
            .unwrap_or((FunctionState::Active, None));

        Ok(FunctionStatus {
            version: VersionId::new(version.to_string()),
            state,
            raw_state: state.to_string(),
            reason,
            arn: Some(arn_for(name.as_str())),
        })
    }

    async fn update_function_code(
        &self,
        name: &FunctionName,
        code: Bytes,
        publish: bool,
    ) -> Result<PublishedVersion, PlatformError> {
        let mut inner = self.inner.lock();
        inner.counts.update_code += 1;

        let record = inner.functions.get_mut(name.as_str()).ok_or_else(|| {
            PlatformError::NotFound {
                message: format!("function '{name}' not found"),
            }
        })?;

        record.code = code;
        if publish {
            record.version += 1;
        }
        let version = record.version;

        Ok(PublishedVersion {
            version: VersionId::new(version.to_string()),
            arn: Some(arn_for(name.as_str())),
        })
    }
}

#[async_trait]
impl AliasOps for MemoryPlatform {
    async fn create_alias(
        &self,
        function: &FunctionName,
        alias: &AliasName,
        version: &VersionId,
        description: &str,
    ) -> Result<(), PlatformError> {
        let mut inner = self.inner.lock();
        inner.counts.create_alias += 1;

        if !inner.functions.contains_key(function.as_str()) {
            return Err(PlatformError::NotFound {
                message: format!("function '{function}' not found"),
            });
        }

        let key = alias_key(function, alias);
        if inner.aliases.contains_key(&key) {
            return Err(PlatformError::AlreadyExists {
                message: format!("alias '{alias}' already exists on '{function}'"),
            });
        }

        inner.aliases.insert(
            key,
            AliasRecord {
                version: version.clone(),
                description: description.to_string(),
            },
        );
        Ok(())
    }

    async fn update_alias(
        &self,
        function: &FunctionName,
        alias: &AliasName,
        version: &VersionId,
        description: &str,
    ) -> Result<(), PlatformError> {
        let mut inner = self.inner.lock();
        inner.counts.update_alias += 1;

        let record = inner
            .aliases
            .get_mut(&alias_key(function, alias))
            .ok_or_else(|| PlatformError::NotFound {
                message: format!("alias '{alias}' not found on '{function}'"),
            })?;

        record.version = version.clone();
        record.description = description.to_string();
        Ok(())
    }

    async fn get_alias(
        &self,
        function: &FunctionName,
        alias: &AliasName,
    ) -> Result<AliasTarget, PlatformError> {
        let mut inner = self.inner.lock();
        inner.counts.get_alias += 1;

        inner
            .aliases
            .get(&alias_key(function, alias))
            .map(|record| AliasTarget {
                version: record.version.clone(),
                description: record.description.clone(),
            })
            .ok_or_else(|| PlatformError::NotFound {
                message: format!("alias '{alias}' not found on '{function}'"),
            })
    }
}

impl Sealed for MemoryPlatform {}
