//! Host record types produced by the discovery pipeline.

use serde::{Deserialize, Serialize};

/// A discovered host together with its resolved address.
///
/// `ip` is empty when resolution produced nothing; `source` is the name of the
/// provider that reported the host.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HostResult {
    pub host: String,
    #[serde(default)]
    pub ip: String,
    #[serde(default)]
    pub source: String,
}

impl HostResult {
    pub fn new(host: impl Into<String>, ip: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            ip: ip.into(),
            source: source.into(),
        }
    }
}

/// A discovered host without address information.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HostEntry {
    pub host: String,
    #[serde(default)]
    pub source: String,
}

impl HostEntry {
    pub fn new(host: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            source: source.into(),
        }
    }
}

impl From<&HostResult> for HostEntry {
    fn from(result: &HostResult) -> Self {
        Self {
            host: result.host.clone(),
            source: result.source.clone(),
        }
    }
}

/// Anything that carries a host name.
///
/// Used by the export path, which only ever looks at the host.
pub trait HasHost {
    fn host(&self) -> &str;
}

impl HasHost for HostResult {
    fn host(&self) -> &str {
        &self.host
    }
}

impl HasHost for HostEntry {
    fn host(&self) -> &str {
        &self.host
    }
}
