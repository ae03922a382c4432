//! Process configuration from environment variables.
//!
//! - `STOCKWATCH_ADDR`: bind address (default `0.0.0.0:8080`)
//! - `STOCKWATCH_POLICY_FILE`: optional JSON alert policy
//! - `STOCKWATCH_DATA_FILE`: optional JSON data fixture

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use anyhow::Context;

use stockwatch_alerts::AlertPolicy;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub bind_addr: SocketAddr,
    pub policy: AlertPolicy,
    pub data_file: Option<PathBuf>,
}

impl ApiConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let addr = lookup("STOCKWATCH_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr: SocketAddr = addr
            .parse()
            .with_context(|| format!("invalid STOCKWATCH_ADDR: {addr}"))?;

        let policy = match lookup("STOCKWATCH_POLICY_FILE") {
            Some(path) => load_policy(Path::new(&path))?,
            None => AlertPolicy::default(),
        };

        Ok(Self {
            bind_addr,
            policy,
            data_file: lookup("STOCKWATCH_DATA_FILE").map(PathBuf::from),
        })
    }
}

/// Read an [`AlertPolicy`] from a JSON file. Missing fields keep their defaults.
pub fn load_policy(path: &Path) -> anyhow::Result<AlertPolicy> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read policy file {}", path.display()))?;
    let policy = serde_json::from_str(&raw)
        .with_context(|| format!("invalid policy file {}", path.display()))?;
    Ok(policy)
}
