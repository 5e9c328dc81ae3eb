/*
[INPUT]:  YAML configuration file and ALLCOIN_* environment variables
[OUTPUT]: Parsed CLI configuration (credentials + client settings)
[POS]:    Configuration layer - client setup
[UPDATE]: When adding new configuration options
*/

use allcoin_api::{ClientConfig, Credentials};
use anyhow::{Context, bail};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const API_KEY_ENV: &str = "ALLCOIN_API_KEY";
pub const API_SECRET_ENV: &str = "ALLCOIN_API_SECRET";

/// Top-level configuration for the CLI
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CliConfig {
    /// API key used for signed endpoints
    #[serde(default)]
    pub api_key: Option<String>,
    /// API secret used for signing
    #[serde(default)]
    pub api_secret: Option<String>,
    /// HTTP client settings
    #[serde(default)]
    pub client: ClientConfig,
}

impl CliConfig {
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("read config {}", path.display()))?;
        let config: Self = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Override credentials from the process environment
    pub fn apply_env(&mut self) {
        self.apply_env_with(|name| std::env::var(name).ok());
    }

    pub fn apply_env_with(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(key) = lookup(API_KEY_ENV).filter(|v| !v.is_empty()) {
            self.api_key = Some(key);
        }
        if let Some(secret) = lookup(API_SECRET_ENV).filter(|v| !v.is_empty()) {
            self.api_secret = Some(secret);
        }
    }

    pub fn has_credentials(&self) -> bool {
        self.api_key.is_some() && self.api_secret.is_some()
    }

    /// Credentials for the client; empty when not configured
    pub fn credentials(&self) -> Credentials {
        Credentials::new(
            self.api_key.clone().unwrap_or_default(),
            self.api_secret.clone().unwrap_or_default(),
        )
    }

    /// Credentials that must be present for signed endpoints
    pub fn require_credentials(&self) -> anyhow::Result<Credentials> {
        if !self.has_credentials() {
            bail!("signed endpoint requires api_key and api_secret (config file or {API_KEY_ENV}/{API_SECRET_ENV})");
        }
        Ok(self.credentials())
    }
}
