//! Configuration handling for the TUI

use crate::lifecycle::DEFAULT_ENDPOINT;
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// Environment variable that overrides the inspection endpoint
pub const ENDPOINT_ENV: &str = "INSPECT_ENDPOINT";

const DEFAULT_DISPLAY_DELAY_MS: u64 = 1500;
const DEFAULT_NOTICE_DELAY_MS: u64 = 2000;
const DEFAULT_SIMULATED_LATENCY_MS: u64 = 1500;
const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 10_000;

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TuiConfig {
    /// Inspection form endpoint
    pub endpoint: Option<String>,
    /// How long the success/error state stays visible
    pub display_delay_ms: Option<u64>,
    /// How long the "fill required fields" notice stays visible
    pub notice_delay_ms: Option<u64>,
    /// Simulated AMT submit latency
    pub simulated_latency_ms: Option<u64>,
    /// HTTP request timeout
    pub request_timeout_ms: Option<u64>,
}

impl TuiConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        project_dirs().map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file, then apply environment overrides
    pub fn load() -> Result<Self> {
        let config: Self = match Self::config_path() {
            Some(path) if path.exists() => {
                let content = fs::read_to_string(&path)?;
                serde_json::from_str(&content)?
            }
            _ => Self::default(),
        };

        Ok(config.apply_env(std::env::var(ENDPOINT_ENV).ok()))
    }

    /// Apply the `INSPECT_ENDPOINT` value, if set, over the file's endpoint
    pub fn apply_env(mut self, endpoint: Option<String>) -> Self {
        if let Some(endpoint) = endpoint {
            self.endpoint = Some(endpoint);
        }
        self
    }

    pub fn endpoint(&self) -> &str {
        self.endpoint
            .as_deref()
            .filter(|e| !e.trim().is_empty())
            .unwrap_or(DEFAULT_ENDPOINT)
    }

    pub fn display_delay(&self) -> Duration {
        Duration::from_millis(self.display_delay_ms.unwrap_or(DEFAULT_DISPLAY_DELAY_MS))
    }

    pub fn notice_delay(&self) -> Duration {
        Duration::from_millis(self.notice_delay_ms.unwrap_or(DEFAULT_NOTICE_DELAY_MS))
    }

    pub fn simulated_latency(&self) -> Duration {
        Duration::from_millis(
            self.simulated_latency_ms
                .unwrap_or(DEFAULT_SIMULATED_LATENCY_MS),
        )
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms.unwrap_or(DEFAULT_REQUEST_TIMEOUT_MS))
    }
}

/// Platform directories for config and log files
pub fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("io", "inspect", "inspect-tui")
}
