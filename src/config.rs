//! Configuration handling for the TUI

use crate::cep::DEFAULT_BASE_URL;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable overriding the CEP service address
pub const CEP_URL_ENV: &str = "FORMULARIO_CEP_URL";

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TuiConfig {
    /// Base URL of the ViaCEP-compatible lookup service
    pub cep_service_url: Option<String>,
    /// Where to write the log file
    pub log_file: Option<PathBuf>,
}

impl TuiConfig {
    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("br", "ads", "formulario-ads")
    }

    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from the default location
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from `path`; a missing file yields the defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let config: TuiConfig = serde_json::from_str(&content)
            .with_context(|| format!("invalid configuration in {}", path.display()))?;
        Ok(config)
    }

    /// CEP service address: environment, then config file, then ViaCEP
    pub fn cep_service_url(&self) -> String {
        self.resolve_cep_service_url(std::env::var(CEP_URL_ENV).ok())
    }

    fn resolve_cep_service_url(&self, env_value: Option<String>) -> String {
        env_value
            .filter(|url| !url.trim().is_empty())
            .or_else(|| self.cep_service_url.clone())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
    }

    /// Log file path: config file, then the platform data directory
    pub fn log_file(&self) -> Option<PathBuf> {
        self.log_file.clone().or_else(|| {
            Self::project_dirs().map(|dirs| dirs.data_dir().join("formulario-ads.log"))
        })
    }
}
