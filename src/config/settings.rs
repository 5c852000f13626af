//! Layered configuration: YAML file, overridden by environment variables,
//! overridden by CLI flags, assembled into a single `Settings` struct at
//! startup.

use std::path::PathBuf;

use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct HttpSettings {
    #[serde(default = "default_http_address")]
    pub address: String,
    pub password: Option<String>,
}

fn default_http_address() -> String {
    "localhost:9980".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StdoutLogSettings {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
    #[serde(default = "default_true")]
    pub enable_ansi: bool,
}

impl Default for StdoutLogSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            level: default_log_level(),
            format: default_log_format(),
            enable_ansi: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileLogSettings {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
    pub path: Option<PathBuf>,
}

impl Default for FileLogSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            level: default_log_level(),
            format: default_log_format(),
            path: None,
        }
    }
}

fn default_true() -> bool {
    true
}
fn default_log_level() -> String {
    "info".to_string()
}
fn default_log_format() -> String {
    "human".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct LogSettings {
    #[serde(default)]
    pub stdout: StdoutLogSettings,
    #[serde(default)]
    pub file: FileLogSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Settings {
    /// If present at startup, an auto-unlock is attempted with this secret.
    pub secret: Option<String>,
    #[serde(default)]
    pub http: HttpSettings,
    pub directory: Option<PathBuf>,
    #[serde(default)]
    pub log: LogSettings,
    /// Base URL of the external chain-tip collaborator consulted when a
    /// `/sign` request omits both `state` and `network`. Not named by the
    /// interface contract (`TipState` is specified as an opaque
    /// capability); when unset, a static genesis-height state is used and
    /// such requests resolve as if no hardfork has occurred yet.
    pub tip_url: Option<String>,
}

#[derive(Debug, Parser)]
#[command(name = "vaultd", about = "Offline Sia signing vault")]
pub struct Cli {
    /// Path to a YAML config file. Defaults to VAULTD_CONFIG_FILE or none.
    #[arg(long, env = "VAULTD_CONFIG_FILE")]
    pub config_file: Option<PathBuf>,

    #[arg(long, env = "VAULTD_SECRET")]
    pub secret: Option<String>,

    #[arg(long)]
    pub http_address: Option<String>,

    #[arg(long, env = "VAULTD_API_PASSWORD")]
    pub http_password: Option<String>,

    #[arg(long, env = "VAULTD_DATA_DIR")]
    pub directory: Option<PathBuf>,

    /// Base URL of a node exposing `/consensus/state`, used to resolve
    /// sign requests that omit both `state` and `network`. If unset, such
    /// requests resolve against a static pre-hardfork consensus state.
    #[arg(long, env = "VAULTD_CONSENSUS_URL")]
    pub tip_url: Option<String>,
}

impl Settings {
    /// Load from an optional YAML file, then apply environment/CLI overrides
    /// captured by `Cli`. Fields present on `cli` always win.
    pub fn load(cli: &Cli) -> Result<Self, SettingsError> {
        let mut settings = match &cli.config_file {
            Some(path) => {
                let text = std::fs::read_to_string(path)
                    .map_err(|e| SettingsError::Io(path.clone(), e))?;
                serde_yaml::from_str(&text).map_err(SettingsError::Yaml)?
            }
            None => Settings::default(),
        };

        if let Some(secret) = &cli.secret {
            settings.secret = Some(secret.clone());
        }
        if let Some(address) = &cli.http_address {
            settings.http.address = address.clone();
        }
        if let Some(password) = &cli.http_password {
            settings.http.password = Some(password.clone());
        }
        if let Some(dir) = &cli.directory {
            settings.directory = Some(dir.clone());
        }
        if let Some(tip_url) = &cli.tip_url {
            settings.tip_url = Some(tip_url.clone());
        }

        Ok(settings)
    }

    pub fn data_dir(&self) -> PathBuf {
        self.directory
            .clone()
            .unwrap_or_else(|| PathBuf::from("."))
    }

    pub fn database_path(&self) -> PathBuf {
        self.data_dir().join("vaultd.sqlite3")
    }

    pub fn log_path(&self) -> PathBuf {
        self.log
            .file
            .path
            .clone()
            .unwrap_or_else(|| self.data_dir().join("vaultd.log"))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("failed to read config file {0}: {1}")]
    Io(PathBuf, std::io::Error),
    #[error("failed to parse config file: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn database_path_joins_data_dir() {
        let settings = Settings::default();
        assert_eq!(settings.database_path(), PathBuf::from("./vaultd.sqlite3"));
    }

    #[test]
    fn default_http_address_matches_spec() {
        let settings = Settings::default();
        assert_eq!(settings.http.address, "localhost:9980");
    }
}
