mod api;

use crate::cli::Args;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

pub use api::ApiConfig;

const DEFAULT_API_ENDPOINT: &str = "http://localhost:8080/api/v1";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SessionConfig {
    #[serde(default)]
    pub verbose: Option<bool>,
}

pub struct Config {
    pub api_endpoint: String,
    pub verbose: bool,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct FileConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub session: SessionConfig,
}

impl Config {
    pub fn from_env_and_args(args: &Args) -> Self {
        let file_config = FileConfig::load().unwrap_or_default();

        // API endpoint: CLI args > env var > config file > default
        let api_endpoint = args
            .api_endpoint
            .clone()
            .or_else(|| env::var("SHOP_API_ENDPOINT").ok())
            .or(file_config.api.endpoint)
            .unwrap_or_else(|| DEFAULT_API_ENDPOINT.to_string());

        // Verbose flag: CLI args > env var > config file > default
        let verbose = args.verbose
            || env::var("SHOP_VERBOSE")
                .ok()
                .map(|v| v == "true")
                .or(file_config.session.verbose)
                .unwrap_or(false);

        Config {
            api_endpoint,
            verbose,
        }
    }
}

impl FileConfig {
    /// First existing config file wins; absence of any file is not an error.
    pub fn load() -> Result<Self> {
        for path in Self::get_config_paths() {
            if !path.exists() {
                continue;
            }
            let contents = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {}", path.display()))?;

            let yaml = matches!(
                path.extension().and_then(|s| s.to_str()),
                Some("yaml") | Some("yml")
            );
            let config: FileConfig = if yaml {
                serde_yaml::from_str(&contents).with_context(|| {
                    format!("Failed to parse YAML config file: {}", path.display())
                })?
            } else {
                serde_json::from_str(&contents).with_context(|| {
                    format!("Failed to parse JSON config file: {}", path.display())
                })?
            };
            return Ok(config);
        }

        Ok(FileConfig::default())
    }

    /// Local override in the working directory, then the user config dir.
    pub fn get_config_paths() -> Vec<PathBuf> {
        let mut paths = vec![
            PathBuf::from(".shopfront.yaml"),
            PathBuf::from(".shopfront.yml"),
            PathBuf::from(".shopfront.json"),
        ];

        if let Some(home_dir) = dirs::home_dir() {
            let config_dir = home_dir.join(".config").join("shopfront");
            paths.push(config_dir.join("shopfront.yaml"));
            paths.push(config_dir.join("shopfront.yml"));
            paths.push(config_dir.join("shopfront.json"));
        }

        paths
    }
}
