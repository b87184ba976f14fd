use clap::Parser;
use std::path::PathBuf;

use crate::config::{Config, ConfigError};

/// Terminal random quote machine.
#[derive(Debug, Parser)]
#[command(name = "quote-machine", version)]
pub struct Args {
    /// Config file (default: platform config dir/quote-machine/config.toml).
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Quote source URL, overriding the config file.
    #[arg(long, value_name = "URL")]
    pub endpoint: Option<String>,

    /// Request timeout in seconds, overriding the config file.
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Seed for reproducible quote selection.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Log file (default: platform data dir/quote-machine/quote-machine.log).
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Args {
    /// Load the config file and apply command-line overrides.
    pub fn resolve_config(&self) -> Result<Config, ConfigError> {
        let path = self.config.clone().unwrap_or_else(Config::config_path);
        let mut config = Config::load_from(&path)?;
        self.apply(&mut config);
        config.validate()?;
        Ok(config)
    }

    pub fn apply(&self, config: &mut Config) {
        if let Some(endpoint) = &self.endpoint {
            config.source.endpoint = endpoint.clone();
        }
        if let Some(timeout) = self.timeout {
            config.source.request_timeout_seconds = timeout;
        }
    }
}
