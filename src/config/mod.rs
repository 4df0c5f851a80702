#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::loader::DEFAULT_MODEL_PATH;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::logger::LogFormat;
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
pub use cli::CliConfig;
pub use toml_config::TomlConfig;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8000;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Effective settings after defaults, the config file and CLI flags are merged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    pub model_path: String,
    pub host: String,
    pub port: u16,
    pub log_format: LogFormat,
    pub log_level: Option<String>,
    pub verbose: bool,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            model_path: DEFAULT_MODEL_PATH.to_string(),
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            log_format: LogFormat::default(),
            log_level: None,
            verbose: false,
        }
    }
}

impl ConfigProvider for ServiceConfig {
    fn model_path(&self) -> &str {
        &self.model_path
    }

    fn host(&self) -> &str {
        &self.host
    }

    fn port(&self) -> u16 {
        self.port
    }
}

impl Validate for ServiceConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("model.path", &self.model_path)?;
        validation::validate_non_empty_string("server.host", &self.host)?;
        validation::validate_port("server.port", self.port)?;
        if let Some(level) = &self.log_level {
            validation::validate_one_of(
                "logging.level",
                &level.to_ascii_lowercase(),
                &LOG_LEVELS,
            )?;
        }
        Ok(())
    }
}
