use crate::config::{ServiceConfig, TomlConfig};
use crate::utils::error::Result;
use crate::utils::logger::LogFormat;
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "diabetes-predict")]
#[command(about = "Diabetes Prediction API: scores health measurements with a pre-trained model")]
pub struct CliConfig {
    /// Path to the trained model artifact
    #[arg(long)]
    pub model_path: Option<String>,

    #[arg(long)]
    pub host: Option<String>,

    #[arg(long)]
    pub port: Option<u16>,

    /// Optional TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(long, value_enum)]
    pub log_format: Option<LogFormat>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// 合併預設值、設定檔與命令列參數，命令列優先
    pub fn resolve(&self) -> Result<ServiceConfig> {
        let mut config = match &self.config {
            Some(path) => TomlConfig::from_file(path)?.into_service_config(),
            None => ServiceConfig::default(),
        };

        if let Some(model_path) = &self.model_path {
            config.model_path = model_path.clone();
        }
        if let Some(host) = &self.host {
            config.host = host.clone();
        }
        if let Some(port) = self.port {
            config.port = port;
        }
        if let Some(format) = self.log_format {
            config.log_format = format;
        }
        config.verbose = self.verbose;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults_without_flags() {
        let cli = CliConfig::parse_from(["diabetes-predict"]);
        let config = cli.resolve().unwrap();

        assert_eq!(config.model_path, "diabetes_model.json");
        assert_eq!(config.port, 8000);
        assert!(!config.verbose);
    }

    #[test]
    fn test_flags_override_config_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"[server]\nhost = \"0.0.0.0\"\nport = 9000\n[model]\npath = \"from_file.json\"\n")
            .unwrap();
        let path = file.path().to_str().unwrap().to_string();

        let cli = CliConfig::parse_from([
            "diabetes-predict",
            "--config",
            path.as_str(),
            "--port",
            "9100",
            "--log-format",
            "json",
        ]);
        let config = cli.resolve().unwrap();

        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 9100);
        assert_eq!(config.model_path, "from_file.json");
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn test_missing_config_file() {
        let cli = CliConfig::parse_from(["diabetes-predict", "--config", "/nonexistent/service.toml"]);
        assert!(cli.resolve().is_err());
    }
}
