use thiserror::Error;

#[derive(Error, Debug)]
pub enum PredictError {
    #[error("Model file not found at {path}")]
    ArtifactNotFound { path: String },

    #[error("Model artifact could not be decoded: {0}")]
    ArtifactDecode(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Inference failed: {message}")]
    InferenceFailure { message: String },

    #[error("Validation error: {message}")]
    ValidationFailure { message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}': {value} ({reason})")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Server error: {message}")]
    Server { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Startup,
    Request,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl PredictError {
    pub fn inference(message: impl Into<String>) -> Self {
        Self::InferenceFailure {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ArtifactNotFound { .. } | Self::ArtifactDecode(_) => ErrorCategory::Startup,
            Self::InferenceFailure { .. } | Self::ValidationFailure { .. } => {
                ErrorCategory::Request
            }
            Self::ConfigError { .. } | Self::InvalidConfigValue { .. } => {
                ErrorCategory::Configuration
            }
            Self::Io(_) | Self::Server { .. } => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::ValidationFailure { .. } => ErrorSeverity::Medium,
            Self::InferenceFailure { .. }
            | Self::ConfigError { .. }
            | Self::InvalidConfigValue { .. } => ErrorSeverity::High,
            Self::ArtifactNotFound { .. }
            | Self::ArtifactDecode(_)
            | Self::Io(_)
            | Self::Server { .. } => ErrorSeverity::Critical,
        }
    }

    /// 啟動期錯誤無法恢復，程序必須中止
    pub fn is_fatal(&self) -> bool {
        self.severity() == ErrorSeverity::Critical
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            Self::ArtifactNotFound { path } => format!(
                "Please train the model first and write the artifact to {}, then restart the service",
                path
            ),
            Self::ArtifactDecode(_) => {
                "Re-export the model artifact; it must be the JSON produced by the training step"
                    .to_string()
            }
            Self::Io(_) => "Check file permissions and that the path is readable".to_string(),
            Self::InferenceFailure { .. } => {
                "The model artifact does not match the five expected features; re-train or replace it"
                    .to_string()
            }
            Self::ValidationFailure { .. } => {
                "Send all five fields (Pregnancies, Glucose, BloodPressure, BMI, Age) as numbers"
                    .to_string()
            }
            Self::ConfigError { .. } | Self::InvalidConfigValue { .. } => {
                "Fix the configuration file or command line flags".to_string()
            }
            Self::Server { .. } => "Check that the bind address is free and valid".to_string(),
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::ArtifactNotFound { path } => format!("Model file not found at {}", path),
            Self::ArtifactDecode(_) => "Model file is corrupted or in an unknown format".to_string(),
            Self::InferenceFailure { .. } => "Prediction failed inside the model".to_string(),
            Self::ValidationFailure { message } => format!("Invalid input: {}", message),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, PredictError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_artifact_is_fatal() {
        let err = PredictError::ArtifactNotFound {
            path: "diabetes_model.json".to_string(),
        };
        assert!(err.is_fatal());
        assert_eq!(err.category(), ErrorCategory::Startup);
        assert!(err.recovery_suggestion().contains("train the model first"));
    }

    #[test]
    fn test_inference_failure_is_per_request() {
        let err = PredictError::inference("expected 5 coefficients, found 4");
        assert!(!err.is_fatal());
        assert_eq!(err.category(), ErrorCategory::Request);
        assert_eq!(
            err.to_string(),
            "Inference failed: expected 5 coefficients, found 4"
        );
    }
}
