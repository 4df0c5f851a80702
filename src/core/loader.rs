use crate::core::classifier::ModelArtifact;
use crate::domain::ports::Model;
use crate::utils::error::{PredictError, Result};
use std::path::Path;
use std::sync::Arc;

pub const DEFAULT_MODEL_PATH: &str = "diabetes_model.json";

/// Read-only handle to the model loaded at startup.
#[derive(Clone)]
pub struct LoadedModel {
    model: Arc<dyn Model>,
}

impl LoadedModel {
    pub fn new(model: Arc<dyn Model>) -> Self {
        Self { model }
    }

    pub fn kind(&self) -> &str {
        self.model.kind()
    }

    pub fn shared(&self) -> Arc<dyn Model> {
        Arc::clone(&self.model)
    }
}

impl std::fmt::Debug for LoadedModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoadedModel")
            .field("kind", &self.kind())
            .finish()
    }
}

/// 從磁碟載入已訓練的模型，檔案不存在時直接回報 ArtifactNotFound
pub fn load_model<P: AsRef<Path>>(path: P) -> Result<LoadedModel> {
    let path = path.as_ref();

    let content = match std::fs::read(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::error!("❌ Model file not found at {}", path.display());
            return Err(PredictError::ArtifactNotFound {
                path: path.display().to_string(),
            });
        }
        Err(e) => return Err(PredictError::Io(e)),
    };

    let artifact: ModelArtifact = serde_json::from_slice(&content)?;

    match artifact.metadata() {
        Some(meta) => tracing::info!(
            "✅ Model loaded successfully from {} (kind: {}, name: {}, version: {})",
            path.display(),
            artifact.kind(),
            meta.name.as_deref().unwrap_or("unnamed"),
            meta.version.as_deref().unwrap_or("unknown")
        ),
        None => tracing::info!(
            "✅ Model loaded successfully from {} (kind: {})",
            path.display(),
            artifact.kind()
        ),
    }

    Ok(LoadedModel::new(Arc::new(artifact)))
}
