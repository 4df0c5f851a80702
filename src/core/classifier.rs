use crate::domain::model::{FeatureVector, FEATURE_COUNT};
use crate::domain::ports::Model;
use crate::utils::error::{PredictError, Result};
use serde::{Deserialize, Serialize};

/// Serialized classifier as written by the offline training step.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ModelArtifact {
    LogisticRegression(LogisticRegression),
    DecisionTree(DecisionTree),
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ArtifactMetadata {
    pub name: Option<String>,
    pub version: Option<String>,
    pub trained_at: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandardScaler {
    pub mean: Vec<f64>,
    pub scale: Vec<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogisticRegression {
    pub coefficients: Vec<f64>,
    pub intercept: f64,
    #[serde(default = "default_threshold")]
    pub threshold: f64,
    #[serde(default)]
    pub scaler: Option<StandardScaler>,
    #[serde(default)]
    pub metadata: Option<ArtifactMetadata>,
}

fn default_threshold() -> f64 {
    0.5
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecisionTree {
    pub nodes: Vec<TreeNode>,
    #[serde(default)]
    pub metadata: Option<ArtifactMetadata>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TreeNode {
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
    Leaf {
        class: i64,
    },
}

fn expect_len(what: &str, actual: usize) -> Result<()> {
    if actual != FEATURE_COUNT {
        return Err(PredictError::inference(format!(
            "{} has {} entries, expected {}",
            what, actual, FEATURE_COUNT
        )));
    }
    Ok(())
}

impl ModelArtifact {
    pub fn metadata(&self) -> Option<&ArtifactMetadata> {
        match self {
            Self::LogisticRegression(m) => m.metadata.as_ref(),
            Self::DecisionTree(m) => m.metadata.as_ref(),
        }
    }
}

impl Model for ModelArtifact {
    fn kind(&self) -> &str {
        match self {
            Self::LogisticRegression(m) => m.kind(),
            Self::DecisionTree(m) => m.kind(),
        }
    }

    fn predict(&self, features: &FeatureVector) -> Result<i64> {
        match self {
            Self::LogisticRegression(m) => m.predict(features),
            Self::DecisionTree(m) => m.predict(features),
        }
    }
}

impl LogisticRegression {
    /// Signed distance to the separating hyperplane, `w·x + b`.
    pub fn decision_function(&self, features: &FeatureVector) -> Result<f64> {
        expect_len("coefficients", self.coefficients.len())?;

        let mut x = *features.values();
        if let Some(scaler) = &self.scaler {
            expect_len("scaler.mean", scaler.mean.len())?;
            expect_len("scaler.scale", scaler.scale.len())?;
            for (i, value) in x.iter_mut().enumerate() {
                let scale = scaler.scale[i];
                // sklearn 對零變異特徵的 scale 記為 1.0
                let scale = if scale == 0.0 { 1.0 } else { scale };
                *value = (*value - scaler.mean[i]) / scale;
            }
        }

        let z = self
            .coefficients
            .iter()
            .zip(x.iter())
            .fold(self.intercept, |acc, (w, v)| acc + w * v);

        if !z.is_finite() {
            return Err(PredictError::inference(format!(
                "decision function is not finite ({})",
                z
            )));
        }

        Ok(z)
    }

    /// Positive-class probability for one row. Labels are decided on the
    /// decision function, not on this value.
    pub fn probability(&self, features: &FeatureVector) -> Result<f64> {
        let z = self.decision_function(features)?;
        Ok(1.0 / (1.0 + (-z).exp()))
    }

    /// Probability threshold mapped to logit space; 0.0 for the default 0.5.
    fn logit_threshold(&self) -> f64 {
        let t = self.threshold;
        (t / (1.0 - t)).ln()
    }
}

impl Model for LogisticRegression {
    fn kind(&self) -> &str {
        "logistic_regression"
    }

    fn predict(&self, features: &FeatureVector) -> Result<i64> {
        // 與 sklearn 一致：只有 decision_function 嚴格大於門檻才判為正類
        let z = self.decision_function(features)?;
        Ok(if z > self.logit_threshold() { 1 } else { 0 })
    }
}

impl Model for DecisionTree {
    fn kind(&self) -> &str {
        "decision_tree"
    }

    fn predict(&self, features: &FeatureVector) -> Result<i64> {
        let mut index = 0;
        // 每一步至少前進一層，超過節點數代表樹中有環
        for _ in 0..=self.nodes.len() {
            let node = self.nodes.get(index).ok_or_else(|| {
                PredictError::inference(format!(
                    "tree node {} does not exist ({} nodes)",
                    index,
                    self.nodes.len()
                ))
            })?;

            match node {
                TreeNode::Leaf { class } => return Ok(*class),
                TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    let value = features.get(*feature).ok_or_else(|| {
                        PredictError::inference(format!(
                            "tree splits on feature {}, expected index below {}",
                            feature, FEATURE_COUNT
                        ))
                    })?;
                    index = if value <= *threshold { *left } else { *right };
                }
            }
        }

        Err(PredictError::inference(
            "decision tree does not terminate in a leaf",
        ))
    }
}
