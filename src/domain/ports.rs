use crate::domain::model::FeatureVector;
use crate::utils::error::Result;

/// A trained binary classifier: feature vector in, class label out.
pub trait Model: Send + Sync {
    /// Algorithm family, for logs.
    fn kind(&self) -> &str;

    fn predict(&self, features: &FeatureVector) -> Result<i64>;
}

pub trait ConfigProvider: Send + Sync {
    fn model_path(&self) -> &str;
    fn host(&self) -> &str;
    fn port(&self) -> u16;

    fn bind_address(&self) -> String {
        format!("{}:{}", self.host(), self.port())
    }
}
