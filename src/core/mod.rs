pub mod classifier;
pub mod loader;
pub mod service;

pub use crate::domain::model::{FeatureVector, InputRecord, PredictionResponse};
pub use crate::domain::ports::{ConfigProvider, Model};
pub use crate::utils::error::Result;
