pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::http::{router, serve, AppState};
pub use config::ServiceConfig;
pub use core::{
    loader::{load_model, LoadedModel, DEFAULT_MODEL_PATH},
    service::{predict, PredictionService},
};
pub use utils::error::{PredictError, Result};
