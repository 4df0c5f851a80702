use crate::core::service::PredictionService;
use crate::domain::model::{HealthResponse, InputRecord, PredictionResponse};
use crate::utils::error::PredictError;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;
use tower_http::trace::TraceLayer;

pub const HEALTH_MESSAGE: &str = "Diabetes Prediction API is running";

pub const API_TITLE: &str = "Diabetes Prediction API";
pub const API_DESCRIPTION: &str = "An API to predict diabetes based on health data.";
pub const API_VERSION: &str = "1.0.0";

/// One-line identity logged at startup.
pub fn api_banner() -> String {
    format!("{} v{}: {}", API_TITLE, API_VERSION, API_DESCRIPTION)
}

#[derive(Clone)]
pub struct AppState {
    pub service: PredictionService,
}

impl AppState {
    pub fn new(service: PredictionService) -> Self {
        Self { service }
    }
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    detail: String,
}

/// Request-level failures and the status each one maps to.
#[derive(Debug)]
pub enum ApiError {
    Rejected {
        status: StatusCode,
        error: PredictError,
    },
    Internal(PredictError),
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Rejected {
            status: rejection.status(),
            error: PredictError::ValidationFailure {
                message: rejection.body_text(),
            },
        }
    }
}

impl From<PredictError> for ApiError {
    fn from(err: PredictError) -> Self {
        Self::Internal(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            Self::Rejected { status, error } => {
                tracing::debug!("Rejected prediction request: {}", error);
                let detail = match error {
                    PredictError::ValidationFailure { message } => message,
                    other => other.to_string(),
                };
                (status, detail)
            }
            Self::Internal(err) => {
                tracing::error!(
                    "❌ Prediction failed: {} (Category: {:?}, Severity: {:?})",
                    err,
                    err.category(),
                    err.severity()
                );
                (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
            }
        };

        (status, Json(ErrorBody { detail })).into_response()
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(read_root))
        .route("/predict", post(predict))
        .fallback(not_found)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

pub async fn serve(addr: &str, state: AppState) -> Result<(), PredictError> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| PredictError::Server {
            message: format!("failed to bind {}: {}", addr, e),
        })?;

    let local_addr = listener.local_addr()?;
    tracing::info!("🌐 Listening on http://{}", local_addr);
    tracing::info!("🔧 Endpoints: GET / (health), POST /predict");

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| PredictError::Server {
            message: e.to_string(),
        })
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("🛑 Shutdown signal received");
}

async fn read_root() -> Json<HealthResponse> {
    Json(HealthResponse {
        message: HEALTH_MESSAGE.to_string(),
    })
}

async fn predict(
    State(state): State<AppState>,
    payload: Result<Json<InputRecord>, JsonRejection>,
) -> Result<Json<PredictionResponse>, ApiError> {
    let Json(input) = payload?;
    let diabetic = state.service.predict(&input)?;
    Ok(Json(PredictionResponse { diabetic }))
}

async fn not_found() -> (StatusCode, Json<ErrorBody>) {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorBody {
            detail: "Not Found".to_string(),
        }),
    )
}
