use anyhow::Context;
use clap::Parser;
use diabetes_predict::core::ConfigProvider;
use diabetes_predict::utils::error::{ErrorSeverity, PredictError};
use diabetes_predict::utils::{logger, validation::Validate};
use diabetes_predict::adapters::http::api_banner;
use diabetes_predict::{load_model, serve, AppState, CliConfig, PredictionService};

fn exit_code(e: &PredictError) -> i32 {
    match e.severity() {
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    }
}

fn fail(e: PredictError) -> ! {
    tracing::error!(
        "❌ Startup failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(exit_code(&e));
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load configuration: {}", e);
            std::process::exit(exit_code(&e));
        }
    };

    // 先驗證配置，日誌層才不會用到無效的 level
    if let Err(e) = config.validate() {
        fail(e);
    }

    // 初始化日誌
    logger::init_logger(config.log_format, config.verbose, config.log_level.as_deref());

    tracing::info!("🚀 Starting {}", api_banner());
    tracing::debug!("Service config: {:?}", config);

    // 模型只在啟動時載入一次，失敗即中止
    let model = load_model(config.model_path()).unwrap_or_else(|e| fail(e));
    let state = AppState::new(PredictionService::from(model));

    serve(&config.bind_address(), state)
        .await
        .with_context(|| format!("server on {} stopped", config.bind_address()))?;

    tracing::info!("👋 Diabetes Prediction API stopped");
    Ok(())
}
