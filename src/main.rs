//! Wiring & DI. Entry point: bootstrap adapters, inject into services, serve HTTP.
//! No business logic here; the advice pipeline lives in AdviceService.

use dotenv::dotenv;
use sommelier_gateway::adapters::http::{AppState, build_router};
use sommelier_gateway::ports::AdvicePort;
use sommelier_gateway::shared::{AppConfig, build_provider};
use sommelier_gateway::usecases::{AdviceGenerator, AdviceService, TopicClassifier};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let env_loaded = dotenv();
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    match &env_loaded {
        Ok(path) => info!(path = %path.display(), "loaded .env"),
        Err(_) => info!(cwd = %cwd.display(), "no .env found (check CWD)"),
    }

    let cfg = AppConfig::load()?;
    let persona = cfg.persona().map_err(|e| anyhow::anyhow!("{}", e))?;
    let cors = cfg.cors_policy().map_err(|e| anyhow::anyhow!("{}", e))?;

    // --- Provider: built once, shared read-only by every request ---
    let ai = build_provider(&cfg)?.into_port();

    // --- Services ---
    let classifier = if cfg.classification_enabled() {
        Some(TopicClassifier::new(Arc::clone(&ai)))
    } else {
        None
    };
    info!(
        persona = %persona.kind,
        temperature = ?persona.temperature,
        classification = classifier.is_some(),
        "advice pipeline configured"
    );
    let advice: Arc<dyn AdvicePort> = Arc::new(AdviceService::new(
        classifier,
        AdviceGenerator::new(Arc::clone(&ai), persona),
        cfg.fallback_advice_or_default(),
    ));

    info!(cors = ?cors, "CORS policy for /ask");
    let app = build_router(AppState::new(advice, cors));

    // --- Serve ---
    let addr = cfg.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| anyhow::anyhow!("bind {}: {}", addr, e))?;
    info!(addr = %addr, "sommelier gateway listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("sommelier gateway stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for Ctrl-C; shutdown signal disabled");
        std::future::pending::<()>().await;
    }
    info!("shutdown requested");
}
