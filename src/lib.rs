pub mod client;
pub mod config;
pub mod db;
pub mod errors;
pub mod http;
mod middleware;
pub mod models;
pub mod service;
pub mod state;
pub mod validation;

use std::sync::Arc;

use axum::{Router, http::HeaderValue};
use bb8::Pool;
use bb8_redis::RedisConnectionManager;
use tower_http::trace::TraceLayer;

use crate::{
    config::Config,
    db::{FeedbackStore, MemoryFeedbackStore, RedisFeedbackStore},
    errors::AppError,
    middleware::cors_layer,
    service::FeedbackService,
    state::AppState,
};

pub fn create_app(state: AppState, allowed_origins: Vec<HeaderValue>) -> Router {
    Router::new()
        .merge(http::create_http_routes(state))
        .fallback(|| async { (axum::http::StatusCode::NOT_FOUND, "404 Not Found") })
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(allowed_origins))
}

async fn build_store(config: &Config) -> Result<Arc<dyn FeedbackStore>, AppError> {
    match &config.redis_url {
        Some(url) => {
            let manager = RedisConnectionManager::new(url.as_str())?;
            let redis_pool = Pool::builder().build(manager).await?;
            tracing::info!("Using Redis feedback store");
            Ok(Arc::new(RedisFeedbackStore::new(redis_pool)))
        }
        None => Ok(Arc::new(MemoryFeedbackStore::new())),
    }
}

pub async fn start_server() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = Config::load()?;
    let store = build_store(&config).await?;
    let state = AppState {
        feedback: FeedbackService::new(store),
    };

    let app = create_app(state, config.allowed_origins);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port)).await?;
    tracing::info!("Feedback server running at http://{}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
