//! # Service D - Trace Publishing Service
//!
//! Answers liveness probes and, on each ping, publishes a trace record to a
//! RabbitMQ queue.
//!
//! ## Modules
//!
//! - [`handlers`] - HTTP request handlers for the `/api` endpoints
//! - [`models`] - Trace record and shared application state
//! - [`services`] - Broker publishing
//! - [`config`] - Settings read from the environment
//! - [`telemetry`] - Structured logging setup
//! - [`utils`] - Constants

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod services;
pub mod telemetry;
pub mod utils;

use std::sync::Arc;

use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::{PublisherMode, Settings};
use crate::handlers::{health_check, ping};
use crate::models::AppState;
use crate::services::publisher::{DirectPublisher, PooledPublisher, PublishError, Publisher};

/// Creates an Axum router with the publisher selected by `settings`.
///
/// # Errors
///
/// Fails only in [`PublisherMode::Pooled`] when `RABBITMQ_CONN` is unset.
pub fn app(settings: &Settings) -> Result<Router, PublishError> {
    let publisher: Arc<dyn Publisher> = match settings.publisher_mode {
        PublisherMode::Direct => {
            info!("Using [DirectPublisher] (connection per publish)");
            Arc::new(DirectPublisher::from_env())
        }
        PublisherMode::Pooled => {
            info!("Using [PooledPublisher] (shared connection)");
            Arc::new(PooledPublisher::from_env()?)
        }
    };

    Ok(app_with_publisher(publisher))
}

/// Creates an Axum router with application routes and state.
///
/// All routes live under `/api`:
///
/// - `GET /api/ping` - emit and publish a trace record
/// - `GET /api/health` - liveness probe
pub fn app_with_publisher(publisher: Arc<dyn Publisher>) -> Router {
    let state = Arc::new(AppState::new(publisher));

    let api_routes = Router::new()
        .route("/ping", get(ping))
        .route("/health", get(health_check));

    Router::new()
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
