//! # Health Check Handler
//!
//! Liveness endpoint for load balancers and orchestrators. It touches neither
//! the holding list nor the broker.

use axum::{
    http::{StatusCode, header},
    response::IntoResponse,
};
use tracing::{debug, instrument};

use crate::utils::constant::{HEALTH_BODY, HEALTH_CONTENT_TYPE};

/// Health check endpoint.
///
/// GET /api/health
///
/// # Returns
///
/// Always `200 OK` with the body `{"alive": true}`.
#[instrument]
pub async fn health_check() -> impl IntoResponse {
    debug!("Health check endpoint accessed");
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, HEALTH_CONTENT_TYPE)],
        HEALTH_BODY,
    )
}
