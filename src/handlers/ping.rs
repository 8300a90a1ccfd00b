//! # Ping Handler
//!
//! Creates a trace record, returns it to the caller and publishes it to the
//! `service-d` queue.

use std::sync::Arc;

use axum::{
    extract::State,
    http::{StatusCode, header},
    response::IntoResponse,
};
use tracing::{debug, info, instrument};

use crate::error::AppResult;
use crate::models::{AppState, Trace};
use crate::utils::constant::TRACE_QUEUE;

/// Emits a new trace record.
///
/// GET /api/ping
///
/// The holding list is reset to the new record and serialized as the response
/// body. The record alone is then published to the broker. The response is
/// only sent once the publish has completed.
///
/// # Returns
///
/// - `200 OK` with a JSON array holding the one record
/// - `500 Internal Server Error` - Serialization or any broker step failed
#[instrument(skip_all, fields(trace_id))]
pub async fn ping(State(state): State<Arc<AppState>>) -> AppResult<impl IntoResponse> {
    let trace = Trace::ping();
    tracing::Span::current().record("trace_id", trace.id());
    debug!("Processing ping request");

    let traces = state.replace_traces(trace.clone()).await;
    let body = serde_json::to_vec(&traces)?;

    let message = serde_json::to_vec(&trace)?;
    state.publisher.publish(TRACE_QUEUE, &message).await?;

    info!(queue = TRACE_QUEUE, "Ping trace published");
    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        body,
    ))
}
