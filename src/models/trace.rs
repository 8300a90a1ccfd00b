//! # Trace Record
//!
//! The event emitted on every ping. It is written to the HTTP caller and
//! published to the broker as JSON, with empty fields left out of the
//! serialized form.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::utils::constant::{GREETING, SERVICE_NAME};

/// A single trace event. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trace {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    id: String,
    #[serde(rename = "service", default, skip_serializing_if = "String::is_empty")]
    service_name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    greeting: String,
    #[serde(
        rename = "created",
        default,
        skip_serializing_if = "Option::is_none",
        with = "time::serde::rfc3339::option"
    )]
    created_at: Option<OffsetDateTime>,
}

impl Trace {
    /// Builds a record with a fresh v4 id and the current local time.
    pub fn new(service_name: impl Into<String>, greeting: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            service_name: service_name.into(),
            greeting: greeting.into(),
            created_at: Some(now_local()),
        }
    }

    /// The record this service emits for `GET /api/ping`.
    #[inline]
    pub fn ping() -> Self {
        Self::new(SERVICE_NAME, GREETING)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn service_name(&self) -> &str {
        &self.service_name
    }

    pub fn greeting(&self) -> &str {
        &self.greeting
    }

    pub fn created_at(&self) -> Option<OffsetDateTime> {
        self.created_at
    }
}

// The local offset is unavailable on some platforms once the runtime has
// spawned threads; UTC is used then.
fn now_local() -> OffsetDateTime {
    OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc())
}
