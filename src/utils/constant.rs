//! # Application Constants
//!
//! Fixed identity, routing and configuration names used across service-d.

/// Name this instance reports in every trace record.
pub const SERVICE_NAME: &str = "Service-D";

/// Greeting carried by every trace record.
pub const GREETING: &str = "Shalom, from Service-D!";

/// Queue the ping handler publishes to, via the default exchange.
pub const TRACE_QUEUE: &str = "service-d";

/// Content type set on published messages.
pub const MESSAGE_CONTENT_TYPE: &str = "application/json";

/// Body returned by the health check.
pub const HEALTH_BODY: &str = "{\"alive\": true}";

/// Content type of the health check response.
pub const HEALTH_CONTENT_TYPE: &str = "application/json; charset=utf-8";

/// Env variable holding the AMQP connection string.
pub const RABBITMQ_CONN_VAR: &str = "RABBITMQ_CONN";

/// Env variable overriding the listen address.
pub const LISTEN_ADDR_VAR: &str = "LISTEN_ADDR";

/// Env variable selecting the publisher implementation (`direct` or `pooled`).
pub const PUBLISHER_MODE_VAR: &str = "PUBLISHER_MODE";

/// Address the server binds when `LISTEN_ADDR` is unset.
pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:80";
