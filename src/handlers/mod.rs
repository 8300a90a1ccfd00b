//! # HTTP Request Handlers
//!
//! ## Available Handlers
//!
//! - **Health Check** (`health_check`) - Liveness probe
//! - **Ping** (`ping`) - Trace record creation and publishing

mod health_check;
mod ping;

pub use health_check::*;
pub use ping::*;
