//! # Utility Modules
//!
//! - **Constants** (`constant`) - Application-wide names and fixed values

pub mod constant;
