//! # Business Logic Services
//!
//! ## Available Services
//!
//! - **Publisher** (`publisher`) - Delivery of trace records to the message broker

pub mod publisher;
