//! Clientele Core - Domain models and shared facilities
//!
//! This crate provides the foundational pieces shared by the store and CLI:
//! - Client and Order domain models
//! - The canonical structured error facility
//! - Logging initialization

pub mod errors;
pub mod logging_facility;
pub mod model;

// Re-export commonly used types
pub use errors::{ClienteleError, ClienteleErrorKind, Result};
pub use model::{Client, Order};
