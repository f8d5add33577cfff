//! Papertrade Shared Library
//!
//! This crate contains the wire types, domain enums, and validation
//! helpers shared between the backend and API consumers.

pub mod models;
pub mod orders;
pub mod types;
pub mod validation;

// Re-export commonly used items
pub use models::*;
pub use orders::{OrderCreateInput, OrderSide, OrderType};
pub use types::*;
