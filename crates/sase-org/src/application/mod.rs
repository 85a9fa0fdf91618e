//! Application layer
//!
//! Orchestrates use cases: validates raw input into primitives, applies the
//! tree rules, persists and publishes events.

pub mod commands;
pub mod dto;

pub use commands::{DepartmentService, LocationService, PositionService};
pub use dto::*;
