//! Ports layer
//!
//! Hexagonal architecture boundaries: inbound use cases, outbound
//! persistence and event publishing.

pub mod inbound;
pub mod outbound;
