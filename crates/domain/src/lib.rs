//! blucky domain crate
//!
//! This crate contains the core domain logic following hexagonal architecture:
//! - `model`: Domain entities and value objects
//! - `ports`: Trait definitions for external dependencies (adapters)
//! - `patterns`: URL pattern families used by the link classifier
//! - `usecases`: Application use cases / business logic
//! - `policy`: Input constraints for profiles and links
//! - `share`: Share, explorer and address formatting helpers

pub mod model;
pub mod patterns;
pub mod policy;
pub mod ports;
pub mod share;
pub mod usecases;

pub use model::*;
pub use ports::*;
pub use usecases::classify::classify_link;
pub use usecases::reorder::{ReorderError, apply_swaps, plan_reorder};
