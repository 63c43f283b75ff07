//! Domain module
//!
//! Definitions (aggregates and value objects) plus the pure validation
//! services that run over them.

pub mod aggregates;
pub mod services;
pub mod value_objects;

pub use aggregates::*;
pub use value_objects::*;
