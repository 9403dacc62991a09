//! Runtime orchestration of the pattern catalog.
//!
//! # Main Components
//!
//! - [`PatternSystem`] - Owns the standard catalog and runs demos inside tracing spans
//! - [`setup_tracing`] - Initializes the tracing/logging infrastructure

pub mod pattern_system;
pub mod tracing;

pub use pattern_system::*;
pub use tracing::*;
