//! # Framework Errors
//!
//! This module defines the common error type shared by every demo and by the runner.
//! Pattern modules with their own failure modes (the iterator's bounds check, the shape
//! factory's unknown input) keep a dedicated error enum next to the pattern and convert
//! into [`DemoError`] through `#[from]`.

use crate::behavioral::iterator::IteratorError;
use crate::creational::factory::FactoryError;

/// Errors that can occur while running a demo or managing the catalog.
#[derive(Debug, thiserror::Error)]
pub enum DemoError {
    #[error("Console write failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("Console formatting failed")]
    Format(#[from] std::fmt::Error),
    #[error("Unknown demo: {0}")]
    UnknownDemo(String),
    #[error("Demo already registered: {0}")]
    DuplicateDemo(String),
    #[error(transparent)]
    Iterator(#[from] IteratorError),
    #[error(transparent)]
    Factory(#[from] FactoryError),
}
