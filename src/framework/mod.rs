//! Generic demo framework for the pattern catalog.
//!
//! This module provides the building blocks every pattern demo plugs into.
//!
//! # Main Components
//!
//! - [`PatternDemo`] - Trait that every catalog entry implements
//! - [`Catalog`] - Ordered registry of demos with name lookup
//! - [`Console`] - Output sink; [`IoConsole`] for stdout, [`Transcript`] for capture
//! - [`DemoError`] - Common error type
//!
//! # Testing
//!
//! See [`mock`] module for a console that checks a transcript line by line.

pub mod catalog;
pub mod console;
pub mod demo;
pub mod error;
pub mod mock;

pub use catalog::Catalog;
pub use console::{Console, IoConsole, Transcript};
pub(crate) use demo::pattern_demo;
pub use demo::{Category, DemoInfo, PatternDemo};
pub use error::DemoError;
