#![doc(html_logo_url = "https://www.rust-lang.org/logos/rust-logo-128x128.png")]
#![doc(html_favicon_url = "https://www.rust-lang.org/favicon.ico")]
//! # Pattern Recipe
//!
//! > **A Recipe for Classic Design Patterns in Rust.**
//!
//! This crate is a runnable catalog of 21 classic object-oriented design patterns, each
//! expressed the way Rust prefers: traits for capability contracts, enums for closed
//! hierarchies, index handles instead of back-references, and explicit registries instead
//! of global state.
//!
//! ## 🏗️ Design Philosophy
//!
//! Every pattern module has two layers:
//! - **A small library API**: the traits, structs and enums that make up the pattern.
//!   They are public and tested on their own.
//! - **A driver**: a `run(out)` function that exercises the API in a fixed order and
//!   writes a transcript to a [`Console`](framework::Console).
//!
//! Drivers never print directly, so the same transcript can go to stdout, into a
//! [`Transcript`](framework::Transcript), or through a line-checking
//! [`MockConsole`](framework::mock::MockConsole).
//!
//! ## 👩‍💻 Architecture Notes
//!
//! ### 1. Type-Safe Error Handling
//! [`DemoError`](framework::DemoError) is the crate-wide error. Patterns with a genuine
//! failure case keep their own error type next to the pattern
//! ([`IteratorError`](behavioral::iterator::IteratorError),
//! [`FactoryError`](creational::factory::FactoryError)) and convert with `#[from]`.
//! Guard clauses that only print a notice (no coin, empty history, unapproved purchase)
//! are not errors.
//!
//! ### 2. Ownership Instead of Reference Graphs
//! Coordinators own their participants and hand out small `Copy` ids
//! ([`LightId`](behavioral::command::LightId), [`UserId`](behavioral::mediator::UserId),
//! [`ObserverId`](behavioral::observer::ObserverId)). State objects receive a view of
//! the machine per call rather than holding a pointer back to it.
//!
//! ### 3. Observability
//! We use `tracing` with structured fields. Every demo runs inside a `demo` span, and
//! pattern internals log at `debug`. Logs go to stderr; transcripts go to stdout.
//! See the [`lifecycle::tracing`] module for details.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Engine ([`framework`])
//! - **Role**: The demo contract, the catalog and the output sinks.
//! - **Key items**: [`PatternDemo`](framework::PatternDemo), [`Catalog`](framework::Catalog),
//!   [`Console`](framework::Console).
//!
//! ### 2. The Orchestrator ([`lifecycle`])
//! - **Role**: Builds the standard catalog and runs demos inside tracing spans.
//! - **Key items**: [`PatternSystem`](lifecycle::PatternSystem),
//!   [`setup_tracing`](lifecycle::setup_tracing).
//!
//! ### 3. The Patterns ([`behavioral`], [`creational`], [`structural`])
//! - **Role**: One module per pattern, each with its own tests.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Every demo, with banners
//! cargo run
//!
//! # A single transcript, exactly as the demo prints it
//! cargo run -- run chain-of-responsibility
//!
//! # The catalog as JSON, with runner logs on stderr
//! RUST_LOG=info cargo run -- list --format json
//! ```

pub mod behavioral;
pub mod creational;
pub mod framework;
pub mod lifecycle;
pub mod structural;
