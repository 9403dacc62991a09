//! # Observability & Tracing
//!
//! Structured logging for the catalog runner, built on `tracing` and
//! `tracing-subscriber`.
//!
//! ## Output Streams
//!
//! Demo transcripts go to standard output through a [`Console`](crate::framework::Console);
//! log lines go to **standard error**. Redirecting stdout therefore captures a clean
//! transcript no matter how verbose logging is.
//!
//! ## Configuration
//!
//! Verbosity comes from `RUST_LOG`. The subscriber uses the compact format without the
//! module prefix (`with_target(false)`), so spans show inline.
//!
//! ```bash
//! # Runner events only
//! RUST_LOG=info pattern-recipe all
//!
//! # Pattern internals: state transitions, cache hits, chain forwarding
//! RUST_LOG=debug pattern-recipe run state flyweight
//! ```
//!
//! ## What Gets Traced
//!
//! - **Runner**: every demo runs inside a `demo{name=..}` span, with `Demo started` and
//!   `Demo finished` events at `info`.
//! - **Pattern internals** at `debug`: vending machine transitions, flyweight
//!   registrations, chain forwarding, command and memento history sizes, observer
//!   registration, mediator relays.
//!
//! With `RUST_LOG=debug` a run of the state demo looks like:
//!
//! ```text
//! INFO demo: Demo started name="state"
//! DEBUG demo: Transition from=NoCoin to=HasCoin stock=3 name="state"
//! DEBUG demo: Transition from=HasCoin to=Dispensing stock=3 name="state"
//! DEBUG demo: Transition from=Dispensing to=NoCoin stock=2 name="state"
//! ...
//! INFO demo: Demo finished name="state"
//! ```

/// Installs the global subscriber.
///
/// # Panics
/// If a global subscriber is already set. Use [`try_setup_tracing`] where that can happen.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}

/// Like [`setup_tracing`], but returns `false` instead of panicking when a subscriber
/// is already installed.
pub fn try_setup_tracing() -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_install_is_rejected() {
        try_setup_tracing();
        assert!(!try_setup_tracing());
    }
}
