//! # Mock Console & Testing Guide
//!
//! The `MockConsole` type implements the same [`Console`] API as the production sinks but
//! checks every line the moment it is completed. It lets you describe the expected
//! transcript up front and fails fast, pointing at the first line that diverges, which is
//! much easier to read than a diff of two long strings.
//!
//! ## When to use MockConsole vs Transcript
//!
//! | Feature | MockConsole | Transcript |
//! |---------|-------------|------------|
//! | **Failure point** | First mismatching line | Assertion after the run |
//! | **Partial checks** | `skip_lines(n)` | Index into `lines()` |
//! | **Use Case** | Exact driver transcripts | Properties, `contains` checks |
//!
//! ## Example
//!
//! ```rust
//! use pattern_recipe::framework::mock::MockConsole;
//! use pattern_recipe::structural::facade::ComputerFacade;
//!
//! let mut mock = MockConsole::new();
//! mock.expect_line("CPU is processing data")
//!     .expect_line("Memory is loading data")
//!     .skip_lines(1)
//!     .expect_line("Computer is starting...");
//!
//! ComputerFacade::new().start(&mut mock).unwrap();
//! mock.verify();
//! ```

use crate::framework::{Console, DemoError};
use std::collections::VecDeque;
use std::fmt;

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// Represents one expected line of output.
#[derive(Debug, Clone)]
enum Expectation {
    /// The line must match exactly.
    Line(String),
    /// Any line is accepted.
    Any,
}

/// A console with expectation tracking for fluent testing.
#[derive(Debug, Default)]
pub struct MockConsole {
    expectations: VecDeque<Expectation>,
    pending: String,
    seen: Vec<String>,
}

impl MockConsole {
    /// Creates a new mock console with no expectations.
    pub fn new() -> Self {
        Self::default()
    }

    /// Expects the next line to be exactly `line`.
    pub fn expect_line(&mut self, line: impl Into<String>) -> &mut Self {
        self.expectations.push_back(Expectation::Line(line.into()));
        self
    }

    /// Expects each of `lines`, in order.
    pub fn expect_lines<I, S>(&mut self, lines: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for line in lines {
            self.expect_line(line);
        }
        self
    }

    /// Expects an empty line.
    pub fn expect_blank(&mut self) -> &mut Self {
        self.expect_line("")
    }

    /// Accepts the next `count` lines whatever they contain.
    pub fn skip_lines(&mut self, count: usize) -> &mut Self {
        for _ in 0..count {
            self.expectations.push_back(Expectation::Any);
        }
        self
    }

    /// Lines completed so far.
    pub fn seen(&self) -> &[String] {
        &self.seen
    }

    /// Verifies that all expectations were met and nothing is left unterminated.
    pub fn verify(&self) {
        if !self.pending.is_empty() {
            panic!("Unterminated output line: {:?}", self.pending);
        }
        if !self.expectations.is_empty() {
            panic!(
                "Not all expectations were met. {} remaining, next: {:?}",
                self.expectations.len(),
                self.expectations.front()
            );
        }
    }

    fn check(&mut self, line: String) {
        match self.expectations.pop_front() {
            Some(Expectation::Line(expected)) if expected == line => {}
            Some(Expectation::Any) => {}
            Some(Expectation::Line(expected)) => panic!(
                "Output mismatch at line {}: expected {:?}, got {:?}",
                self.seen.len() + 1,
                expected,
                line
            ),
            None => panic!(
                "Unexpected output at line {}: {:?}",
                self.seen.len() + 1,
                line
            ),
        }
        self.seen.push(line);
    }
}

impl Console for MockConsole {
    fn write_fmt(&mut self, args: fmt::Arguments<'_>) -> Result<(), DemoError> {
        fmt::Write::write_fmt(&mut self.pending, args)?;
        while let Some(end) = self.pending.find('\n') {
            let line: String = self.pending.drain(..=end).collect();
            self.check(line.trim_end_matches('\n').to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_console_accepts_expected_lines() {
        let mut mock = MockConsole::new();
        mock.expect_line("Forecast: More of the same")
            .expect_blank()
            .skip_lines(1)
            .expect_lines(["a", "b"]);

        write!(mock, "Forecast: ").unwrap();
        writeln!(mock, "More of the same").unwrap();
        writeln!(mock).unwrap();
        writeln!(mock, "anything").unwrap();
        write!(mock, "a\nb\n").unwrap();

        mock.verify();
        assert_eq!(mock.seen().len(), 5);
    }

    #[test]
    #[should_panic(expected = "Output mismatch at line 1")]
    fn test_mock_console_panics_on_mismatch() {
        let mut mock = MockConsole::new();
        mock.expect_line("Step 1");
        writeln!(mock, "Step 2").unwrap();
    }

    #[test]
    #[should_panic(expected = "Not all expectations were met")]
    fn test_verify_panics_on_remaining_expectations() {
        let mut mock = MockConsole::new();
        mock.expect_line("Step 1").expect_line("Step 2");
        writeln!(mock, "Step 1").unwrap();
        mock.verify();
    }
}
