//! # Console Sinks
//!
//! Demos never print directly. They write their transcript to a [`Console`], which lets
//! the binary stream to stdout while tests capture or check every line.
//!
//! The trait exposes a `write_fmt` method, so the standard `write!` and `writeln!`
//! macros work on any `&mut dyn Console` and return a [`DemoError`] that propagates
//! with `?`:
//!
//! ```rust
//! use pattern_recipe::framework::{Console, DemoError, Transcript};
//!
//! fn greet(out: &mut dyn Console) -> Result<(), DemoError> {
//!     writeln!(out, "Hello {}", "world")?;
//!     writeln!(out)?;
//!     Ok(())
//! }
//!
//! let mut transcript = Transcript::new();
//! greet(&mut transcript).unwrap();
//! assert_eq!(transcript.lines(), vec!["Hello world", ""]);
//! ```

use crate::framework::DemoError;
use std::fmt;
use std::io;

/// Output sink for demo transcripts.
pub trait Console {
    /// Writes formatted text. Newlines are part of the text, as with `io::Write`.
    fn write_fmt(&mut self, args: fmt::Arguments<'_>) -> Result<(), DemoError>;
}

/// Console backed by any `io::Write` (stdout for the binary).
pub struct IoConsole<W: io::Write> {
    writer: W,
}

impl<W: io::Write> IoConsole<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Flushes the underlying writer.
    pub fn flush(&mut self) -> Result<(), DemoError> {
        self.writer.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl IoConsole<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: io::Write> Console for IoConsole<W> {
    fn write_fmt(&mut self, args: fmt::Arguments<'_>) -> Result<(), DemoError> {
        io::Write::write_fmt(&mut self.writer, args)?;
        Ok(())
    }
}

/// In-memory console that keeps the full transcript.
#[derive(Debug, Default, Clone)]
pub struct Transcript {
    buffer: String,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    /// Completed lines of the transcript. A trailing partial line is included.
    pub fn lines(&self) -> Vec<&str> {
        self.buffer.lines().collect()
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.buffer.contains(needle)
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }
}

impl Console for Transcript {
    fn write_fmt(&mut self, args: fmt::Arguments<'_>) -> Result<(), DemoError> {
        fmt::Write::write_fmt(&mut self.buffer, args)?;
        Ok(())
    }
}

impl fmt::Display for Transcript {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.buffer)
    }
}
