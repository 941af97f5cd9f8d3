//! Console display adapter.

use std::io::{self, Write};

use viper_core::application::ports::DisplaySink;

use crate::{
    console::LineWriter,
    format::{LineFormat, RecordKind},
};

/// Prints each message as one line, stdout by default.
#[derive(Debug)]
pub struct ConsoleDisplay<W: Write = io::Stdout> {
    out: LineWriter<W>,
}

impl ConsoleDisplay {
    /// Plain lines on stdout.
    pub fn new() -> Self {
        Self::stdout(LineFormat::Plain)
    }

    pub fn stdout(format: LineFormat) -> Self {
        Self::with_writer(io::stdout(), format)
    }
}

impl Default for ConsoleDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> ConsoleDisplay<W> {
    pub fn with_writer(writer: W, format: LineFormat) -> Self {
        Self {
            out: LineWriter::new(writer, format),
        }
    }

    pub fn format(&self) -> LineFormat {
        self.out.format()
    }

    /// Recover the underlying writer.
    pub fn into_inner(self) -> W {
        self.out.into_inner()
    }
}

impl<W: Write> DisplaySink for ConsoleDisplay<W> {
    fn render(&self, message: &str) {
        self.out.write_line(RecordKind::Display, message, message);
    }
}
