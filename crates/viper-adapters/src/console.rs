//! Line writer shared by the console adapters.

use std::{
    cell::RefCell,
    io::{self, Write},
};

use tracing::warn;

use crate::format::{LineFormat, RecordKind};

/// Writes formatted lines to `W`, absorbing I/O failures.
#[derive(Debug)]
pub(crate) struct LineWriter<W: Write> {
    writer: RefCell<W>,
    format: LineFormat,
}

impl<W: Write> LineWriter<W> {
    pub(crate) fn new(writer: W, format: LineFormat) -> Self {
        Self {
            writer: RefCell::new(writer),
            format,
        }
    }

    pub(crate) fn format(&self) -> LineFormat {
        self.format
    }

    /// Write one line. Failures are logged and otherwise ignored.
    pub(crate) fn write_line(&self, kind: RecordKind, plain: &str, text: &str) {
        let line = self.format.line(kind, plain, text);
        if let Err(e) = self.try_write(&line) {
            warn!(error = %e, ?kind, "failed to write console line");
        }
    }

    fn try_write(&self, line: &str) -> io::Result<()> {
        let mut writer = self.writer.borrow_mut();
        writeln!(writer, "{line}")?;
        writer.flush()
    }

    pub(crate) fn into_inner(self) -> W {
        self.writer.into_inner()
    }
}
