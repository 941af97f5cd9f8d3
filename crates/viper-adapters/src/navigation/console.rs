//! Console navigation adapter.
//!
//! Nothing is actually navigated; the adapter announces where it would go.

use std::io::{self, Write};

use viper_core::application::ports::NavigationSink;

use crate::{
    console::LineWriter,
    format::{LineFormat, RecordKind},
};

/// Announcement prefix written before the destination name.
pub const NAVIGATION_PREFIX: &str = "I am the Router outreach and the name I got is";

/// Announces each navigation request as one line, stdout by default.
#[derive(Debug)]
pub struct ConsoleNavigator<W: Write = io::Stdout> {
    out: LineWriter<W>,
}

impl ConsoleNavigator {
    /// Plain lines on stdout.
    pub fn new() -> Self {
        Self::stdout(LineFormat::Plain)
    }

    pub fn stdout(format: LineFormat) -> Self {
        Self::with_writer(io::stdout(), format)
    }
}

impl Default for ConsoleNavigator {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> ConsoleNavigator<W> {
    pub fn with_writer(writer: W, format: LineFormat) -> Self {
        Self {
            out: LineWriter::new(writer, format),
        }
    }

    /// Recover the underlying writer.
    pub fn into_inner(self) -> W {
        self.out.into_inner()
    }
}

impl<W: Write> NavigationSink for ConsoleNavigator<W> {
    fn navigate(&self, name: &str) {
        let announcement = format!("{NAVIGATION_PREFIX} {name}");
        self.out
            .write_line(RecordKind::Navigation, &announcement, name);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn announces_destination() {
        let navigator = ConsoleNavigator::with_writer(Vec::new(), LineFormat::Plain);
        navigator.navigate("Taylor Swift");
        assert_eq!(
            String::from_utf8(navigator.into_inner()).unwrap(),
            "I am the Router outreach and the name I got is Taylor Swift\n"
        );
    }

    #[test]
    fn json_record_carries_bare_name() {
        let navigator = ConsoleNavigator::with_writer(Vec::new(), LineFormat::Json);
        navigator.navigate("Taylor Swift");
        assert_eq!(
            String::from_utf8(navigator.into_inner()).unwrap(),
            "{\"kind\":\"navigation\",\"text\":\"Taylor Swift\"}\n"
        );
    }
}
