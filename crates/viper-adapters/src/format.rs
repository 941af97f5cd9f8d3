//! Line formats shared by the console adapters.

use serde::Serialize;
use tracing::warn;

/// How a console adapter lays out each line it writes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LineFormat {
    /// The text itself.
    #[default]
    Plain,
    /// One JSON object per line: `{"kind":"…","text":"…"}`.
    Json,
}

/// Which sink produced a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    Display,
    Navigation,
}

#[derive(Serialize)]
struct Record<'a> {
    kind: RecordKind,
    text: &'a str,
}

impl LineFormat {
    /// Format one line. `plain` is used in plain mode, `text` is the raw
    /// payload carried in JSON mode.
    pub fn line(self, kind: RecordKind, plain: &str, text: &str) -> String {
        match self {
            Self::Plain => plain.to_owned(),
            Self::Json => serde_json::to_string(&Record { kind, text }).unwrap_or_else(|e| {
                warn!(error = %e, "failed to encode record, falling back to plain text");
                plain.to_owned()
            }),
        }
    }
}
