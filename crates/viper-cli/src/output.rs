//! Output management and formatting.

use std::io::{self, IsTerminal};

use console::Term;
use owo_colors::OwoColorize;
use viper_adapters::LineFormat;

use crate::cli::global::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;

/// Manages CLI output based on configuration.
pub struct OutputManager {
    resolved_format: OutputFormat,
    quiet: bool,
    no_color: bool,
    term: Term,
}

impl OutputManager {
    /// Build an `OutputManager` from parsed CLI flags and loaded config.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        let requested = requested_format(args, config);
        let resolved_format = if requested == OutputFormat::Auto {
            if io::stdout().is_terminal() {
                OutputFormat::Human
            } else {
                OutputFormat::Plain
            }
        } else {
            requested
        };

        Self {
            resolved_format,
            quiet: args.quiet,
            no_color: args.no_color
                || config.output.no_color
                || resolved_format != OutputFormat::Human,
            term: Term::stdout(),
        }
    }

    // ── Public write methods ───────────────────────────────────────────────

    /// Generic message; suppressed in quiet mode.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(msg)
    }

    /// Success indicator: `✓ <msg>`.
    pub fn success(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{2713} {msg}") // ✓
        } else {
            format!("{} {}", "\u{2713}".green().bold(), msg.green())
        };
        self.term.write_line(&line)
    }

    /// Warning indicator: `⚠ <msg>`.
    pub fn warning(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{26a0} {msg}") // ⚠
        } else {
            format!("{} {}", "\u{26a0}".yellow().bold(), msg.yellow())
        };
        self.term.write_line(&line)
    }

    /// Informational indicator: `ℹ <msg>`.
    pub fn info(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{2139} {msg}") // ℹ
        } else {
            format!("{} {}", "\u{2139}".blue().bold(), msg.blue())
        };
        self.term.write_line(&line)
    }

    /// Bold cyan header line.
    pub fn header(&self, text: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            text.to_owned()
        } else {
            text.cyan().bold().to_string()
        };
        self.term.write_line(&line)
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    /// The resolved (non-Auto) output format.
    pub fn format(&self) -> OutputFormat {
        self.resolved_format
    }

    /// Line format for the console display and navigation adapters.
    pub fn line_format(&self) -> LineFormat {
        match self.resolved_format {
            OutputFormat::Json => LineFormat::Json,
            OutputFormat::Auto | OutputFormat::Human | OutputFormat::Plain => LineFormat::Plain,
        }
    }
}

/// The format asked for by the user: the `--output-format` flag, or the
/// configured `output.format` when the flag is left at `auto`.
///
/// May still be `Auto`; only stdout rendering resolves that against a TTY.
pub fn requested_format(args: &GlobalArgs, config: &AppConfig) -> OutputFormat {
    if args.output_format == OutputFormat::Auto {
        <OutputFormat as clap::ValueEnum>::from_str(&config.output.format, true)
            .unwrap_or(OutputFormat::Auto)
    } else {
        args.output_format
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    use crate::config::AppConfig;

    fn args(format: OutputFormat, quiet: bool, no_color: bool) -> GlobalArgs {
        GlobalArgs {
            verbose: 0,
            quiet,
            no_color,
            config: None,
            output_format: format,
        }
    }

    fn make_manager(quiet: bool, no_color: bool) -> OutputManager {
        // explicit format avoids TTY detection in tests
        OutputManager::new(&args(OutputFormat::Human, quiet, no_color), &AppConfig::default())
    }

    #[test]
    fn quiet_suppresses_print() {
        let out = make_manager(true, true);
        assert!(out.print("hello").is_ok());
    }

    #[test]
    fn no_color_flag_reported() {
        let colored = make_manager(false, false);
        let no_color = make_manager(false, true);
        assert!(!colored.no_color);
        assert!(no_color.no_color);
    }

    #[test]
    fn plain_format_never_colours() {
        let out = OutputManager::new(
            &args(OutputFormat::Plain, false, false),
            &AppConfig::default(),
        );
        assert!(out.no_color);
    }

    #[test]
    fn explicit_flag_beats_config() {
        let mut config = AppConfig::default();
        config.output.format = "json".into();
        let out = OutputManager::new(&args(OutputFormat::Plain, false, true), &config);
        assert_eq!(out.format(), OutputFormat::Plain);
        assert_eq!(out.line_format(), LineFormat::Plain);
    }

    #[test]
    fn config_format_applies_when_flag_is_auto() {
        let mut config = AppConfig::default();
        config.output.format = "json".into();
        let out = OutputManager::new(&args(OutputFormat::Auto, false, true), &config);
        assert_eq!(out.format(), OutputFormat::Json);
        assert_eq!(out.line_format(), LineFormat::Json);
    }

    #[test]
    fn requested_format_keeps_auto_when_nothing_is_asked() {
        let out = requested_format(&args(OutputFormat::Auto, false, false), &AppConfig::default());
        assert_eq!(out, OutputFormat::Auto);
    }

    #[test]
    fn requested_format_reads_config_under_auto_flag() {
        let mut config = AppConfig::default();
        config.output.format = "JSON".into();
        assert_eq!(
            requested_format(&args(OutputFormat::Auto, false, false), &config),
            OutputFormat::Json
        );
        assert_eq!(
            requested_format(&args(OutputFormat::Human, false, false), &config),
            OutputFormat::Human
        );
    }
}
