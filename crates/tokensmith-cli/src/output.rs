//! Output management and formatting.
//!
//! Status lines go through [`OutputManager`]; generated artifacts are
//! written with [`OutputManager::artifact`], which ignores `--quiet` so
//! `tokensmith -q generate ... > tokens.css` still works. Output is never
//! colorized.

use std::io::{self, IsTerminal};

use console::Term;

use crate::cli::global::{GlobalArgs, OutputFormat};

/// Manages CLI output based on flags.
pub struct OutputManager {
    resolved_format: OutputFormat,
    quiet: bool,
    term: Term,
}

impl OutputManager {
    /// Build an `OutputManager` from parsed CLI flags.
    pub fn new(args: &GlobalArgs) -> Self {
        // Auto → Human on a TTY, Plain when piped.
        let resolved_format = if args.output_format == OutputFormat::Auto {
            if io::stdout().is_terminal() {
                OutputFormat::Human
            } else {
                OutputFormat::Plain
            }
        } else {
            args.output_format
        };

        Self {
            resolved_format,
            quiet: args.quiet,
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

    /// Generated content. Never suppressed.
    pub fn artifact(&self, contents: &str) -> io::Result<()> {
        self.term.write_str(contents)
    }

    /// `✓ <msg>`
    pub fn success(&self, msg: &str) -> io::Result<()> {
        self.print(&format!("\u{2713} {msg}"))
    }

    /// `⚠ <msg>`
    pub fn warning(&self, msg: &str) -> io::Result<()> {
        self.print(&format!("\u{26a0} {msg}"))
    }

    /// `ℹ <msg>`
    pub fn info(&self, msg: &str) -> io::Result<()> {
        self.print(&format!("\u{2139} {msg}"))
    }

    /// Section header, underlined on a terminal.
    pub fn header(&self, text: &str) -> io::Result<()> {
        self.print(text)?;
        if self.resolved_format == OutputFormat::Human {
            self.print(&"─".repeat(text.chars().count()))?;
        }
        Ok(())
    }

    /// The resolved (non-Auto) output format.
    pub fn format(&self) -> OutputFormat {
        self.resolved_format
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
