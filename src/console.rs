//! Console output: command reports on stdout, diagnostics and errors on stderr.
//!
//! Best-effort - write failures are ignored so a closed pipe never aborts
//! a half-executed command sequence.

use colored::Colorize;
use std::io::{self, Write};

/// User-facing printer carrying the `--logging` flag
pub struct Console<O: Write = io::Stdout, E: Write = io::Stderr> {
    out: O,
    err: E,
    logging: bool,
    color: bool,
}

impl Console {
    /// Console bound to the process stdout/stderr
    pub fn stdio(logging: bool, color: bool) -> Self {
        Console::new(io::stdout(), io::stderr(), logging, color)
    }
}

impl<O: Write, E: Write> Console<O, E> {
    pub fn new(out: O, err: E, logging: bool, color: bool) -> Self {
        Self {
            out,
            err,
            logging,
            color,
        }
    }

    pub fn logging(&self) -> bool {
        self.logging
    }

    /// Diagnostic line, only shown with `--logging`: `[HH:MM:SS] Verb rest`
    pub fn log(&mut self, verb: &str, rest: &str) {
        if !self.logging {
            return;
        }
        let stamp = chrono::Local::now().format("%H:%M:%S");
        let verb = if self.color {
            verb.magenta().bold().to_string()
        } else {
            verb.to_string()
        };
        let _ = writeln!(self.err, "[{}] {} {}", stamp, verb, rest);
    }

    /// Error line, always shown
    pub fn error(&mut self, message: &str) {
        let label = if self.color {
            "ERROR".red().bold().to_string()
        } else {
            "ERROR".to_string()
        };
        let _ = writeln!(self.err, "{}: {}", label, message);
    }

    /// The `Command:` line printed before each execution
    pub fn command(&mut self, line: &str) {
        let label = self.bold("Command");
        let _ = writeln!(self.out, "{}: {}", label, line);
    }

    /// The `Output:` line printed after each execution
    pub fn output(&mut self, stdout: &str) {
        let label = self.bold("Output");
        let _ = writeln!(self.out, "{}: {}", label, stdout.trim_end_matches('\n'));
        let _ = self.out.flush();
    }

    /// Recover the underlying writers (used to inspect captured output)
    pub fn into_inner(self) -> (O, E) {
        (self.out, self.err)
    }

    fn bold(&self, text: &str) -> String {
        if self.color {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }
}
