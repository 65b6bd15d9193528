//! Output handling for the CLI

use crate::render::OutputMode;

/// Output helper: rendered boards on stdout, diagnostics on stderr
pub struct Output {
    mode: OutputMode,
    verbose: bool,
}

impl Output {
    pub fn new(mode: OutputMode, verbose: bool) -> Self {
        Self { mode, verbose }
    }

    pub fn mode(&self) -> OutputMode {
        self.mode
    }

    /// Prints a rendered document
    pub fn emit(&self, rendered: &str) {
        println!("{}", rendered);
    }

    /// Prints a verbose debug message (only when --verbose is set)
    pub fn verbose(&self, message: &str) {
        if self.verbose {
            eprintln!("[verbose] {}", message);
        }
    }

    /// Prints a verbose debug message with context (only when --verbose is set)
    pub fn verbose_ctx(&self, context: &str, message: &str) {
        if self.verbose {
            eprintln!("[verbose:{}] {}", context, message);
        }
    }
}
