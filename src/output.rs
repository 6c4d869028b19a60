// ABOUTME: Output for the resource's stdout/stderr contract.
// ABOUTME: Concourse reads the JSON response from stdout; everything human goes to stderr.

use serde::Serialize;
use std::io::Write;
use std::time::Instant;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Progress messages on stderr
    Normal,
    /// Only errors and the response
    Quiet,
}

/// Handles build-log output based on the configured mode.
pub struct Output {
    mode: OutputMode,
    start_time: Option<Instant>,
}

impl Output {
    pub fn new(mode: OutputMode) -> Self {
        Self {
            mode,
            start_time: None,
        }
    }

    pub fn start_timer(&mut self) {
        self.start_time = Some(Instant::now());
    }

    pub fn elapsed_secs(&self) -> f64 {
        self.start_time
            .map(|t| t.elapsed().as_secs_f64())
            .unwrap_or(0.0)
    }

    /// Print a progress message (suppressed in quiet mode).
    pub fn progress(&self, message: &str) {
        if self.mode == OutputMode::Normal {
            eprintln!("{message}");
        }
    }

    /// Print a success message with timing.
    pub fn success(&self, message: &str) {
        if self.mode == OutputMode::Normal {
            let elapsed = self.elapsed_secs();
            if elapsed > 0.0 {
                eprintln!("{message} ({:.1}s)", elapsed);
            } else {
                eprintln!("{message}");
            }
        }
    }

    pub fn warning(&self, message: &str) {
        if self.mode == OutputMode::Normal {
            eprintln!("Warning: {message}");
        }
    }

    /// Print a fatal error. Shown in every mode.
    pub fn error(&self, message: &str) {
        eprintln!("error {message}");
    }

    /// Write the JSON response to stdout.
    pub fn respond<T: Serialize>(&self, response: &T) -> serde_json::Result<()> {
        let mut stdout = std::io::stdout().lock();
        serde_json::to_writer(&mut stdout, response)?;
        writeln!(stdout).map_err(serde_json::Error::io)
    }
}
