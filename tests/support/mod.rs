// ABOUTME: Test support utilities.
// ABOUTME: Provides a recording CommandRunner and tracing setup for integration tests.

use async_trait::async_trait;
use cf_resource::cf::{CfError, CloudFoundry, CommandRunner, display_command};
use parking_lot::Mutex;
use std::path::PathBuf;
use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for tests. Safe to call multiple times.
#[allow(dead_code)]
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::EnvFilter;
        let filter = EnvFilter::from_default_env()
            .add_directive("cf_resource=debug".parse().unwrap());
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init()
            .ok();
    });
}

/// One recorded invocation.
#[derive(Debug, Clone)]
#[allow(dead_code)]
pub struct Call {
    pub args: Vec<String>,
    pub cwd: PathBuf,
}

/// Records every invocation instead of running it.
///
/// Invocations whose arguments start with a registered prefix fail with
/// exit code 1.
#[derive(Default)]
pub struct RecordingRunner {
    calls: Mutex<Vec<Call>>,
    failures: Vec<Vec<String>>,
}

#[allow(dead_code)]
impl RecordingRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_on(mut self, prefix: &[&str]) -> Self {
        self.failures
            .push(prefix.iter().map(|s| s.to_string()).collect());
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().clone()
    }

    /// Recorded invocations as space-joined argument strings.
    pub fn commands(&self) -> Vec<String> {
        self.calls
            .lock()
            .iter()
            .map(|call| call.args.join(" "))
            .collect()
    }
}

#[async_trait]
impl CommandRunner for RecordingRunner {
    async fn run(&self, program: &str, args: &[String]) -> Result<(), CfError> {
        let cwd = std::env::current_dir().unwrap_or_default();
        self.calls.lock().push(Call {
            args: args.to_vec(),
            cwd,
        });

        if self.failures.iter().any(|prefix| args.starts_with(prefix)) {
            return Err(CfError::exit(display_command(program, args), Some(1)));
        }
        Ok(())
    }
}

/// A cf client over a fresh recorder.
#[allow(dead_code)]
pub fn recording_cf(runner: RecordingRunner) -> CloudFoundry<RecordingRunner> {
    CloudFoundry::new(runner)
}
