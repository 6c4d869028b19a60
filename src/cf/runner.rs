// ABOUTME: Capability for running external programs, plus the process-backed implementation.
// ABOUTME: Child output is forwarded to stderr because stdout carries the protocol response.

use async_trait::async_trait;
use std::process::Stdio;
use tokio::process::Command;

use super::environment::CfEnvironment;
use super::error::CfError;

/// Runs a program with arguments and reports whether it exited 0.
///
/// Output is never captured or parsed. Implementations run synchronously
/// from the caller's point of view, in the current working directory.
#[async_trait]
pub trait CommandRunner: Send + Sync {
    async fn run(&self, program: &str, args: &[String]) -> Result<(), CfError>;
}

#[async_trait]
impl<R: CommandRunner + ?Sized> CommandRunner for &R {
    async fn run(&self, program: &str, args: &[String]) -> Result<(), CfError> {
        (**self).run(program, args).await
    }
}

/// Spawns real processes with a prepared environment.
#[derive(Debug, Clone)]
pub struct ProcessRunner {
    env: CfEnvironment,
}

impl ProcessRunner {
    pub fn new(env: CfEnvironment) -> Self {
        Self { env }
    }

    pub fn environment(&self) -> &CfEnvironment {
        &self.env
    }
}

#[async_trait]
impl CommandRunner for ProcessRunner {
    async fn run(&self, program: &str, args: &[String]) -> Result<(), CfError> {
        let command_line = display_command(program, args);
        tracing::debug!("Running {}", command_line);

        let status = Command::new(program)
            .args(args)
            .env_clear()
            .envs(self.env.iter())
            .stdin(Stdio::null())
            .stdout(Stdio::from(std::io::stderr()))
            .stderr(Stdio::from(std::io::stderr()))
            .status()
            .await
            .map_err(|source| CfError::Launch {
                command: command_line.clone(),
                source,
            })?;

        if status.success() {
            Ok(())
        } else {
            tracing::debug!("{} exited with {:?}", command_line, status.code());
            Err(CfError::exit(command_line, status.code()))
        }
    }
}

/// Render a command for messages and logs.
///
/// The secret passed to `auth` (last argument) is masked.
pub fn display_command(program: &str, args: &[String]) -> String {
    let secret_index = match args.first().map(String::as_str) {
        Some("auth") if args.len() > 1 => Some(args.len() - 1),
        _ => None,
    };

    std::iter::once(program)
        .chain(args.iter().enumerate().map(|(i, arg)| {
            if Some(i) == secret_index {
                REDACTED
            } else {
                arg.as_str()
            }
        }))
        .collect::<Vec<_>>()
        .join(" ")
}

const REDACTED: &str = "[REDACTED]";

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn display_command_joins_arguments() {
        assert_eq!(
            display_command("cf", &args(&["rename", "a", "a-venerable"])),
            "cf rename a a-venerable"
        );
    }

    #[test]
    fn display_command_masks_auth_secret() {
        assert_eq!(
            display_command("cf", &args(&["auth", "user@example.com", "hunter2"])),
            "cf auth user@example.com [REDACTED]"
        );
        assert_eq!(
            display_command(
                "cf",
                &args(&["auth", "--client-credentials", "client", "s3cret"])
            ),
            "cf auth --client-credentials client [REDACTED]"
        );
    }

    #[tokio::test]
    async fn successful_process_is_ok() {
        let runner = ProcessRunner::new(CfEnvironment::from_os());
        runner.run("true", &[]).await.unwrap();
    }

    #[tokio::test]
    async fn failing_process_reports_exit_code() {
        let runner = ProcessRunner::new(CfEnvironment::from_os());
        let err = runner
            .run("sh", &args(&["-c", "exit 3"]))
            .await
            .unwrap_err();

        assert!(matches!(err, CfError::Exit { code: Some(3), .. }));
    }

    #[tokio::test]
    async fn missing_program_is_a_launch_error() {
        let runner = ProcessRunner::new(CfEnvironment::from_os());
        let err = runner
            .run("definitely-not-a-real-cf-binary", &[])
            .await
            .unwrap_err();

        assert!(matches!(err, CfError::Launch { .. }));
    }

    #[tokio::test]
    async fn child_sees_prepared_environment() {
        let mut env = CfEnvironment::from_os();
        env.insert("CF_RESOURCE_RUNNER_TEST", "expected");
        let runner = ProcessRunner::new(env);

        runner
            .run(
                "sh",
                &args(&["-c", "test \"$CF_RESOURCE_RUNNER_TEST\" = expected"]),
            )
            .await
            .unwrap();
    }
}
