// ABOUTME: Error types for invoking the cf command-line tool.
// ABOUTME: Covers launch failures, non-zero exits, and push path problems.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum CfError {
    /// The program could not be started at all.
    #[error("failed to run `{command}`: {source}")]
    Launch {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// The program ran and exited unsuccessfully.
    #[error("`{command}` exited with {}", describe_exit(.code))]
    Exit { command: String, code: Option<i32> },

    /// The push path does not exist or cannot be read.
    #[error("cannot access push path {}: {source}", .path.display())]
    PushPath {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Changing into the push directory failed.
    #[error("failed to change working directory to {}: {source}", .path.display())]
    WorkingDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

fn describe_exit(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit status {code}"),
        None => "no exit status (terminated by signal)".to_string(),
    }
}

impl CfError {
    pub fn exit(command: impl Into<String>, code: Option<i32>) -> Self {
        CfError::Exit {
            command: command.into(),
            code,
        }
    }
}
