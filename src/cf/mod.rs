// ABOUTME: Cloud Foundry CLI integration.
// ABOUTME: Command runner capability, child environment, push arguments, and the cf client.

mod client;
mod environment;
mod error;
mod push;
mod runner;
pub mod workdir;

pub use client::{CF_PROGRAM, CloudFoundry, Credentials};
pub use environment::{
    CF_COLOR, CF_DIAL_TIMEOUT, CF_DOCKER_PASSWORD, CF_TRACE, CfEnvironment, split_key_value,
};
pub use error::CfError;
pub use push::PushSpec;
pub use runner::{CommandRunner, ProcessRunner, display_command};
