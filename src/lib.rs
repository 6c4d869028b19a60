// ABOUTME: Library root for cf-resource - exposes public types for testing.
// ABOUTME: The check, in, and out binary entry points are in main.rs.

pub mod cf;
pub mod config;
pub mod deploy;
pub mod diagnostics;
pub mod error;
pub mod manifest;
pub mod output;
pub mod paths;
pub mod protocol;
pub mod types;
