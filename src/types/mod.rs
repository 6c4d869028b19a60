// ABOUTME: Validated domain types.
// ABOUTME: Application names, the names derived from them, and redacted secrets.

mod app_name;
mod secret;

pub use app_name::{AppName, AppNameError, VENERABLE_SUFFIX};
pub use secret::Secret;
