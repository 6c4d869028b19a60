// ABOUTME: Command module aggregator for the resource binary.
// ABOUTME: Re-exports the check, in, and out handlers.

mod check;
mod get;
mod put;

pub use check::check;
pub use get::get;
pub use put::put;

use cf_resource::error::Result;
use serde::de::DeserializeOwned;
use tokio::io::AsyncReadExt;

/// Read and parse the JSON request Concourse writes to stdin.
async fn read_request<T: DeserializeOwned>() -> Result<T> {
    let mut input = String::new();
    tokio::io::stdin().read_to_string(&mut input).await?;
    Ok(serde_json::from_str(&input)?)
}
