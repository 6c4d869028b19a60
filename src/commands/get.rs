// ABOUTME: In command implementation.
// ABOUTME: Echoes the requested version without fetching anything.

use cf_resource::error::Result;
use cf_resource::output::Output;
use cf_resource::protocol::GetRequest;
use std::path::Path;

pub async fn get(destination: &Path, output: Output) -> Result<()> {
    let request: GetRequest = super::read_request().await?;
    tracing::debug!("Nothing to fetch into {}", destination.display());

    output.respond(&request.respond())?;
    Ok(())
}
