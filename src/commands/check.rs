// ABOUTME: Check command implementation.
// ABOUTME: Pushes produce no versions to discover, so the answer is always empty.

use cf_resource::error::Result;
use cf_resource::output::Output;
use cf_resource::protocol::check_response;

pub async fn check(output: Output) -> Result<()> {
    output.respond(&check_response())?;
    Ok(())
}
