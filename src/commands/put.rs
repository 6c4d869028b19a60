// ABOUTME: Out command implementation.
// ABOUTME: Resolves request paths, wires the cf client, and runs the push.

use cf_resource::cf::{CloudFoundry, ProcessRunner};
use cf_resource::config::{cf_environment, cf_program};
use cf_resource::deploy;
use cf_resource::diagnostics::Diagnostics;
use cf_resource::error::Result;
use cf_resource::output::Output;
use cf_resource::protocol::PutRequest;
use std::path::Path;

pub async fn put(sources: &Path, mut output: Output) -> Result<()> {
    output.start_timer();

    let mut request: PutRequest = super::read_request().await?;
    request.params.resolve_paths(sources)?;

    let env = cf_environment(&request.source, &request.params);
    let cf = CloudFoundry::with_program(ProcessRunner::new(env), cf_program());
    let mut diag = Diagnostics::default();

    output.progress(&format!(
        "Pushing {} to {}/{}",
        request.params.manifest.display(),
        request.source.organization,
        request.source.space
    ));

    let response = deploy::put::run(&cf, &request, &mut diag).await?;

    for warning in diag.warnings() {
        output.warning(&warning.message);
    }

    output.success("Push complete!");
    output.respond(&response)?;
    Ok(())
}
