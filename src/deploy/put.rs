// ABOUTME: The `out` step: log in, target, patch the manifest, and push.
// ABOUTME: Strategy selection decides between a plain push and the venerable swap.

use crate::cf::{CloudFoundry, CommandRunner};
use crate::diagnostics::{Diagnostics, Warning};
use crate::error::Result;
use crate::manifest::Manifest;
use crate::protocol::{PutRequest, VersionResponse};

use super::action::Operation;
use super::strategy::PushStrategy;
use super::zero_downtime;

/// Run a put against `cf`.
///
/// Paths in `request.params` must already be resolved.
pub async fn run<R: CommandRunner>(
    cf: &CloudFoundry<R>,
    request: &PutRequest,
    diag: &mut Diagnostics,
) -> Result<VersionResponse> {
    let source = &request.source;
    let params = &request.params;

    let credentials = source.credentials()?;
    cf.login(&source.api, &credentials, source.skip_cert_check)
        .await?;
    cf.target(&source.organization, &source.space).await?;

    if !params.environment_variables.is_empty() {
        let mut manifest = Manifest::load(&params.manifest)?;
        if manifest.application_count() == 0 {
            diag.warn(Warning::manifest_environment(format!(
                "{} has no applications; environment_variables not applied",
                params.manifest.display()
            )));
        }
        for (name, value) in &params.environment_variables {
            manifest.add_environment_variable(name, value);
        }
        manifest.save(&params.manifest)?;
    }

    if params.docker_password.is_some() && params.docker_username.is_none() {
        diag.warn(Warning::docker_credentials(
            "docker_password is set but docker_username is not",
        ));
    }

    let (strategy, reason) = PushStrategy::for_params(params);
    if let Some(reason) = reason {
        diag.warn(Warning::strategy(reason));
    }
    tracing::info!("Pushing with {:?} strategy", strategy);

    let spec = params.push_spec();
    match strategy {
        PushStrategy::Simple => cf.push(&spec).await?,
        PushStrategy::Rolling => {
            let spec = match params.current_app_name {
                Some(ref app) => spec.named(app.clone()),
                None => spec,
            };
            cf.push(&spec).await?
        }
        PushStrategy::ZeroDowntime(app) => {
            let named = spec.named(app.clone());
            let push = Operation::new(|| cf.push(&named));
            zero_downtime::push(cf, &app, push, params.show_app_log).await?
        }
    }

    Ok(VersionResponse::pushed(&source.organization, &source.space))
}
