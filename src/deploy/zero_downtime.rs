// ABOUTME: Zero-downtime push: park the live app, push the new release, drop the old one.
// ABOUTME: A failed push deletes the broken release and renames the parked app back.

use crate::cf::{CfError, CloudFoundry, CommandRunner};
use crate::types::AppName;

use super::action::{Action, Operation};
use super::error::RewindError;
use super::rewind::Rewind;

/// Prefix reported when the rollback of a failed push itself fails.
pub const ROLLBACK_FAILURE_MESSAGE: &str = "Oh no. Something's gone wrong. I've tried to roll back but you should check to see if everything is OK.";

/// Build the three-step push for `current_app`.
///
/// 1. `cf rename <app> <app>-venerable`
/// 2. `push` (the caller's push of the new release under `<app>`)
/// 3. `cf delete -f <app>-venerable`
///
/// If step 2 fails: optionally `cf logs <app> --recent`, then
/// `cf delete -f <app>`, then `cf rename <app>-venerable <app>`. Only the
/// result of the final rename decides whether the rollback succeeded.
pub fn plan<'a, R: CommandRunner>(
    cf: &'a CloudFoundry<R>,
    current_app: &'a AppName,
    push: Operation<'a, CfError>,
    show_logs: bool,
) -> Rewind<'a, CfError> {
    let venerable = current_app.venerable();

    let park = {
        let venerable = venerable.clone();
        Operation::new(move || async move { cf.rename(current_app, &venerable).await })
    };

    let restore = {
        let venerable = venerable.clone();
        Operation::new(move || async move {
            if show_logs && let Err(e) = cf.recent_logs(current_app).await {
                tracing::debug!("Ignoring failure to fetch logs for {}: {}", current_app, e);
            }
            if let Err(e) = cf.delete(current_app).await {
                tracing::debug!("Ignoring failure to delete {}: {}", current_app, e);
            }
            cf.rename(&venerable, current_app).await
        })
    };

    let retire = Operation::new(move || async move { cf.delete(&venerable).await });

    Rewind::new(vec![
        Action::new(park),
        Action::new(push).with_reverse_previous(restore),
        Action::new(retire),
    ])
    .with_failure_message(ROLLBACK_FAILURE_MESSAGE)
}

/// Plan and execute a zero-downtime push.
pub async fn push<'a, R: CommandRunner>(
    cf: &'a CloudFoundry<R>,
    current_app: &'a AppName,
    push: Operation<'a, CfError>,
    show_logs: bool,
) -> Result<(), RewindError<CfError>> {
    plan(cf, current_app, push, show_logs)
        .execute()
        .await
        .into_result()
}
