// ABOUTME: Push strategy selection based on request parameters.
// ABOUTME: Chooses between a plain push, the venerable swap, and cf's rolling deployment.

use crate::config::Params;
use crate::types::AppName;

/// How a release reaches Cloud Foundry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PushStrategy {
    /// Single `cf push`; the app is briefly unavailable while it restarts.
    Simple,

    /// Rename the live app, push the new one, delete the old one.
    /// Rolls back to the renamed app if the push fails.
    ZeroDowntime(AppName),

    /// `cf push --strategy rolling`, handled by the platform.
    Rolling,
}

impl PushStrategy {
    /// Pick the strategy for `params`.
    /// Returns a reason when a parameter is ignored by the chosen strategy.
    ///
    /// Priority:
    /// 1. Rolling deployment, when requested
    /// 2. Zero-downtime swap, when the live app is named
    /// 3. Simple push
    pub fn for_params(params: &Params) -> (Self, Option<&'static str>) {
        if params.use_rolling_app_deployment {
            let reason = params
                .show_app_log
                .then_some("show_app_log only applies to zero-downtime pushes");
            return (PushStrategy::Rolling, reason);
        }

        match params.current_app_name {
            Some(ref app) => (PushStrategy::ZeroDowntime(app.clone()), None),
            None if params.show_app_log => (
                PushStrategy::Simple,
                Some("show_app_log requires current_app_name"),
            ),
            None => (PushStrategy::Simple, None),
        }
    }
}
