use crate::ports::{RefreshTrigger, TriggerOutcome, TriggerSource};
use matchcast_domain::DomainError;
use std::sync::Arc;
use tracing::info;

/// Use case: operator-requested refresh of a named resource class.
///
/// Goes through the same trigger the scheduler ticks use and returns without
/// waiting for the fetch.
pub struct TriggerRefreshUseCase {
    trigger: Arc<dyn RefreshTrigger>,
}

impl TriggerRefreshUseCase {
    pub fn new(trigger: Arc<dyn RefreshTrigger>) -> Self {
        Self { trigger }
    }

    pub fn execute(&self, resource: &str) -> Result<TriggerOutcome, DomainError> {
        let outcome = self.trigger.trigger(resource, TriggerSource::Manual)?;
        info!(resource, outcome = outcome.as_str(), "Manual refresh requested");
        Ok(outcome)
    }
}
