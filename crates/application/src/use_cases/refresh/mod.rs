pub mod refresh_resource;
pub mod trigger_refresh;

pub use refresh_resource::{RefreshError, RefreshOutcome, RefreshResourceUseCase};
pub use trigger_refresh::TriggerRefreshUseCase;
