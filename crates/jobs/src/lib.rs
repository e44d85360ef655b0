pub mod cache_reaper;
pub mod refresh;
pub mod runner;
pub mod scheduler;

pub use cache_reaper::CacheReaperJob;
pub use refresh::{CycleReport, Dispatch, RefreshJob};
pub use runner::JobRunner;
pub use scheduler::RefreshScheduler;
