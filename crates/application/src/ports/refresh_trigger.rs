use matchcast_domain::DomainError;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerSource {
    Tick,
    Manual,
}

impl fmt::Display for TriggerSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tick => f.write_str("tick"),
            Self::Manual => f.write_str("manual"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerOutcome {
    /// A refresh cycle was spawned.
    Started,
    /// A cycle for the same class was already in flight; the trigger was dropped.
    Coalesced,
    /// The engine is stopping and accepts no new cycles.
    ShuttingDown,
}

impl TriggerOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Started => "started",
            Self::Coalesced => "coalesced",
            Self::ShuttingDown => "shutting_down",
        }
    }
}

/// Entry point shared by the scheduler ticks and the manual trigger endpoint.
///
/// Returns immediately; the refresh itself runs in the background.
pub trait RefreshTrigger: Send + Sync {
    fn trigger(&self, resource: &str, source: TriggerSource)
        -> Result<TriggerOutcome, DomainError>;
}
