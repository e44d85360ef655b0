use crate::channel::Channel;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

/// Deterministic identity of an upstream resource.
///
/// Two logically identical requests always produce the same key, so the key
/// doubles as the cache key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ResourceKey(Arc<str>);

impl ResourceKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ResourceKey {
    fn from(value: &str) -> Self {
        Self(Arc::from(value))
    }
}

impl From<String> for ResourceKey {
    fn from(value: String) -> Self {
        Self(Arc::from(value))
    }
}

impl fmt::Display for ResourceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The distinguishing parameters of one upstream call.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ResourceRequest {
    /// Every fixture currently in play.
    LiveFixtures,
    /// League table for one season.
    Standings { league_id: u32, season: u16 },
    /// Per-team statistics of a single fixture.
    FixtureStatistics { fixture_id: u64 },
    /// Season aggregate for a team inside one league.
    TeamStatistics {
        team_id: u32,
        league_id: u32,
        season: u16,
    },
}

impl ResourceRequest {
    pub fn key(&self) -> ResourceKey {
        match self {
            Self::LiveFixtures => ResourceKey::from("live"),
            Self::Standings { league_id, season } => {
                ResourceKey::from(format!("standings:{league_id}:{season}"))
            }
            Self::FixtureStatistics { fixture_id } => {
                ResourceKey::from(format!("fixture-stats:{fixture_id}"))
            }
            Self::TeamStatistics {
                team_id,
                league_id,
                season,
            } => ResourceKey::from(format!("team-stats:{team_id}:{league_id}:{season}")),
        }
    }

    /// Broadcast topic for this resource. Standings and statistics are scoped
    /// by entity, live fixtures share one fixed topic.
    pub fn channel(&self) -> Channel {
        match self {
            Self::LiveFixtures => Channel::live_matches(),
            Self::Standings { league_id, .. } => {
                Channel::from_segments(&["standings", &league_id.to_string()])
            }
            Self::FixtureStatistics { fixture_id } => {
                Channel::from_segments(&["match-stats", &fixture_id.to_string()])
            }
            Self::TeamStatistics { team_id, .. } => {
                Channel::from_segments(&["team-stats", &team_id.to_string()])
            }
        }
    }

    pub fn upstream_path(&self) -> &'static str {
        match self {
            Self::LiveFixtures => "/fixtures",
            Self::Standings { .. } => "/standings",
            Self::FixtureStatistics { .. } => "/fixtures/statistics",
            Self::TeamStatistics { .. } => "/teams/statistics",
        }
    }

    pub fn upstream_query(&self) -> Vec<(&'static str, String)> {
        match self {
            Self::LiveFixtures => vec![("live", "all".to_string())],
            Self::Standings { league_id, season } => vec![
                ("league", league_id.to_string()),
                ("season", season.to_string()),
            ],
            Self::FixtureStatistics { fixture_id } => vec![("fixture", fixture_id.to_string())],
            Self::TeamStatistics {
                team_id,
                league_id,
                season,
            } => vec![
                ("team", team_id.to_string()),
                ("league", league_id.to_string()),
                ("season", season.to_string()),
            ],
        }
    }
}

/// Whether a resource class memoises its upstream responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CachePolicy {
    /// Always fetch, never read or write the cache.
    Disabled,
    Ttl(Duration),
}

impl CachePolicy {
    /// A zero TTL disables caching.
    pub fn from_secs(secs: u64) -> Self {
        if secs == 0 {
            Self::Disabled
        } else {
            Self::Ttl(Duration::from_secs(secs))
        }
    }

    pub fn ttl(&self) -> Option<Duration> {
        match self {
            Self::Disabled => None,
            Self::Ttl(ttl) => Some(*ttl),
        }
    }

    pub fn is_enabled(&self) -> bool {
        matches!(self, Self::Ttl(_))
    }
}

/// A category of periodically refreshed data: one upstream request, one cache
/// key, one broadcast channel.
#[derive(Debug, Clone)]
pub struct ResourceClass {
    pub name: Arc<str>,
    pub request: ResourceRequest,
    /// `None` means the class only refreshes on manual trigger.
    pub refresh_interval: Option<Duration>,
    pub cache: CachePolicy,
}

impl ResourceClass {
    pub fn new(name: impl Into<Arc<str>>, request: ResourceRequest) -> Self {
        Self {
            name: name.into(),
            request,
            refresh_interval: None,
            cache: CachePolicy::Disabled,
        }
    }

    pub fn with_refresh_interval(mut self, interval: Duration) -> Self {
        self.refresh_interval = Some(interval);
        self
    }

    pub fn with_cache(mut self, cache: CachePolicy) -> Self {
        self.cache = cache;
        self
    }

    pub fn key(&self) -> ResourceKey {
        self.request.key()
    }

    pub fn channel(&self) -> Channel {
        self.request.channel()
    }

    pub fn is_scheduled(&self) -> bool {
        self.refresh_interval.is_some()
    }
}
