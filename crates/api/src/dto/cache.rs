use matchcast_application::ports::CacheStats;
use serde::Serialize;

#[derive(Serialize, Debug, Clone)]
pub struct CacheStatsResponse {
    pub total_entries: usize,
    pub hits: u64,
    pub misses: u64,
    pub insertions: u64,
    pub expired_reads: u64,
    pub purged: u64,
    pub hit_rate: f64,
}

impl From<CacheStats> for CacheStatsResponse {
    fn from(stats: CacheStats) -> Self {
        Self {
            total_entries: stats.entries,
            hits: stats.hits,
            misses: stats.misses,
            insertions: stats.insertions,
            expired_reads: stats.expired_reads,
            purged: stats.purged,
            hit_rate: stats.hit_rate(),
        }
    }
}
