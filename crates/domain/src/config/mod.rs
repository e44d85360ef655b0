//! Configuration module for Matchcast
//!
//! This module contains all configuration structures organized by concern:
//! - `root`: Main configuration and CLI overrides
//! - `server`: HTTP binding
//! - `upstream`: Football data provider endpoint and credentials
//! - `broadcast`: Channel hub sizing
//! - `cache`: Response cache housekeeping
//! - `resources`: Managed resource classes
//! - `logging`: Logging settings
//! - `errors`: Configuration errors

pub mod broadcast;
pub mod cache;
pub mod errors;
pub mod logging;
pub mod resources;
pub mod root;
pub mod server;
pub mod upstream;

pub use broadcast::BroadcastConfig;
pub use cache::CacheConfig;
pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use resources::ResourceConfig;
pub use root::{CliOverrides, Config};
pub use server::ServerConfig;
pub use upstream::UpstreamConfig;
