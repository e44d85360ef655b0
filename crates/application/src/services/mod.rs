pub mod fetch_gate;
pub mod resource_catalog;

pub use fetch_gate::{FetchGate, FetchPermit};
pub use resource_catalog::ResourceCatalog;
