pub mod infrastructure;
pub mod use_cases;

pub use infrastructure::{Infrastructure, Resources};
pub use use_cases::{app_state, UseCases};
