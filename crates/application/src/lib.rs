//! Matchcast Application Layer
//!
//! Ports implemented by the infrastructure layer and the use cases that drive
//! them. Nothing in here performs I/O directly.
pub mod ports;
pub mod services;
pub mod use_cases;
