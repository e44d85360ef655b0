pub mod broadcast;
pub mod cache;
pub mod upstream;
