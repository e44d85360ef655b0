#![allow(dead_code)]


pub use fixtures::*;
pub use scripted_fetcher::ScriptedFetcher;
