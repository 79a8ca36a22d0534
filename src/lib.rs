// Library root: re-exports all modules so integration tests and external
// consumers can access the crate's public API.

pub mod config;
pub mod dealer;
pub mod ingest;
pub mod player;
pub mod report;
pub mod strategy;
pub mod team;
