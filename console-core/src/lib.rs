//! console-core: Shared infrastructure for the business console workflow crates.
pub mod config;
pub mod error;
pub mod pagination;
pub mod telemetry;

pub use serde;
pub use tracing;
