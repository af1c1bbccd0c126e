//! Adapters issuing the side-effecting calls against the remote API.

pub mod api;
pub mod search;

pub use api::ConsoleApi;
pub use search::{SearchResults, SearchSequencer, SearchSession};
