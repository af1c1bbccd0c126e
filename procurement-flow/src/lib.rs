//! procurement-flow: the procurement creation workflow for the business console.
//!
//! An explicit state object (`workflow::WorkflowState`) advanced by pure
//! transition functions, plus an adapter layer (`services::ConsoleApi`)
//! issuing the side-effecting calls against the remote console API. No
//! UI framework is assumed; the host wires user events to these types.
pub mod models;
pub mod services;
pub mod workflow;

pub use console_core::error::FlowError;
pub use console_core::pagination::Page;
