//! The procurement creation workflow: an explicit state object with
//! pure transition functions.

pub mod assembler;
pub mod items;
pub mod state;
pub mod validation;

pub use assembler::SubmissionAssembler;
pub use items::ItemAccumulator;
pub use state::{Step, WorkflowState};
