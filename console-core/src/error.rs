use thiserror::Error;

/// Error taxonomy for the procurement creation workflow.
///
/// `Validation` and `Submission` are user-visible and recoverable by
/// user action; `IncompleteState` indicates the sequencer was bypassed
/// and is a programming error on the caller's side.
#[derive(Debug, Error)]
pub enum FlowError {
    #[error("{field}: {message}")]
    Validation { field: &'static str, message: String },

    #[error("search failed: {0}")]
    Search(String),

    #[error("workflow state incomplete: {0}")]
    IncompleteState(&'static str),

    #[error("submission failed: {0}")]
    Submission(String),

    #[error("request timed out")]
    Timeout,

    #[error("a submission is already in flight")]
    SubmitInFlight,
}

impl FlowError {
    /// Build a validation error for a single field.
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        FlowError::Validation {
            field,
            message: message.into(),
        }
    }

    /// Name of the offending field, for inline display next to the input.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            FlowError::Validation { field, .. } => Some(field),
            _ => None,
        }
    }

    /// Whether the user may simply retry the failed action unchanged.
    ///
    /// Nothing is retried automatically; recovery is always user-initiated.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            FlowError::Search(_)
                | FlowError::Submission(_)
                | FlowError::Timeout
                | FlowError::SubmitInFlight
        )
    }
}
