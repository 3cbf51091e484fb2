//! Error types for the fulfillment layer

use crate::{ActionId, Stage};

/// Errors that can occur while driving an order through the workflow
#[derive(Debug, thiserror::Error)]
pub enum FulfillmentError {
    #[error("required order field missing or malformed: {0}")]
    MissingField(&'static str),

    #[error("unknown action id: {0}")]
    UnknownAction(String),

    #[error("action '{action}' was not offered for stage {stage}")]
    ActionNotOffered { action: ActionId, stage: Stage },

    #[error("no transition from stage {stage} for action '{action}'")]
    NoTransition { stage: Stage, action: ActionId },

    #[error("task for stage {0} has not been completed")]
    TaskNotCompleted(Stage),

    #[error("task for stage {0} is already completed")]
    TaskAlreadyCompleted(Stage),

    #[error("archive gateway error: {0}")]
    Archive(#[from] ArchiveError),
}

/// Result type alias for fulfillment operations
pub type FulfillmentResult<T> = Result<T, FulfillmentError>;

/// Errors surfaced by the archive gateway collaborator.
///
/// The gateway itself is an external service; a failure here is fatal to
/// the Close step, which defines no partial-close state.
#[derive(Debug, thiserror::Error)]
pub enum ArchiveError {
    #[error("archive store unavailable: {0}")]
    Unavailable(String),

    #[error("archive store rejected order {0}")]
    Rejected(String),
}
