//! Edge error types.
//!
//! The scoring core itself is total and has no error path; these types
//! cover the persistence port and session-flow violations. Defined here
//! so the engine and callers can classify failures without string
//! matching.

use thiserror::Error;

use crate::engine::Stage;

/// Errors from a [`crate::traits::ProgressStore`] implementation.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The underlying storage could not be read or written.
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Stored state exists but could not be decoded.
    #[error("corrupted saved state: {0}")]
    Corrupted(#[from] serde_json::Error),
}

/// Session state-machine violations.
#[derive(Debug, Error)]
pub enum FlowError {
    /// The operation is not valid in the current stage.
    #[error("operation not valid in stage {0}")]
    WrongStage(Stage),

    /// No question with this id exists in the bank.
    #[error("unknown question id: {0}")]
    UnknownQuestion(u32),

    /// The answer's shape does not match the question's kind.
    #[error("answer shape does not match question {question} ({kind} expected)")]
    AnswerShape {
        question: u32,
        kind: &'static str,
    },

    /// Fewer selections than the question's minimum bound.
    #[error("question {question} requires at least {min} selection(s), got {got}")]
    TooFewSelections { question: u32, min: usize, got: usize },

    /// More selections than the question's maximum bound.
    #[error("question {question} allows at most {max} selection(s), got {got}")]
    TooManySelections { question: u32, max: usize, got: usize },

    /// The current question has no valid answer yet.
    #[error("question {0} has no valid answer yet")]
    Unanswered(u32),

    /// Already at the first question; cannot go back.
    #[error("already at the first question")]
    AtFirstQuestion,

    /// Already at the last question; submit instead of advancing.
    #[error("already at the last question")]
    AtLastQuestion,

    /// Results were already derived for this session.
    #[error("results were already derived for this session")]
    AlreadyDerived,
}
