//! The persistence port and its record types.
//!
//! The session engine never touches storage directly; it talks to a
//! [`ProgressStore`] injected by the caller. Implementations live in the
//! `rumbo-store` crate.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::StoreError;
use crate::model::AnswerSet;
use crate::profile::UserProfile;

/// In-progress session state, persisted verbatim after every answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionState {
    /// The answers given so far (possibly sparse).
    pub answers: AnswerSet,
    /// The question the user is currently on (1-based).
    pub current_question: u32,
    /// When this state was last written.
    pub updated_at: DateTime<Utc>,
}

/// A completed assessment, recorded once past the email-capture gate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionRecord {
    pub id: Uuid,
    pub email: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub country: String,
    pub answers: AnswerSet,
    pub profile: UserProfile,
    /// Catalog key of the matched roadmap.
    pub roadmap_id: String,
    pub completed_at: DateTime<Utc>,
}

/// Local persistence for assessment progress and completions.
///
/// Implementations must be infallible to *absence*: a missing record is
/// `Ok(None)`, never an error. Decoding failures are errors so callers
/// can decide how to degrade (the engine treats them as "no saved
/// state").
pub trait ProgressStore: Send + Sync {
    /// Persist the in-progress session, replacing any previous state.
    fn save(&self, state: &SessionState) -> Result<(), StoreError>;

    /// Load the in-progress session, if one was saved.
    fn load(&self) -> Result<Option<SessionState>, StoreError>;

    /// Remove any in-progress session.
    fn clear(&self) -> Result<(), StoreError>;

    /// Record a completed assessment, replacing any previous record.
    fn record_completion(&self, record: &CompletionRecord) -> Result<(), StoreError>;

    /// Load the latest completed assessment, if any.
    fn load_completion(&self) -> Result<Option<CompletionRecord>, StoreError>;
}
