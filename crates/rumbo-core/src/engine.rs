//! Session engine: the assessment state machine.
//!
//! Owns the questionnaire, the roadmap catalog, and an injected
//! [`ProgressStore`]; drives the welcome → questions → loading → email →
//! results flow. The two derivation operations run exactly once per
//! session, at the loading → email boundary.
//!
//! Storage failures while loading saved state are logged and treated as
//! "no saved state"; they never propagate into the scoring path.

use chrono::Utc;
use uuid::Uuid;

use crate::error::FlowError;
use crate::model::{Answer, AnswerSet, Question, QuestionKind, Questionnaire};
use crate::profile::UserProfile;
use crate::roadmap::{Roadmap, RoadmapCatalog, RoadmapKind};
use crate::scoring::build_user_profile;
use crate::traits::{CompletionRecord, ProgressStore, SessionState};

/// Where a session currently is in the flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Welcome,
    Questions,
    Loading,
    Email,
    Results,
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Stage::Welcome => "welcome",
            Stage::Questions => "questions",
            Stage::Loading => "loading",
            Stage::Email => "email",
            Stage::Results => "results",
        };
        f.write_str(s)
    }
}

/// The assessment orchestrator.
pub struct AssessmentEngine {
    questionnaire: Questionnaire,
    catalog: RoadmapCatalog,
    store: Box<dyn ProgressStore>,
    stage: Stage,
    answers: AnswerSet,
    /// 1-based position within the questionnaire.
    position: u32,
    profile: Option<UserProfile>,
    matched: Option<RoadmapKind>,
}

impl AssessmentEngine {
    pub fn new(
        questionnaire: Questionnaire,
        catalog: RoadmapCatalog,
        store: Box<dyn ProgressStore>,
    ) -> Self {
        Self {
            questionnaire,
            catalog,
            store,
            stage: Stage::Welcome,
            answers: AnswerSet::new(),
            position: 1,
            profile: None,
            matched: None,
        }
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn questionnaire(&self) -> &Questionnaire {
        &self.questionnaire
    }

    pub fn catalog(&self) -> &RoadmapCatalog {
        &self.catalog
    }

    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    /// 1-based position of the question being shown.
    pub fn position(&self) -> u32 {
        self.position
    }

    pub fn total_questions(&self) -> usize {
        self.questionnaire.len()
    }

    /// The question at the current position.
    pub fn current_question(&self) -> Option<&Question> {
        self.questionnaire.questions.get(self.position as usize - 1)
    }

    /// The derived profile, available from the email stage onward.
    pub fn profile(&self) -> Option<&UserProfile> {
        self.profile.as_ref()
    }

    /// The matched bundle kind, available from the email stage onward.
    pub fn roadmap_kind(&self) -> Option<RoadmapKind> {
        self.matched
    }

    /// The matched roadmap, available from the email stage onward.
    pub fn roadmap(&self) -> Option<&Roadmap> {
        self.matched.map(|kind| self.catalog.get(kind))
    }

    /// Saved state from a previous session, if readable.
    ///
    /// Unreadable state (I/O failure, corrupted JSON) is downgraded to
    /// `None` so a stale store can never block the flow.
    pub fn saved_state(&self) -> Option<SessionState> {
        match self.store.load() {
            Ok(state) => state,
            Err(e) => {
                tracing::warn!("ignoring unreadable saved state: {e}");
                None
            }
        }
    }

    /// Begin a fresh run of the questions.
    pub fn start(&mut self) -> Result<(), FlowError> {
        self.ensure_stage(Stage::Welcome)?;
        self.answers.clear();
        self.position = 1;
        self.stage = Stage::Questions;
        Ok(())
    }

    /// Resume a previously saved session, or start fresh when nothing
    /// usable was saved. Returns whether anything was restored.
    pub fn resume(&mut self) -> Result<bool, FlowError> {
        self.ensure_stage(Stage::Welcome)?;
        match self.saved_state() {
            Some(state) if !state.answers.is_empty() => {
                let max = self.questionnaire.len().max(1) as u32;
                self.answers = state.answers;
                self.position = state.current_question.clamp(1, max);
                self.stage = Stage::Questions;
                Ok(true)
            }
            _ => {
                self.start()?;
                Ok(false)
            }
        }
    }

    /// Wipe saved progress and start over.
    pub fn discard(&mut self) -> Result<(), FlowError> {
        self.ensure_stage(Stage::Welcome)?;
        if let Err(e) = self.store.clear() {
            tracing::warn!("failed to clear saved state: {e}");
        }
        self.start()
    }

    /// Record (or re-record) the answer to a question.
    ///
    /// The maximum-selection bound is enforced here; the minimum bound is
    /// a gate on advancing, not on answering, so selections can be
    /// toggled freely.
    pub fn answer(&mut self, question_id: u32, answer: Answer) -> Result<(), FlowError> {
        self.ensure_stage(Stage::Questions)?;
        let question = self
            .questionnaire
            .question(question_id)
            .ok_or(FlowError::UnknownQuestion(question_id))?;

        if !question.accepts(&answer) {
            return Err(FlowError::AnswerShape {
                question: question_id,
                kind: match question.kind {
                    QuestionKind::Single => "single",
                    QuestionKind::Multi => "multi",
                },
            });
        }
        if let Answer::Tokens(tokens) = &answer {
            if let Some(max) = question.max_selections {
                if tokens.len() > max {
                    return Err(FlowError::TooManySelections {
                        question: question_id,
                        max,
                        got: tokens.len(),
                    });
                }
            }
        }

        self.answers.insert(question_id, answer);
        self.persist();
        Ok(())
    }

    /// Whether the current question has a valid, complete answer.
    pub fn can_proceed(&self) -> bool {
        self.current_question()
            .is_some_and(|q| Self::check_complete(q, &self.answers).is_ok())
    }

    /// Move to the next question.
    pub fn advance(&mut self) -> Result<(), FlowError> {
        self.ensure_stage(Stage::Questions)?;
        if let Some(question) = self.current_question() {
            Self::check_complete(question, &self.answers)?;
        }
        if self.position as usize >= self.questionnaire.len() {
            return Err(FlowError::AtLastQuestion);
        }
        self.position += 1;
        self.persist();
        Ok(())
    }

    /// Go back one question to revise an answer.
    pub fn back(&mut self) -> Result<(), FlowError> {
        self.ensure_stage(Stage::Questions)?;
        if self.position <= 1 {
            return Err(FlowError::AtFirstQuestion);
        }
        self.position -= 1;
        self.persist();
        Ok(())
    }

    /// Submit the finished questionnaire and enter the analysis stage.
    ///
    /// Requires a complete answer for every question in the bank.
    pub fn submit(&mut self) -> Result<(), FlowError> {
        self.ensure_stage(Stage::Questions)?;
        for question in &self.questionnaire.questions {
            Self::check_complete(question, &self.answers)?;
        }
        self.stage = Stage::Loading;
        Ok(())
    }

    /// Derive the profile and match the roadmap, exactly once.
    pub fn finish_analysis(&mut self) -> Result<(), FlowError> {
        self.ensure_stage(Stage::Loading)?;
        if self.profile.is_some() {
            return Err(FlowError::AlreadyDerived);
        }
        let profile = build_user_profile(&self.answers);
        self.matched = Some(crate::matcher::match_roadmap(&profile));
        self.profile = Some(profile);
        self.stage = Stage::Email;
        Ok(())
    }

    /// Pass the email-capture gate and reveal the results.
    ///
    /// The completion is recorded through the store; a write failure is
    /// logged but never hides the results from the user. The in-progress
    /// session is intentionally left in place — only an explicit
    /// [`discard`](Self::discard) wipes it.
    pub fn capture_contact(
        &mut self,
        email: &str,
        name: &str,
        country: &str,
    ) -> Result<CompletionRecord, FlowError> {
        self.ensure_stage(Stage::Email)?;
        // both are set together in finish_analysis
        let (profile, kind) = match (&self.profile, self.matched) {
            (Some(profile), Some(kind)) => (profile.clone(), kind),
            _ => return Err(FlowError::WrongStage(self.stage)),
        };

        let record = CompletionRecord {
            id: Uuid::new_v4(),
            email: email.trim().to_string(),
            name: name.trim().to_string(),
            country: country.trim().to_string(),
            answers: self.answers.clone(),
            profile,
            roadmap_id: self.catalog.get(kind).id.clone(),
            completed_at: Utc::now(),
        };

        if let Err(e) = self.store.record_completion(&record) {
            tracing::warn!("failed to record completion: {e}");
        }
        self.stage = Stage::Results;
        Ok(record)
    }

    /// A question's gate for advancing/submitting: answered, right shape,
    /// and at or above the minimum-selection bound.
    fn check_complete(question: &Question, answers: &AnswerSet) -> Result<(), FlowError> {
        let Some(answer) = answers.get(&question.id) else {
            return Err(FlowError::Unanswered(question.id));
        };
        if let Answer::Tokens(tokens) = answer {
            let min = question.min_selections.unwrap_or(0);
            if tokens.len() < min {
                return Err(FlowError::TooFewSelections {
                    question: question.id,
                    min,
                    got: tokens.len(),
                });
            }
        }
        if question.is_complete(answer) {
            Ok(())
        } else {
            Err(FlowError::Unanswered(question.id))
        }
    }

    fn ensure_stage(&self, expected: Stage) -> Result<(), FlowError> {
        if self.stage == expected {
            Ok(())
        } else {
            Err(FlowError::WrongStage(self.stage))
        }
    }

    fn persist(&self) {
        let state = SessionState {
            answers: self.answers.clone(),
            current_question: self.position,
            updated_at: Utc::now(),
        };
        if let Err(e) = self.store.save(&state) {
            tracing::warn!("failed to save progress: {e}");
        }
    }
}
