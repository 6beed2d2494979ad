//! Core data model types for rumbo.
//!
//! These are the fundamental types the entire rumbo system uses to
//! represent questions, raw answers, and the question bank.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Fixed question identifiers the scoring engine depends on.
///
/// The built-in bank numbers its questions 1..=10 and the profile builder
/// reads them by these ids; custom banks must keep the numbering stable.
pub mod question_ids {
    /// Self-assessed AI knowledge (numeric, 0-4).
    pub const KNOWLEDGE: u32 = 1;
    /// Tool familiarity (multi-select of tool tokens).
    pub const TOOLS: u32 = 2;
    /// Self-assessed prompting experience (numeric, 0-2 with half-steps).
    pub const PROMPTING: u32 = 3;
    /// Professional situation.
    pub const CONTEXT: u32 = 4;
    /// Main time-consuming work area.
    pub const PAIN_POINT: u32 = 5;
    /// Learning goals (multi-select, at most two).
    pub const GOALS: u32 = 6;
    /// Desired timeline for results.
    pub const URGENCY: u32 = 7;
    /// Weekly hours available for study (numeric).
    pub const WEEKLY_HOURS: u32 = 8;
    /// Preferred learning style.
    pub const LEARNING_STYLE: u32 = 9;
    /// Past barriers to learning (multi-select, order-sensitive).
    pub const BARRIERS: u32 = 10;
}

/// A single response to one question.
///
/// The shape depends on the question: single-select questions produce a
/// scalar (`Number` or `Token`), multi-select questions produce `Tokens`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Answer {
    /// Numeric option value (e.g. a self-assessment score).
    Number(f64),
    /// Categorical option value.
    Token(String),
    /// Multi-select option values, in selection order.
    Tokens(Vec<String>),
}

impl Answer {
    /// Numeric value, if this answer is a number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Answer::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Token value, if this answer is a single token.
    pub fn as_token(&self) -> Option<&str> {
        match self {
            Answer::Token(t) => Some(t),
            _ => None,
        }
    }

    /// Token list, if this answer is a multi-select.
    pub fn as_tokens(&self) -> Option<&[String]> {
        match self {
            Answer::Tokens(t) => Some(t),
            _ => None,
        }
    }
}

/// Raw answers keyed by question id.
///
/// Sparse while the user is mid-flow; completeness is a precondition for
/// profile building only, never for storage.
pub type AnswerSet = BTreeMap<u32, Answer>;

/// Whether a question accepts one selection or several.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionKind {
    Single,
    Multi,
}

impl fmt::Display for QuestionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuestionKind::Single => write!(f, "single"),
            QuestionKind::Multi => write!(f, "multi"),
        }
    }
}

impl FromStr for QuestionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "single" | "radio" => Ok(QuestionKind::Single),
            "multi" | "checkbox" => Ok(QuestionKind::Multi),
            other => Err(format!("unknown question kind: {other}")),
        }
    }
}

/// The value an option contributes to the answer when selected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    Number(f64),
    Token(String),
}

impl OptionValue {
    /// The token form of this value, as stored in a multi-select answer.
    pub fn to_token(&self) -> String {
        match self {
            OptionValue::Number(n) => n.to_string(),
            OptionValue::Token(t) => t.clone(),
        }
    }
}

/// One selectable option of a question.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionOption {
    /// Stable option identifier (e.g. "4b").
    pub id: String,
    /// Display text.
    pub text: String,
    /// Value recorded when this option is selected.
    pub value: OptionValue,
}

/// A single question of the assessment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    /// Stable identifier; the scoring engine reads answers by this id.
    pub id: u32,
    /// Display category (e.g. "Nivel", "Contexto").
    #[serde(default)]
    pub category: String,
    /// The question text.
    pub text: String,
    /// Single- or multi-select.
    pub kind: QuestionKind,
    /// The selectable options.
    #[serde(default)]
    pub options: Vec<QuestionOption>,
    /// Minimum selections for multi-select questions.
    #[serde(default)]
    pub min_selections: Option<usize>,
    /// Maximum selections for multi-select questions.
    #[serde(default)]
    pub max_selections: Option<usize>,
}

impl Question {
    /// Whether an answer's shape matches this question's kind.
    pub fn accepts(&self, answer: &Answer) -> bool {
        match (self.kind, answer) {
            (QuestionKind::Single, Answer::Number(_) | Answer::Token(_)) => true,
            (QuestionKind::Multi, Answer::Tokens(_)) => true,
            _ => false,
        }
    }

    /// Whether an answer satisfies this question's minimum-selection bound.
    ///
    /// Single-select questions are complete with any scalar answer; a
    /// numeric 0 is a valid answer.
    pub fn is_complete(&self, answer: &Answer) -> bool {
        if !self.accepts(answer) {
            return false;
        }
        match answer {
            Answer::Tokens(tokens) => tokens.len() >= self.min_selections.unwrap_or(0),
            _ => true,
        }
    }
}

/// An ordered bank of assessment questions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Questionnaire {
    /// Unique identifier for this bank.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Description shown on the welcome screen.
    #[serde(default)]
    pub description: String,
    /// The questions, in presentation order.
    pub questions: Vec<Question>,
}

impl Questionnaire {
    /// Look up a question by id.
    pub fn question(&self, id: u32) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == id)
    }

    /// Number of questions in the bank.
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Whether the bank has no questions.
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}
