//! TOML catalog parser and validation.
//!
//! Loads question banks and roadmap catalogs from TOML files, validates
//! them for common authoring mistakes, and exposes the built-in catalogs
//! embedded in the crate.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::model::{
    question_ids, OptionValue, Question, QuestionKind, QuestionOption, Questionnaire,
};
use crate::roadmap::{Roadmap, RoadmapCatalog, RoadmapKind};

/// The built-in question bank, verbatim.
pub const BUILTIN_QUESTIONS_TOML: &str = include_str!("../assets/questions.toml");

/// The built-in roadmap catalog, verbatim.
pub const BUILTIN_ROADMAPS_TOML: &str = include_str!("../assets/roadmaps.toml");

/// Intermediate TOML structure for question bank files.
#[derive(Debug, Deserialize)]
struct TomlQuestionFile {
    questionnaire: TomlQuestionnaireHeader,
    #[serde(default)]
    questions: Vec<TomlQuestion>,
}

#[derive(Debug, Deserialize)]
struct TomlQuestionnaireHeader {
    id: String,
    name: String,
    #[serde(default)]
    description: String,
}

#[derive(Debug, Deserialize)]
struct TomlQuestion {
    id: u32,
    #[serde(default)]
    category: String,
    text: String,
    kind: String,
    #[serde(default)]
    options: Vec<TomlOption>,
    #[serde(default)]
    min_selections: Option<usize>,
    #[serde(default)]
    max_selections: Option<usize>,
}

#[derive(Debug, Deserialize)]
struct TomlOption {
    id: String,
    text: String,
    value: OptionValue,
}

#[derive(Debug, Deserialize)]
struct TomlRoadmapFile {
    #[serde(default)]
    roadmaps: Vec<Roadmap>,
}

/// Parse a question bank from a TOML string.
pub fn parse_questionnaire_str(content: &str, source_path: &Path) -> Result<Questionnaire> {
    let parsed: TomlQuestionFile = toml::from_str(content)
        .with_context(|| format!("failed to parse TOML: {}", source_path.display()))?;

    let questions = parsed
        .questions
        .into_iter()
        .map(|q| {
            let kind: QuestionKind = q
                .kind
                .parse()
                .map_err(|e: String| anyhow::anyhow!("question {}: {}", q.id, e))?;

            let options = q
                .options
                .into_iter()
                .map(|o| QuestionOption {
                    id: o.id,
                    text: o.text,
                    value: o.value,
                })
                .collect();

            Ok(Question {
                id: q.id,
                category: q.category,
                text: q.text,
                kind,
                options,
                min_selections: q.min_selections,
                max_selections: q.max_selections,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(Questionnaire {
        id: parsed.questionnaire.id,
        name: parsed.questionnaire.name,
        description: parsed.questionnaire.description,
        questions,
    })
}

/// Parse a question bank from a TOML file.
pub fn parse_questionnaire(path: &Path) -> Result<Questionnaire> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read question bank: {}", path.display()))?;
    parse_questionnaire_str(&content, path)
}

/// Parse a roadmap catalog from a TOML string.
///
/// The file must define a bundle with id `"default"`; it becomes the
/// catalog's guaranteed fallback.
pub fn parse_roadmaps_str(content: &str, source_path: &Path) -> Result<RoadmapCatalog> {
    let parsed: TomlRoadmapFile = toml::from_str(content)
        .with_context(|| format!("failed to parse TOML: {}", source_path.display()))?;

    let mut bundles = Vec::new();
    let mut default = None;
    for roadmap in parsed.roadmaps {
        if roadmap.id == RoadmapKind::General.as_str() {
            default = Some(roadmap);
        } else {
            bundles.push(roadmap);
        }
    }

    let default = default.ok_or_else(|| {
        anyhow::anyhow!(
            "roadmap catalog {} must define a \"default\" bundle",
            source_path.display()
        )
    })?;

    Ok(RoadmapCatalog::new(bundles, default))
}

/// Parse a roadmap catalog from a TOML file.
pub fn parse_roadmaps(path: &Path) -> Result<RoadmapCatalog> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read roadmap catalog: {}", path.display()))?;
    parse_roadmaps_str(&content, path)
}

/// The question bank shipped with the crate.
pub fn builtin_questionnaire() -> Result<Questionnaire> {
    parse_questionnaire_str(BUILTIN_QUESTIONS_TOML, Path::new("<builtin questions>"))
}

/// The roadmap catalog shipped with the crate.
pub fn builtin_catalog() -> Result<RoadmapCatalog> {
    parse_roadmaps_str(BUILTIN_ROADMAPS_TOML, Path::new("<builtin roadmaps>"))
}

/// A warning from catalog validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// The question id or bundle id the warning refers to, if any.
    pub subject: Option<String>,
    /// Warning message.
    pub message: String,
}

impl ValidationWarning {
    fn new(subject: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            subject: Some(subject.into()),
            message: message.into(),
        }
    }

    fn general(message: impl Into<String>) -> Self {
        Self {
            subject: None,
            message: message.into(),
        }
    }
}

/// Validate a question bank for common authoring mistakes.
pub fn validate_questionnaire(questionnaire: &Questionnaire) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    // Duplicate question ids
    let mut seen = std::collections::HashSet::new();
    for q in &questionnaire.questions {
        if !seen.insert(q.id) {
            warnings.push(ValidationWarning::new(
                q.id.to_string(),
                format!("duplicate question id: {}", q.id),
            ));
        }
    }

    for q in &questionnaire.questions {
        let subject = q.id.to_string();

        if q.text.trim().is_empty() {
            warnings.push(ValidationWarning::new(&subject, "question text is empty"));
        }
        if q.options.is_empty() {
            warnings.push(ValidationWarning::new(&subject, "question has no options"));
        }

        // Duplicate option ids within a question
        let mut option_ids = std::collections::HashSet::new();
        for o in &q.options {
            if !option_ids.insert(o.id.as_str()) {
                warnings.push(ValidationWarning::new(
                    &subject,
                    format!("duplicate option id: {}", o.id),
                ));
            }
        }

        match q.kind {
            QuestionKind::Single => {
                if q.min_selections.is_some() || q.max_selections.is_some() {
                    warnings.push(ValidationWarning::new(
                        &subject,
                        "selection bounds have no effect on single-select questions",
                    ));
                }
            }
            QuestionKind::Multi => {
                if let (Some(min), Some(max)) = (q.min_selections, q.max_selections) {
                    if min > max {
                        warnings.push(ValidationWarning::new(
                            &subject,
                            format!("min_selections ({min}) exceeds max_selections ({max})"),
                        ));
                    }
                }
                if let Some(min) = q.min_selections {
                    if min > q.options.len() {
                        warnings.push(ValidationWarning::new(
                            &subject,
                            format!(
                                "min_selections ({min}) exceeds the option count ({})",
                                q.options.len()
                            ),
                        ));
                    }
                }
            }
        }
    }

    // The scoring engine reads these three by fixed id
    for (id, label, numeric) in [
        (question_ids::KNOWLEDGE, "knowledge self-assessment", true),
        (question_ids::TOOLS, "tool familiarity", false),
        (question_ids::PROMPTING, "prompting experience", true),
    ] {
        match questionnaire.question(id) {
            None => warnings.push(ValidationWarning::general(format!(
                "level question {id} ({label}) is missing; its score contribution will always be zero"
            ))),
            Some(q) => {
                let expected = if numeric {
                    QuestionKind::Single
                } else {
                    QuestionKind::Multi
                };
                if q.kind != expected {
                    warnings.push(ValidationWarning::new(
                        id.to_string(),
                        format!("level question {id} ({label}) should be {expected}-select"),
                    ));
                }
                if numeric
                    && q.options
                        .iter()
                        .any(|o| !matches!(o.value, OptionValue::Number(_)))
                {
                    warnings.push(ValidationWarning::new(
                        id.to_string(),
                        format!("level question {id} ({label}) has non-numeric option values"),
                    ));
                }
            }
        }
    }

    warnings
}

/// Validate a roadmap catalog for common authoring mistakes.
pub fn validate_catalog(catalog: &RoadmapCatalog) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    // Every bundle the matcher can reach should exist
    for kind in RoadmapKind::ALL {
        if !catalog.contains(kind) {
            warnings.push(ValidationWarning::general(format!(
                "no bundle for \"{kind}\"; those profiles will see the default roadmap"
            )));
        }
    }

    // Bundles the matcher can never reach
    for id in catalog.ids() {
        if id.parse::<RoadmapKind>().is_err() {
            warnings.push(ValidationWarning::new(
                id,
                "bundle is unreachable: no matcher rule selects this id",
            ));
        }
    }

    for roadmap in catalog.iter() {
        let subject = roadmap.id.clone();

        if roadmap.profile_name.trim().is_empty() {
            warnings.push(ValidationWarning::new(&subject, "profile_name is empty"));
        }
        if roadmap.phases.len() != 3 {
            warnings.push(ValidationWarning::new(
                &subject,
                format!("expected 3 phases, found {}", roadmap.phases.len()),
            ));
        }
        for (index, phase) in roadmap.phases.iter().enumerate() {
            if phase.number != index as u32 + 1 {
                warnings.push(ValidationWarning::new(
                    &subject,
                    format!(
                        "phase {} is numbered {}, expected {}",
                        index + 1,
                        phase.number,
                        index + 1
                    ),
                ));
            }
            if phase.skills.is_empty() {
                warnings.push(ValidationWarning::new(
                    &subject,
                    format!("phase {} lists no skills", phase.number),
                ));
            }
        }
    }

    warnings
}
