//! Profile Builder: level scoring and profile assembly.
//!
//! Every function here is a total, deterministic pure function of its
//! answer set. Absent or mis-shaped answers degrade to a documented
//! default contribution instead of failing, so a partially corrupted
//! persisted answer set still produces a usable profile.

use crate::model::{question_ids, Answer, AnswerSet};
use crate::profile::{Context, LearningStyle, Level, PainPoint, Urgency, UserProfile};

/// Sentinel token in the tools multi-select meaning "none of the above".
///
/// Its presence forces the tools contribution to zero regardless of any
/// other selections in the set.
pub const NO_TOOLS_TOKEN: &str = "none";

/// Derive the proficiency level and its raw score.
///
/// Exactly three answers contribute, by fixed question id:
/// - knowledge self-assessment: its numeric value as-is (0-4),
/// - tool familiarity: a count-based contribution (see
///   [`tools_contribution`]),
/// - prompting experience: its numeric value as-is (0-2, half-steps).
///
/// No other answer may influence the level. The breakpoints are
/// product-tuned constants and are preserved exactly.
pub fn calculate_level(answers: &AnswerSet) -> (Level, f64) {
    let knowledge = number_answer(answers, question_ids::KNOWLEDGE);
    let tools = tools_contribution(answers.get(&question_ids::TOOLS));
    let prompting = number_answer(answers, question_ids::PROMPTING);

    let score = knowledge + tools + prompting;
    (Level::from_score(score), score)
}

/// Score the tool-familiarity multi-select by selection count.
///
/// The `"none"` sentinel wins over everything else in the set.
fn tools_contribution(answer: Option<&Answer>) -> f64 {
    let Some(Answer::Tokens(tools)) = answer else {
        return 0.0;
    };
    if tools.iter().any(|t| t == NO_TOOLS_TOKEN) {
        return 0.0;
    }
    match tools.len() {
        n if n >= 5 => 1.5,
        n if n >= 3 => 1.0,
        n if n >= 1 => 0.5,
        _ => 0.0,
    }
}

/// Build the complete profile from a (nominally complete) answer set.
///
/// Each field is extracted by fixed question id with a shape check;
/// absent or mis-shaped fields take the documented default. Unknown
/// string tokens are preserved (`Otro`), not coerced to defaults — the
/// matcher decides what to do with them.
pub fn build_user_profile(answers: &AnswerSet) -> UserProfile {
    let (level, level_score) = calculate_level(answers);

    UserProfile {
        level,
        level_score,
        context: token_answer(answers, question_ids::CONTEXT, Context::Freelancer),
        pain_point: token_answer(answers, question_ids::PAIN_POINT, PainPoint::Contenido),
        goals: token_list_answer(answers, question_ids::GOALS),
        urgency: token_answer(answers, question_ids::URGENCY, Urgency::Media),
        weekly_hours: number_answer_or(answers, question_ids::WEEKLY_HOURS, 4.0),
        learning_style: token_answer(answers, question_ids::LEARNING_STYLE, LearningStyle::Mixto),
        barriers: token_list_answer(answers, question_ids::BARRIERS),
    }
}

fn number_answer(answers: &AnswerSet, id: u32) -> f64 {
    number_answer_or(answers, id, 0.0)
}

fn number_answer_or(answers: &AnswerSet, id: u32, default: f64) -> f64 {
    match answers.get(&id) {
        Some(Answer::Number(n)) => *n,
        _ => default,
    }
}

fn token_answer<T: From<String>>(answers: &AnswerSet, id: u32, default: T) -> T {
    match answers.get(&id) {
        Some(Answer::Token(s)) => T::from(s.clone()),
        _ => default,
    }
}

fn token_list_answer<T: From<String>>(answers: &AnswerSet, id: u32) -> Vec<T> {
    match answers.get(&id) {
        Some(Answer::Tokens(tokens)) => tokens.iter().cloned().map(T::from).collect(),
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::{Barrier, Goal};

    fn tokens(values: &[&str]) -> Answer {
        Answer::Tokens(values.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn empty_answers_score_zero() {
        let (level, score) = calculate_level(&AnswerSet::new());
        assert_eq!(level, Level::Novato);
        assert_eq!(score, 0.0);
    }

    #[test]
    fn full_marks_scenario() {
        // 4 + 1.5 + 2 = 7.5
        let mut answers = AnswerSet::new();
        answers.insert(1, Answer::Number(4.0));
        answers.insert(
            2,
            tokens(&["chatgpt", "notion", "automation", "copywriting", "imagen"]),
        );
        answers.insert(3, Answer::Number(2.0));

        let (level, score) = calculate_level(&answers);
        assert_eq!(score, 7.5);
        assert_eq!(level, Level::Avanzado);
    }

    #[test]
    fn none_sentinel_scenario() {
        let mut answers = AnswerSet::new();
        answers.insert(1, Answer::Number(0.0));
        answers.insert(2, tokens(&["none"]));
        answers.insert(3, Answer::Number(0.0));

        let (level, score) = calculate_level(&answers);
        assert_eq!(score, 0.0);
        assert_eq!(level, Level::Novato);
    }

    #[test]
    fn none_sentinel_overrides_other_selections() {
        let mut answers = AnswerSet::new();
        answers.insert(2, tokens(&["chatgpt", "notion", "none", "imagen", "copywriting"]));
        let (_, score) = calculate_level(&answers);
        assert_eq!(score, 0.0);
    }

    #[test]
    fn tools_count_breakpoints() {
        let cases: [(&[&str], f64); 5] = [
            (&[], 0.0),
            (&["chatgpt"], 0.5),
            (&["chatgpt", "notion", "imagen"], 1.0),
            (&["chatgpt", "notion", "imagen", "automation"], 1.0),
            (&["chatgpt", "notion", "imagen", "automation", "copywriting"], 1.5),
        ];
        for (selection, expected) in cases {
            let mut answers = AnswerSet::new();
            answers.insert(2, tokens(selection));
            let (_, score) = calculate_level(&answers);
            assert_eq!(score, expected, "selection {selection:?}");
        }
    }

    #[test]
    fn mistyped_answers_contribute_zero() {
        let mut answers = AnswerSet::new();
        // knowledge as a token, tools as a scalar: both degrade to zero
        answers.insert(1, Answer::Token("mucho".into()));
        answers.insert(2, Answer::Number(5.0));
        answers.insert(3, Answer::Number(1.0));

        let (level, score) = calculate_level(&answers);
        assert_eq!(score, 1.0);
        assert_eq!(level, Level::Novato);
    }

    #[test]
    fn score_monotonic_in_each_contribution() {
        let base = |q1: f64, q2: &[&str], q3: f64| {
            let mut answers = AnswerSet::new();
            answers.insert(1, Answer::Number(q1));
            answers.insert(2, tokens(q2));
            answers.insert(3, Answer::Number(q3));
            calculate_level(&answers).1
        };

        // raising any one answer never lowers the score
        assert!(base(1.0, &["chatgpt"], 0.5) <= base(2.0, &["chatgpt"], 0.5));
        assert!(base(1.0, &["chatgpt"], 0.5) <= base(1.0, &["chatgpt", "notion", "imagen"], 0.5));
        assert!(base(1.0, &["chatgpt"], 0.5) <= base(1.0, &["chatgpt"], 2.0));
    }

    #[test]
    fn level_only_depends_on_designated_answers() {
        let mut answers = AnswerSet::new();
        answers.insert(1, Answer::Number(2.0));
        let baseline = calculate_level(&answers);

        answers.insert(4, Answer::Token("estudiante".into()));
        answers.insert(8, Answer::Number(12.0));
        answers.insert(10, tokens(&["tecnico", "tiempo"]));
        assert_eq!(calculate_level(&answers), baseline);
    }

    #[test]
    fn empty_answer_set_yields_default_profile() {
        assert_eq!(build_user_profile(&AnswerSet::new()), UserProfile::default());
    }

    #[test]
    fn profile_extracts_all_fields() {
        let mut answers = AnswerSet::new();
        answers.insert(1, Answer::Number(3.0));
        answers.insert(2, tokens(&["chatgpt", "notion", "imagen"]));
        answers.insert(3, Answer::Number(1.0));
        answers.insert(4, Answer::Token("empleado".into()));
        answers.insert(5, Answer::Token("admin".into()));
        answers.insert(6, tokens(&["productividad", "automatizacion"]));
        answers.insert(7, Answer::Token("alta".into()));
        answers.insert(8, Answer::Number(8.0));
        answers.insert(9, Answer::Token("practico".into()));
        answers.insert(10, tokens(&["tiempo", "tecnico"]));

        let profile = build_user_profile(&answers);
        assert_eq!(profile.level, Level::Avanzado);
        assert_eq!(profile.level_score, 5.0);
        assert_eq!(profile.context, Context::Empleado);
        assert_eq!(profile.pain_point, PainPoint::Admin);
        assert_eq!(profile.goals, vec![Goal::Productividad, Goal::Automatizacion]);
        assert_eq!(profile.urgency, Urgency::Alta);
        assert_eq!(profile.weekly_hours, 8.0);
        assert_eq!(profile.learning_style, LearningStyle::Practico);
        // barrier order is preserved; the first entry drives reassurance
        assert_eq!(profile.barriers, vec![Barrier::Tiempo, Barrier::Tecnico]);
    }

    #[test]
    fn unknown_tokens_survive_into_profile() {
        let mut answers = AnswerSet::new();
        answers.insert(4, Answer::Token("unknown-token".into()));
        answers.insert(5, Answer::Token("unknown-token".into()));

        let profile = build_user_profile(&answers);
        assert_eq!(profile.context, Context::Otro("unknown-token".into()));
        assert_eq!(profile.pain_point, PainPoint::Otro("unknown-token".into()));
    }
}
