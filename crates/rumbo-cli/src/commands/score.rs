//! The `rumbo score` command: non-interactive scoring of a saved
//! answers file.

use std::path::PathBuf;

use anyhow::{Context, Result};

use rumbo_core::model::AnswerSet;
use rumbo_core::scoring::build_user_profile;
use rumbo_report::{markdown, ResultsView};

pub fn execute(
    answers_path: PathBuf,
    questions: Option<PathBuf>,
    roadmaps: Option<PathBuf>,
    output: Option<PathBuf>,
    format: String,
) -> Result<()> {
    let content = std::fs::read_to_string(&answers_path)
        .with_context(|| format!("failed to read answers file: {}", answers_path.display()))?;
    let answers: AnswerSet = serde_json::from_str(&content)
        .with_context(|| format!("failed to parse answers JSON: {}", answers_path.display()))?;

    let (questionnaire, catalog) =
        super::load_catalogs(questions.as_deref(), roadmaps.as_deref())?;

    for id in answers.keys() {
        if questionnaire.question(*id).is_none() {
            tracing::warn!("answer for unknown question id {id} is ignored by the profile");
        }
    }

    let profile = build_user_profile(&answers);
    let view = ResultsView::new(None, profile, &catalog);

    print_summary(&view);
    println!();
    println!("{}", markdown::render(&view));

    if let Some(dir) = &output {
        super::write_artifacts(&view, dir, &format)?;
    }

    Ok(())
}

fn print_summary(view: &ResultsView) {
    use comfy_table::{Cell, Table};

    let mut table = Table::new();
    table.set_header(vec!["Nivel", "Puntuación", "Contexto", "Prioridad", "Horas/semana", "Roadmap"]);
    table.add_row(vec![
        Cell::new(view.profile.level),
        Cell::new(view.profile.level_score),
        Cell::new(&view.profile.context),
        Cell::new(&view.profile.pain_point),
        Cell::new(view.profile.weekly_hours),
        Cell::new(&view.roadmap.id),
    ]);

    println!("{table}");
}
