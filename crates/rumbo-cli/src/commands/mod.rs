//! Subcommand implementations and shared helpers.

pub mod init;
pub mod run;
pub mod score;
pub mod validate;

use std::path::Path;

use anyhow::Result;

use rumbo_core::catalog;
use rumbo_core::model::Questionnaire;
use rumbo_core::roadmap::RoadmapCatalog;
use rumbo_report::{html, markdown, ResultsView};

/// Load the question bank and roadmap catalog, falling back to the
/// built-ins when no override paths are given.
pub(crate) fn load_catalogs(
    questions: Option<&Path>,
    roadmaps: Option<&Path>,
) -> Result<(Questionnaire, RoadmapCatalog)> {
    let questionnaire = match questions {
        Some(path) => catalog::parse_questionnaire(path)?,
        None => catalog::builtin_questionnaire()?,
    };
    let roadmap_catalog = match roadmaps {
        Some(path) => catalog::parse_roadmaps(path)?,
        None => catalog::builtin_catalog()?,
    };
    Ok((questionnaire, roadmap_catalog))
}

/// Write the results page into `output` in the requested formats.
pub(crate) fn write_artifacts(view: &ResultsView, output: &Path, format: &str) -> Result<()> {
    std::fs::create_dir_all(output)?;
    let timestamp = chrono::Utc::now().format("%Y-%m-%dT%H%M%S");

    let formats: Vec<&str> = if format == "all" {
        vec!["markdown", "html", "json"]
    } else {
        format.split(',').map(str::trim).collect()
    };

    for fmt in &formats {
        match *fmt {
            "markdown" | "md" => {
                let path = output.join(format!("results-{timestamp}.md"));
                markdown::write_markdown_report(view, &path)?;
                eprintln!("Markdown report: {}", path.display());
            }
            "html" => {
                let path = output.join(format!("results-{timestamp}.html"));
                html::write_html_report(view, &path)?;
                eprintln!("HTML report: {}", path.display());
            }
            "json" => {
                let path = output.join(format!("results-{timestamp}.json"));
                std::fs::write(&path, serde_json::to_string_pretty(view)?)?;
                eprintln!("JSON report: {}", path.display());
            }
            _ => {
                eprintln!("Unknown format: {fmt}");
            }
        }
    }

    Ok(())
}
