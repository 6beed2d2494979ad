//! The `rumbo validate` command.

use std::path::PathBuf;

use anyhow::Result;

use rumbo_core::catalog::{
    self, validate_catalog, validate_questionnaire, ValidationWarning,
};

pub fn execute(questions: Option<PathBuf>, roadmaps: Option<PathBuf>) -> Result<()> {
    let questionnaire = match &questions {
        Some(path) => catalog::parse_questionnaire(path)?,
        None => catalog::builtin_questionnaire()?,
    };
    let roadmap_catalog = match &roadmaps {
        Some(path) => catalog::parse_roadmaps(path)?,
        None => catalog::builtin_catalog()?,
    };

    let mut total_warnings = 0;

    println!(
        "Question bank: {} ({} questions)",
        questionnaire.name,
        questionnaire.len()
    );
    let warnings = validate_questionnaire(&questionnaire);
    print_warnings(&warnings);
    total_warnings += warnings.len();

    println!(
        "Roadmap catalog: {} bundles (+ default)",
        roadmap_catalog.ids().count()
    );
    let warnings = validate_catalog(&roadmap_catalog);
    print_warnings(&warnings);
    total_warnings += warnings.len();

    if total_warnings == 0 {
        println!("All catalogs valid.");
    } else {
        println!("\n{total_warnings} warning(s) found.");
    }

    Ok(())
}

fn print_warnings(warnings: &[ValidationWarning]) {
    for w in warnings {
        let prefix = w
            .subject
            .as_ref()
            .map(|s| format!("  [{s}]"))
            .unwrap_or_else(|| "  ".to_string());
        println!("{prefix} WARNING: {}", w.message);
    }
}
