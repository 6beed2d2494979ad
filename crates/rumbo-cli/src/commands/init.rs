//! The `rumbo init` command.

use anyhow::Result;

use rumbo_core::catalog::{BUILTIN_QUESTIONS_TOML, BUILTIN_ROADMAPS_TOML};

pub fn execute() -> Result<()> {
    for (path, content) in [
        ("rumbo-questions.toml", BUILTIN_QUESTIONS_TOML),
        ("rumbo-roadmaps.toml", BUILTIN_ROADMAPS_TOML),
    ] {
        if std::path::Path::new(path).exists() {
            println!("{path} already exists, skipping.");
        } else {
            std::fs::write(path, content)?;
            println!("Created {path}");
        }
    }

    println!("\nNext steps:");
    println!("  1. Edit the catalogs to fit your content");
    println!("  2. Run: rumbo validate --questions rumbo-questions.toml --roadmaps rumbo-roadmaps.toml");
    println!("  3. Run: rumbo run --questions rumbo-questions.toml --roadmaps rumbo-roadmaps.toml");

    Ok(())
}
