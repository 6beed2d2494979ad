//! Markdown results renderer.
//!
//! Section order follows the web results page: level, profile, first
//! step, the three phases, recommended course, motivation.

use std::path::Path;

use anyhow::Result;

use crate::ResultsView;

/// Render the full results page as Markdown.
pub fn render(view: &ResultsView) -> String {
    let mut md = String::new();

    md.push_str("# 🎉 ¡Análisis Completo!\n\n");
    if let Some(name) = &view.user_name {
        if !name.trim().is_empty() {
            md.push_str(&format!("Preparado para **{}**.\n\n", name.trim()));
        }
    }

    // Level
    md.push_str(&format!("## 🎯 Tu Nivel de IA: {}\n\n", view.profile.level));
    md.push_str(&format!("{}\n\n", view.profile.level.description()));
    md.push_str(&format!("Puntuación: {}\n\n", view.profile.level_score));

    // Profile
    md.push_str(&format!("## Tu Perfil: {}\n\n", view.roadmap.profile_name));
    md.push_str(&format!("{}\n\n", view.roadmap.profile_description));

    // First step
    let first = &view.roadmap.first_step;
    md.push_str("## 🚀 Tu Primer Paso\n\n");
    md.push_str(&format!("**{}** ({})\n\n", first.video, first.duration));
    md.push_str(&format!("{}\n\n", first.action));

    // Phases
    md.push_str("## 📍 Tu Roadmap Personalizado en 3 Fases\n\n");
    for phase in &view.roadmap.phases {
        md.push_str(&format!(
            "### Fase {}: {} ({})\n\n",
            phase.number, phase.title, phase.duration
        ));
        md.push_str(&format!("**Objetivo:** {}\n\n", phase.objective));

        md.push_str("**Habilidades:**\n\n");
        for skill in &phase.skills {
            md.push_str(&format!("- {skill}\n"));
        }
        md.push('\n');

        if !phase.resources.is_empty() {
            md.push_str("**Recursos:**\n\n");
            for resource in &phase.resources {
                match &resource.duration {
                    Some(duration) => md.push_str(&format!("- {} ({duration})\n", resource.title)),
                    None => md.push_str(&format!("- {}\n", resource.title)),
                }
            }
            md.push('\n');
        }

        md.push_str(&format!("**Proyecto:** {}\n\n", phase.project));
        md.push_str(&format!("**Tiempo estimado:** {}\n\n", phase.estimated_time));
    }

    // Course
    let course = &view.roadmap.recommended_course;
    md.push_str("## 🎓 Curso Recomendado\n\n");
    md.push_str(&format!(
        "**{}** — {} (lanzamiento {})\n\n",
        course.name, course.duration, course.launch_date
    ));
    md.push_str(&format!("{}\n\n", course.description));

    // Motivation
    md.push_str("## 💪 Tu Motivación\n\n");
    md.push_str(&format!("{}\n\n", view.motivation));
    md.push_str(&format!("{}\n", view.reassurance));

    md
}

/// Write the Markdown results page to a file.
pub fn write_markdown_report(view: &ResultsView, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, render(view))?;
    Ok(())
}
