//! HTML results renderer.
//!
//! Produces a self-contained HTML file with all CSS inlined, safe for
//! opening directly from disk.

use std::path::Path;

use anyhow::Result;

use crate::ResultsView;

/// Escape a string for safe HTML insertion.
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// Generate the results page as a standalone HTML document.
pub fn render(view: &ResultsView) -> String {
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n<html lang=\"es\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str(&format!(
        "<title>Tu roadmap — {}</title>\n",
        html_escape(&view.roadmap.profile_name)
    ));
    html.push_str("<style>\n");
    html.push_str(CSS);
    html.push_str("</style>\n");
    html.push_str("</head>\n<body>\n");

    // Hero: level and profile
    html.push_str("<header>\n");
    html.push_str("<h1>🎉 ¡Análisis Completo!</h1>\n");
    if let Some(name) = &view.user_name {
        if !name.trim().is_empty() {
            html.push_str(&format!(
                "<p class=\"meta\">Preparado para <strong>{}</strong></p>\n",
                html_escape(name.trim())
            ));
        }
    }
    html.push_str(&format!(
        "<p class=\"level-badge level-{}\">{}</p>\n",
        view.profile.level.as_str().to_lowercase(),
        view.profile.level
    ));
    html.push_str(&format!(
        "<p class=\"meta\">{}</p>\n",
        html_escape(view.profile.level.description())
    ));
    html.push_str(&format!(
        "<h2>{}</h2>\n",
        html_escape(&view.roadmap.profile_name)
    ));
    html.push_str(&format!(
        "<p>{}</p>\n",
        html_escape(&view.roadmap.profile_description)
    ));
    html.push_str("</header>\n");

    // First step
    let first = &view.roadmap.first_step;
    html.push_str("<section class=\"first-step\">\n<h2>🚀 Tu Primer Paso</h2>\n");
    html.push_str(&format!(
        "<p><strong>{}</strong> ({})</p>\n",
        html_escape(&first.video),
        html_escape(&first.duration)
    ));
    html.push_str(&format!("<p>{}</p>\n", html_escape(&first.action)));
    html.push_str("</section>\n");

    // Phases
    html.push_str("<section class=\"phases\">\n<h2>📍 Tu Roadmap Personalizado en 3 Fases</h2>\n");
    for phase in &view.roadmap.phases {
        html.push_str(&format!(
            "<details{}>\n<summary>Fase {}: {} <span class=\"duration\">{}</span></summary>\n",
            if phase.number == 1 { " open" } else { "" },
            phase.number,
            html_escape(&phase.title),
            html_escape(&phase.duration)
        ));
        html.push_str(&format!(
            "<p><strong>Objetivo:</strong> {}</p>\n",
            html_escape(&phase.objective)
        ));

        html.push_str("<p><strong>Habilidades:</strong></p>\n<ul>\n");
        for skill in &phase.skills {
            html.push_str(&format!("<li>{}</li>\n", html_escape(skill)));
        }
        html.push_str("</ul>\n");

        if !phase.resources.is_empty() {
            html.push_str("<p><strong>Recursos:</strong></p>\n<ul>\n");
            for resource in &phase.resources {
                let title = html_escape(&resource.title);
                match &resource.duration {
                    Some(duration) => html.push_str(&format!(
                        "<li>{title} <span class=\"duration\">{}</span></li>\n",
                        html_escape(duration)
                    )),
                    None => html.push_str(&format!("<li>{title}</li>\n")),
                }
            }
            html.push_str("</ul>\n");
        }

        html.push_str(&format!(
            "<p><strong>Proyecto:</strong> {}</p>\n",
            html_escape(&phase.project)
        ));
        html.push_str(&format!(
            "<p><strong>Tiempo estimado:</strong> {}</p>\n",
            html_escape(&phase.estimated_time)
        ));
        html.push_str("</details>\n");
    }
    html.push_str("</section>\n");

    // Course
    let course = &view.roadmap.recommended_course;
    html.push_str("<section class=\"course\">\n<h2>🎓 Curso Recomendado</h2>\n");
    html.push_str(&format!(
        "<p><strong>{}</strong> — {} (lanzamiento {})</p>\n",
        html_escape(&course.name),
        html_escape(&course.duration),
        html_escape(&course.launch_date)
    ));
    html.push_str(&format!("<p>{}</p>\n", html_escape(&course.description)));
    html.push_str("</section>\n");

    // Motivation
    html.push_str("<section class=\"motivation\">\n<h2>💪 Tu Motivación</h2>\n");
    html.push_str(&format!("<p>{}</p>\n", html_escape(&view.motivation)));
    html.push_str(&format!("<p>{}</p>\n", html_escape(&view.reassurance)));
    html.push_str("</section>\n");

    html.push_str(&format!(
        "<footer><p class=\"meta\">Generado el {}</p></footer>\n",
        view.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));

    html.push_str("</body>\n</html>");
    html
}

/// Write the HTML results page to a file.
pub fn write_html_report(view: &ResultsView, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, render(view))?;
    Ok(())
}

const CSS: &str = r#"
:root { --bg: #fff; --fg: #1a1a1a; --border: #e5e7eb; --accent: #4f46e5; }
@media (prefers-color-scheme: dark) {
  :root { --bg: #111827; --fg: #f9fafb; --border: #374151; --accent: #818cf8; }
}
body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif; margin: 0 auto; max-width: 48rem; padding: 2rem 1rem; background: var(--bg); color: var(--fg); line-height: 1.6; }
header { text-align: center; margin-bottom: 2rem; }
h1, h2 { line-height: 1.25; }
section { margin: 2rem 0; }
.meta { color: #6b7280; }
.duration { color: #6b7280; font-size: 0.85rem; }
.level-badge { display: inline-block; padding: 0.25rem 1rem; border-radius: 9999px; font-weight: bold; letter-spacing: 0.05em; border: 2px solid var(--accent); color: var(--accent); }
.first-step { border: 1px solid var(--border); border-left: 4px solid var(--accent); border-radius: 8px; padding: 0.5rem 1.5rem; }
details { border: 1px solid var(--border); border-radius: 8px; padding: 0.5rem 1.5rem; margin: 1rem 0; }
summary { cursor: pointer; font-weight: bold; padding: 0.5rem 0; }
footer { margin-top: 3rem; border-top: 1px solid var(--border); padding-top: 1rem; text-align: center; }
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::sample_view;

    #[test]
    fn html_contains_required_elements() {
        let view = sample_view();
        let html = render(&view);

        assert!(html.contains("<html"));
        assert!(html.contains("</html>"));
        assert!(html.contains("INTERMEDIO"));
        assert!(html.contains("Freelancer Creador de Contenido"));
        assert!(html.contains("Fase 1:"));
        assert!(html.contains("Curso Recomendado"));
    }

    #[test]
    fn html_escapes_user_supplied_name() {
        let view = sample_view();
        let html = render(&view);
        assert!(html.contains("Ana &lt;Dev&gt;"));
        assert!(!html.contains("Ana <Dev>"));
    }

    #[test]
    fn first_phase_starts_expanded() {
        let html = render(&sample_view());
        assert!(html.contains("<details open>"));
    }

    #[test]
    fn html_write_to_file() {
        let view = sample_view();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("results.html");

        write_html_report(&view, &path).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("<html"));
    }
}
