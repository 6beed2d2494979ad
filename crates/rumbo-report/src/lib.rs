//! rumbo-report — Results-page rendering.
//!
//! Takes a derived profile plus its matched roadmap and renders the
//! results page as Markdown or self-contained HTML.

pub mod html;
pub mod markdown;

use chrono::{DateTime, Utc};
use serde::Serialize;

use rumbo_core::messages::{barrier_reassurance, motivation_message};
use rumbo_core::profile::UserProfile;
use rumbo_core::roadmap::{Roadmap, RoadmapCatalog};

/// Everything a renderer needs for one results page.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultsView {
    /// Name given at the email gate, if any.
    pub user_name: Option<String>,
    pub profile: UserProfile,
    pub roadmap: Roadmap,
    pub motivation: String,
    pub reassurance: String,
    pub generated_at: DateTime<Utc>,
}

impl ResultsView {
    /// Assemble a view by matching the profile against the catalog and
    /// generating the display copy.
    pub fn new(user_name: Option<String>, profile: UserProfile, catalog: &RoadmapCatalog) -> Self {
        let roadmap = catalog.select(&profile).clone();
        let motivation = motivation_message(&profile);
        let reassurance = barrier_reassurance(&profile.barriers).to_string();
        Self {
            user_name,
            profile,
            roadmap,
            motivation,
            reassurance,
            generated_at: Utc::now(),
        }
    }

    /// A view for an already-resolved roadmap (e.g. from a stored
    /// completion record).
    pub fn with_roadmap(user_name: Option<String>, profile: UserProfile, roadmap: Roadmap) -> Self {
        let motivation = motivation_message(&profile);
        let reassurance = barrier_reassurance(&profile.barriers).to_string();
        Self {
            user_name,
            profile,
            roadmap,
            motivation,
            reassurance,
            generated_at: Utc::now(),
        }
    }
}

#[cfg(test)]
pub(crate) mod test_fixtures {
    use super::*;
    use rumbo_core::catalog::builtin_catalog;
    use rumbo_core::profile::{Barrier, Context, Level, PainPoint};

    pub fn sample_view() -> ResultsView {
        let profile = UserProfile {
            level: Level::Intermedio,
            level_score: 3.5,
            context: Context::Freelancer,
            pain_point: PainPoint::Contenido,
            weekly_hours: 8.0,
            barriers: vec![Barrier::Tiempo],
            ..UserProfile::default()
        };
        let catalog = builtin_catalog().expect("builtin catalog parses");
        ResultsView::new(Some("Ana <Dev>".into()), profile, &catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::test_fixtures::sample_view;
    use rumbo_core::profile::Level;

    #[test]
    fn view_resolves_roadmap_and_copy() {
        let view = sample_view();
        assert_eq!(view.roadmap.id, "freelancer-contenido");
        assert_eq!(view.profile.level, Level::Intermedio);
        assert!(view.motivation.contains("Como freelancer"));
        assert!(view.motivation.contains("6-8 semanas"));
        assert!(view.reassurance.contains("horas que tienes disponibles"));
    }

    #[test]
    fn view_serializes_for_json_artifacts() {
        let view = sample_view();
        let json = serde_json::to_string(&view).unwrap();
        assert!(json.contains("\"userName\""));
        assert!(json.contains("\"roadmap\""));
        assert!(json.contains("freelancer-contenido"));
    }
}
