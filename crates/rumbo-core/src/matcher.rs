//! Roadmap Matcher: the prioritized decision table.
//!
//! Rule order is normative. Profiles can satisfy several rules and the
//! first listed one must win, so rules are evaluated strictly top to
//! bottom with early returns.

use crate::profile::{Context, Level, PainPoint, UserProfile};
use crate::roadmap::RoadmapKind;

/// Select the content bundle for a profile.
///
/// Total: every reachable profile lands on exactly one kind, with
/// [`RoadmapKind::General`] as the guaranteed fall-through.
pub fn match_roadmap(profile: &UserProfile) -> RoadmapKind {
    use Context as C;
    use PainPoint as P;

    // Priority 1: context + pain-point specific matches.
    if matches!(profile.context, C::Freelancer | C::Creador)
        && matches!(profile.pain_point, P::Contenido | P::Diseno)
    {
        return RoadmapKind::FreelancerContenido;
    }

    if matches!(profile.context, C::Emprendedor | C::EmprendedorEarly)
        && matches!(profile.pain_point, P::Comunicacion | P::Admin)
    {
        return RoadmapKind::EmprendedorComunicacion;
    }

    if profile.context == C::Empleado
        && matches!(profile.pain_point, P::Admin | P::Investigacion | P::Estrategia)
    {
        return RoadmapKind::EmpleadoProductividad;
    }

    if profile.context == C::Estudiante {
        return RoadmapKind::EstudianteGeneral;
    }

    // Priority 2: level-based fallback for beginners.
    if matches!(profile.level, Level::Novato | Level::Basico) {
        return if profile.pain_point == P::Contenido {
            RoadmapKind::FreelancerContenido
        } else {
            RoadmapKind::EstudianteGeneral
        };
    }

    // Priority 3: pain point alone, for intermediate/advanced profiles.
    match profile.pain_point {
        P::Contenido => RoadmapKind::FreelancerContenido,
        P::Comunicacion => RoadmapKind::EmprendedorComunicacion,
        P::Admin | P::Investigacion => RoadmapKind::EmpleadoProductividad,
        // diseno and estrategia deliberately have no arm of their own here
        P::Diseno | P::Estrategia | P::Otro(_) => RoadmapKind::General,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::UserProfile;

    fn profile(context: &str, pain_point: &str, level: Level) -> UserProfile {
        UserProfile {
            level,
            context: Context::from(context.to_string()),
            pain_point: PainPoint::from(pain_point.to_string()),
            ..UserProfile::default()
        }
    }

    #[test]
    fn freelancer_contenido_rule() {
        for ctx in ["freelancer", "creador"] {
            for pain in ["contenido", "diseno"] {
                assert_eq!(
                    match_roadmap(&profile(ctx, pain, Level::Avanzado)),
                    RoadmapKind::FreelancerContenido,
                    "{ctx}/{pain}"
                );
            }
        }
    }

    #[test]
    fn emprendedor_comunicacion_rule() {
        for ctx in ["emprendedor", "emprendedor-early"] {
            for pain in ["comunicacion", "admin"] {
                assert_eq!(
                    match_roadmap(&profile(ctx, pain, Level::Intermedio)),
                    RoadmapKind::EmprendedorComunicacion,
                    "{ctx}/{pain}"
                );
            }
        }
    }

    #[test]
    fn empleado_productividad_rule() {
        for pain in ["admin", "investigacion", "estrategia"] {
            assert_eq!(
                match_roadmap(&profile("empleado", pain, Level::Avanzado)),
                RoadmapKind::EmpleadoProductividad,
                "{pain}"
            );
        }
    }

    #[test]
    fn estudiante_wins_over_pain_point_fallbacks() {
        // Scenario C: rule 4 fires before the content-based fallbacks,
        // regardless of level.
        for level in [Level::Novato, Level::Basico, Level::Intermedio, Level::Avanzado] {
            assert_eq!(
                match_roadmap(&profile("estudiante", "contenido", level)),
                RoadmapKind::EstudianteGeneral
            );
        }
    }

    #[test]
    fn context_rule_wins_over_level_fallback() {
        // A novato emprendedor with admin pain satisfies both rule 2 and
        // rule 5; rule 2 must win.
        assert_eq!(
            match_roadmap(&profile("emprendedor", "admin", Level::Novato)),
            RoadmapKind::EmprendedorComunicacion
        );
    }

    #[test]
    fn beginner_fallback() {
        assert_eq!(
            match_roadmap(&profile("empleado", "contenido", Level::Novato)),
            RoadmapKind::FreelancerContenido
        );
        assert_eq!(
            match_roadmap(&profile("empleado", "comunicacion", Level::Basico)),
            RoadmapKind::EstudianteGeneral
        );
    }

    #[test]
    fn advanced_empleado_contenido_reaches_pain_point_rule() {
        // Scenario D: rule 3 requires an admin-ish pain point, so this
        // falls through to the pain-point table.
        assert_eq!(
            match_roadmap(&profile("empleado", "contenido", Level::Avanzado)),
            RoadmapKind::FreelancerContenido
        );
        assert_eq!(
            match_roadmap(&profile("empleado", "comunicacion", Level::Avanzado)),
            RoadmapKind::EmprendedorComunicacion
        );
        assert_eq!(
            match_roadmap(&profile("emprendedor", "investigacion", Level::Avanzado)),
            RoadmapKind::EmpleadoProductividad
        );
    }

    #[test]
    fn unmatched_pain_points_fall_to_default() {
        assert_eq!(
            match_roadmap(&profile("empleado", "diseno", Level::Avanzado)),
            RoadmapKind::General
        );
        assert_eq!(
            match_roadmap(&profile("emprendedor", "estrategia", Level::Intermedio)),
            RoadmapKind::General
        );
    }

    #[test]
    fn unknown_tokens_fall_to_default() {
        // Scenario E: schema-drifted tokens match no rule at all.
        assert_eq!(
            match_roadmap(&profile("unknown-token", "unknown-token", Level::Avanzado)),
            RoadmapKind::General
        );
    }
}
