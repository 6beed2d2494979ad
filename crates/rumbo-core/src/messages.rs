//! Personalized display copy for the results page.
//!
//! Pure lookups over the profile; the Spanish copy is fixed product text
//! and is preserved verbatim.

use crate::profile::{Barrier, Context, UserProfile};

const MSG_FREELANCER: &str = "Como freelancer, la IA puede liberarte 10-15 horas semanales en tareas repetitivas. Esas horas puedes usarlas para conseguir más clientes o tener mejor balance vida-trabajo.";
const MSG_EMPLEADO: &str = "Ser el primero en tu equipo dominando IA te posiciona como innovador y solucionador de problemas. Las empresas están buscando empleados que puedan liderar la transformación digital.";
const MSG_EMPRENDEDOR: &str = "Cada hora que gastas en tareas operativas es una hora que no inviertes en hacer crecer tu negocio. Un asistente bien diseñado puede responder 60-80% de consultas comunes.";
const MSG_EMPRENDEDOR_EARLY: &str = "En las etapas tempranas, la IA es tu mejor aliada para hacer más con menos recursos. Puedes competir con empresas más grandes sin necesidad de un equipo grande.";
const MSG_ESTUDIANTE: &str = "Dominar IA te diferencia del 95% de tus compañeros. Las empresas están buscando desesperadamente gente que entienda IA práctica, no solo teoría.";
const MSG_CREADOR: &str = "La IA puede multiplicar tu capacidad de crear contenido de calidad, permitiéndote mantener presencia constante sin burnout.";

const REASSURE_DIRECCION: &str = "Este roadmap te da el paso 1, 2, 3 exacto para que no tengas que adivinar por dónde empezar.";
const REASSURE_TECNICO: &str = "NO necesitas saber programar. Todo lo que te recomiendo es no-code y accesible para cualquier persona.";
const REASSURE_TIEMPO: &str = "Este roadmap se adapta a las horas que tienes disponibles. Es alcanzable con práctica consistente.";
const REASSURE_APLICACION: &str = "Cada recurso incluye ejemplos específicos para tu contexto. Es aplicado a tu realidad, no teoría abstracta.";
const REASSURE_VELOCIDAD: &str = "Nos enfocamos en fundamentos que NO cambian. Aprenderás a adaptarte cuando surjan nuevas herramientas.";
const REASSURE_NINGUNA: &str = "¡Excelente que estés comenzando sin frustraciones! Vamos a mantener ese momentum.";

/// Completion estimate label for a weekly-hours budget.
pub fn completion_estimate(weekly_hours: f64) -> &'static str {
    if weekly_hours <= 2.0 {
        "3-4 meses"
    } else if weekly_hours <= 5.0 {
        "2-3 meses"
    } else {
        "6-8 semanas"
    }
}

/// The motivational paragraph for the results page.
///
/// A context-specific base message (unrecognized contexts get the
/// freelancer copy) plus a sentence interpolating the weekly hours and
/// the derived completion estimate.
pub fn motivation_message(profile: &UserProfile) -> String {
    let base = match &profile.context {
        Context::Freelancer => MSG_FREELANCER,
        Context::Empleado => MSG_EMPLEADO,
        Context::Emprendedor => MSG_EMPRENDEDOR,
        Context::EmprendedorEarly => MSG_EMPRENDEDOR_EARLY,
        Context::Estudiante => MSG_ESTUDIANTE,
        Context::Creador => MSG_CREADOR,
        Context::Otro(_) => MSG_FREELANCER,
    };

    format!(
        "{base} Con {} horas semanales, completarás este roadmap en aproximadamente {} de práctica consistente.",
        profile.weekly_hours,
        completion_estimate(profile.weekly_hours)
    )
}

/// The reassurance line addressing the user's declared barriers.
///
/// An empty list or a `ninguna` member anywhere yields the no-barriers
/// message; otherwise only the FIRST barrier is addressed, with
/// unrecognized tokens falling back to the `direccion` copy.
pub fn barrier_reassurance(barriers: &[Barrier]) -> &'static str {
    if barriers.is_empty() || barriers.contains(&Barrier::Ninguna) {
        return REASSURE_NINGUNA;
    }
    match &barriers[0] {
        Barrier::Direccion => REASSURE_DIRECCION,
        Barrier::Tecnico => REASSURE_TECNICO,
        Barrier::Tiempo => REASSURE_TIEMPO,
        Barrier::Aplicacion => REASSURE_APLICACION,
        Barrier::Velocidad => REASSURE_VELOCIDAD,
        Barrier::Ninguna => REASSURE_NINGUNA,
        Barrier::Otro(_) => REASSURE_DIRECCION,
    }
}
