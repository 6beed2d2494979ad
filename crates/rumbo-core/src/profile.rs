//! User profile types: proficiency level and categorical attributes.
//!
//! The original data flow carried these as loose string tokens in
//! string-keyed lookup tables. Here every attribute is an explicit
//! enumeration so the decision tables in [`crate::matcher`] and
//! [`crate::messages`] match exhaustively; each enum keeps an `Otro`
//! catch-all so tokens from drifted persisted answer sets survive
//! verbatim instead of aborting or being silently coerced.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Coarse proficiency bucket, low to high.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum Level {
    Novato,
    Basico,
    Intermedio,
    Avanzado,
}

impl Level {
    /// Bucket a raw score via the fixed thresholds.
    ///
    /// Boundaries are inclusive on the upper side: exactly 1.0 is still
    /// NOVATO, exactly 2.5 is BASICO, exactly 4.0 is INTERMEDIO.
    pub fn from_score(score: f64) -> Self {
        if score <= 1.0 {
            Level::Novato
        } else if score <= 2.5 {
            Level::Basico
        } else if score <= 4.0 {
            Level::Intermedio
        } else {
            Level::Avanzado
        }
    }

    /// Display blurb shown with the level badge.
    pub fn description(&self) -> &'static str {
        match self {
            Level::Novato => {
                "Estás empezando tu viaje con IA. Perfecto, comenzaremos desde lo fundamental."
            }
            Level::Basico => "Tienes exposición inicial a IA. Vamos a construir sobre esa base.",
            Level::Intermedio => {
                "Ya usas IA regularmente. Vamos a optimizar y profundizar tus habilidades."
            }
            Level::Avanzado => {
                "Tienes experiencia práctica sólida. Vamos a llevar tus habilidades al siguiente nivel."
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Novato => "NOVATO",
            Level::Basico => "BASICO",
            Level::Intermedio => "INTERMEDIO",
            Level::Avanzado => "AVANZADO",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "NOVATO" => Ok(Level::Novato),
            "BASICO" => Ok(Level::Basico),
            "INTERMEDIO" => Ok(Level::Intermedio),
            "AVANZADO" => Ok(Level::Avanzado),
            other => Err(format!("unknown level: {other}")),
        }
    }
}

/// Professional situation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Context {
    Empleado,
    Freelancer,
    Emprendedor,
    EmprendedorEarly,
    Estudiante,
    Creador,
    /// Token outside the known set, preserved verbatim.
    Otro(String),
}

impl Context {
    pub fn as_str(&self) -> &str {
        match self {
            Context::Empleado => "empleado",
            Context::Freelancer => "freelancer",
            Context::Emprendedor => "emprendedor",
            Context::EmprendedorEarly => "emprendedor-early",
            Context::Estudiante => "estudiante",
            Context::Creador => "creador",
            Context::Otro(s) => s,
        }
    }
}

impl From<String> for Context {
    fn from(s: String) -> Self {
        match s.as_str() {
            "empleado" => Context::Empleado,
            "freelancer" => Context::Freelancer,
            "emprendedor" => Context::Emprendedor,
            "emprendedor-early" => Context::EmprendedorEarly,
            "estudiante" => Context::Estudiante,
            "creador" => Context::Creador,
            _ => Context::Otro(s),
        }
    }
}

impl From<Context> for String {
    fn from(c: Context) -> String {
        c.as_str().to_string()
    }
}

impl fmt::Display for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The user-declared primary time-consuming task category.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PainPoint {
    Contenido,
    Comunicacion,
    Admin,
    Investigacion,
    Diseno,
    Estrategia,
    Otro(String),
}

impl PainPoint {
    pub fn as_str(&self) -> &str {
        match self {
            PainPoint::Contenido => "contenido",
            PainPoint::Comunicacion => "comunicacion",
            PainPoint::Admin => "admin",
            PainPoint::Investigacion => "investigacion",
            PainPoint::Diseno => "diseno",
            PainPoint::Estrategia => "estrategia",
            PainPoint::Otro(s) => s,
        }
    }
}

impl From<String> for PainPoint {
    fn from(s: String) -> Self {
        match s.as_str() {
            "contenido" => PainPoint::Contenido,
            "comunicacion" => PainPoint::Comunicacion,
            "admin" => PainPoint::Admin,
            "investigacion" => PainPoint::Investigacion,
            "diseno" => PainPoint::Diseno,
            "estrategia" => PainPoint::Estrategia,
            _ => PainPoint::Otro(s),
        }
    }
}

impl From<PainPoint> for String {
    fn from(p: PainPoint) -> String {
        p.as_str().to_string()
    }
}

impl fmt::Display for PainPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Learning goal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Goal {
    Productividad,
    Automatizacion,
    Contenido,
    Diferenciacion,
    Costos,
    Escalabilidad,
    Carrera,
    Otro(String),
}

impl Goal {
    pub fn as_str(&self) -> &str {
        match self {
            Goal::Productividad => "productividad",
            Goal::Automatizacion => "automatizacion",
            Goal::Contenido => "contenido",
            Goal::Diferenciacion => "diferenciacion",
            Goal::Costos => "costos",
            Goal::Escalabilidad => "escalabilidad",
            Goal::Carrera => "carrera",
            Goal::Otro(s) => s,
        }
    }
}

impl From<String> for Goal {
    fn from(s: String) -> Self {
        match s.as_str() {
            "productividad" => Goal::Productividad,
            "automatizacion" => Goal::Automatizacion,
            "contenido" => Goal::Contenido,
            "diferenciacion" => Goal::Diferenciacion,
            "costos" => Goal::Costos,
            "escalabilidad" => Goal::Escalabilidad,
            "carrera" => Goal::Carrera,
            _ => Goal::Otro(s),
        }
    }
}

impl From<Goal> for String {
    fn from(g: Goal) -> String {
        g.as_str().to_string()
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Desired timeline for seeing practical results.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Urgency {
    Alta,
    Media,
    Baja,
    Ninguna,
    Otro(String),
}

impl Urgency {
    pub fn as_str(&self) -> &str {
        match self {
            Urgency::Alta => "alta",
            Urgency::Media => "media",
            Urgency::Baja => "baja",
            Urgency::Ninguna => "ninguna",
            Urgency::Otro(s) => s,
        }
    }
}

impl From<String> for Urgency {
    fn from(s: String) -> Self {
        match s.as_str() {
            "alta" => Urgency::Alta,
            "media" => Urgency::Media,
            "baja" => Urgency::Baja,
            "ninguna" => Urgency::Ninguna,
            _ => Urgency::Otro(s),
        }
    }
}

impl From<Urgency> for String {
    fn from(u: Urgency) -> String {
        u.as_str().to_string()
    }
}

impl fmt::Display for Urgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Preferred learning style.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum LearningStyle {
    Visual,
    Practico,
    Lectura,
    Mixto,
    Otro(String),
}

impl LearningStyle {
    pub fn as_str(&self) -> &str {
        match self {
            LearningStyle::Visual => "visual",
            LearningStyle::Practico => "practico",
            LearningStyle::Lectura => "lectura",
            LearningStyle::Mixto => "mixto",
            LearningStyle::Otro(s) => s,
        }
    }
}

impl From<String> for LearningStyle {
    fn from(s: String) -> Self {
        match s.as_str() {
            "visual" => LearningStyle::Visual,
            "practico" => LearningStyle::Practico,
            "lectura" => LearningStyle::Lectura,
            "mixto" => LearningStyle::Mixto,
            _ => LearningStyle::Otro(s),
        }
    }
}

impl From<LearningStyle> for String {
    fn from(l: LearningStyle) -> String {
        l.as_str().to_string()
    }
}

impl fmt::Display for LearningStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A user-declared obstacle to prior learning.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Barrier {
    Direccion,
    Tecnico,
    Tiempo,
    Aplicacion,
    Velocidad,
    Ninguna,
    Otro(String),
}

impl Barrier {
    pub fn as_str(&self) -> &str {
        match self {
            Barrier::Direccion => "direccion",
            Barrier::Tecnico => "tecnico",
            Barrier::Tiempo => "tiempo",
            Barrier::Aplicacion => "aplicacion",
            Barrier::Velocidad => "velocidad",
            Barrier::Ninguna => "ninguna",
            Barrier::Otro(s) => s,
        }
    }
}

impl From<String> for Barrier {
    fn from(s: String) -> Self {
        match s.as_str() {
            "direccion" => Barrier::Direccion,
            "tecnico" => Barrier::Tecnico,
            "tiempo" => Barrier::Tiempo,
            "aplicacion" => Barrier::Aplicacion,
            "velocidad" => Barrier::Velocidad,
            "ninguna" => Barrier::Ninguna,
            _ => Barrier::Otro(s),
        }
    }
}

impl From<Barrier> for String {
    fn from(b: Barrier) -> String {
        b.as_str().to_string()
    }
}

impl fmt::Display for Barrier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Normalized summary of a completed answer set.
///
/// Immutable once built; `level_score` is the raw score that produced
/// `level`, retained for transparency and never re-derived.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub level: Level,
    pub level_score: f64,
    pub context: Context,
    pub pain_point: PainPoint,
    pub goals: Vec<Goal>,
    pub urgency: Urgency,
    pub weekly_hours: f64,
    pub learning_style: LearningStyle,
    pub barriers: Vec<Barrier>,
}

impl Default for UserProfile {
    /// The documented all-defaults profile produced from an empty answer set.
    fn default() -> Self {
        Self {
            level: Level::Novato,
            level_score: 0.0,
            context: Context::Freelancer,
            pain_point: PainPoint::Contenido,
            goals: Vec::new(),
            urgency: Urgency::Media,
            weekly_hours: 4.0,
            learning_style: LearningStyle::Mixto,
            barriers: Vec::new(),
        }
    }
}
