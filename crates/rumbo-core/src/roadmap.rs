//! Roadmap content bundles and the catalog that holds them.
//!
//! Roadmaps are immutable author-provided reference data; nothing here is
//! derived from user input beyond selection.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::matcher::match_roadmap;
use crate::profile::UserProfile;

/// The five bundles the matcher can land on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RoadmapKind {
    FreelancerContenido,
    EmprendedorComunicacion,
    EmpleadoProductividad,
    EstudianteGeneral,
    #[serde(rename = "default")]
    General,
}

impl RoadmapKind {
    /// Every kind, in catalog order.
    pub const ALL: [RoadmapKind; 5] = [
        RoadmapKind::FreelancerContenido,
        RoadmapKind::EmprendedorComunicacion,
        RoadmapKind::EmpleadoProductividad,
        RoadmapKind::EstudianteGeneral,
        RoadmapKind::General,
    ];

    /// The catalog key for this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            RoadmapKind::FreelancerContenido => "freelancer-contenido",
            RoadmapKind::EmprendedorComunicacion => "emprendedor-comunicacion",
            RoadmapKind::EmpleadoProductividad => "empleado-productividad",
            RoadmapKind::EstudianteGeneral => "estudiante-general",
            RoadmapKind::General => "default",
        }
    }
}

impl fmt::Display for RoadmapKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RoadmapKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "freelancer-contenido" => Ok(RoadmapKind::FreelancerContenido),
            "emprendedor-comunicacion" => Ok(RoadmapKind::EmprendedorComunicacion),
            "empleado-productividad" => Ok(RoadmapKind::EmpleadoProductividad),
            "estudiante-general" => Ok(RoadmapKind::EstudianteGeneral),
            "default" => Ok(RoadmapKind::General),
            other => Err(format!("unknown roadmap id: {other}")),
        }
    }
}

/// A learning resource inside a phase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    pub title: String,
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

/// One stage of a roadmap. Every roadmap has exactly three.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Phase {
    /// Ordinal, 1..=3.
    pub number: u32,
    pub title: String,
    /// Calendar label, e.g. "Semanas 1-2".
    pub duration: String,
    pub objective: String,
    pub skills: Vec<String>,
    #[serde(default)]
    pub resources: Vec<Resource>,
    /// Capstone project for the phase.
    pub project: String,
    /// Effort label, e.g. "6-10 horas".
    pub estimated_time: String,
}

/// The immediate call-to-action shown at the top of the results page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FirstStep {
    pub video: String,
    pub duration: String,
    pub action: String,
    #[serde(default)]
    pub url: Option<String>,
}

/// The course recommendation card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendedCourse {
    pub name: String,
    pub duration: String,
    pub launch_date: String,
    pub description: String,
}

/// A static three-phase content bundle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Roadmap {
    /// Catalog key (e.g. "freelancer-contenido").
    pub id: String,
    pub profile_name: String,
    pub profile_description: String,
    pub phases: Vec<Phase>,
    pub first_step: FirstStep,
    pub recommended_course: RecommendedCourse,
}

/// The full set of bundles plus the guaranteed default.
#[derive(Debug, Clone)]
pub struct RoadmapCatalog {
    bundles: BTreeMap<String, Roadmap>,
    default: Roadmap,
}

impl RoadmapCatalog {
    /// Build a catalog from bundles and an explicit default.
    pub fn new(bundles: Vec<Roadmap>, default: Roadmap) -> Self {
        let bundles = bundles.into_iter().map(|r| (r.id.clone(), r)).collect();
        Self { bundles, default }
    }

    /// The bundle for a kind, falling back to the default when the catalog
    /// has no entry under that key. Total for every kind.
    pub fn get(&self, kind: RoadmapKind) -> &Roadmap {
        self.bundles.get(kind.as_str()).unwrap_or(&self.default)
    }

    /// Match a profile and resolve the resulting kind. Total for every
    /// reachable profile.
    pub fn select(&self, profile: &UserProfile) -> &Roadmap {
        self.get(match_roadmap(profile))
    }

    /// The always-present fallback bundle.
    pub fn default_roadmap(&self) -> &Roadmap {
        &self.default
    }

    /// Ids of the keyed bundles (the default is not listed).
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.bundles.keys().map(String::as_str)
    }

    /// Whether a keyed bundle exists for the given kind.
    pub fn contains(&self, kind: RoadmapKind) -> bool {
        kind == RoadmapKind::General || self.bundles.contains_key(kind.as_str())
    }

    /// Every bundle in the catalog, the default last.
    pub fn iter(&self) -> impl Iterator<Item = &Roadmap> {
        self.bundles.values().chain(std::iter::once(&self.default))
    }
}
