//! Descriptions and hairstyle recommendations for each face shape.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::shape::ShapeLabel;

/// What the system tells the user about one face shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShapeProfile {
    pub description: String,
    /// A styling suggestion followed by what to avoid.
    pub recommendations: Vec<String>,
}

impl ShapeProfile {
    fn new(description: &str, recommendations: [&str; 2]) -> Self {
        Self {
            description: description.to_string(),
            recommendations: recommendations.iter().map(|r| r.to_string()).collect(),
        }
    }
}

/// Profiles for every [`ShapeLabel`], including labels the classifier never
/// produces.
///
/// Lookups are total: a knowledge base can only be built with an entry for
/// each label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    try_from = "BTreeMap<String, ShapeProfile>",
    into = "BTreeMap<ShapeLabel, ShapeProfile>"
)]
pub struct ShapeKnowledgeBase {
    profiles: [ShapeProfile; 8],
}

impl ShapeKnowledgeBase {
    pub fn builtin() -> Self {
        let table = |label: ShapeLabel| match label {
            ShapeLabel::Oval => ShapeProfile::new(
                "Rostro equilibrado, frente y mandíbula similares, pómulos marcados.",
                [
                    "Casi cualquier corte te favorece. Prueba con capas largas, flequillo lateral o bob.",
                    "Evita cortes que tapen demasiado el rostro.",
                ],
            ),
            ShapeLabel::Round => ShapeProfile::new(
                "Ancho y largo similares, mandíbula y frente suaves.",
                [
                    "Cortes con capas largas, desfilados y volumen en la parte superior.",
                    "Evita flequillos rectos y cortes muy cortos a la altura de la mandíbula.",
                ],
            ),
            ShapeLabel::Square => ShapeProfile::new(
                "Frente, pómulos y mandíbula de ancho similar, mandíbula marcada.",
                [
                    "Cortes con ondas suaves, capas y flequillo lateral.",
                    "Evita cortes rectos a la altura de la mandíbula.",
                ],
            ),
            ShapeLabel::Rectangular => ShapeProfile::new(
                "Rostro más largo que ancho, mandíbula y frente anchas.",
                [
                    "Cortes con volumen a los lados, flequillo y ondas.",
                    "Evita cortes muy largos y lisos.",
                ],
            ),
            ShapeLabel::Diamond => ShapeProfile::new(
                "Pómulos anchos, frente y mandíbula estrechas.",
                [
                    "Cortes con volumen en la barbilla, flequillo y capas suaves.",
                    "Evita volumen excesivo en la parte superior.",
                ],
            ),
            ShapeLabel::Triangular => ShapeProfile::new(
                "Mandíbula más ancha que la frente, pómulos marcados.",
                [
                    "Cortes con volumen en la parte superior y flequillo.",
                    "Evita cortes muy cortos en los laterales.",
                ],
            ),
            ShapeLabel::Heart => ShapeProfile::new(
                "Frente ancha, pómulos marcados, barbilla estrecha.",
                [
                    "Cortes con capas largas, flequillo lateral y ondas.",
                    "Evita volumen excesivo en la parte superior.",
                ],
            ),
            ShapeLabel::Elongated => ShapeProfile::new(
                "Rostro notablemente más largo que ancho, barbilla y frente estrechas.",
                [
                    "Cortes con flequillo, ondas y volumen a los lados.",
                    "Evita cortes muy largos y lisos.",
                ],
            ),
        };

        Self {
            profiles: ShapeLabel::ALL.map(table),
        }
    }

    /// Build a knowledge base from per-label entries.
    ///
    /// Fails if any label is missing or has an empty description or
    /// recommendation list.
    pub fn from_profiles(mut entries: BTreeMap<ShapeLabel, ShapeProfile>) -> Result<Self> {
        let mut profiles = Vec::with_capacity(ShapeLabel::ALL.len());

        for label in ShapeLabel::ALL {
            let profile = entries.remove(&label).ok_or_else(|| {
                Error::InvalidKnowledgeBase(format!("no entry for shape '{}'", label))
            })?;

            if profile.description.trim().is_empty() {
                return Err(Error::InvalidKnowledgeBase(format!(
                    "empty description for shape '{}'",
                    label
                )));
            }
            if profile.recommendations.is_empty()
                || profile.recommendations.iter().any(|r| r.trim().is_empty())
            {
                return Err(Error::InvalidKnowledgeBase(format!(
                    "empty recommendations for shape '{}'",
                    label
                )));
            }

            profiles.push(profile);
        }

        let profiles: [ShapeProfile; 8] = profiles
            .try_into()
            .map_err(|_| Error::InvalidKnowledgeBase("wrong number of profiles".to_string()))?;

        Ok(Self { profiles })
    }

    pub fn profile(&self, label: ShapeLabel) -> &ShapeProfile {
        &self.profiles[label.ordinal()]
    }

    pub fn description(&self, label: ShapeLabel) -> &str {
        &self.profile(label).description
    }

    pub fn recommendations(&self, label: ShapeLabel) -> &[String] {
        &self.profile(label).recommendations
    }

    pub fn iter(&self) -> impl Iterator<Item = (ShapeLabel, &ShapeProfile)> {
        ShapeLabel::ALL.into_iter().zip(self.profiles.iter())
    }
}

impl Default for ShapeKnowledgeBase {
    fn default() -> Self {
        Self::builtin()
    }
}

impl TryFrom<BTreeMap<ShapeLabel, ShapeProfile>> for ShapeKnowledgeBase {
    type Error = Error;

    fn try_from(entries: BTreeMap<ShapeLabel, ShapeProfile>) -> Result<Self> {
        Self::from_profiles(entries)
    }
}

/// Keys may be English or Spanish shape names, but each shape may appear only
/// once.
impl TryFrom<BTreeMap<String, ShapeProfile>> for ShapeKnowledgeBase {
    type Error = Error;

    fn try_from(entries: BTreeMap<String, ShapeProfile>) -> Result<Self> {
        let mut profiles = BTreeMap::new();
        for (key, profile) in entries {
            let label: ShapeLabel = key.parse()?;
            if profiles.insert(label, profile).is_some() {
                return Err(Error::InvalidKnowledgeBase(format!(
                    "shape '{}' is listed more than once",
                    label
                )));
            }
        }
        Self::from_profiles(profiles)
    }
}

impl From<ShapeKnowledgeBase> for BTreeMap<ShapeLabel, ShapeProfile> {
    fn from(kb: ShapeKnowledgeBase) -> Self {
        ShapeLabel::ALL.into_iter().zip(kb.profiles).collect()
    }
}
