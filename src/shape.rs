use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Face shape category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeLabel {
    #[serde(alias = "ovalado")]
    Oval,
    #[serde(alias = "redondo")]
    Round,
    #[serde(alias = "cuadrado")]
    Square,
    Rectangular,
    #[serde(alias = "diamante")]
    Diamond,
    Triangular,
    #[serde(alias = "corazón")]
    Heart,
    #[serde(alias = "alargado")]
    Elongated,
}

impl ShapeLabel {
    pub const ALL: [ShapeLabel; 8] = [
        ShapeLabel::Oval,
        ShapeLabel::Round,
        ShapeLabel::Square,
        ShapeLabel::Rectangular,
        ShapeLabel::Diamond,
        ShapeLabel::Triangular,
        ShapeLabel::Heart,
        ShapeLabel::Elongated,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeLabel::Oval => "oval",
            ShapeLabel::Round => "round",
            ShapeLabel::Square => "square",
            ShapeLabel::Rectangular => "rectangular",
            ShapeLabel::Diamond => "diamond",
            ShapeLabel::Triangular => "triangular",
            ShapeLabel::Heart => "heart",
            ShapeLabel::Elongated => "elongated",
        }
    }

    /// Spanish name used by the built-in knowledge base.
    pub fn localized_name(&self) -> &'static str {
        match self {
            ShapeLabel::Oval => "ovalado",
            ShapeLabel::Round => "redondo",
            ShapeLabel::Square => "cuadrado",
            ShapeLabel::Rectangular => "rectangular",
            ShapeLabel::Diamond => "diamante",
            ShapeLabel::Triangular => "triangular",
            ShapeLabel::Heart => "corazón",
            ShapeLabel::Elongated => "alargado",
        }
    }

    /// Position in [`ShapeLabel::ALL`].
    pub(crate) fn ordinal(&self) -> usize {
        *self as usize
    }
}

impl std::fmt::Display for ShapeLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ShapeLabel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        ShapeLabel::ALL
            .into_iter()
            .find(|label| label.as_str() == key || label.localized_name() == key)
            .ok_or_else(|| Error::UnknownShape(s.to_string()))
    }
}
