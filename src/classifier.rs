use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;
use crate::knowledge::ShapeKnowledgeBase;
use crate::landmarks::LandmarkIndexMap;
use crate::metrics::FaceMeasurements;
use crate::shape::ShapeLabel;
use crate::types::{LandmarkSet, Point3D};

/// Length-to-width ratio above which a face is elongated.
pub const ELONGATED_RATIO: f64 = 1.5;

/// The result of classifying one face.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    pub shape: ShapeLabel,
    pub description: String,
    pub recommendations: Vec<String>,
    pub measurements: FaceMeasurements,
}

/// Maps a face mesh to a shape label and its styling advice.
///
/// Holds only read-only tables, so one classifier can be shared by reference
/// across threads.
///
/// # Usage
///
/// ```ignore
/// let classifier = ShapeClassifier::default();
/// let result = classifier.classify(&landmarks)?;
/// println!("{}: {}", result.shape, result.description);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ShapeClassifier {
    index_map: LandmarkIndexMap,
    knowledge: ShapeKnowledgeBase,
}

impl ShapeClassifier {
    pub fn new(index_map: LandmarkIndexMap, knowledge: ShapeKnowledgeBase) -> Result<Self> {
        index_map.validate()?;
        Ok(Self {
            index_map,
            knowledge,
        })
    }

    pub fn index_map(&self) -> &LandmarkIndexMap {
        &self.index_map
    }

    pub fn knowledge(&self) -> &ShapeKnowledgeBase {
        &self.knowledge
    }

    pub fn measure(&self, landmarks: &LandmarkSet) -> Result<FaceMeasurements> {
        FaceMeasurements::from_landmarks(landmarks, &self.index_map)
    }

    /// Apply the shape rules in priority order; the first match wins.
    ///
    /// Square, rectangular and diamond are never produced by these rules.
    pub fn decide(measurements: &FaceMeasurements) -> Result<ShapeLabel> {
        let ratio = measurements.ratio()?;

        let label = if ratio > ELONGATED_RATIO {
            ShapeLabel::Elongated
        } else if measurements.is_balanced() {
            ShapeLabel::Round
        } else if measurements.jaw_width > measurements.temple_width {
            ShapeLabel::Triangular
        } else if measurements.temple_width > measurements.jaw_width {
            ShapeLabel::Heart
        } else {
            ShapeLabel::Oval
        };

        Ok(label)
    }

    pub fn classify(&self, landmarks: &LandmarkSet) -> Result<Classification> {
        let measurements = self.measure(landmarks)?;
        let shape = Self::decide(&measurements)?;

        debug!(
            face_length = measurements.face_length,
            face_width = measurements.face_width,
            jaw_width = measurements.jaw_width,
            temple_width = measurements.temple_width,
            shape = %shape,
            "classified face shape"
        );

        let profile = self.knowledge.profile(shape);
        Ok(Classification {
            shape,
            description: profile.description.clone(),
            recommendations: profile.recommendations.clone(),
            measurements,
        })
    }

    /// Validate raw detector output, then classify it.
    pub fn classify_points(&self, points: Vec<Point3D>) -> Result<Classification> {
        let landmarks = LandmarkSet::new(points)?;
        self.classify(&landmarks)
    }
}
