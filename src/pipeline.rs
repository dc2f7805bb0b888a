//! Detection followed by classification, and the report handed to callers.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::classifier::{Classification, ShapeClassifier};
use crate::error::Result;
use crate::shape::ShapeLabel;
use crate::source::LandmarkSource;
use crate::types::{LandmarkSet, Point3D};

/// Outcome of analyzing one image.
#[derive(Debug, Clone, PartialEq)]
pub enum Analysis {
    /// The detector found no face. The classifier was not run.
    NoFace,
    Classified {
        landmarks: LandmarkSet,
        classification: Classification,
    },
}

pub fn analyze<S>(source: &S, classifier: &ShapeClassifier, image: &[u8]) -> Result<Analysis>
where
    S: LandmarkSource + ?Sized,
{
    let Some(landmarks) = source.detect(image)? else {
        info!("no face detected");
        return Ok(Analysis::NoFace);
    };

    let classification = classifier.classify(&landmarks)?;
    info!(shape = %classification.shape, "face analyzed");

    Ok(Analysis::Classified {
        landmarks,
        classification,
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportStatus {
    Ok,
    NoFace,
    Error,
}

/// Serializable summary of an analysis, one per image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub status: ReportStatus,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub landmarks: Option<Vec<Point3D>>,
    pub face_shape: Option<ShapeLabel>,
    pub description: Option<String>,
    pub recommendations: Vec<String>,
}

impl AnalysisReport {
    /// Build a report. Landmarks are only attached when requested, since a
    /// full mesh dominates the output size.
    pub fn from_result(result: Result<Analysis>, include_landmarks: bool) -> Self {
        match result {
            Ok(Analysis::NoFace) => Self {
                status: ReportStatus::NoFace,
                message: "no face detected in the image".to_string(),
                landmarks: None,
                face_shape: None,
                description: None,
                recommendations: Vec::new(),
            },
            Ok(Analysis::Classified {
                landmarks,
                classification,
            }) => Self {
                status: ReportStatus::Ok,
                message: "image analyzed successfully".to_string(),
                landmarks: include_landmarks.then(|| landmarks.into_points()),
                face_shape: Some(classification.shape),
                description: Some(classification.description),
                recommendations: classification.recommendations,
            },
            Err(e) => {
                warn!(error = %e, "analysis failed");
                Self {
                    status: ReportStatus::Error,
                    message: e.to_string(),
                    landmarks: None,
                    face_shape: None,
                    description: None,
                    recommendations: Vec::new(),
                }
            }
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == ReportStatus::Ok
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn no_face_skips_classifier() {
        let source = |_: &[u8]| -> Result<Option<LandmarkSet>> { Ok(None) };
        let analysis = analyze(&source, &ShapeClassifier::default(), b"").unwrap();
        assert_eq!(analysis, Analysis::NoFace);

        let report = AnalysisReport::from_result(Ok(analysis), true);
        assert_eq!(report.status, ReportStatus::NoFace);
        assert!(report.face_shape.is_none());
        assert!(report.recommendations.is_empty());
    }

    #[test]
    fn processing_error_is_distinct_from_no_face() {
        let report = AnalysisReport::from_result(
            Err(Error::DegenerateGeometry { face_width: 0.0 }),
            false,
        );
        assert_eq!(report.status, ReportStatus::Error);
        assert!(report.message.contains("Degenerate geometry"));
    }

    #[test]
    fn status_serializes_snake_case() {
        let json = serde_json::to_string(&ReportStatus::NoFace).unwrap();
        assert_eq!(json, "\"no_face\"");
    }
}
