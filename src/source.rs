//! Where landmark sets come from.
//!
//! The face-mesh model itself lives outside this crate. Anything that can turn
//! image bytes into a [`LandmarkSet`] plugs in through [`LandmarkSource`].

use serde::Deserialize;
use tracing::debug;

use crate::error::{Error, Result};
use crate::types::{LandmarkSet, Point3D};

/// A face landmark detector.
pub trait LandmarkSource {
    /// Detect one face in the image.
    ///
    /// Returns `Ok(None)` when no face was found; a returned set always holds
    /// a full mesh in topology order.
    fn detect(&self, image: &[u8]) -> Result<Option<LandmarkSet>>;
}

impl<F> LandmarkSource for F
where
    F: Fn(&[u8]) -> Result<Option<LandmarkSet>>,
{
    fn detect(&self, image: &[u8]) -> Result<Option<LandmarkSet>> {
        self(image)
    }
}

/// Serialized detector output: either the detector's result object or a bare
/// list of points.
#[derive(Deserialize)]
#[serde(untagged)]
enum Recording {
    Detection {
        face_detected: bool,
        landmarks: Option<Vec<Point3D>>,
    },
    Points(Vec<Point3D>),
}

/// Replays landmarks that were captured earlier and stored as JSON.
///
/// The input bytes are the JSON document rather than an image.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecordedLandmarks;

impl RecordedLandmarks {
    pub fn new() -> Self {
        Self
    }
}

impl LandmarkSource for RecordedLandmarks {
    fn detect(&self, image: &[u8]) -> Result<Option<LandmarkSet>> {
        let points = match serde_json::from_slice::<Recording>(image)? {
            Recording::Detection {
                face_detected: false,
                ..
            } => {
                debug!("recording reports no face");
                return Ok(None);
            }
            Recording::Detection {
                face_detected: true,
                landmarks: None,
            } => {
                return Err(Error::InvalidLandmarkInput(
                    "face reported as detected but no landmarks were recorded".to_string(),
                ));
            }
            Recording::Detection {
                landmarks: Some(points),
                ..
            } => points,
            Recording::Points(points) => points,
        };

        debug!(count = points.len(), "loaded recorded landmarks");
        LandmarkSet::new(points).map(Some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::LANDMARK_COUNT;

    fn mesh_json() -> serde_json::Value {
        serde_json::json!(vec![serde_json::json!({"x": 0.5, "y": 0.5, "z": 0.0}); LANDMARK_COUNT])
    }

    #[test]
    fn replays_detection_object() {
        let doc = serde_json::json!({"face_detected": true, "landmarks": mesh_json()});
        let bytes = serde_json::to_vec(&doc).unwrap();

        let set = RecordedLandmarks.detect(&bytes).unwrap().unwrap();
        assert_eq!(set.num_landmarks(), LANDMARK_COUNT);
    }

    #[test]
    fn replays_bare_point_list() {
        let bytes = serde_json::to_vec(&mesh_json()).unwrap();
        assert!(RecordedLandmarks.detect(&bytes).unwrap().is_some());
    }

    #[test]
    fn no_face_is_none() {
        let bytes = br#"{"face_detected": false, "landmarks": null}"#;
        assert!(RecordedLandmarks.detect(bytes).unwrap().is_none());
    }

    #[test]
    fn detected_without_landmarks_is_invalid() {
        let bytes = br#"{"face_detected": true, "landmarks": null}"#;
        let err = RecordedLandmarks.detect(bytes).unwrap_err();
        assert!(matches!(err, Error::InvalidLandmarkInput(_)));
    }

    #[test]
    fn short_recording_is_invalid() {
        let bytes = br#"[{"x": 0.1, "y": 0.2, "z": 0.0}]"#;
        let err = RecordedLandmarks.detect(bytes).unwrap_err();
        assert!(matches!(err, Error::InvalidLandmarkInput(_)));
    }

    #[test]
    fn garbage_is_json_error() {
        let err = RecordedLandmarks.detect(b"\x89PNG\r\n").unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn closures_are_sources() {
        let source = |_: &[u8]| -> Result<Option<LandmarkSet>> { Ok(None) };
        assert!(source.detect(b"anything").unwrap().is_none());
    }
}
