//! Face proportions measured from landmark points.
//!
//! All distances are taken on the image plane in normalized coordinates, so
//! they are fractions of the image size rather than pixels.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::landmarks::{Landmark, LandmarkIndexMap};
use crate::types::LandmarkSet;

/// Face widths below this are treated as collapsed geometry.
pub const MIN_FACE_WIDTH: f64 = 1e-9;

/// The four distances the shape rules are evaluated on.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FaceMeasurements {
    /// Chin to forehead
    pub face_length: f64,

    /// Left cheek to right cheek
    pub face_width: f64,

    /// Left jaw corner to right jaw corner
    pub jaw_width: f64,

    /// Left temple to right temple
    pub temple_width: f64,
}

impl FaceMeasurements {
    pub fn from_landmarks(landmarks: &LandmarkSet, map: &LandmarkIndexMap) -> Result<Self> {
        let span = |a: Landmark, b: Landmark| -> Result<f64> {
            Ok(map.point(landmarks, a)?.distance_2d(&map.point(landmarks, b)?))
        };

        Ok(Self {
            face_length: span(Landmark::Chin, Landmark::Forehead)?,
            face_width: span(Landmark::LeftCheek, Landmark::RightCheek)?,
            jaw_width: span(Landmark::LeftJaw, Landmark::RightJaw)?,
            temple_width: span(Landmark::LeftTemple, Landmark::RightTemple)?,
        })
    }

    /// Face length over face width.
    pub fn ratio(&self) -> Result<f64> {
        if self.face_width.is_nan() || self.face_width <= MIN_FACE_WIDTH {
            return Err(Error::DegenerateGeometry {
                face_width: self.face_width,
            });
        }

        let ratio = self.face_length / self.face_width;
        if !ratio.is_finite() {
            return Err(Error::DegenerateGeometry {
                face_width: self.face_width,
            });
        }
        Ok(ratio)
    }

    /// Length and width differ by less than a tenth of the length.
    pub fn is_balanced(&self) -> bool {
        (self.face_length - self.face_width).abs() < 0.1 * self.face_length
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn measurements(face_length: f64, face_width: f64) -> FaceMeasurements {
        FaceMeasurements {
            face_length,
            face_width,
            jaw_width: 0.3,
            temple_width: 0.3,
        }
    }

    #[test]
    fn test_ratio() {
        assert!((measurements(0.8, 0.4).ratio().unwrap() - 2.0).abs() < 1e-12);
        assert!((measurements(0.5, 0.5).ratio().unwrap() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_ratio_zero_width() {
        let err = measurements(0.8, 0.0).ratio().unwrap_err();
        assert!(matches!(err, Error::DegenerateGeometry { face_width } if face_width == 0.0));

        assert!(measurements(0.8, 1e-12).ratio().is_err());
        assert!(measurements(0.8, f64::NAN).ratio().is_err());
    }

    #[test]
    fn test_balance_threshold() {
        // |0.50 - 0.46| = 0.04 < 0.05
        assert!(measurements(0.5, 0.46).is_balanced());
        // |0.50 - 0.44| = 0.06
        assert!(!measurements(0.5, 0.44).is_balanced());
    }

    #[test]
    fn test_balance_is_strict() {
        // |10 - 9| == 0.1 * 10 exactly
        assert!(!measurements(10.0, 9.0).is_balanced());
        assert!(!measurements(10.0, 11.0).is_balanced());
        assert!(measurements(10.0, 9.5).is_balanced());
    }

    #[test]
    fn test_ratio_at_elongated_threshold() {
        assert_eq!(measurements(0.75, 0.5).ratio().unwrap(), 1.5);
    }
}
