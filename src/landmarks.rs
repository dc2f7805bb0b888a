//! Named anatomical locations in the 468-point face-mesh topology.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::{LandmarkSet, Point3D, LANDMARK_COUNT};

/// A named landmark with a fixed position in the mesh topology.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Landmark {
    Chin,
    Forehead,
    LeftCheek,
    RightCheek,
    LeftJaw,
    RightJaw,
    LeftTemple,
    RightTemple,
    NoseTip,
    LeftEyeOuter,
    RightEyeOuter,
    LeftEyeInner,
    RightEyeInner,
    MouthLeft,
    MouthRight,
    MouthTop,
    MouthBottom,
}

impl Landmark {
    pub const ALL: [Landmark; 17] = [
        Landmark::Chin,
        Landmark::Forehead,
        Landmark::LeftCheek,
        Landmark::RightCheek,
        Landmark::LeftJaw,
        Landmark::RightJaw,
        Landmark::LeftTemple,
        Landmark::RightTemple,
        Landmark::NoseTip,
        Landmark::LeftEyeOuter,
        Landmark::RightEyeOuter,
        Landmark::LeftEyeInner,
        Landmark::RightEyeInner,
        Landmark::MouthLeft,
        Landmark::MouthRight,
        Landmark::MouthTop,
        Landmark::MouthBottom,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Landmark::Chin => "chin",
            Landmark::Forehead => "forehead",
            Landmark::LeftCheek => "left_cheek",
            Landmark::RightCheek => "right_cheek",
            Landmark::LeftJaw => "left_jaw",
            Landmark::RightJaw => "right_jaw",
            Landmark::LeftTemple => "left_temple",
            Landmark::RightTemple => "right_temple",
            Landmark::NoseTip => "nose_tip",
            Landmark::LeftEyeOuter => "left_eye_outer",
            Landmark::RightEyeOuter => "right_eye_outer",
            Landmark::LeftEyeInner => "left_eye_inner",
            Landmark::RightEyeInner => "right_eye_inner",
            Landmark::MouthLeft => "mouth_left",
            Landmark::MouthRight => "mouth_right",
            Landmark::MouthTop => "mouth_top",
            Landmark::MouthBottom => "mouth_bottom",
        }
    }
}

impl std::fmt::Display for Landmark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Index of each named landmark within a [`LandmarkSet`].
///
/// The standard table ([`LandmarkIndexMap::face_mesh`]) maps the jaw corners
/// onto the same points as the cheeks, so jaw width always equals face width
/// unless a custom table is supplied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LandmarkIndexMap {
    pub chin: usize,
    pub forehead: usize,
    pub left_cheek: usize,
    pub right_cheek: usize,
    pub left_jaw: usize,
    pub right_jaw: usize,
    pub left_temple: usize,
    pub right_temple: usize,
    pub nose_tip: usize,
    pub left_eye_outer: usize,
    pub right_eye_outer: usize,
    pub left_eye_inner: usize,
    pub right_eye_inner: usize,
    pub mouth_left: usize,
    pub mouth_right: usize,
    pub mouth_top: usize,
    pub mouth_bottom: usize,
}

impl LandmarkIndexMap {
    pub const fn face_mesh() -> Self {
        Self {
            chin: 152,
            forehead: 10,
            left_cheek: 234,
            right_cheek: 454,
            left_jaw: 234,
            right_jaw: 454,
            left_temple: 127,
            right_temple: 356,
            nose_tip: 1,
            left_eye_outer: 33,
            right_eye_outer: 263,
            left_eye_inner: 133,
            right_eye_inner: 362,
            mouth_left: 61,
            mouth_right: 291,
            mouth_top: 13,
            mouth_bottom: 14,
        }
    }

    pub fn index(&self, landmark: Landmark) -> usize {
        match landmark {
            Landmark::Chin => self.chin,
            Landmark::Forehead => self.forehead,
            Landmark::LeftCheek => self.left_cheek,
            Landmark::RightCheek => self.right_cheek,
            Landmark::LeftJaw => self.left_jaw,
            Landmark::RightJaw => self.right_jaw,
            Landmark::LeftTemple => self.left_temple,
            Landmark::RightTemple => self.right_temple,
            Landmark::NoseTip => self.nose_tip,
            Landmark::LeftEyeOuter => self.left_eye_outer,
            Landmark::RightEyeOuter => self.right_eye_outer,
            Landmark::LeftEyeInner => self.left_eye_inner,
            Landmark::RightEyeInner => self.right_eye_inner,
            Landmark::MouthLeft => self.mouth_left,
            Landmark::MouthRight => self.mouth_right,
            Landmark::MouthTop => self.mouth_top,
            Landmark::MouthBottom => self.mouth_bottom,
        }
    }

    /// Look up a named landmark in a validated set.
    pub fn point(&self, landmarks: &LandmarkSet, landmark: Landmark) -> Result<Point3D> {
        let idx = self.index(landmark);
        landmarks.get(idx).copied().ok_or_else(|| {
            Error::InvalidLandmarkInput(format!(
                "{} index {} is outside a {}-point set",
                landmark,
                idx,
                landmarks.num_landmarks()
            ))
        })
    }

    /// Every index must address a point of the mesh topology.
    pub fn validate(&self) -> Result<()> {
        for landmark in Landmark::ALL {
            let idx = self.index(landmark);
            if idx >= LANDMARK_COUNT {
                return Err(Error::InvalidIndexMap(format!(
                    "{} index {} exceeds mesh size {}",
                    landmark, idx, LANDMARK_COUNT
                )));
            }
        }
        Ok(())
    }
}

impl Default for LandmarkIndexMap {
    fn default() -> Self {
        Self::face_mesh()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn face_mesh_table_is_valid() {
        let map = LandmarkIndexMap::face_mesh();
        assert!(map.validate().is_ok());
        assert_eq!(map.index(Landmark::Chin), 152);
        assert_eq!(map.index(Landmark::Forehead), 10);
        assert_eq!(map.index(Landmark::LeftTemple), 127);
        assert_eq!(map.index(Landmark::RightTemple), 356);
    }

    #[test]
    fn jaw_shares_cheek_points() {
        let map = LandmarkIndexMap::face_mesh();
        assert_eq!(map.left_jaw, map.left_cheek);
        assert_eq!(map.right_jaw, map.right_cheek);
    }

    #[test]
    fn out_of_range_index_is_rejected() {
        let map = LandmarkIndexMap {
            right_temple: LANDMARK_COUNT,
            ..LandmarkIndexMap::face_mesh()
        };
        let err = map.validate().unwrap_err();
        assert!(matches!(err, Error::InvalidIndexMap(_)));
        assert!(err.to_string().contains("right_temple"));
    }

    #[test]
    fn partial_config_falls_back_to_face_mesh() {
        let map: LandmarkIndexMap =
            serde_json::from_str(r#"{"left_jaw": 172, "right_jaw": 397}"#).unwrap();
        assert_eq!(map.left_jaw, 172);
        assert_eq!(map.right_jaw, 397);
        assert_eq!(map.chin, 152);
    }

    #[test]
    fn names_are_unique() {
        let mut names: Vec<_> = Landmark::ALL.iter().map(|l| l.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), Landmark::ALL.len());
    }
}
