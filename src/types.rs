use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Number of points produced by the face-mesh topology.
pub const LANDMARK_COUNT: usize = 468;

/// A landmark position normalized to the source image.
///
/// `x` and `y` are fractions of the image width and height, `z` is relative
/// depth. No unit conversion is ever applied.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point3D {
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub z: f64,
}

impl Point3D {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Point on the image plane with zero depth.
    pub const fn planar(x: f64, y: f64) -> Self {
        Self { x, y, z: 0.0 }
    }

    pub const fn zero() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            z: 0.0,
        }
    }

    /// Euclidean distance on the image plane. Depth is ignored.
    pub fn distance_2d(&self, other: &Point3D) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

/// A complete face mesh: exactly [`LANDMARK_COUNT`] finite points in
/// topology order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Point3D>", into = "Vec<Point3D>")]
pub struct LandmarkSet {
    points: Vec<Point3D>,
}

impl LandmarkSet {
    pub fn new(points: Vec<Point3D>) -> Result<Self> {
        if points.len() != LANDMARK_COUNT {
            return Err(Error::InvalidLandmarkInput(format!(
                "expected {} landmarks, got {}",
                LANDMARK_COUNT,
                points.len()
            )));
        }

        if let Some(idx) = points.iter().position(|p| !p.is_finite()) {
            return Err(Error::InvalidLandmarkInput(format!(
                "landmark {} has non-finite coordinates",
                idx
            )));
        }

        Ok(Self { points })
    }

    pub fn num_landmarks(&self) -> usize {
        self.points.len()
    }

    pub fn points(&self) -> &[Point3D] {
        &self.points
    }

    pub fn get(&self, idx: usize) -> Option<&Point3D> {
        self.points.get(idx)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Point3D> {
        self.points.iter()
    }

    pub fn into_points(self) -> Vec<Point3D> {
        self.points
    }
}

impl TryFrom<Vec<Point3D>> for LandmarkSet {
    type Error = Error;

    fn try_from(points: Vec<Point3D>) -> Result<Self> {
        Self::new(points)
    }
}

impl From<LandmarkSet> for Vec<Point3D> {
    fn from(set: LandmarkSet) -> Self {
        set.points
    }
}

impl std::ops::Index<usize> for LandmarkSet {
    type Output = Point3D;

    fn index(&self, idx: usize) -> &Self::Output {
        &self.points[idx]
    }
}

impl<'a> IntoIterator for &'a LandmarkSet {
    type Item = &'a Point3D;
    type IntoIter = std::slice::Iter<'a, Point3D>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
