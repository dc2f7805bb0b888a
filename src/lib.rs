//! # face-shape
//!
//! Face shape classification from face-mesh landmarks.
//!
//! This crate provides:
//! - **Landmark Handling**: validated 468-point meshes and a named index table
//! - **Measurements**: face length, face width, jaw width and temple width
//! - **Classification**: ordered ratio/threshold rules yielding a [`ShapeLabel`]
//! - **Recommendations**: a description and hairstyle advice for every shape
//!
//! Landmark detection is not part of this crate. Detectors plug in through the
//! [`LandmarkSource`] trait.
//!
//! ## Rules
//!
//! With `ratio = face_length / face_width`, the first matching rule wins:
//!
//! 1. `ratio > 1.5` gives **elongated**
//! 2. `|face_length - face_width| < 0.1 * face_length` gives **round**
//! 3. `jaw_width > temple_width` gives **triangular**
//! 4. `temple_width > jaw_width` gives **heart**
//! 5. otherwise **oval**
//!
//! Square, rectangular and diamond have profiles but no rule produces them.
//!
//! ## Quick Start
//!
//! ```rust
//! use face_shape::{LandmarkSet, Point3D, ShapeClassifier, ShapeLabel, LANDMARK_COUNT};
//!
//! // A mesh from your detector; here every point sits at the image centre
//! // except the ones the standard table reads.
//! let mut points = vec![Point3D::planar(0.5, 0.5); LANDMARK_COUNT];
//! points[152] = Point3D::planar(0.5, 0.9); // chin
//! points[10] = Point3D::planar(0.5, 0.1); // forehead
//! points[234] = Point3D::planar(0.3, 0.5); // left cheek and jaw
//! points[454] = Point3D::planar(0.7, 0.5); // right cheek and jaw
//! points[127] = Point3D::planar(0.32, 0.15); // left temple
//! points[356] = Point3D::planar(0.68, 0.15); // right temple
//!
//! let landmarks = LandmarkSet::new(points).unwrap();
//! let classifier = ShapeClassifier::default();
//! let result = classifier.classify(&landmarks).unwrap();
//!
//! assert_eq!(result.shape, ShapeLabel::Elongated);
//! println!("{}", result.description);
//! ```

mod classifier;
mod config;
mod error;
mod knowledge;
mod landmarks;
pub mod logging;
mod metrics;
mod pipeline;
mod shape;
mod source;
mod types;

pub use classifier::{Classification, ShapeClassifier, ELONGATED_RATIO};
pub use config::FaceShapeConfig;
pub use error::{Error, Result};
pub use knowledge::{ShapeKnowledgeBase, ShapeProfile};
pub use landmarks::{Landmark, LandmarkIndexMap};
pub use metrics::{FaceMeasurements, MIN_FACE_WIDTH};
pub use pipeline::{analyze, Analysis, AnalysisReport, ReportStatus};
pub use shape::ShapeLabel;
pub use source::{LandmarkSource, RecordedLandmarks};
pub use types::{LandmarkSet, Point3D, LANDMARK_COUNT};
