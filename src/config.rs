use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::classifier::ShapeClassifier;
use crate::error::Result;
use crate::knowledge::ShapeKnowledgeBase;
use crate::landmarks::LandmarkIndexMap;

/// Tables the classifier is built from. Missing sections use the built-in
/// face-mesh indices and shape profiles.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FaceShapeConfig {
    pub landmarks: LandmarkIndexMap,
    pub shapes: ShapeKnowledgeBase,
}

impl FaceShapeConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let config = Self::from_json(&content)?;
        info!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    pub fn from_json(content: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(content)?;
        config.landmarks.validate()?;
        Ok(config)
    }

    pub fn into_classifier(self) -> Result<ShapeClassifier> {
        ShapeClassifier::new(self.landmarks, self.shapes)
    }
}
