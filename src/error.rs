use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid landmark input: {0}")]
    InvalidLandmarkInput(String),

    #[error("Degenerate geometry: face width {face_width} is too small to measure a ratio")]
    DegenerateGeometry { face_width: f64 },

    #[error("Invalid landmark index map: {0}")]
    InvalidIndexMap(String),

    #[error("Invalid knowledge base: {0}")]
    InvalidKnowledgeBase(String),

    #[error("Unknown face shape: {0}")]
    UnknownShape(String),

    #[error("Logging setup failed: {0}")]
    Logging(String),
}

impl Error {
    /// Errors raised while measuring a landmark set, as opposed to I/O or
    /// configuration problems.
    pub fn is_processing_error(&self) -> bool {
        matches!(
            self,
            Error::InvalidLandmarkInput(_) | Error::DegenerateGeometry { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;
