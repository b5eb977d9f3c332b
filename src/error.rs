use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoordError {
    #[error("Shape mismatch: lon has shape {lon:?}, lat has shape {lat:?}")]
    ShapeMismatch { lon: Vec<usize>, lat: Vec<usize> },
    #[error("Array shape error: {0}")]
    Shape(#[from] ndarray::ShapeError),
    #[error("Unknown angle unit: {0}")]
    UnknownUnit(String),
    #[error("Missing column in layout: {0}")]
    MissingColumn(&'static str),
    #[error("Path does not exist: {0}")]
    PathNotFound(String),
    #[error("Invalid glob pattern: {0}")]
    Pattern(#[from] glob::PatternError),
    #[error("Invalid separator: {0}")]
    Separator(#[from] regex::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Logging setup failed: {0}")]
    Logging(String),
}
