//! Error type for scene import/export
//!
//! Every failure here is terminal for the operation that raised it: the
//! import or export aborts as a whole and nothing partial is left behind.

use std::path::PathBuf;

/// Error type for scene operations
#[derive(Debug)]
pub enum SceneError {
    /// positions.txt not found in the scene folder
    MissingManifest(PathBuf),
    /// No layers.txt, no legacy map file, no known-scenes entry
    MissingLayerList(PathBuf),
    /// A layer named in the list has no source PNG
    MissingSourceImage(PathBuf),
    /// A source PNG cannot be split into two halves (or failed to decode)
    MalformedSourceImage(String),
    /// A manifest line did not parse
    Format(String),
    /// Layer list and positions list have different lengths
    LengthMismatch { names: usize, positions: usize },
    /// An [img] layer with no matching [dpt] layer at export time
    UnpairedLayer(String),
    /// Export destination does not exist or is not a directory
    InvalidDestination(PathBuf),
    /// File I/O error
    Io(std::io::Error),
    /// Workspace document parse error
    Parse(ron::error::SpannedError),
    /// Workspace document serialize error
    Serialize(ron::Error),
    /// Workspace document failed validation
    ValidationError(String),
}

impl std::fmt::Display for SceneError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SceneError::MissingManifest(p) => {
                write!(f, "positions.txt not found in {}", p.display())
            }
            SceneError::MissingLayerList(p) => {
                write!(f, "layers.txt not found in {} and scene is not a known scene", p.display())
            }
            SceneError::MissingSourceImage(p) => {
                write!(f, "source image not found: {}", p.display())
            }
            SceneError::MalformedSourceImage(msg) => {
                write!(f, "malformed source image: {}", msg)
            }
            SceneError::Format(msg) => write!(f, "manifest format error: {}", msg),
            SceneError::LengthMismatch { names, positions } => write!(
                f,
                "layer list has {} entries but positions list has {}",
                names, positions
            ),
            SceneError::UnpairedLayer(name) => {
                write!(f, "depth missing for layer {}", name)
            }
            SceneError::InvalidDestination(p) => {
                write!(f, "invalid destination path: {}", p.display())
            }
            SceneError::Io(e) => write!(f, "I/O error: {}", e),
            SceneError::Parse(e) => write!(f, "Parse error: {}", e),
            SceneError::Serialize(e) => write!(f, "Serialize error: {}", e),
            SceneError::ValidationError(e) => write!(f, "Validation error: {}", e),
        }
    }
}

impl std::error::Error for SceneError {}

impl From<std::io::Error> for SceneError {
    fn from(e: std::io::Error) -> Self {
        SceneError::Io(e)
    }
}

impl From<ron::error::SpannedError> for SceneError {
    fn from(e: ron::error::SpannedError) -> Self {
        SceneError::Parse(e)
    }
}

impl From<ron::Error> for SceneError {
    fn from(e: ron::Error) -> Self {
        SceneError::Serialize(e)
    }
}
