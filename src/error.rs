//! Error types for the zone editor.

use thiserror::Error;

/// Zone-name validation failures, surfaced inline on the rename field.
/// These never end the edit session; the field reverts to its last valid
/// value and the operator may try again.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NameError {
    /// The proposed name is already held by another zone (case-insensitive).
    #[error("name '{name}' is already used by another zone")]
    Duplicate {
        /// The normalized proposal that collided
        name: String,
    },

    /// The proposed name is not one of the recognized zone roles.
    #[error("'{name}' is not a recognized zone role")]
    Unrecognized {
        /// The normalized proposal that was rejected
        name: String,
    },
}

/// Errors from zone persistence and reference-frame retrieval.
#[derive(Error, Debug)]
pub enum StoreError {
    /// I/O error during file operations
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing or serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Image decoding or encoding error
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    /// A persisted zone record did not match the expected shape
    #[error("invalid zone record: {message}")]
    InvalidRecord {
        /// Description of the shape violation
        message: String,
    },

    /// No reference frame could be found for the camera
    #[error("no reference frame available for camera '{camera}'")]
    FrameUnavailable {
        /// The camera whose frame was requested
        camera: String,
    },

    /// A persistence operation was requested with no camera selected
    #[error("no camera is selected")]
    NoCamera,
}

impl StoreError {
    /// Create an invalid record error with a message.
    pub fn invalid_record(message: impl Into<String>) -> Self {
        Self::InvalidRecord {
            message: message.into(),
        }
    }
}
