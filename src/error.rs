//! Error types for the I/O collaborators around the overlay (camera, torch,
//! stored settings). The transform engine itself has no failure modes.

use thiserror::Error;

/// Camera acquisition failure. `Display` is the message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CameraError {
    #[error("Camera not supported in this browser.")]
    Unsupported,
    #[error(
        "Camera permission denied. Please allow camera access in your browser settings and refresh the page."
    )]
    PermissionDenied,
    #[error("No camera found on this device.")]
    NotFound,
    #[error("Camera is already in use by another application.")]
    InUse,
    /// Unrecognized failure; the payload is only for logs.
    #[error("Unable to access camera.")]
    Other(String),
}

impl CameraError {
    /// Map a `DOMException.name` from `getUserMedia`.
    pub fn from_dom_name(name: &str) -> Self {
        match name {
            "NotAllowedError" => CameraError::PermissionDenied,
            "NotFoundError" => CameraError::NotFound,
            "NotSupportedError" => CameraError::Unsupported,
            "NotReadableError" => CameraError::InUse,
            other => CameraError::Other(other.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TorchError {
    #[error("torch is not supported by this camera")]
    Unsupported,
    #[error("torch constraint rejected: {0}")]
    Rejected(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("local storage is unavailable")]
    StorageUnavailable,
    #[error("invalid stored settings: {0}")]
    Parse(#[from] serde_json::Error),
}
