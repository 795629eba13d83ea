//! Error type shared by the rotation and motion modules.
//!
//! Validation errors are raised at the call that violates a precondition and are
//! never retried internally. I/O and decoding failures only occur in
//! [`MotionModel::save`](crate::motion::MotionModel::save) and
//! [`MotionModel::load`](crate::motion::MotionModel::load).

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MotionError {
    /// Rotation axis is not of unit length.
    #[error("The rotation axis must be of unit length (got norm {norm})")]
    InvalidAxis { norm: f64 },

    /// Total rotation angle outside the open interval (0, π).
    #[error("The rotation angle must lie in the open interval (0, pi) (got {angle})")]
    InvalidAngle { angle: f64 },

    /// Translation or origin with an infinite or NaN component.
    #[error("The {field} must be finite (got [{}, {}, {}])", value[0], value[1], value[2])]
    NonFiniteVector { field: &'static str, value: [f64; 3] },

    /// Time outside [0, 1] where the operation requires it.
    #[error("The rigid body motion is only valid on the interval time=[0,1] (got {time})")]
    InvalidTime { time: f64 },

    /// Motion file path without the `.motion` suffix.
    #[error("The loaded motion file must end with .motion (got {})", path.display())]
    InvalidPath { path: PathBuf },

    /// Per-item parameter length does not match the batch length.
    #[error("Shape mismatch: expected {expected} per-item values, found {found}")]
    ShapeMismatch { expected: usize, found: usize },

    /// Motion record written by an unknown format version.
    #[error("Unsupported motion record version {found}")]
    UnsupportedVersion { found: u32 },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed motion record: {0}")]
    Serialization(#[from] serde_json::Error),
}
