//! Rigid body motion library
//!
//! This library describes how a sample moves during a diffraction experiment: a
//! rotation about a fixed unit axis followed by a translation, both scaled
//! linearly by a normalized time `t ∈ [0, 1]`.
//!
//! ```
//! use nalgebra::Vector3;
//! use rigid_motion::motion::MotionModel;
//! use std::f64::consts::FRAC_PI_2;
//!
//! let motion = MotionModel::new(Vector3::z(), FRAC_PI_2, Vector3::new(1.0, 0.0, 0.0))?;
//! let moved = motion.transform_one(&Vector3::new(1.0, 0.0, 0.0), 1.0)?;
//! assert!((moved - Vector3::new(1.0, 1.0, 0.0)).norm() < 1e-12);
//! # Ok::<(), rigid_motion::MotionError>(())
//! ```

pub mod config;
pub mod errors;
pub mod interfaces;
pub mod motion;
pub mod rotation;

pub use config::TimePolicy;
pub use errors::MotionError;
pub use interfaces::Broadcast;
pub use motion::MotionModel;
pub use rotation::RotationOperator;

/// Common result type used throughout the library
pub type Result<T> = std::result::Result<T, MotionError>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
