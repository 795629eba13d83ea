//! Saving and loading motions as `.motion` files.
//!
//! A motion file holds a versioned [`MotionRecord`] encoded as JSON: the rotation
//! axis, rotation angle, translation and origin, nothing else. The time policy is
//! a runtime choice and is not stored; loaded motions use the default policy.
//!
//! # Security
//! Loading restores whatever motion the file describes. The record is plain data
//! and every field is validated again through [`MotionModel::with_origin`], but a
//! file from an untrusted or unauthenticated source can still impose an arbitrary
//! (valid) motion on the simulation. Only load motion files from trusted sources.

use std::ffi::OsString;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use log::debug;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use super::motion_model::MotionModel;
use crate::config::{MOTION_FILE_SUFFIX, MOTION_RECORD_VERSION};
use crate::errors::MotionError;

/// On-disk representation of a [`MotionModel`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MotionRecord {
    pub format_version: u32,
    pub rotation_axis: [f64; 3],
    pub rotation_angle: f64,
    pub translation: [f64; 3],
    pub origin: [f64; 3],
}

impl From<&MotionModel> for MotionRecord {
    fn from(motion: &MotionModel) -> Self {
        MotionRecord {
            format_version: MOTION_RECORD_VERSION,
            rotation_axis: (*motion.rotation_axis()).into(),
            rotation_angle: motion.rotation_angle(),
            translation: (*motion.translation()).into(),
            origin: (*motion.origin()).into(),
        }
    }
}

impl TryFrom<MotionRecord> for MotionModel {
    type Error = MotionError;

    fn try_from(record: MotionRecord) -> Result<Self, Self::Error> {
        if record.format_version != MOTION_RECORD_VERSION {
            return Err(MotionError::UnsupportedVersion {
                found: record.format_version,
            });
        }

        MotionModel::with_origin(
            Vector3::from(record.rotation_axis),
            record.rotation_angle,
            Vector3::from(record.translation),
            Vector3::from(record.origin),
        )
    }
}

impl MotionModel {
    /// Write the motion to disk
    ///
    /// The `.motion` suffix is appended when `path` does not already carry it.
    /// Returns the path that was written.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<PathBuf, MotionError> {
        let path = with_motion_suffix(path.as_ref());

        let mut writer = BufWriter::new(File::create(&path)?);
        serde_json::to_writer_pretty(&mut writer, &MotionRecord::from(self))?;
        writer.flush()?;

        debug!("Saved motion to {}", path.display());
        Ok(path)
    }

    /// Read a motion from a `.motion` file
    ///
    /// Only load files from trusted sources (see the module documentation).
    ///
    /// # Errors
    /// [`MotionError::InvalidPath`] if the path lacks the `.motion` suffix,
    /// [`MotionError::Io`] / [`MotionError::Serialization`] for unreadable files,
    /// [`MotionError::UnsupportedVersion`] for unknown records, and the usual
    /// construction errors for out-of-range axis or angle values.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, MotionError> {
        let path = path.as_ref();
        if !has_motion_suffix(path) {
            return Err(MotionError::InvalidPath {
                path: path.to_path_buf(),
            });
        }

        let reader = BufReader::new(File::open(path)?);
        let record: MotionRecord = serde_json::from_reader(reader)?;
        let motion = MotionModel::try_from(record)?;

        debug!("Loaded motion from {}", path.display());
        Ok(motion)
    }
}

/// True when the path ends in `.motion`, including a bare `.motion` file name
pub fn has_motion_suffix(path: &Path) -> bool {
    let name = path.as_os_str().as_encoded_bytes();
    name.strip_suffix(MOTION_FILE_SUFFIX.as_bytes())
        .is_some_and(|stem| stem.ends_with(b"."))
}

/// `path` itself if it already ends in `.motion`, otherwise `path` + `.motion`
pub fn with_motion_suffix(path: &Path) -> PathBuf {
    if has_motion_suffix(path) {
        return path.to_path_buf();
    }
    let mut name = OsString::from(path.as_os_str());
    name.push(".");
    name.push(MOTION_FILE_SUFFIX);
    PathBuf::from(name)
}
