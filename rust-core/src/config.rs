// Constants

// Tolerances
pub const AXIS_NORM_TOLERANCE: f64 = 1e-5; // Accepted deviation of |axis| from unity
pub const MOTION_TOLERANCE: f64 = 1e-10; // For comparing motions field by field

// Persistence
pub const MOTION_FILE_SUFFIX: &str = "motion"; // Motion records are stored as <name>.motion
pub const MOTION_RECORD_VERSION: u32 = 1;

// Time handling
pub const DEFAULT_TIME_POLICY: TimePolicy = TimePolicy::Extrapolate;

/// How the full transform and the rotation-only transform treat times outside `[0, 1]`.
///
/// `translate_only` always rejects such times, independent of this setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimePolicy {
    /// Accept any time; values outside `[0, 1]` extrapolate the motion linearly.
    #[default]
    Extrapolate,
    /// Reject times outside `[0, 1]` with `MotionError::InvalidTime`.
    Strict,
}

impl TimePolicy {
    /// Whether `time` is admissible under this policy
    pub fn admits(self, time: f64) -> bool {
        match self {
            TimePolicy::Extrapolate => true,
            TimePolicy::Strict => is_unit_time(time),
        }
    }
}

/// `0 <= time <= 1` (false for NaN)
pub fn is_unit_time(time: f64) -> bool {
    (0.0..=1.0).contains(&time)
}
