// Motion module: Parametric rigid body motion of a sample over normalized time
// This module provides the motion model, its persistence and the matrix layout adapters

// ======================== MODULE DECLARATIONS ========================
pub mod motion_layout;
pub mod motion_model;
pub mod motion_persistence;

// Test modules
mod _tests_motion_layout;

// ======================== MOTION MODEL ========================
pub use motion_model::MotionModel; // struct - axis-angle rotation about an origin followed by a translation, t ∈ [0, 1]
// MotionModel impl methods:
//   new(axis, angle, translation) -> Result<Self, MotionError>         - motion about the coordinate origin
//   with_origin(axis, angle, translation, origin) -> Result<Self, ..>  - motion about a given origin
//   with_time_policy(self, policy: TimePolicy) -> Self                 - extrapolate or reject t outside [0, 1]
//   rotation_axis / rotation_angle / translation / origin / time_policy - accessors
//   transform_one(&self, point, time: f64) -> Result<Vector3<f64>, ..>               - full motion, one point
//   transform_batch(&self, points, time: Broadcast) -> Result<Vec<Vector3<f64>>, ..> - full motion, N points
//   transform_grouped_batch::<K>(&self, groups, time: Broadcast) -> Result<Vec<[Vector3<f64>; K]>, ..>
//                                                                      - full motion, N groups sharing one time
//   inverse_transform_one / inverse_transform_batch                    - exact undo of the full motion
//   rotate_only(&self, vectors, time: Broadcast) / rotate_only_one     - rotation about the axis only
//   translate_only(&self, points, time: f64) / translate_only_one      - translation only, t checked in [0, 1]
//   rotation_matrix_at(&self, time: f64) -> Result<Matrix3<f64>, ..>   - rotation realized at a time
//   inverse(&self) -> MotionModel                                      - negated axis and translation
//   approx_eq(&self, other, tol) -> bool / is_close_to(&self, other)   - tolerance comparison
//   save(&self, path) -> Result<PathBuf, ..> / load(path) -> Result<Self, ..> - `.motion` files

// ======================== PERSISTENCE ========================
pub use motion_persistence::{
    MotionRecord,       // struct - versioned on-disk record (axis, angle, translation, origin)
    has_motion_suffix,  // fn(path: &Path) -> bool - checks for the `.motion` suffix
    with_motion_suffix, // fn(path: &Path) -> PathBuf - appends `.motion` if missing
};

// ======================== LAYOUT ADAPTERS ========================
pub use motion_layout::{
    points_from_rows,     // fn(&MatrixXx3<f64>) -> Vec<Vector3<f64>> - N×3 rows to points
    points_to_rows,       // fn(&[Vector3<f64>]) -> MatrixXx3<f64> - points to N×3 rows
    rotate_columns,       // fn(&MotionModel, &Matrix3xX<f64>, Broadcast) -> Result<Matrix3xX<f64>, ..>
    transform_rows,       // fn(&MotionModel, &MatrixXx3<f64>, Broadcast) -> Result<MatrixXx3<f64>, ..>
    translate_columns,    // fn(&MotionModel, &Matrix3xX<f64>, f64) -> Result<Matrix3xX<f64>, ..>
    vectors_from_columns, // fn(&Matrix3xX<f64>) -> Vec<Vector3<f64>> - 3×N columns to vectors
    vectors_to_columns,   // fn(&[Vector3<f64>]) -> Matrix3xX<f64> - vectors to 3×N columns
};
