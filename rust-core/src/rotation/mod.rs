// Rotation module: Rodrigues rotations about a fixed unit axis
// This module provides the rotation kernel used by every rigid body motion

// ======================== MODULE DECLARATIONS ========================
pub mod rotation_operator;


// ======================== ROTATION OPERATOR ========================
pub use rotation_operator::RotationOperator; // struct - unit axis with precomputed generator K and K²
// RotationOperator impl methods:
//   new(axis: Vector3<f64>) -> Result<Self, MotionError>              - validates |axis| ≈ 1, builds K and K²
//   reversed(&self) -> Self                                            - operator about the negated axis
//   axis(&self) -> &Vector3<f64>                                       - returns the rotation axis
//   generator(&self) -> &Matrix3<f64>                                  - returns K
//   generator_squared(&self) -> &Matrix3<f64>                          - returns K²
//   rotation_matrix(&self, angle: f64) -> Matrix3<f64>                 - Rodrigues matrix for one angle
//   rotation_matrices(&self, angles: &[f64]) -> Vec<Matrix3<f64>>      - one matrix per angle
//   apply_one(&self, vector: &Vector3<f64>, angle: f64) -> Vector3<f64> - rotates a single vector
//   apply(&self, vectors: &[Vector3<f64>], angle: Broadcast) -> Result<Vec<Vector3<f64>>, MotionError>
//                                                                      - rotates a batch, shared or per-item angle
