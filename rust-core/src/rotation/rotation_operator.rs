use nalgebra::{Matrix3, Vector3};

use crate::config::AXIS_NORM_TOLERANCE;
use crate::errors::MotionError;
use crate::interfaces::Broadcast;

/// Rotation about a fixed unit axis, evaluated with the Rodrigues formula
///
/// The skew-symmetric generator `K` of the axis (the matrix of `v -> axis × v`) and
/// its square are computed once at construction. Any rotation angle is then
/// `R(θ) = I + sin(θ)·K + (1 − cos(θ))·K²`.
///
/// The operator holds no mutable state and can be shared between threads.
#[derive(Debug, Clone, PartialEq)]
pub struct RotationOperator {
    axis: Vector3<f64>,
    k: Matrix3<f64>,
    k2: Matrix3<f64>,
}

impl RotationOperator {
    /// Create an operator for `axis`, which must have unit length
    ///
    /// # Errors
    /// [`MotionError::InvalidAxis`] if `|axis|` deviates from 1 by more than
    /// [`AXIS_NORM_TOLERANCE`] (or is not finite).
    pub fn new(axis: Vector3<f64>) -> Result<Self, MotionError> {
        let norm = axis.norm();
        // Negated comparison so that NaN norms are rejected as well
        if !((norm - 1.0).abs() <= AXIS_NORM_TOLERANCE) {
            return Err(MotionError::InvalidAxis { norm });
        }

        let (rx, ry, rz) = (axis.x, axis.y, axis.z);
        #[rustfmt::skip]
        let k = Matrix3::new(
            0.0, -rz, ry,
            rz, 0.0, -rx,
            -ry, rx, 0.0,
        );
        let k2 = k * k;

        Ok(RotationOperator { axis, k, k2 })
    }

    /// Operator about the negated axis, i.e. the opposite sense of rotation
    ///
    /// Negating the axis negates `K` and leaves `K²` unchanged.
    pub fn reversed(&self) -> Self {
        RotationOperator {
            axis: -self.axis,
            k: -self.k,
            k2: self.k2,
        }
    }

    pub fn axis(&self) -> &Vector3<f64> {
        &self.axis
    }

    /// Cross-product matrix `K` of the axis
    pub fn generator(&self) -> &Matrix3<f64> {
        &self.k
    }

    /// `K·K`
    pub fn generator_squared(&self) -> &Matrix3<f64> {
        &self.k2
    }

    /// Rotation matrix for a right-handed rotation of `angle` radians about the axis
    #[inline]
    pub fn rotation_matrix(&self, angle: f64) -> Matrix3<f64> {
        let (sin, cos) = angle.sin_cos();
        Matrix3::identity() + self.k * sin + self.k2 * (1.0 - cos)
    }

    /// One independent rotation matrix per angle
    pub fn rotation_matrices(&self, angles: &[f64]) -> Vec<Matrix3<f64>> {
        angles.iter().map(|&angle| self.rotation_matrix(angle)).collect()
    }

    /// Rotate a single vector by `angle`
    #[inline]
    pub fn apply_one(&self, vector: &Vector3<f64>, angle: f64) -> Vector3<f64> {
        self.rotation_matrix(angle) * vector
    }

    /// Rotate a batch of vectors
    ///
    /// With [`Broadcast::Uniform`] one matrix is built and applied to every vector.
    /// With [`Broadcast::PerItem`] vector `i` is rotated by the matrix of angle `i`.
    ///
    /// # Errors
    /// [`MotionError::ShapeMismatch`] if a per-item angle list does not match the
    /// number of vectors.
    pub fn apply(
        &self,
        vectors: &[Vector3<f64>],
        angle: Broadcast<'_>,
    ) -> Result<Vec<Vector3<f64>>, MotionError> {
        angle.check_len(vectors.len())?;

        let rotated = match angle {
            Broadcast::Uniform(angle) => {
                let rotation = self.rotation_matrix(angle);
                vectors.iter().map(|v| rotation * v).collect()
            }
            Broadcast::PerItem(angles) => vectors
                .iter()
                .zip(angles)
                .map(|(v, &angle)| self.rotation_matrix(angle) * v)
                .collect(),
        };

        Ok(rotated)
    }
}
