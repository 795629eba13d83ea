use std::f64::consts::PI;

use log::trace;
use nalgebra::{Matrix3, Vector3};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::config::{is_unit_time, TimePolicy, DEFAULT_TIME_POLICY, MOTION_TOLERANCE};
use crate::errors::MotionError;
use crate::interfaces::Broadcast;
use crate::rotation::RotationOperator;

/// Rigid body motion of a sample, parametric in a normalized time `t ∈ [0, 1]`
///
/// At time `t` a point `x` is first rotated by `t·rotation_angle` radians about the
/// line through `origin` along `rotation_axis`, then translated by `t·translation`.
/// The translation is applied in the fixed lab frame, independent of the origin.
///
/// The motion is an immutable value. Deriving another motion (for example with
/// [`inverse`](Self::inverse)) always builds a new instance.
///
/// # Batch conventions
/// Points and vectors are passed as `Vector3<f64>` slices. The caller picks the
/// batching shape explicitly:
/// - [`transform_one`](Self::transform_one): a single point
/// - [`transform_batch`](Self::transform_batch): N points, shared or per-point time
/// - [`transform_grouped_batch`](Self::transform_grouped_batch): N groups of K points
///   (four vertices per tetrahedral element), one time per group
///
/// Matrix layouts (N×3 rows, 3×N columns) are converted in
/// [`motion_layout`](super::motion_layout).
#[derive(Debug, Clone, PartialEq)]
pub struct MotionModel {
    rotator: RotationOperator,
    rotation_angle: f64,
    translation: Vector3<f64>,
    origin: Vector3<f64>,
    time_policy: TimePolicy,
}

impl MotionModel {
    /// Create a motion about the coordinate origin
    ///
    /// # Arguments
    /// * `rotation_axis` - Unit rotation axis
    /// * `rotation_angle` - Total rotation in radians reached at `t = 1`, in `(0, π)`
    /// * `translation` - Total translation reached at `t = 1`
    ///
    /// # Errors
    /// [`MotionError::InvalidAngle`] or [`MotionError::InvalidAxis`]
    pub fn new(
        rotation_axis: Vector3<f64>,
        rotation_angle: f64,
        translation: Vector3<f64>,
    ) -> Result<Self, MotionError> {
        Self::with_origin(rotation_axis, rotation_angle, translation, Vector3::zeros())
    }

    /// Create a motion whose rotation is defined about `origin`
    ///
    /// # Errors
    /// As [`new`](Self::new), plus [`MotionError::NonFiniteVector`] when the
    /// translation or origin has an infinite or NaN component.
    pub fn with_origin(
        rotation_axis: Vector3<f64>,
        rotation_angle: f64,
        translation: Vector3<f64>,
        origin: Vector3<f64>,
    ) -> Result<Self, MotionError> {
        // Open interval; the negated form also rejects NaN
        if !(rotation_angle > 0.0 && rotation_angle < PI) {
            return Err(MotionError::InvalidAngle {
                angle: rotation_angle,
            });
        }

        let rotator = RotationOperator::new(rotation_axis)?;
        check_finite("translation", &translation)?;
        check_finite("origin", &origin)?;

        Ok(MotionModel {
            rotator,
            rotation_angle,
            translation,
            origin,
            time_policy: DEFAULT_TIME_POLICY,
        })
    }

    /// Select how [`transform_one`](Self::transform_one) and friends treat times
    /// outside `[0, 1]` (builder pattern)
    pub fn with_time_policy(mut self, time_policy: TimePolicy) -> Self {
        self.time_policy = time_policy;
        self
    }

    pub fn rotation_axis(&self) -> &Vector3<f64> {
        self.rotator.axis()
    }

    pub fn rotation_angle(&self) -> f64 {
        self.rotation_angle
    }

    pub fn translation(&self) -> &Vector3<f64> {
        &self.translation
    }

    pub fn origin(&self) -> &Vector3<f64> {
        &self.origin
    }

    pub fn time_policy(&self) -> TimePolicy {
        self.time_policy
    }

    // ======================== FULL MOTION ========================

    /// Position of a single point at `time`
    pub fn transform_one(
        &self,
        point: &Vector3<f64>,
        time: f64,
    ) -> Result<Vector3<f64>, MotionError> {
        self.check_time(time)?;
        let rotation = self.rotation_at_unchecked(time);
        Ok(self.move_point(&rotation, point, time))
    }

    /// Positions of a batch of points
    ///
    /// With [`Broadcast::PerItem`] point `i` is observed at its own time `time[i]`,
    /// i.e. rotated by `rotation_angle·time[i]` and translated by `translation·time[i]`.
    ///
    /// # Errors
    /// [`MotionError::ShapeMismatch`] if the per-item times do not match the number
    /// of points, [`MotionError::InvalidTime`] under [`TimePolicy::Strict`].
    pub fn transform_batch(
        &self,
        points: &[Vector3<f64>],
        time: Broadcast<'_>,
    ) -> Result<Vec<Vector3<f64>>, MotionError> {
        time.check_len(points.len())?;
        self.check_times(&time)?;
        trace!("transform_batch: {} points", points.len());

        let moved = match time {
            Broadcast::Uniform(t) => {
                let rotation = self.rotation_at_unchecked(t);
                map_indexed(points, |_, point| self.move_point(&rotation, point, t))
            }
            Broadcast::PerItem(times) => map_indexed(points, |i, point| {
                let t = times[i];
                self.move_point(&self.rotation_at_unchecked(t), point, t)
            }),
        };

        Ok(moved)
    }

    /// Positions of a batch of point groups, e.g. the four vertices of each
    /// tetrahedral element; all points of group `i` share `time[i]`
    pub fn transform_grouped_batch<const K: usize>(
        &self,
        groups: &[[Vector3<f64>; K]],
        time: Broadcast<'_>,
    ) -> Result<Vec<[Vector3<f64>; K]>, MotionError> {
        time.check_len(groups.len())?;
        self.check_times(&time)?;
        trace!("transform_grouped_batch: {} groups of {}", groups.len(), K);

        let moved = match time {
            Broadcast::Uniform(t) => {
                let rotation = self.rotation_at_unchecked(t);
                map_indexed(groups, |_, group| self.move_group(&rotation, group, t))
            }
            Broadcast::PerItem(times) => map_indexed(groups, |i, group| {
                let t = times[i];
                self.move_group(&self.rotation_at_unchecked(t), group, t)
            }),
        };

        Ok(moved)
    }

    /// Exact undo of [`transform_one`](Self::transform_one) at the same `time`,
    /// valid for any translation
    pub fn inverse_transform_one(
        &self,
        point: &Vector3<f64>,
        time: f64,
    ) -> Result<Vector3<f64>, MotionError> {
        self.check_time(time)?;
        let rotation = self.rotation_at_unchecked(time);
        Ok(self.unmove_point(&rotation, point, time))
    }

    /// Exact undo of [`transform_batch`](Self::transform_batch) with the same times
    pub fn inverse_transform_batch(
        &self,
        points: &[Vector3<f64>],
        time: Broadcast<'_>,
    ) -> Result<Vec<Vector3<f64>>, MotionError> {
        time.check_len(points.len())?;
        self.check_times(&time)?;

        let restored = match time {
            Broadcast::Uniform(t) => {
                let rotation = self.rotation_at_unchecked(t);
                map_indexed(points, |_, point| self.unmove_point(&rotation, point, t))
            }
            Broadcast::PerItem(times) => map_indexed(points, |i, point| {
                let t = times[i];
                self.unmove_point(&self.rotation_at_unchecked(t), point, t)
            }),
        };

        Ok(restored)
    }

    // ======================== PARTIAL MOTIONS ========================

    /// Rotation-only transform of direction-valued quantities (e.g. wave vectors
    /// or scattering vectors)
    ///
    /// The vectors are rotated by `rotation_angle·time` about the axis through the
    /// coordinate origin. Neither the motion origin nor the translation is applied.
    pub fn rotate_only(
        &self,
        vectors: &[Vector3<f64>],
        time: Broadcast<'_>,
    ) -> Result<Vec<Vector3<f64>>, MotionError> {
        time.check_len(vectors.len())?;
        self.check_times(&time)?;

        match time {
            Broadcast::Uniform(t) => self
                .rotator
                .apply(vectors, Broadcast::Uniform(self.rotation_angle * t)),
            Broadcast::PerItem(times) => {
                let angles: Vec<f64> = times.iter().map(|t| self.rotation_angle * t).collect();
                self.rotator.apply(vectors, Broadcast::PerItem(&angles))
            }
        }
    }

    /// Rotation-only transform of a single vector
    pub fn rotate_only_one(
        &self,
        vector: &Vector3<f64>,
        time: f64,
    ) -> Result<Vector3<f64>, MotionError> {
        self.check_time(time)?;
        Ok(self.rotator.apply_one(vector, self.rotation_angle * time))
    }

    /// Translation-only transform: adds `translation·time` to every point
    ///
    /// # Errors
    /// [`MotionError::InvalidTime`] unless `0 ≤ time ≤ 1`, whatever the time policy.
    pub fn translate_only(
        &self,
        points: &[Vector3<f64>],
        time: f64,
    ) -> Result<Vec<Vector3<f64>>, MotionError> {
        let shift = self.translation_at(time)?;
        Ok(points.iter().map(|point| point + shift).collect())
    }

    /// Translation-only transform of a single point
    pub fn translate_only_one(
        &self,
        point: &Vector3<f64>,
        time: f64,
    ) -> Result<Vector3<f64>, MotionError> {
        Ok(point + self.translation_at(time)?)
    }

    /// Rotation matrix realized at `time`
    pub fn rotation_matrix_at(&self, time: f64) -> Result<Matrix3<f64>, MotionError> {
        self.check_time(time)?;
        Ok(self.rotation_at_unchecked(time))
    }

    // ======================== DERIVED MOTIONS ========================

    /// The reverse motion: negated axis and translation, same angle and origin
    ///
    /// Applying the inverse after the motion at the same time returns every point
    /// to its start when the translation is zero or parallel to the axis. A
    /// translation component perpendicular to the axis is rotated by the inverse
    /// before it is removed; use [`inverse_transform_one`](Self::inverse_transform_one)
    /// for an exact undo in that case.
    pub fn inverse(&self) -> MotionModel {
        MotionModel {
            rotator: self.rotator.reversed(),
            rotation_angle: self.rotation_angle,
            translation: -self.translation,
            origin: self.origin,
            time_policy: self.time_policy,
        }
    }

    /// Field-by-field comparison of the defining quantities within `tol`
    pub fn approx_eq(&self, other: &MotionModel, tol: f64) -> bool {
        (self.rotation_axis() - other.rotation_axis()).norm() < tol
            && (self.rotation_angle - other.rotation_angle).abs() < tol
            && (self.translation - other.translation).norm() < tol
            && (self.origin - other.origin).norm() < tol
    }

    /// [`approx_eq`](Self::approx_eq) with [`MOTION_TOLERANCE`]
    pub fn is_close_to(&self, other: &MotionModel) -> bool {
        self.approx_eq(other, MOTION_TOLERANCE)
    }

    // ======================== HELPERS ========================

    fn check_time(&self, time: f64) -> Result<(), MotionError> {
        if self.time_policy.admits(time) {
            Ok(())
        } else {
            Err(MotionError::InvalidTime { time })
        }
    }

    fn check_times(&self, time: &Broadcast<'_>) -> Result<(), MotionError> {
        time.values().iter().try_for_each(|&t| self.check_time(t))
    }

    fn translation_at(&self, time: f64) -> Result<Vector3<f64>, MotionError> {
        if !is_unit_time(time) {
            return Err(MotionError::InvalidTime { time });
        }
        Ok(self.translation * time)
    }

    #[inline]
    fn rotation_at_unchecked(&self, time: f64) -> Matrix3<f64> {
        self.rotator.rotation_matrix(self.rotation_angle * time)
    }

    #[inline]
    fn move_point(&self, rotation: &Matrix3<f64>, point: &Vector3<f64>, time: f64) -> Vector3<f64> {
        rotation * (point - self.origin) + self.origin + self.translation * time
    }

    #[inline]
    fn unmove_point(
        &self,
        rotation: &Matrix3<f64>,
        point: &Vector3<f64>,
        time: f64,
    ) -> Vector3<f64> {
        rotation.transpose() * (point - self.translation * time - self.origin) + self.origin
    }

    #[inline]
    fn move_group<const K: usize>(
        &self,
        rotation: &Matrix3<f64>,
        group: &[Vector3<f64>; K],
        time: f64,
    ) -> [Vector3<f64>; K] {
        std::array::from_fn(|j| self.move_point(rotation, &group[j], time))
    }
}

fn check_finite(field: &'static str, value: &Vector3<f64>) -> Result<(), MotionError> {
    if value.iter().all(|c| c.is_finite()) {
        Ok(())
    } else {
        Err(MotionError::NonFiniteVector {
            field,
            value: (*value).into(),
        })
    }
}

#[cfg(feature = "parallel")]
fn map_indexed<T, U, F>(items: &[T], f: F) -> Vec<U>
where
    T: Sync,
    U: Send,
    F: Fn(usize, &T) -> U + Sync + Send,
{
    items.par_iter().enumerate().map(|(i, item)| f(i, item)).collect()
}

#[cfg(not(feature = "parallel"))]
fn map_indexed<T, U, F>(items: &[T], f: F) -> Vec<U>
where
    F: Fn(usize, &T) -> U,
{
    items.iter().enumerate().map(|(i, item)| f(i, item)).collect()
}
