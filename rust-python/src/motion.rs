//! Python bindings for MotionModel

use nalgebra::Vector3;
use pyo3::exceptions::{PyIOError, PyValueError};
use pyo3::prelude::*;
use rigid_motion::{Broadcast, MotionError, MotionModel, TimePolicy};

/// A time argument from Python: one float for every item, or one float per item
#[derive(FromPyObject)]
pub enum PyTime {
    Scalar(f64),
    PerItem(Vec<f64>),
}

impl PyTime {
    fn as_broadcast(&self) -> Broadcast<'_> {
        match self {
            PyTime::Scalar(t) => Broadcast::Uniform(*t),
            PyTime::PerItem(ts) => Broadcast::PerItem(ts),
        }
    }
}

fn to_py_err(err: MotionError) -> PyErr {
    match err {
        MotionError::Io(_) => PyIOError::new_err(err.to_string()),
        _ => PyValueError::new_err(err.to_string()),
    }
}

fn to_vector(v: [f64; 3]) -> Vector3<f64> {
    Vector3::new(v[0], v[1], v[2])
}

fn to_array(v: &Vector3<f64>) -> [f64; 3] {
    [v[0], v[1], v[2]]
}

fn to_vectors(points: &[[f64; 3]]) -> Vec<Vector3<f64>> {
    points.iter().map(|&p| to_vector(p)).collect()
}

fn to_arrays(points: &[Vector3<f64>]) -> Vec<[f64; 3]> {
    points.iter().map(to_array).collect()
}

/// Python wrapper for MotionModel
///
/// Rigid body motion of a sample: a rotation of `rotation_angle * time` about
/// `rotation_axis` through `origin`, followed by a translation of
/// `translation * time`.
#[pyclass(name = "RigidBodyMotion", frozen)]
#[derive(Clone)]
pub struct PyRigidBodyMotion {
    pub(crate) inner: MotionModel,
}

#[pymethods]
impl PyRigidBodyMotion {
    /// Create a rigid body motion
    ///
    /// Args:
    ///     rotation_axis: Unit rotation axis as [x, y, z]
    ///     rotation_angle: Radians of rotation at time=1, in the open interval (0, pi)
    ///     translation: Translation at time=1 as [x, y, z]
    ///     origin: Point about which the rotation is defined (default [0, 0, 0])
    ///     strict_time: Reject times outside [0, 1] in transforms and rotations
    ///
    /// Raises:
    ///     ValueError: for a non-unit axis, an angle outside (0, pi), or a
    ///         non-finite translation or origin
    #[new]
    #[pyo3(signature = (rotation_axis, rotation_angle, translation, origin=[0.0, 0.0, 0.0], strict_time=false))]
    fn new(
        rotation_axis: [f64; 3],
        rotation_angle: f64,
        translation: [f64; 3],
        origin: [f64; 3],
        strict_time: bool,
    ) -> PyResult<Self> {
        let policy = if strict_time {
            TimePolicy::Strict
        } else {
            TimePolicy::Extrapolate
        };

        MotionModel::with_origin(
            to_vector(rotation_axis),
            rotation_angle,
            to_vector(translation),
            to_vector(origin),
        )
        .map(|motion| PyRigidBodyMotion {
            inner: motion.with_time_policy(policy),
        })
        .map_err(to_py_err)
    }

    #[getter]
    fn rotation_axis(&self) -> [f64; 3] {
        to_array(self.inner.rotation_axis())
    }

    #[getter]
    fn rotation_angle(&self) -> f64 {
        self.inner.rotation_angle()
    }

    #[getter]
    fn translation(&self) -> [f64; 3] {
        to_array(self.inner.translation())
    }

    #[getter]
    fn origin(&self) -> [f64; 3] {
        to_array(self.inner.origin())
    }

    /// Position of a single point at `time`
    fn transform_point(&self, point: [f64; 3], time: f64) -> PyResult<[f64; 3]> {
        self.inner
            .transform_one(&to_vector(point), time)
            .map(|p| to_array(&p))
            .map_err(to_py_err)
    }

    /// Positions of N points (N×3), with one shared time or a list of N times
    fn transform_points(&self, points: Vec<[f64; 3]>, time: PyTime) -> PyResult<Vec<[f64; 3]>> {
        self.inner
            .transform_batch(&to_vectors(&points), time.as_broadcast())
            .map(|moved| to_arrays(&moved))
            .map_err(to_py_err)
    }

    /// Positions of N tetrahedra (N×4×3), one time per tetrahedron
    fn transform_tetrahedra(
        &self,
        tetrahedra: Vec<[[f64; 3]; 4]>,
        time: PyTime,
    ) -> PyResult<Vec<[[f64; 3]; 4]>> {
        let groups: Vec<[Vector3<f64>; 4]> = tetrahedra
            .iter()
            .map(|tet| tet.map(to_vector))
            .collect();

        self.inner
            .transform_grouped_batch(&groups, time.as_broadcast())
            .map(|moved| moved.iter().map(|tet| tet.map(|v| to_array(&v))).collect())
            .map_err(to_py_err)
    }

    /// Undo `transform_points` at the same times
    fn inverse_transform_points(
        &self,
        points: Vec<[f64; 3]>,
        time: PyTime,
    ) -> PyResult<Vec<[f64; 3]>> {
        self.inner
            .inverse_transform_batch(&to_vectors(&points), time.as_broadcast())
            .map(|restored| to_arrays(&restored))
            .map_err(to_py_err)
    }

    /// Rotate direction vectors (e.g. wave vectors); origin and translation are ignored
    ///
    /// Args:
    ///     vectors: list of [x, y, z] vectors
    ///     time: float, or a list with one time per vector
    fn rotate(&self, vectors: Vec<[f64; 3]>, time: PyTime) -> PyResult<Vec<[f64; 3]>> {
        self.inner
            .rotate_only(&to_vectors(&vectors), time.as_broadcast())
            .map(|rotated| to_arrays(&rotated))
            .map_err(to_py_err)
    }

    /// Translate points by `translation * time`
    ///
    /// Raises:
    ///     ValueError: if time is outside [0, 1]
    fn translate(&self, points: Vec<[f64; 3]>, time: f64) -> PyResult<Vec<[f64; 3]>> {
        self.inner
            .translate_only(&to_vectors(&points), time)
            .map(|translated| to_arrays(&translated))
            .map_err(to_py_err)
    }

    /// Rotation matrix at `time` as a row-major 3×3 list
    fn rotation_matrix(&self, time: f64) -> PyResult<[[f64; 3]; 3]> {
        let m = self.inner.rotation_matrix_at(time).map_err(to_py_err)?;
        Ok([
            [m[(0, 0)], m[(0, 1)], m[(0, 2)]],
            [m[(1, 0)], m[(1, 1)], m[(1, 2)]],
            [m[(2, 0)], m[(2, 1)], m[(2, 2)]],
        ])
    }

    /// The reverse motion (negated axis and translation)
    fn inverse(&self) -> Self {
        PyRigidBodyMotion {
            inner: self.inner.inverse(),
        }
    }

    /// Save to `path`, appending `.motion` if missing; returns the written path
    fn save(&self, path: &str) -> PyResult<String> {
        self.inner
            .save(path)
            .map(|written| written.to_string_lossy().into_owned())
            .map_err(to_py_err)
    }

    /// Load a motion from a `.motion` file
    ///
    /// Warning:
    ///     Only load files from trusted sources. The file fully determines the
    ///     motion applied to the sample.
    #[staticmethod]
    fn load(path: &str) -> PyResult<Self> {
        MotionModel::load(path)
            .map(|inner| PyRigidBodyMotion { inner })
            .map_err(to_py_err)
    }

    fn __repr__(&self) -> String {
        let axis = self.inner.rotation_axis();
        let translation = self.inner.translation();
        let origin = self.inner.origin();
        format!(
            "RigidBodyMotion(axis=[{:.4}, {:.4}, {:.4}], angle={:.6}, translation=[{:.4}, {:.4}, {:.4}], origin=[{:.4}, {:.4}, {:.4}])",
            axis.x, axis.y, axis.z,
            self.inner.rotation_angle(),
            translation.x, translation.y, translation.z,
            origin.x, origin.y, origin.z,
        )
    }
}
