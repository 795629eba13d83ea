// Layout adapters: matrix batch conventions <-> Vector3 slices
//
// The motion API works on `&[Vector3<f64>]`. Callers holding dense matrices use
// one of two legacy conventions:
// - row batches (N×3, one point per row) for point positions
// - column batches (3×N, one vector per column) for directions such as wave vectors
// Conversions between the two and the slice representation live only here.

use nalgebra::{Matrix3xX, MatrixXx3, Vector3};

use super::motion_model::MotionModel;
use crate::errors::MotionError;
use crate::interfaces::Broadcast;

/// One point per row of an N×3 matrix
pub fn points_from_rows(rows: &MatrixXx3<f64>) -> Vec<Vector3<f64>> {
    rows.row_iter().map(|row| row.transpose()).collect()
}

/// N×3 matrix with one point per row
pub fn points_to_rows(points: &[Vector3<f64>]) -> MatrixXx3<f64> {
    MatrixXx3::from_fn(points.len(), |i, j| points[i][j])
}

/// One vector per column of a 3×N matrix
pub fn vectors_from_columns(columns: &Matrix3xX<f64>) -> Vec<Vector3<f64>> {
    columns.column_iter().map(|column| column.into_owned()).collect()
}

/// 3×N matrix with one vector per column
pub fn vectors_to_columns(vectors: &[Vector3<f64>]) -> Matrix3xX<f64> {
    Matrix3xX::from_fn(vectors.len(), |i, j| vectors[j][i])
}

/// [`MotionModel::transform_batch`] on an N×3 row batch
pub fn transform_rows(
    motion: &MotionModel,
    rows: &MatrixXx3<f64>,
    time: Broadcast<'_>,
) -> Result<MatrixXx3<f64>, MotionError> {
    let moved = motion.transform_batch(&points_from_rows(rows), time)?;
    Ok(points_to_rows(&moved))
}

/// [`MotionModel::rotate_only`] on a 3×N column batch
pub fn rotate_columns(
    motion: &MotionModel,
    columns: &Matrix3xX<f64>,
    time: Broadcast<'_>,
) -> Result<Matrix3xX<f64>, MotionError> {
    let rotated = motion.rotate_only(&vectors_from_columns(columns), time)?;
    Ok(vectors_to_columns(&rotated))
}

/// [`MotionModel::translate_only`] on a 3×N column batch
pub fn translate_columns(
    motion: &MotionModel,
    columns: &Matrix3xX<f64>,
    time: f64,
) -> Result<Matrix3xX<f64>, MotionError> {
    let translated = motion.translate_only(&vectors_from_columns(columns), time)?;
    Ok(vectors_to_columns(&translated))
}
