#[cfg(test)]
mod _tests_motion_layout {
    use super::super::motion_layout::*;
    use super::super::motion_model::MotionModel;
    use crate::errors::MotionError;
    use crate::interfaces::Broadcast;
    use approx::assert_abs_diff_eq;
    use nalgebra::{Matrix3xX, MatrixXx3, Vector3};
    use std::f64::consts::PI;

    const TOL: f64 = 1e-9;

    fn quarter_turn_motion() -> MotionModel {
        MotionModel::new(Vector3::z(), PI / 2.0, Vector3::new(1.0, 0.0, 0.0)).unwrap()
    }

    #[test]
    fn test_rows_conversion() {
        let rows = MatrixXx3::from_row_slice(&[
            1.0, 2.0, 3.0,
            4.0, 5.0, 6.0,
        ]);
        let points = points_from_rows(&rows);

        assert_eq!(points, vec![Vector3::new(1.0, 2.0, 3.0), Vector3::new(4.0, 5.0, 6.0)]);
        assert_eq!(points_to_rows(&points), rows);
    }

    #[test]
    fn test_columns_conversion() {
        // Two vectors stored as columns of a 3×2 matrix
        let columns = Matrix3xX::from_column_slice(&[
            1.0, 2.0, 3.0,
            4.0, 5.0, 6.0,
        ]);
        let vectors = vectors_from_columns(&columns);

        assert_eq!(vectors, vec![Vector3::new(1.0, 2.0, 3.0), Vector3::new(4.0, 5.0, 6.0)]);
        assert_eq!(vectors_to_columns(&vectors), columns);
    }

    #[test]
    fn test_empty_layouts() {
        assert!(points_from_rows(&MatrixXx3::zeros(0)).is_empty());
        assert_eq!(points_to_rows(&[]).nrows(), 0);
        assert_eq!(vectors_to_columns(&[]).ncols(), 0);
    }

    #[test]
    fn test_transform_rows() {
        let rows = MatrixXx3::from_row_slice(&[
            1.0, 0.0, 0.0,
            0.0, 1.0, 0.0,
        ]);
        let moved = transform_rows(&quarter_turn_motion(), &rows, Broadcast::Uniform(1.0)).unwrap();

        assert_eq!(moved.nrows(), 2);
        assert_abs_diff_eq!(moved[(0, 0)], 1.0, epsilon = TOL);
        assert_abs_diff_eq!(moved[(0, 1)], 1.0, epsilon = TOL);
        assert_abs_diff_eq!(moved[(1, 0)], 0.0, epsilon = TOL);
        assert_abs_diff_eq!(moved[(1, 1)], 0.0, epsilon = TOL);
    }

    #[test]
    fn test_rotate_columns() {
        let columns = Matrix3xX::from_column_slice(&[
            1.0, 0.0, 0.0,
            0.0, 0.0, 2.0,
        ]);
        let rotated = rotate_columns(&quarter_turn_motion(), &columns, Broadcast::Uniform(1.0)).unwrap();

        assert_eq!(rotated.ncols(), 2);
        assert_abs_diff_eq!(rotated.column(0).into_owned(), Vector3::new(0.0, 1.0, 0.0), epsilon = TOL);
        // Along the axis: unchanged, and no translation for directions
        assert_abs_diff_eq!(rotated.column(1).into_owned(), Vector3::new(0.0, 0.0, 2.0), epsilon = TOL);
    }

    #[test]
    fn test_translate_columns() {
        let columns = Matrix3xX::from_column_slice(&[0.0, 0.0, 0.0]);
        let motion = quarter_turn_motion();

        let translated = translate_columns(&motion, &columns, 0.5).unwrap();
        assert_abs_diff_eq!(translated.column(0).into_owned(), Vector3::new(0.5, 0.0, 0.0), epsilon = TOL);

        assert!(matches!(
            translate_columns(&motion, &columns, 1.1),
            Err(MotionError::InvalidTime { .. })
        ));
    }
}
