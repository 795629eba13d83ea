// Definitions that are used throughout all modules

use crate::errors::MotionError;

/// Scalar parameter of a batch operation (an angle or a time).
///
/// `Uniform` applies the same value to every item of the batch, `PerItem` carries
/// one value per item and must match the batch length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Broadcast<'a> {
    Uniform(f64),
    PerItem(&'a [f64]),
}

impl<'a> Broadcast<'a> {
    /// Value for item `index`. Panics for `PerItem` if `index` is out of range,
    /// so call [`check_len`](Self::check_len) first.
    #[inline]
    pub fn at(&self, index: usize) -> f64 {
        match self {
            Broadcast::Uniform(value) => *value,
            Broadcast::PerItem(values) => values[index],
        }
    }

    /// Every value carried, in item order (a single value for `Uniform`)
    pub fn values(&self) -> &[f64] {
        match self {
            Broadcast::Uniform(value) => std::slice::from_ref(value),
            Broadcast::PerItem(values) => values,
        }
    }

    /// Ensures a `PerItem` parameter has exactly `len` values
    pub fn check_len(&self, len: usize) -> Result<(), MotionError> {
        match self {
            Broadcast::Uniform(_) => Ok(()),
            Broadcast::PerItem(values) if values.len() == len => Ok(()),
            Broadcast::PerItem(values) => Err(MotionError::ShapeMismatch {
                expected: len,
                found: values.len(),
            }),
        }
    }
}

impl From<f64> for Broadcast<'_> {
    fn from(value: f64) -> Self {
        Broadcast::Uniform(value)
    }
}

impl<'a> From<&'a [f64]> for Broadcast<'a> {
    fn from(values: &'a [f64]) -> Self {
        Broadcast::PerItem(values)
    }
}

impl<'a> From<&'a Vec<f64>> for Broadcast<'a> {
    fn from(values: &'a Vec<f64>) -> Self {
        Broadcast::PerItem(values.as_slice())
    }
}

impl<'a, const N: usize> From<&'a [f64; N]> for Broadcast<'a> {
    fn from(values: &'a [f64; N]) -> Self {
        Broadcast::PerItem(values.as_slice())
    }
}
