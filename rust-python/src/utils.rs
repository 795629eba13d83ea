/// Utility functions for the rigid-motion Python module
use pyo3::prelude::*;

/// Get the version of the rigid-motion library
#[pyfunction]
pub fn version() -> &'static str {
    rigid_motion::VERSION
}
