use pyo3::prelude::*;

// Module declarations
mod motion;
mod utils;

use motion::PyRigidBodyMotion;
use utils::version;

/// Python module definition
#[pymodule]
fn rigid_motion_py(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyRigidBodyMotion>()?;

    // Utility functions
    m.add_function(wrap_pyfunction!(version, m)?)?;

    // Module metadata
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;
    m.add("MOTION_FILE_SUFFIX", rigid_motion::config::MOTION_FILE_SUFFIX)?;

    Ok(())
}
