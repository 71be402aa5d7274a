//! Dense vectors and matrices over floating-point numbers, and a linear
//! system solver built on Gaussian elimination with partial pivoting.
//!
//! `matrix::gauss` reduces an augmented matrix in place; `matrix::solve`
//! copies `A` and `b` into a fresh augmented matrix first. Python bindings are
//! behind the `python` feature.
#[cfg(feature = "python")]
use pyo3::prelude::*;

pub mod error;

pub mod matrix {
    pub mod gauss;
    pub mod gauss_config;
    pub mod matrix;
    pub mod matrix_dense;
    #[cfg(feature = "python")]
    pub mod matrix_py;
    pub mod solve;
}
pub mod vector {
    pub mod vector;
    #[cfg(feature = "python")]
    pub mod vector_py;
}

pub use error::{LinalgError, LinalgResult};
pub use matrix::gauss::{gauss, gauss_with};
pub use matrix::gauss_config::GaussConfig;
pub use matrix::matrix::{Element, Matrix};
pub use matrix::matrix_dense::MatrixDense;
pub use matrix::solve::{solve, solve_with};
pub use vector::vector::{Vector, DEFAULT_EPSILON};

/// A Python module implemented in Rust.
#[cfg(feature = "python")]
#[pymodule]
fn rust_gauss(_py: Python, m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<matrix::matrix_py::PyMatrix>()?;
    m.add_class::<vector::vector_py::PyVector>()?;
    m.add_function(wrap_pyfunction!(matrix::matrix_py::py_solve, m)?)?;
    m.add_function(wrap_pyfunction!(matrix::matrix_py::py_gauss, m)?)?;
    Ok(())
}
