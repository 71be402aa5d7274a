use pyo3::prelude::*;
use pyo3::types::PyType;

use crate::matrix::matrix::Matrix;
use crate::matrix::matrix_dense::MatrixDense;
use crate::matrix::solve::solve;
use crate::vector::vector::Vector;

#[derive(Debug, Clone)]
#[pyclass(name = "Matrix")]
pub struct PyMatrix {
    pub inner: MatrixDense<f64>,
}

#[pymethods]
impl PyMatrix {
    #[classmethod]
    pub fn from_list(_cls: &Bound<PyType>, lines: Vec<Vec<f64>>) -> PyResult<Self> {
        Ok(PyMatrix {
            inner: Matrix::from_list(lines)?,
        })
    }

    #[classmethod]
    pub fn identity(_cls: &Bound<PyType>, n: usize) -> Self {
        PyMatrix {
            inner: Matrix::identity(n),
        }
    }

    #[classmethod]
    pub fn zeros(_cls: &Bound<PyType>, rows: usize, cols: usize) -> Self {
        PyMatrix {
            inner: Matrix::zeros(rows, cols),
        }
    }

    pub fn to_list(&self) -> Vec<Vec<f64>> {
        self.inner.to_list()
    }

    #[getter]
    pub fn rows(&self) -> usize {
        self.inner.rows()
    }

    #[getter]
    pub fn cols(&self) -> usize {
        self.inner.cols()
    }

    pub fn copy(&self) -> PyMatrix {
        PyMatrix {
            inner: self.inner.copy(),
        }
    }

    pub fn equals(&self, other: &PyMatrix) -> bool {
        self.inner.equals(&other.inner)
    }

    pub fn approx_equals(&self, other: &PyMatrix, epsilon: f64) -> bool {
        self.inner.approx_equals(&other.inner, epsilon)
    }

    pub fn scale(&mut self, factor: f64) {
        self.inner.scale(factor);
    }

    /// Reduces this augmented matrix in place and returns the solution.
    pub fn gauss(&mut self) -> PyResult<Vec<f64>> {
        Ok(self.inner.gauss()?.into())
    }

    pub fn solve(&self, b: Vec<f64>) -> PyResult<Vec<f64>> {
        Ok(solve(&self.inner, &Vector::from_vec(b))?.into())
    }

    pub fn __repr__(&self) -> String {
        format!("Matrix({})", self.inner)
    }
}

/// Solves `a * x = b` without touching the inputs.
#[pyfunction]
#[pyo3(name = "solve")]
pub fn py_solve(a: Vec<Vec<f64>>, b: Vec<f64>) -> PyResult<Vec<f64>> {
    let a: MatrixDense<f64> = Matrix::from_list(a)?;
    Ok(solve(&a, &Vector::from_vec(b))?.into())
}

/// Solves an augmented system given as a list of rows.
#[pyfunction]
#[pyo3(name = "gauss")]
pub fn py_gauss(aug: Vec<Vec<f64>>) -> PyResult<Vec<f64>> {
    let mut aug: MatrixDense<f64> = Matrix::from_list(aug)?;
    Ok(aug.gauss()?.into())
}
