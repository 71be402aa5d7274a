use pyo3::prelude::*;
use pyo3::types::PyType;

use crate::vector::vector::Vector;

#[derive(Debug, Clone)]
#[pyclass(name = "Vector")]
pub struct PyVector {
    pub inner: Vector<f64>,
}

#[pymethods]
impl PyVector {
    #[new]
    pub fn new(values: Vec<f64>) -> Self {
        PyVector {
            inner: Vector::from_vec(values),
        }
    }

    #[classmethod]
    pub fn zeros(_cls: &Bound<PyType>, len: usize) -> Self {
        PyVector {
            inner: Vector::zeros(len),
        }
    }

    pub fn to_list(&self) -> Vec<f64> {
        self.inner.to_vec()
    }

    pub fn __len__(&self) -> usize {
        self.inner.len()
    }

    pub fn copy(&self) -> PyVector {
        PyVector {
            inner: self.inner.copy(),
        }
    }

    pub fn equals(&self, other: &PyVector) -> bool {
        self.inner.equals(&other.inner)
    }

    #[pyo3(signature = (other, epsilon=None))]
    pub fn approx_equals(&self, other: &PyVector, epsilon: Option<f64>) -> bool {
        match epsilon {
            Some(epsilon) => self.inner.approx_equals(&other.inner, epsilon),
            None => self.inner.approx_eq(&other.inner),
        }
    }

    pub fn dot(&self, other: &PyVector) -> PyResult<f64> {
        Ok(self.inner.dot(&other.inner)?)
    }

    pub fn abs(&self) -> f64 {
        self.inner.abs()
    }

    pub fn angle(&self, other: &PyVector) -> PyResult<f64> {
        Ok(self.inner.angle(&other.inner)?)
    }

    pub fn cross(&self, other: &PyVector) -> PyResult<f64> {
        Ok(self.inner.cross(&other.inner)?)
    }

    // `other` is copied before `slf` is borrowed mutably, so `a.plus(a)` works
    pub fn plus(slf: &Bound<'_, Self>, other: &Bound<'_, PyVector>) -> PyResult<()> {
        let rhs = other.try_borrow()?.inner.copy();
        Ok(slf.try_borrow_mut()?.inner.plus(&rhs)?)
    }

    pub fn minus(slf: &Bound<'_, Self>, other: &Bound<'_, PyVector>) -> PyResult<()> {
        let rhs = other.try_borrow()?.inner.copy();
        Ok(slf.try_borrow_mut()?.inner.minus(&rhs)?)
    }

    pub fn scale(&mut self, factor: f64) {
        self.inner.scale(factor);
    }

    pub fn __repr__(&self) -> String {
        format!("Vector({})", self.inner)
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
