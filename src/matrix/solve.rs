use crate::error::{LinalgError, LinalgResult};
use crate::matrix::gauss::gauss_with;
use crate::matrix::gauss_config::GaussConfig;
use crate::matrix::matrix::{Element, Matrix};
use crate::matrix::matrix_dense::MatrixDense;
use crate::vector::vector::Vector;

/// Solves `a * x = b`. Neither `a` nor `b` is modified.
pub fn solve<T: Element>(a: &MatrixDense<T>, b: &Vector<T>) -> LinalgResult<Vector<T>> {
    solve_with(a, b, &GaussConfig::default())
}

pub fn solve_with<T: Element>(
    a: &MatrixDense<T>,
    b: &Vector<T>,
    config: &GaussConfig,
) -> LinalgResult<Vector<T>> {
    if a.rows() != a.cols() {
        return Err(LinalgError::NotSquare {
            rows: a.rows(),
            cols: a.cols(),
        });
    }

    let mut aug = a.augment(b)?;
    gauss_with(&mut aug, config)
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
