use log::{debug, trace};
use rayon::prelude::*;

use crate::error::{LinalgError, LinalgResult};
use crate::matrix::gauss_config::GaussConfig;
use crate::matrix::matrix::{Element, Matrix};
use crate::matrix::matrix_dense::MatrixDense;
use crate::vector::vector::Vector;

/// Solves the n x (n+1) augmented system `aug` by Gaussian elimination.
///
/// The matrix is reduced in place: after the call it holds the forward
/// eliminated (upper triangular) system, with the entries above the diagonal
/// folded into the last column for every unknown that was resolved. Copy it
/// first if the original is still needed.
///
/// Errors:
/// - `NotAugmentedSquare` when the column count is not the row count plus one
/// - `Singular` when a column has no non-zero pivot at or below the diagonal
/// - `Inconsistent` when a row reduces to `0 = c` with `c != 0`
/// - `Underdetermined` when a row reduces to `0 = 0`
pub fn gauss<T: Element>(aug: &mut MatrixDense<T>) -> LinalgResult<Vector<T>> {
    gauss_with(aug, &GaussConfig::default())
}

pub fn gauss_with<T: Element>(
    aug: &mut MatrixDense<T>,
    config: &GaussConfig,
) -> LinalgResult<Vector<T>> {
    let n = aug.rows();
    if aug.cols() != n + 1 {
        return Err(LinalgError::NotAugmentedSquare {
            rows: n,
            cols: aug.cols(),
        });
    }

    forward_eliminate(aug, config.is_parallel(n))?;
    back_substitute(aug)
}

fn forward_eliminate<T: Element>(aug: &mut MatrixDense<T>, parallel: bool) -> LinalgResult<()> {
    let n = aug.rows();

    // The last column has nothing below it; its pivot is checked on the way back.
    for i in 0..n.saturating_sub(1) {
        if aug.at(i, i).is_zero() {
            let pivot_row = match (i + 1..n).find(|&r| !aug.at(r, i).is_zero()) {
                Some(r) => r,
                None => {
                    debug!("no pivot in column {}", i);
                    return Err(LinalgError::Singular { column: i });
                }
            };
            debug!("swapping rows {} and {} for a non-zero pivot", i, pivot_row);
            aug.swap_rows(i, pivot_row);
        }

        eliminate_below(aug, i, parallel);
    }

    Ok(())
}

// row[j] -= (a[j][i] / a[i][i]) * row[i] for every row j below the pivot
fn eliminate_below<T: Element>(aug: &mut MatrixDense<T>, pivot: usize, parallel: bool) {
    let cols = aug.cols;
    let (upper, lower) = aug.cells.split_at_mut((pivot + 1) * cols);
    let pivot_row = &upper[pivot * cols..];
    let pivot_val = pivot_row[pivot];

    let update = |row: &mut [T]| {
        let ratio = row[pivot] / pivot_val;
        row[pivot] = T::zero();
        for k in pivot + 1..cols {
            row[k] = row[k] - ratio * pivot_row[k];
        }
    };

    if parallel {
        lower.par_chunks_mut(cols).for_each(update);
    } else {
        lower.chunks_mut(cols).for_each(update);
    }
}

fn back_substitute<T: Element>(aug: &mut MatrixDense<T>) -> LinalgResult<Vector<T>> {
    let n = aug.rows();
    let mut solution = Vector::zeros(n);

    for i in (0..n).rev() {
        let diag = aug.at(i, i);
        let rhs = aug.at(i, n);

        if diag.is_zero() {
            if rhs.is_zero() {
                debug!("row {} reduced to 0 = 0", i);
                return Err(LinalgError::Underdetermined { row: i });
            }
            debug!("row {} reduced to 0 = {}", i, rhs);
            return Err(LinalgError::Inconsistent { row: i });
        }

        let x = rhs / diag;
        trace!("x[{}] = {}", i, x);
        solution[i] = x;

        for j in 0..i {
            let folded = aug.at(j, n) - aug.at(j, i) * x;
            aug.set(j, n, folded);
            aug.set(j, i, T::zero());
        }
    }

    Ok(solution)
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
