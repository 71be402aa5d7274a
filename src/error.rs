use thiserror::Error;

/// Failures of the vector, matrix and elimination routines.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LinalgError {
    /// Two operands that must have the same length do not
    #[error("Vectors not of same order ({left} vs {right})")]
    DimensionMismatch { left: usize, right: usize },

    #[error("Matrix is not an augmented square ({rows} rows, {cols} columns)")]
    NotAugmentedSquare { rows: usize, cols: usize },

    #[error("Matrix is not square ({rows} rows, {cols} columns)")]
    NotSquare { rows: usize, cols: usize },

    /// No non-zero pivot exists in `column` at or below the diagonal
    #[error("Matrix is singular (no pivot in column {column})")]
    Singular { column: usize },

    /// Row reduced to `0 = c` with `c != 0`
    #[error("Matrix is inconsistent (row {row} has no solution)")]
    Inconsistent { row: usize },

    /// Row reduced to `0 = 0`: the system has infinitely many solutions
    #[error("Matrix is underdetermined (row {row} is entirely zero)")]
    Underdetermined { row: usize },

    #[error("Row {row} has {found} entries, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
}

pub type LinalgResult<T> = Result<T, LinalgError>;

#[cfg(feature = "python")]
impl From<LinalgError> for pyo3::PyErr {
    fn from(error: LinalgError) -> pyo3::PyErr {
        pyo3::exceptions::PyValueError::new_err(error.to_string())
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            LinalgError::DimensionMismatch { left: 2, right: 3 }.to_string(),
            "Vectors not of same order (2 vs 3)"
        );
        assert_eq!(
            LinalgError::Singular { column: 1 }.to_string(),
            "Matrix is singular (no pivot in column 1)"
        );
        assert_ne!(
            LinalgError::Inconsistent { row: 0 },
            LinalgError::Underdetermined { row: 0 }
        );
    }
}
