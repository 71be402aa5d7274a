use num_traits::Float;

use crate::error::LinalgResult;

pub trait Element:  // Avoid repeating all the traits
    Float + std::iter::Sum<Self> + std::fmt::Display + std::fmt::Debug + Send + Sync
{
}

impl<T> Element for T where
    T: Float + std::iter::Sum<T> + std::fmt::Display + std::fmt::Debug + Send + Sync
{
}

/// Rectangular, row-major container of numbers.
///
/// Every row has the same length. A matrix built from zero rows has zero
/// columns.
pub trait Matrix<T>
where
    Self: Sized,
{
    /// Builds a matrix from a list of rows, failing on ragged input.
    fn from_list(lines: Vec<Vec<T>>) -> LinalgResult<Self>;
    fn to_list(&self) -> Vec<Vec<T>>;

    fn zeros(rows: usize, cols: usize) -> Self;
    fn identity(n: usize) -> Self;

    fn rows(&self) -> usize;
    fn cols(&self) -> usize;
    fn at(&self, row: usize, col: usize) -> T;
    fn set(&mut self, row: usize, col: usize, value: T);

    /// Same shape and every entry compares equal with `==`.
    fn equals(&self, other: &Self) -> bool;
    /// Same shape and every entry pair differs by at most `epsilon` (absolute).
    fn approx_equals(&self, other: &Self, epsilon: T) -> bool;

    fn copy(&self) -> Self;
    fn scale(&mut self, factor: T);

    /// Every entry below the main diagonal is zero.
    fn is_upper_triangular(&self) -> bool;
}
