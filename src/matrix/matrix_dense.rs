use itertools::{iproduct, Itertools};
use rand::distributions::{Distribution, Standard};
use rand::Rng;
use std::fmt;
use std::ops;
use std::ops::{Index, IndexMut};

use crate::error::{LinalgError, LinalgResult};
use crate::matrix::gauss;
use crate::matrix::gauss_config::GaussConfig;
use crate::matrix::matrix::{Element, Matrix};
use crate::vector::vector::Vector;

#[derive(Debug, Clone, PartialEq)]
pub struct MatrixDense<T> {
    pub(crate) cols: usize,
    pub(crate) rows: usize,
    pub(crate) cells: Vec<T>,
}

impl<T: Element> Matrix<T> for MatrixDense<T> {
    fn from_list(lines: Vec<Vec<T>>) -> LinalgResult<Self> {
        let rows = lines.len();
        let cols = lines.first().map(|l| l.len()).unwrap_or(0);

        if let Some((row, line)) = lines.iter().find_position(|l| l.len() != cols) {
            return Err(LinalgError::Ragged {
                row,
                expected: cols,
                found: line.len(),
            });
        }

        Ok(MatrixDense {
            rows,
            cols,
            cells: lines.into_iter().flatten().collect(),
        })
    }

    fn to_list(&self) -> Vec<Vec<T>> {
        (0..self.rows).map(|r| self.row_slice(r).to_vec()).collect()
    }

    fn zeros(rows: usize, cols: usize) -> Self {
        MatrixDense {
            rows,
            cols,
            cells: vec![T::zero(); rows * cols],
        }
    }

    fn identity(n: usize) -> Self {
        MatrixDense {
            rows: n,
            cols: n,
            cells: iproduct!(0..n, 0..n)
                .map(|(i, j)| if i == j { T::one() } else { T::zero() })
                .collect(),
        }
    }

    fn rows(&self) -> usize {
        self.rows
    }

    fn cols(&self) -> usize {
        self.cols
    }

    #[inline(always)]
    fn at(&self, row: usize, col: usize) -> T {
        self.cells[row * self.cols + col]
    }

    #[inline(always)]
    fn set(&mut self, row: usize, col: usize, value: T) {
        self.cells[row * self.cols + col] = value;
    }

    fn equals(&self, other: &MatrixDense<T>) -> bool {
        self.shape() == other.shape()
            && self.cells.iter().zip(other.cells.iter()).all(|(a, b)| a == b)
    }

    fn approx_equals(&self, other: &MatrixDense<T>, epsilon: T) -> bool {
        self.shape() == other.shape()
            && self
                .cells
                .iter()
                .zip(other.cells.iter())
                .all(|(a, b)| (*a - *b).abs() <= epsilon)
    }

    fn copy(&self) -> MatrixDense<T> {
        MatrixDense {
            rows: self.rows,
            cols: self.cols,
            cells: self.cells.clone(),
        }
    }

    fn scale(&mut self, factor: T) {
        for cell in self.cells.iter_mut() {
            *cell = *cell * factor;
        }
    }

    fn is_upper_triangular(&self) -> bool {
        (0..self.rows).all(|r| (0..r.min(self.cols)).all(|c| self.at(r, c).is_zero()))
    }
}

impl<T: Element> MatrixDense<T> {
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn row_slice(&self, row: usize) -> &[T] {
        &self.cells[row * self.cols..(row + 1) * self.cols]
    }

    pub fn swap_rows(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        for k in 0..self.cols {
            self.cells.swap(a * self.cols + k, b * self.cols + k);
        }
    }

    /// Entries drawn uniformly from `[-1, 1)`.
    pub fn random<R: Rng + ?Sized>(rows: usize, cols: usize, rng: &mut R) -> Self
    where
        Standard: Distribution<T>,
    {
        MatrixDense {
            rows,
            cols,
            cells: Vector::random(rows * cols, rng).into(),
        }
    }

    /// Returns `[self | b]`, a fresh matrix with `b` appended as the last column.
    pub fn augment(&self, b: &Vector<T>) -> LinalgResult<MatrixDense<T>> {
        if b.len() != self.rows {
            return Err(LinalgError::DimensionMismatch {
                left: self.rows,
                right: b.len(),
            });
        }

        let mut aug = MatrixDense::zeros(self.rows, self.cols + 1);
        for r in 0..self.rows {
            let start = r * aug.cols;
            aug.cells[start..start + self.cols].copy_from_slice(self.row_slice(r));
            aug.cells[start + self.cols] = b[r];
        }
        Ok(aug)
    }

    pub fn mul_vector(&self, x: &Vector<T>) -> LinalgResult<Vector<T>> {
        if self.cols != x.len() {
            return Err(LinalgError::DimensionMismatch {
                left: self.cols,
                right: x.len(),
            });
        }

        Ok((0..self.rows)
            .map(|r| {
                self.row_slice(r)
                    .iter()
                    .zip(x.iter())
                    .map(|(a, b)| *a * *b)
                    .sum::<T>()
            })
            .collect())
    }

    /// Reduces `self`, an n x (n+1) augmented matrix, in place and returns the
    /// solution. See `gauss::gauss`.
    pub fn gauss(&mut self) -> LinalgResult<Vector<T>> {
        gauss::gauss(self)
    }

    pub fn gauss_with(&mut self, config: &GaussConfig) -> LinalgResult<Vector<T>> {
        gauss::gauss_with(self, config)
    }
}

impl<T: Element> ops::Mul<&MatrixDense<T>> for &MatrixDense<T> {
    type Output = LinalgResult<MatrixDense<T>>;

    fn mul(self, rhs: &MatrixDense<T>) -> LinalgResult<MatrixDense<T>> {
        if self.cols != rhs.rows {
            return Err(LinalgError::DimensionMismatch {
                left: self.cols,
                right: rhs.rows,
            });
        }

        Ok(MatrixDense {
            rows: self.rows,
            cols: rhs.cols,
            cells: iproduct!(0..self.rows, 0..rhs.cols)
                .map(|(i, j)| (0..self.cols).map(|k| self.at(i, k) * rhs.at(k, j)).sum::<T>())
                .collect(),
        })
    }
}

impl<T> Index<(usize, usize)> for MatrixDense<T> {
    type Output = T;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        debug_assert!(index.1 < self.cols, "column index out of bounds");
        &self.cells[index.0 * self.cols + index.1]
    }
}

impl<T> IndexMut<(usize, usize)> for MatrixDense<T> {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut Self::Output {
        debug_assert!(index.1 < self.cols, "column index out of bounds");
        &mut self.cells[index.0 * self.cols + index.1]
    }
}

impl<T: fmt::Display> fmt::Display for MatrixDense<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut lines = (0..self.rows).map(|r| {
            let line = &self.cells[r * self.cols..(r + 1) * self.cols];
            format!("[{}]", line.iter().join(", "))
        });
        write!(f, "[{}]", lines.join(",\n "))
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn m(lines: &[&[f64]]) -> MatrixDense<f64> {
        MatrixDense::from_list(lines.iter().map(|l| l.to_vec()).collect()).unwrap()
    }

    #[test]
    fn test_matrix_from_list() {
        let a = m(&[&[1., 2., 3.], &[4., 5., 6.]]);
        assert_eq!(a.shape(), (2, 3));
        assert_eq!(a.at(1, 0), 4.);
        assert_eq!(a[(0, 2)], 3.);
        assert_eq!(a.to_list(), vec![vec![1., 2., 3.], vec![4., 5., 6.]]);

        assert_eq!(
            MatrixDense::<f64>::from_list(vec![vec![1., 2.], vec![3., 4., 5.]]),
            Err(LinalgError::Ragged {
                row: 1,
                expected: 2,
                found: 3
            })
        );

        let empty = MatrixDense::<f64>::from_list(vec![]).unwrap();
        assert_eq!(empty.shape(), (0, 0));
        assert!(empty.to_list().is_empty());
    }

    #[test]
    fn test_matrix_identity() {
        assert!(MatrixDense::<f64>::identity(3).equals(&m(&[
            &[1., 0., 0.],
            &[0., 1., 0.],
            &[0., 0., 1.]
        ])));
        assert_eq!(MatrixDense::<f64>::identity(0).shape(), (0, 0));
    }

    #[test]
    fn test_matrix_equals() {
        let a = m(&[&[1., 2.], &[3., 4.]]);
        assert!(a.equals(&m(&[&[1., 2.], &[3., 4.]])));
        assert!(!a.equals(&m(&[&[1., 2.], &[3., 4. + 1e-12]])));
        // same cells, different shape
        assert!(!a.equals(&m(&[&[1., 2., 3., 4.]])));
        assert!(!a.approx_equals(&m(&[&[1., 2., 3., 4.]]), 1e6));
    }

    #[test]
    fn test_matrix_approx_equals() {
        let a = m(&[&[1., 2.], &[3., 4.]]);
        let b = m(&[&[1. + 1e-9, 2.], &[3., 4. - 1e-9]]);

        assert!(a.approx_equals(&a, 0.));
        assert!(!a.approx_equals(&b, 0.));
        assert!(a.approx_equals(&b, 1e-8));
        assert!(!a.approx_equals(&b, 1e-10));

        let mut rng = StdRng::seed_from_u64(11);
        let c = MatrixDense::<f64>::random(6, 5, &mut rng);
        let mut d = c.copy();
        d.scale(1. + 1e-6);
        let mut epsilon = 1e-9;
        let mut seen = false;
        while epsilon < 1. {
            let ok = c.approx_equals(&d, epsilon);
            assert!(!seen || ok, "approx_equals must stay true as epsilon grows");
            seen |= ok;
            epsilon *= 2.;
        }
        assert!(seen);
    }

    #[test]
    fn test_matrix_copy_is_independent() {
        let a = m(&[&[1., 5., 7.], &[-2., -7., -5.]]);
        let mut b = a.copy();
        assert!(b.equals(&a));

        b.set(0, 0, 42.);
        b.scale(2.);
        assert_eq!(a.at(0, 0), 1.);
        assert!(a.equals(&m(&[&[1., 5., 7.], &[-2., -7., -5.]])));
    }

    #[test]
    fn test_matrix_scale() {
        let mut a = m(&[&[1., -2.], &[0.5, 0.]]);
        a.scale(-4.);
        assert!(a.equals(&m(&[&[-4., 8.], &[-2., 0.]])));
    }

    #[test]
    fn test_matrix_augment() {
        let a = m(&[&[1., 5.], &[-2., -7.]]);
        let b = Vector::from_vec(vec![7., -5.]);
        assert!(a
            .augment(&b)
            .unwrap()
            .equals(&m(&[&[1., 5., 7.], &[-2., -7., -5.]])));
        assert_eq!(
            a.augment(&Vector::from_vec(vec![1.])),
            Err(LinalgError::DimensionMismatch { left: 2, right: 1 })
        );
    }

    #[test]
    fn test_matrix_products() {
        let a = m(&[&[1., 2.], &[3., 4.], &[5., 6.]]);
        let b = m(&[&[1., 0., 2.], &[0., 1., -1.]]);

        let c = (&a * &b).unwrap();
        assert!(c.equals(&m(&[&[1., 2., 0.], &[3., 4., 2.], &[5., 6., 4.]])));
        assert!((&MatrixDense::<f64>::identity(3) * &a).unwrap().equals(&a));
        assert!((&a * &a).is_err());

        let x = Vector::from_vec(vec![1., -1.]);
        assert_eq!(a.mul_vector(&x).unwrap().to_vec(), vec![-1., -1., -1.]);
        assert!(b.mul_vector(&x).is_err());
    }

    #[test]
    fn test_matrix_swap_rows_and_triangular() {
        let mut a = m(&[&[0., 2., 1.], &[1., -2., -3.], &[0., 0., 2.]]);
        assert!(!a.is_upper_triangular());
        a.swap_rows(0, 1);
        assert!(a.equals(&m(&[&[1., -2., -3.], &[0., 2., 1.], &[0., 0., 2.]])));
        assert!(a.is_upper_triangular());

        // augmented shape: the extra column is never below the diagonal
        assert!(m(&[&[1., 5., 7.], &[0., 3., 9.]]).is_upper_triangular());
    }

    #[test]
    fn test_matrix_display() {
        assert_eq!(m(&[&[1., 2.], &[3., 4.5]]).to_string(), "[[1, 2],\n [3, 4.5]]");
        assert_eq!(MatrixDense::<f64>::zeros(0, 0).to_string(), "[]");
        assert_eq!(MatrixDense::<f64>::zeros(3, 0).to_string(), "[[],\n [],\n []]");
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "column index out of bounds")]
    fn test_matrix_index_column_out_of_bounds() {
        let a = m(&[&[1., 2.], &[3., 4.]]);
        let _value = a[(0, 2)];
    }
}
