use itertools::Itertools;
use num_traits::NumCast;
use rand::distributions::{Distribution, Standard};
use rand::Rng;
use std::fmt;
use std::iter::FromIterator;
use std::ops::{Index, IndexMut};
use std::slice::{Iter, IterMut};

use crate::error::{LinalgError, LinalgResult};
use crate::matrix::matrix::Element;

/// Tolerance used by `Vector::approx_eq`.
pub const DEFAULT_EPSILON: f64 = 1e-8;

#[derive(Clone, Debug, PartialEq)]
pub struct Vector<T> {
    data: Vec<T>,
}

impl<T> Vector<T> {
    pub fn from_vec(data: Vec<T>) -> Self {
        Self { data }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.data.iter()
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.data.iter_mut()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.data.clone()
    }

    fn check_same_len(&self, other: &Vector<T>) -> LinalgResult<()> {
        if self.len() != other.len() {
            return Err(LinalgError::DimensionMismatch {
                left: self.len(),
                right: other.len(),
            });
        }
        Ok(())
    }
}

impl<T: Element> Vector<T> {
    /// Zero-filled vector of length `len`.
    pub fn zeros(len: usize) -> Self {
        Vector::from_vec(vec![T::zero(); len])
    }

    /// Entries drawn uniformly from `[-1, 1)`.
    pub fn random<R: Rng + ?Sized>(len: usize, rng: &mut R) -> Self
    where
        Standard: Distribution<T>,
    {
        let two = T::one() + T::one();
        (0..len).map(|_| rng.gen::<T>() * two - T::one()).collect()
    }

    pub fn copy(&self) -> Self {
        Vector::from_vec(self.data.clone())
    }

    pub fn equals(&self, other: &Vector<T>) -> bool {
        self.len() == other.len() && self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }

    /// `approx_equals` with `DEFAULT_EPSILON`.
    pub fn approx_eq(&self, other: &Vector<T>) -> bool {
        let epsilon = <T as NumCast>::from(DEFAULT_EPSILON).unwrap_or_else(T::epsilon);
        self.approx_equals(other, epsilon)
    }

    pub fn approx_equals(&self, other: &Vector<T>, epsilon: T) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .zip(other.iter())
                .all(|(a, b)| (*a - *b).abs() <= epsilon)
    }

    pub fn dot(&self, other: &Vector<T>) -> LinalgResult<T> {
        self.check_same_len(other)?;
        Ok(self.iter().zip(other.iter()).map(|(a, b)| *a * *b).sum())
    }

    /// Euclidean norm.
    pub fn abs(&self) -> T {
        self.iter().map(|v| *v * *v).sum::<T>().sqrt()
    }

    /// Angle in radians, 0 for empty vectors.
    ///
    /// The cosine is clamped to `[-1, 1]` so rounding never pushes `acos` out of
    /// its domain. A zero-magnitude operand yields NaN.
    pub fn angle(&self, other: &Vector<T>) -> LinalgResult<T> {
        let dot = self.dot(other)?;
        if self.is_empty() {
            return Ok(T::zero());
        }

        let cos_theta = dot / (self.abs() * other.abs());
        let cos_theta = if cos_theta > T::one() {
            T::one()
        } else if cos_theta < -T::one() {
            -T::one()
        } else {
            cos_theta
        };
        Ok(cos_theta.acos())
    }

    /// Magnitude of the cross product, `|a| |b| sin(theta)`.
    ///
    /// Only a true cross product in 0, 1, 2, 3 and 7 dimensions; any other
    /// dimension gets the same generalized magnitude.
    pub fn cross(&self, other: &Vector<T>) -> LinalgResult<T> {
        let theta = self.angle(other)?;
        Ok(self.abs() * other.abs() * theta.sin())
    }

    /// Adds `other` in place. Left untouched on a length mismatch.
    pub fn plus(&mut self, other: &Vector<T>) -> LinalgResult<()> {
        self.check_same_len(other)?;
        for (a, b) in self.iter_mut().zip(other.iter()) {
            *a = *a + *b;
        }
        Ok(())
    }

    /// Subtracts `other` in place. Left untouched on a length mismatch.
    pub fn minus(&mut self, other: &Vector<T>) -> LinalgResult<()> {
        let mut negated = other.copy();
        negated.scale(-T::one());
        self.plus(&negated)
    }

    pub fn scale(&mut self, factor: T) {
        for v in self.iter_mut() {
            *v = *v * factor;
        }
    }
}

impl<T> From<Vec<T>> for Vector<T> {
    fn from(value: Vec<T>) -> Self {
        Vector::from_vec(value)
    }
}

impl<T> From<Vector<T>> for Vec<T> {
    fn from(value: Vector<T>) -> Self {
        value.data
    }
}

impl<T> FromIterator<T> for Vector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Vector::from_vec(iter.into_iter().collect())
    }
}

impl<T> Index<usize> for Vector<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        &self.data[index]
    }
}

impl<T> IndexMut<usize> for Vector<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.data[index]
    }
}

impl<T: fmt::Display> fmt::Display for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.data.iter().join(", "))
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
