//! # Scalar-or-array values
//!
//! Every distance operation accepts either a single redshift or a one-dimensional
//! collection of redshifts, and returns a result of the **same shape**.
//! [`Series`](crate::series::Series) carries that shape through the computation chain:
//!
//! ```text
//! Series::Scalar(z)   ──map──▶ Series::Scalar(f(z))
//! Series::Array([z])  ──map──▶ Series::Array([f(z)])
//! ```
//!
//! Arrays are stored as [`nalgebra::DVector`] so results can feed directly into
//! linear-algebra code downstream.
//!
//! ## Usage
//!
//! ```rust
//! use cosmodist::series::Series;
//!
//! let z: Series = vec![0.1, 0.5, 1.0].into();
//! let a = z.map(|z| 1.0 / (1.0 + z));
//! assert_eq!(a.len(), 3);
//! ```
use nalgebra::DVector;

/// A scalar value or a 1-D array of values.
#[derive(Debug, Clone, PartialEq)]
pub enum Series {
    /// A single value
    Scalar(f64),
    /// A one-dimensional array of values
    Array(DVector<f64>),
}

impl Series {
    /// Apply `f` to every element, preserving the shape.
    pub fn map<F>(&self, f: F) -> Series
    where
        F: Fn(f64) -> f64,
    {
        match self {
            Series::Scalar(x) => Series::Scalar(f(*x)),
            Series::Array(v) => Series::Array(v.map(f)),
        }
    }

    /// Combine two series of the same shape element by element.
    ///
    /// Only used on a series and another one mapped from it; panics if the shapes differ.
    pub(crate) fn zip_map<F>(&self, other: &Series, f: F) -> Series
    where
        F: Fn(f64, f64) -> f64,
    {
        match (self, other) {
            (Series::Scalar(x), Series::Scalar(y)) => Series::Scalar(f(*x, *y)),
            (Series::Array(u), Series::Array(v)) => Series::Array(u.zip_map(v, f)),
            _ => panic!("Cannot combine a scalar with an array series"),
        }
    }

    /// View the elements as a contiguous slice (a scalar is a slice of length one).
    pub fn as_slice(&self) -> &[f64] {
        match self {
            Series::Scalar(x) => std::slice::from_ref(x),
            Series::Array(v) => v.as_slice(),
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, f64> {
        self.as_slice().iter()
    }

    /// Number of elements (1 for a scalar).
    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    /// Only an empty array is empty.
    pub fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }

    pub fn is_scalar(&self) -> bool {
        matches!(self, Series::Scalar(_))
    }

    /// Return the scalar value, or `None` for an array.
    pub fn as_scalar(&self) -> Option<f64> {
        match self {
            Series::Scalar(x) => Some(*x),
            Series::Array(_) => None,
        }
    }

    /// True if at least one element is NaN or infinite.
    pub fn has_non_finite(&self) -> bool {
        self.iter().any(|x| !x.is_finite())
    }

    pub fn to_vec(&self) -> Vec<f64> {
        self.as_slice().to_vec()
    }
}

impl From<f64> for Series {
    fn from(x: f64) -> Self {
        Series::Scalar(x)
    }
}

impl From<DVector<f64>> for Series {
    fn from(v: DVector<f64>) -> Self {
        Series::Array(v)
    }
}

impl From<Vec<f64>> for Series {
    fn from(v: Vec<f64>) -> Self {
        Series::Array(DVector::from_vec(v))
    }
}

impl From<&[f64]> for Series {
    fn from(v: &[f64]) -> Self {
        Series::Array(DVector::from_column_slice(v))
    }
}

impl<const N: usize> From<[f64; N]> for Series {
    fn from(v: [f64; N]) -> Self {
        Series::Array(DVector::from_column_slice(&v))
    }
}

impl<'a> IntoIterator for &'a Series {
    type Item = &'a f64;
    type IntoIter = std::slice::Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod series_test {
    use super::*;

    #[test]
    fn test_map_preserves_shape() {
        let scalar = Series::from(2.0).map(|x| x * x);
        assert_eq!(scalar, Series::Scalar(4.0));

        let array = Series::from([1.0, 2.0, 3.0]).map(|x| x + 1.0);
        assert_eq!(array, Series::Array(DVector::from_vec(vec![2.0, 3.0, 4.0])));
    }

    #[test]
    fn test_scalar_is_a_one_element_slice() {
        let s = Series::from(0.5);
        assert_eq!(s.as_slice(), &[0.5]);
        assert_eq!(s.len(), 1);
        assert!(s.is_scalar());
        assert!(!s.is_empty());
        assert_eq!(s.as_scalar(), Some(0.5));
    }

    #[test]
    fn test_array_conversions_agree() {
        let values = vec![0.0, 0.5, 1.0];
        let from_vec = Series::from(values.clone());
        let from_slice = Series::from(values.as_slice());
        let from_dvector = Series::from(DVector::from_vec(values.clone()));

        assert_eq!(from_vec, from_slice);
        assert_eq!(from_vec, from_dvector);
        assert_eq!(from_vec.to_vec(), values);
        assert_eq!(from_vec.as_scalar(), None);
    }

    #[test]
    fn test_empty_array() {
        let s = Series::from(Vec::<f64>::new());
        assert!(s.is_empty());
        assert!(!s.has_non_finite());
        assert_eq!(s.map(|x| x * 2.0).len(), 0);
    }

    #[test]
    fn test_has_non_finite() {
        assert!(Series::from([1.0, f64::NAN]).has_non_finite());
        assert!(Series::from(f64::INFINITY).has_non_finite());
        assert!(!Series::from([1.0, 2.0]).has_non_finite());
    }

    #[test]
    fn test_zip_map_preserves_shape() {
        let z = Series::from(1.0);
        assert_eq!(z.zip_map(&z.map(|x| x * 2.0), |a, b| a + b), Series::Scalar(3.0));

        let z = Series::from([1.0, 2.0]);
        let combined = z.zip_map(&z.map(|x| x * 2.0), |a, b| a + b);
        assert_eq!(combined, Series::from([3.0, 6.0]));
    }

    #[test]
    #[should_panic]
    fn test_zip_map_rejects_mixed_shapes() {
        Series::from(1.0).zip_map(&Series::from([1.0, 2.0]), |a, b| a + b);
    }
}
