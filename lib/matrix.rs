//! Square complex matrices over the computational basis of a few qubits.
//!
//! Row and column indices are basis-state indices: for *k* qubits, index `b`
//! in `0..2^k` denotes the state whose *j*-th qubit (counting from zero) is
//! the *j*-th most significant bit of `b`.

use std::{ fmt, ops::Index };
use itertools::Itertools;
use ndarray as nd;
use num_complex::Complex64 as C64;
use num_traits::Zero;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MatrixError {
    #[error("matrix dimension must be a power of two, but got {0}")]
    NotPowerOfTwo(usize),

    #[error("entry ({0}, {1}) is out of bounds for a matrix of dimension {2}")]
    IndexOutOfBounds(usize, usize, usize),

    #[error("cannot multiply a {0}-dimensional matrix with a {1}-dimensional matrix")]
    DimMismatch(usize, usize),
}
pub type MatrixResult<T> = Result<T, MatrixError>;
#[allow(unused_imports)]
use MatrixError::*;

/// Default threshold for approximate comparisons between matrix elements.
pub const EPSILON: f64 = 1e-12;

/// A square matrix of complex numbers with power-of-two dimension.
///
/// `Matrix`es are built in a single step from a list of non-zero entries and
/// are never modified afterward; every entry not in the list is exactly zero.
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix(pub(crate) nd::Array2<C64>);

impl Matrix {
    // entries are assumed to lie within the matrix
    pub(crate) fn from_entries_unchecked<I>(dim: usize, entries: I) -> Self
    where I: IntoIterator<Item = (usize, usize, C64)>
    {
        let mut array: nd::Array2<C64> = nd::Array2::zeros((dim, dim));
        entries.into_iter()
            .for_each(|(i, j, a)| { array[[i, j]] = a; });
        Self(array)
    }

    /// Create a new `Matrix` of dimension `dim` from a list of `(row, column,
    /// value)` entries, with all other entries set to zero.
    ///
    /// Later entries overwrite earlier ones at the same position. Fails if
    /// `dim` is not a power of two or any entry falls outside the matrix.
    pub fn from_entries<I>(dim: usize, entries: I) -> MatrixResult<Self>
    where I: IntoIterator<Item = (usize, usize, C64)>
    {
        if !dim.is_power_of_two() { return Err(NotPowerOfTwo(dim)); }
        let entries: Vec<(usize, usize, C64)> = entries.into_iter().collect();
        if let Some((i, j, _)) =
            entries.iter().find(|(i, j, _)| *i >= dim || *j >= dim)
        {
            return Err(IndexOutOfBounds(*i, *j, dim));
        }
        Ok(Self::from_entries_unchecked(dim, entries))
    }

    /// Create an identity matrix of dimension `dim`.
    pub fn eye(dim: usize) -> Self { Self(nd::Array2::eye(dim)) }

    /// Return the dimension (number of rows) of `self`.
    pub fn dim(&self) -> usize { self.0.nrows() }

    /// Return the number of qubits `self` acts on, i.e. log<sub>2</sub> of its
    /// dimension.
    pub fn num_qubits(&self) -> usize { self.dim().trailing_zeros() as usize }

    /// Return the entry at `(row, col)`, if it exists.
    pub fn get(&self, row: usize, col: usize) -> Option<C64> {
        self.0.get((row, col)).copied()
    }

    /// Return a reference to the underlying array.
    pub fn as_array(&self) -> &nd::Array2<C64> { &self.0 }

    /// Convert into the underlying array.
    pub fn into_array(self) -> nd::Array2<C64> { self.0 }

    /// Iterate over all non-zero entries as `(row, column, value)` in row-major
    /// order.
    pub fn entries(&self) -> impl Iterator<Item = (usize, usize, C64)> + '_ {
        self.0.indexed_iter()
            .filter(|(_, a)| !a.is_zero())
            .map(|((i, j), a)| (i, j, *a))
    }

    /// Return the conjugate transpose of `self`.
    pub fn adjoint(&self) -> Self { Self(self.0.t().mapv(|a| a.conj())) }

    /// Return the matrix product `self · rhs`.
    ///
    /// Fails if the dimensions of `self` and `rhs` differ.
    pub fn dot(&self, rhs: &Self) -> MatrixResult<Self> {
        if self.dim() != rhs.dim() {
            return Err(DimMismatch(self.dim(), rhs.dim()));
        }
        Ok(Self(self.0.dot(&rhs.0)))
    }

    /// Return `true` if `self` and `other` have the same dimension and the
    /// modulus of the difference between any two corresponding entries is less
    /// than `thresh`, which defaults to [`EPSILON`].
    pub fn approx_eq(&self, other: &Self, thresh: Option<f64>) -> bool {
        let eps = thresh.unwrap_or(EPSILON);
        self.dim() == other.dim()
            && self.0.iter().zip(other.0.iter())
                .all(|(l, r)| (*l - *r).norm() < eps)
    }

    /// Return `true` if `self`<sup>†</sup> `self` is the identity to within
    /// `thresh`, which defaults to [`EPSILON`].
    pub fn is_unitary(&self, thresh: Option<f64>) -> bool {
        let prod = Self(self.0.t().mapv(|a| a.conj()).dot(&self.0));
        prod.approx_eq(&Self::eye(self.dim()), thresh)
    }

    /// Return `true` if every row and every column of `self` holds exactly one
    /// non-zero entry and that entry has unit modulus.
    pub fn is_permutation(&self) -> bool {
        fn single_unit<'a, I>(lane: I) -> bool
        where I: Iterator<Item = &'a C64>
        {
            lane.filter(|a| !a.is_zero())
                .exactly_one()
                .map(|a| (a.norm() - 1.0).abs() < EPSILON)
                .unwrap_or(false)
        }

        self.0.rows().into_iter().all(|row| single_unit(row.iter()))
            && self.0.columns().into_iter().all(|col| single_unit(col.iter()))
    }

    /// Return the basis index that basis state `col` is sent to, provided that
    /// column `col` has exactly one non-zero entry.
    ///
    /// For permutation-type gates, this is the classical action of the gate on
    /// basis states.
    pub fn basis_image(&self, col: usize) -> Option<usize> {
        if col >= self.dim() { return None; }
        self.0.column(col).iter()
            .positions(|a| !a.is_zero())
            .exactly_one()
            .ok()
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = C64;

    fn index(&self, idx: (usize, usize)) -> &Self::Output { &self.0[idx] }
}

impl From<Matrix> for nd::Array2<C64> {
    fn from(matrix: Matrix) -> Self { matrix.0 }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.dim();
        for (i, row) in self.0.rows().into_iter().enumerate() {
            write!(f, "[")?;
            for (j, a) in row.iter().enumerate() {
                fmt::Display::fmt(a, f)?;
                if j < n - 1 { write!(f, ", ")?; }
            }
            write!(f, "]")?;
            if i < n - 1 { writeln!(f)?; }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::c;

    fn pauli_x() -> Matrix {
        Matrix::from_entries(2, [(0, 1, c!(1.0)), (1, 0, c!(1.0))]).unwrap()
    }

    #[test]
    fn from_entries() {
        let m = Matrix::from_entries(4, [(0, 3, c!(i 1.0)), (2, 1, c!(2.0))])
            .unwrap();
        assert_eq!(m.dim(), 4);
        assert_eq!(m.num_qubits(), 2);
        assert_eq!(m[(0, 3)], c!(i 1.0));
        assert_eq!(m[(2, 1)], c!(2.0));
        assert_eq!(
            m.entries().collect::<Vec<_>>(),
            vec![(0, 3, c!(i 1.0)), (2, 1, c!(2.0))],
        );
        assert_eq!(m.get(3, 3), Some(c!(0.0)));
        assert_eq!(m.get(4, 0), None);

        let arr: &nd::Array2<C64> = m.as_array();
        assert_eq!(arr.dim(), (4, 4));
        assert_eq!(arr[[2, 1]], c!(2.0));
        assert_eq!(m.clone().into_array(), *arr);
    }

    #[test]
    fn from_entries_err() {
        assert!(matches!(
            Matrix::from_entries(3, [(0, 0, c!(1.0))]),
            Err(NotPowerOfTwo(3))
        ));
        assert!(matches!(
            Matrix::from_entries(0, [(0, 0, c!(1.0))]),
            Err(NotPowerOfTwo(0))
        ));
        assert!(matches!(
            Matrix::from_entries(2, [(0, 0, c!(1.0)), (0, 2, c!(1.0))]),
            Err(IndexOutOfBounds(0, 2, 2))
        ));
    }

    #[test]
    fn eye() {
        let id = Matrix::eye(8);
        assert_eq!(id.num_qubits(), 3);
        assert!(id.is_unitary(None));
        assert!(id.is_permutation());
        assert!((0..8).all(|k| id.basis_image(k) == Some(k)));
    }

    #[test]
    fn adjoint_dot() {
        let m = Matrix::from_entries(
            2, [(0, 1, c!(1.0 + i 2.0)), (1, 1, c!(3.0))]).unwrap();
        let m_dag = m.adjoint();
        assert_eq!(m_dag[(1, 0)], c!(1.0 - i 2.0));
        assert_eq!(m_dag[(0, 1)], c!(0.0));
        assert_eq!(m_dag[(1, 1)], c!(3.0));

        let x = pauli_x();
        assert_eq!(x.dot(&x).unwrap(), Matrix::eye(2));
        assert!(matches!(x.dot(&Matrix::eye(4)), Err(DimMismatch(2, 4))));
    }

    #[test]
    fn unitary() {
        assert!(pauli_x().is_unitary(None));
        let not_unitary = Matrix::from_entries(
            2, [(0, 0, c!(1.0)), (0, 1, c!(1.0)), (1, 1, c!(1.0))]).unwrap();
        assert!(!not_unitary.is_unitary(None));
        let scaled = Matrix::from_entries(
            2, [(0, 0, c!(2.0)), (1, 1, c!(2.0))]).unwrap();
        assert!(!scaled.is_unitary(None));
    }

    #[test]
    fn permutation() {
        assert!(pauli_x().is_permutation());
        assert_eq!(pauli_x().basis_image(0), Some(1));
        assert_eq!(pauli_x().basis_image(1), Some(0));
        assert_eq!(pauli_x().basis_image(2), None);

        let h = std::f64::consts::FRAC_1_SQRT_2;
        let hadamard = Matrix::from_entries(
            2,
            [(0, 0, c!(h)), (0, 1, c!(h)), (1, 0, c!(h)), (1, 1, c!(-h))],
        ).unwrap();
        assert!(!hadamard.is_permutation());
        assert_eq!(hadamard.basis_image(0), None);

        let phased = Matrix::from_entries(
            2, [(0, 1, c!(i 1.0)), (1, 0, c!(-1.0))]).unwrap();
        assert!(phased.is_permutation());

        let half = Matrix::from_entries(
            2, [(0, 1, c!(0.5)), (1, 0, c!(1.0))]).unwrap();
        assert!(!half.is_permutation());
    }

    #[test]
    fn approx() {
        let x = pauli_x();
        let x_eps = Matrix::from_entries(
            2, [(0, 1, c!(1.0 + i 1e-14)), (1, 0, c!(1.0))]).unwrap();
        assert!(x.approx_eq(&x_eps, None));
        assert!(!x.approx_eq(&x_eps, Some(1e-15)));
        assert!(!x.approx_eq(&Matrix::eye(4), None));
    }

    #[test]
    fn display() {
        let s = format!("{}", pauli_x());
        assert_eq!(s, "[0+0i, 1+0i]\n[1+0i, 0+0i]");
    }
}
