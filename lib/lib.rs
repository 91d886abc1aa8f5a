//! This package provides a catalog of standard quantum logic gates on one, two
//! and three qubits, together with their [unitary matrices][unitary].
//!
//! - [`gate`] holds the catalog itself: gate definitions grouped by arity, and
//! the [`Gate`] sum type that a circuit simulator consumes.
//! - [`matrix`] provides the small, immutable complex matrices backing every
//! gate, plus checks for unitarity and permutation structure.
//! - [`phase`] computes the phase factors of parameterized gates, exactly for
//! all Clifford+*T* angles.
//!
//! Nothing here applies gates to states: the catalog only defines them. A
//! consumer picks a gate, reads its matrix (or notices that it is a
//! measurement and has none) and does the rest.
//!
//! ```
//! use qgate_catalog::{ c, Gate, TargetedQubits };
//!
//! let cnot = Gate::cnot();
//! assert_eq!(cnot.targeted_qubits(), 2);
//! let m = cnot.matrix().unwrap();
//! assert_eq!(m[(2, 3)], c!(1.0));
//! assert_eq!(m.basis_image(0b10), Some(0b11));
//!
//! let meas: Gate = "measure".parse().unwrap();
//! assert!(meas.is_measurement() && meas.matrix().is_none());
//! ```
//!
//! [unitary]: https://en.wikipedia.org/wiki/Unitary_matrix
//!
//! # See also
//! - [Quantum logic gate](https://en.wikipedia.org/wiki/Quantum_logic_gate)
//! - M. A. Nielsen and I. L. Chuang, *Quantum Computation and Quantum
//! Information*, ch. 4.

pub mod gate;
pub mod matrix;
pub mod phase;

pub use gate::{
    Gate,
    GateDef,
    GateError,
    GateResult,
    Q1Gate,
    Q2Gate,
    Q3Gate,
    TargetedQubits,
    Unitary,
};
pub use matrix::{ Matrix, MatrixError, MatrixResult };

pub extern crate num_complex;
/// Handy macro to create `num_complex::Complex64`s from more natural and
/// succinct syntax.
///
/// ```
/// use std::f64::consts::PI;
/// use num_complex::Complex64;
/// use qgate_catalog::c;
///
/// assert_eq!( c!(i (-1.0)),    Complex64::new(0.0, -1.0)      );
/// assert_eq!( c!(e PI),        Complex64::cis(PI)             );
/// assert_eq!( c!(1.0),         Complex64::new(1.0, 0.0)       );
/// assert_eq!( c!(1.0 + i 1.0), Complex64::new(1.0, 1.0)       );
/// assert_eq!( c!(1.0 - i 1.0), Complex64::new(1.0, -1.0)      );
/// assert_eq!( c!(1.0, 1.0),    Complex64::new(1.0, 1.0)       );
/// assert_eq!( c!(1.0, e PI),   Complex64::from_polar(1.0, PI) );
/// ```
#[macro_export]
macro_rules! c {
    ( i $im:expr )
        => { $crate::num_complex::Complex64::new(0.0, $im) };
    ( e $ph:expr )
        => { $crate::num_complex::Complex64::cis($ph) };
    ( $re:expr )
        => { $crate::num_complex::Complex64::new($re, 0.0) };
    ( $re:literal + i $im:literal )
        => { $crate::num_complex::Complex64::new($re, $im) };
    ( $re:literal - i $im:literal )
        => { $crate::num_complex::Complex64::new($re, -$im) };
    ( $r:expr, e $ph:expr )
        => { $crate::num_complex::Complex64::from_polar($r, $ph) };
    ( $re:expr, $im:expr )
        => { $crate::num_complex::Complex64::new($re, $im) };
}
