//! The gate catalog.
//!
//! Gates come in three arity classes, each a closed enum of definitions:
//! [`Q1Gate`] (2×2), [`Q2Gate`] (4×4) and [`Q3Gate`] (8×8). A definition is
//! turned into a [`Unitary`], which computes and stores its matrix exactly
//! once. [`Gate`] is the sum of all three classes plus the measurement marker,
//! which never carries a matrix.
//!
//! In every matrix, qubit 0 is the most significant bit of the basis index.
//! Controlled gates take their control(s) on the leading qubit(s).

use std::{ fmt, str::FromStr };
use num_complex::Complex64 as C64;
use thiserror::Error;
use crate::{
    matrix::Matrix,
    phase::{ self, PhaseError },
};

#[derive(Debug, Error)]
pub enum GateError {
    #[error("unknown gate name '{0}'")]
    UnknownGate(String),

    #[error("gate '{0}' requires an angle, e.g. '{0}(0.5)'")]
    MissingAngle(String),

    #[error("gate '{0}' does not take an angle")]
    UnexpectedAngle(String),

    #[error("invalid angle '{0}'")]
    InvalidAngle(String),

    #[error("phase error: {0}")]
    Phase(#[from] PhaseError),
}
pub type GateResult<T> = Result<T, GateError>;
#[allow(unused_imports)]
use GateError::*;

pub(crate) mod one;
pub(crate) mod two;
pub(crate) mod three;
pub use one::Q1Gate;
pub use two::Q2Gate;
pub use three::Q3Gate;

/// A single matrix element, `(row, column, value)`.
pub type Entry = (usize, usize, C64);

/// Capability shared by everything in the catalog: the number of qubits an
/// operation acts on.
pub trait TargetedQubits {
    /// Return the number of qubits acted upon.
    ///
    /// The default, 0, belongs to an operation with no qubit support at all;
    /// every member of the catalog overrides it.
    fn targeted_qubits(&self) -> usize { 0 }
}

/// `GateDefSeal` is a sealed trait to keep the set of arity classes closed --
/// matrix dimensions are fixed by the three implementors of [`GateDef`] and
/// nothing else.
pub(crate) mod private { pub trait GateDefSeal { } }
pub(crate) use private::GateDefSeal;

/// Trait for the closed set of gate definitions of a fixed arity.
///
/// This trait is sealed.
pub trait GateDef:
    Copy + fmt::Debug + fmt::Display + PartialEq + TargetedQubits + GateDefSeal
{
    /// Number of qubits acted upon.
    const QUBITS: usize;

    /// Dimension of the associated matrix, 2<sup>`QUBITS`</sup>.
    const DIM: usize = 1 << Self::QUBITS;

    /// Return all non-zero entries of the gate's matrix. Every entry lies
    /// within `DIM × DIM`.
    fn entries(&self) -> Vec<Entry>;

    /// Return the gate's label, which parses back to the same gate as a
    /// [`Gate`].
    fn label(&self) -> String { self.to_string() }

    /// Return the definition of the inverse gate.
    fn adjoint(&self) -> Self;
}

/// A gate definition together with its matrix.
///
/// The matrix is computed once, when the `Unitary` is created, and never
/// changes afterward.
#[derive(Clone, Debug, PartialEq)]
pub struct Unitary<G> {
    def: G,
    matrix: Matrix,
}

impl<G> Unitary<G>
where G: GateDef
{
    /// Compute the matrix for `def`.
    pub fn new(def: G) -> Self {
        let matrix = Matrix::from_entries_unchecked(G::DIM, def.entries());
        Self { def, matrix }
    }

    /// Return the gate definition.
    pub fn def(&self) -> &G { &self.def }

    /// Return the gate's matrix.
    pub fn matrix(&self) -> &Matrix { &self.matrix }

    /// Convert into the gate's matrix.
    pub fn into_matrix(self) -> Matrix { self.matrix }

    /// Return the dimension of the gate's matrix.
    pub fn dim(&self) -> usize { G::DIM }

    /// Return the matrix entry at `(row, col)`, if it exists.
    pub fn get(&self, row: usize, col: usize) -> Option<C64> {
        self.matrix.get(row, col)
    }

    /// Return the inverse gate.
    pub fn adjoint(&self) -> Self { Self::new(self.def.adjoint()) }
}

impl<G> TargetedQubits for Unitary<G>
where G: GateDef
{
    fn targeted_qubits(&self) -> usize { G::QUBITS }
}

impl<G> From<G> for Unitary<G>
where G: GateDef
{
    fn from(def: G) -> Self { Self::new(def) }
}

impl<G> fmt::Display for Unitary<G>
where G: GateDef
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.def, f)
    }
}

/// A member of the gate catalog.
///
/// All variants except `Measure` hold a [`Unitary`] of the appropriate arity.
#[derive(Clone, Debug, PartialEq)]
pub enum Gate {
    /// One-qubit gate.
    Q1(Unitary<Q1Gate>),
    /// Two-qubit gate.
    Q2(Unitary<Q2Gate>),
    /// Three-qubit gate.
    Q3(Unitary<Q3Gate>),
    /// Single-qubit measurement.
    ///
    /// This is only a marker: it has no matrix, and consumers must apply
    /// measurement semantics in place of linear-algebraic propagation.
    Measure,
}

impl From<Q1Gate> for Gate {
    fn from(def: Q1Gate) -> Self { Self::Q1(Unitary::new(def)) }
}

impl From<Q2Gate> for Gate {
    fn from(def: Q2Gate) -> Self { Self::Q2(Unitary::new(def)) }
}

impl From<Q3Gate> for Gate {
    fn from(def: Q3Gate) -> Self { Self::Q3(Unitary::new(def)) }
}

impl TargetedQubits for Gate {
    fn targeted_qubits(&self) -> usize {
        match self {
            Self::Q1(u) => u.targeted_qubits(),
            Self::Q2(u) => u.targeted_qubits(),
            Self::Q3(u) => u.targeted_qubits(),
            Self::Measure => 1,
        }
    }
}

impl Gate {
    /// Create a new identity gate.
    pub fn identity() -> Self { Q1Gate::I.into() }

    /// Create a new Hadamard gate.
    pub fn hadamard() -> Self { Q1Gate::H.into() }

    /// Create a new Pauli-*X* gate.
    pub fn pauli_x() -> Self { Q1Gate::X.into() }

    /// Create a new Pauli-*Y* gate.
    pub fn pauli_y() -> Self { Q1Gate::Y.into() }

    /// Create a new Pauli-*Z* gate.
    pub fn pauli_z() -> Self { Q1Gate::Z.into() }

    /// Create a new phase gate with angle `theta`, in radians.
    pub fn phase(theta: f64) -> Self { Q1Gate::Phase(theta).into() }

    /// Create a new phase gate with angle `(numer / denom) × 2π`.
    pub fn phase_frac(numer: i64, denom: i64) -> GateResult<Self> {
        let theta = phase::turns_to_radians(numer, denom)?;
        Ok(Self::phase(theta))
    }

    /// Create a new *S* gate (π/2 phase).
    pub fn s() -> Self { Q1Gate::S.into() }

    /// Create a new *T* gate (π/4 phase).
    pub fn t() -> Self { Q1Gate::T.into() }

    /// Create a new measurement marker.
    pub fn measurement() -> Self { Self::Measure }

    /// Create a new CNOT gate, controlled on the first qubit.
    pub fn cnot() -> Self { Q2Gate::CX.into() }

    /// Create a new swap gate.
    pub fn swap() -> Self { Q2Gate::Swap.into() }

    /// Create a new controlled-*Z* gate.
    pub fn cz() -> Self { Q2Gate::CZ.into() }

    /// Create a new controlled-phase gate with angle `theta`, in radians.
    pub fn cphase(theta: f64) -> Self { Q2Gate::CPhase(theta).into() }

    /// Create a new controlled-phase gate with angle `(numer / denom) × 2π`.
    pub fn cphase_frac(numer: i64, denom: i64) -> GateResult<Self> {
        let theta = phase::turns_to_radians(numer, denom)?;
        Ok(Self::cphase(theta))
    }

    /// Create a new Toffoli gate, controlled on the first two qubits.
    pub fn toffoli() -> Self { Q3Gate::Toff.into() }

    /// Create a new controlled-swap (Fredkin) gate, controlled on the first
    /// qubit.
    pub fn cswap() -> Self { Q3Gate::CSwap.into() }

    /// Return `true` if `self` is `Q1`.
    pub fn is_q1(&self) -> bool { matches!(self, Self::Q1(..)) }

    /// Return `true` if `self` is `Q2`.
    pub fn is_q2(&self) -> bool { matches!(self, Self::Q2(..)) }

    /// Return `true` if `self` is `Q3`.
    pub fn is_q3(&self) -> bool { matches!(self, Self::Q3(..)) }

    /// Return `true` if `self` is `Measure`.
    pub fn is_measurement(&self) -> bool { matches!(self, Self::Measure) }

    /// Return `true` if `self` is not `Measure`, i.e. has a unitary matrix.
    pub fn is_unitary_gate(&self) -> bool { !self.is_measurement() }

    /// Return the one-qubit definition, if `self` is `Q1`.
    pub fn as_q1(&self) -> Option<&Q1Gate> {
        match self { Self::Q1(u) => Some(u.def()), _ => None }
    }

    /// Return the two-qubit definition, if `self` is `Q2`.
    pub fn as_q2(&self) -> Option<&Q2Gate> {
        match self { Self::Q2(u) => Some(u.def()), _ => None }
    }

    /// Return the three-qubit definition, if `self` is `Q3`.
    pub fn as_q3(&self) -> Option<&Q3Gate> {
        match self { Self::Q3(u) => Some(u.def()), _ => None }
    }

    /// Return the gate's matrix, or `None` for `Measure`.
    pub fn matrix(&self) -> Option<&Matrix> {
        match self {
            Self::Q1(u) => Some(u.matrix()),
            Self::Q2(u) => Some(u.matrix()),
            Self::Q3(u) => Some(u.matrix()),
            Self::Measure => None,
        }
    }

    /// Return the dimension of the gate's matrix, 2<sup>*k*</sup> for a gate
    /// targeting *k* qubits, or `None` for `Measure`.
    pub fn dim(&self) -> Option<usize> { self.matrix().map(Matrix::dim) }

    /// Return the angle of a parameterized gate.
    pub fn angle(&self) -> Option<f64> {
        match self {
            Self::Q1(u) => u.def().angle(),
            Self::Q2(u) => u.def().angle(),
            _ => None,
        }
    }

    /// Return `true` if `self` is its own inverse.
    pub fn is_involution(&self) -> bool {
        match self {
            Self::Q1(u) => u.def().is_involution(),
            Self::Q2(u) => u.def().is_involution(),
            Self::Q3(u) => u.def().is_involution(),
            Self::Measure => false,
        }
    }

    /// Return the inverse of `self`, or `None` for `Measure`.
    pub fn inv(&self) -> Option<Self> {
        match self {
            Self::Q1(u) => Some(Self::Q1(u.adjoint())),
            Self::Q2(u) => Some(Self::Q2(u.adjoint())),
            Self::Q3(u) => Some(Self::Q3(u.adjoint())),
            Self::Measure => None,
        }
    }

    /// Return `true` if `other` is the inverse of `self`, judged by the product
    /// of their matrices.
    ///
    /// Always `false` if either is `Measure`.
    pub fn is_inv(&self, other: &Self) -> bool {
        match (self.matrix(), other.matrix()) {
            (Some(a), Some(b)) =>
                a.dot(b)
                .map(|ab| ab.approx_eq(&Matrix::eye(ab.dim()), None))
                .unwrap_or(false),
            _ => false,
        }
    }
}

impl fmt::Display for Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Q1(u) => fmt::Display::fmt(u, f),
            Self::Q2(u) => fmt::Display::fmt(u, f),
            Self::Q3(u) => fmt::Display::fmt(u, f),
            Self::Measure => write!(f, "Measure"),
        }
    }
}

// split `"name(arg)"` into `("name", Some("arg"))`
fn split_label(s: &str) -> GateResult<(&str, Option<&str>)> {
    let s = s.trim();
    match s.find('(') {
        None => Ok((s, None)),
        Some(k) => {
            let name = s[..k].trim();
            let arg =
                s[k + 1..].strip_suffix(')')
                .ok_or_else(|| InvalidAngle(s[k..].to_string()))?;
            Ok((name, Some(arg.trim())))
        },
    }
}

fn parse_angle(name: &str, arg: Option<&str>) -> GateResult<f64> {
    let arg = arg.ok_or_else(|| MissingAngle(name.to_string()))?;
    arg.parse::<f64>()
        .ok()
        .filter(|theta| theta.is_finite())
        .ok_or_else(|| InvalidAngle(arg.to_string()))
}

impl FromStr for Gate {
    type Err = GateError;

    /// Parse a gate from its label, as produced by `Display`.
    ///
    /// Names are case-insensitive and a few common aliases are accepted
    /// (`cx` for `CNOT`, `fredkin` for `CSwap`, ...). Parameterized gates take
    /// their angle in radians in parentheses, e.g. `CPhase(0.5)`.
    fn from_str(s: &str) -> GateResult<Self> {
        let (name, arg) = split_label(s)?;
        let lower = name.to_lowercase();
        let no_angle = |gate: Gate| -> GateResult<Gate> {
            if arg.is_some() {
                Err(UnexpectedAngle(name.to_string()))
            } else {
                Ok(gate)
            }
        };
        match lower.as_str() {
            "i" | "id" | "identity" => no_angle(Self::identity()),
            "h" | "hadamard" => no_angle(Self::hadamard()),
            "x" | "paulix" | "not" => no_angle(Self::pauli_x()),
            "y" | "pauliy" => no_angle(Self::pauli_y()),
            "z" | "pauliz" => no_angle(Self::pauli_z()),
            "p" | "phase" => Ok(Self::phase(parse_angle(name, arg)?)),
            "s" => no_angle(Self::s()),
            "t" => no_angle(Self::t()),
            "m" | "measure" | "measurement" => no_angle(Self::measurement()),
            "cnot" | "cx" => no_angle(Self::cnot()),
            "swap" => no_angle(Self::swap()),
            "cz" => no_angle(Self::cz()),
            "cp" | "cphase" => Ok(Self::cphase(parse_angle(name, arg)?)),
            "toffoli" | "ccx" | "ccnot" => no_angle(Self::toffoli()),
            "cswap" | "fredkin" => no_angle(Self::cswap()),
            _ => Err(UnknownGate(name.to_string())),
        }
    }
}
