//! Two-qubit gates.
//!
//! Basis index is `2 q0 + q1`, i.e. `∣00⟩, ∣01⟩, ∣10⟩, ∣11⟩`; controlled gates
//! take qubit 0 as the control.

use std::fmt;
use crate::{ c, phase };
use super::{ Entry, GateDef, GateDefSeal, TargetedQubits };

/// A gate acting on two qubits.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Q2Gate {
    /// Controlled-NOT: *X* on qubit 1, controlled by qubit 0.
    CX,
    /// Exchange of the two qubit states.
    Swap,
    /// Controlled-*Z*: phase flip on `∣11⟩` only.
    CZ,
    /// Controlled phase shift of `∣11⟩` by an angle in radians. `CPhase(π)`
    /// is `CZ`.
    CPhase(f64),
}

impl Q2Gate {
    /// Return `true` if `self` is `CX`.
    pub fn is_cx(&self) -> bool { matches!(self, Self::CX) }

    /// Return `true` if `self` is `Swap`.
    pub fn is_swap(&self) -> bool { matches!(self, Self::Swap) }

    /// Return `true` if `self` is `CZ`.
    pub fn is_cz(&self) -> bool { matches!(self, Self::CZ) }

    /// Return `true` if `self` is `CPhase`.
    pub fn is_cphase(&self) -> bool { matches!(self, Self::CPhase(..)) }

    /// Return the angle of a `CPhase`.
    pub fn angle(&self) -> Option<f64> {
        match self {
            Self::CPhase(theta) => Some(*theta),
            _ => None,
        }
    }

    /// Return `true` if `self` is its own inverse.
    pub fn is_involution(&self) -> bool {
        matches!(self, Self::CX | Self::Swap | Self::CZ)
    }
}

impl TargetedQubits for Q2Gate {
    fn targeted_qubits(&self) -> usize { Self::QUBITS }
}

impl GateDefSeal for Q2Gate { }
impl GateDef for Q2Gate {
    const QUBITS: usize = 2;

    fn entries(&self) -> Vec<Entry> {
        match *self {
            Self::CX => vec![
                (0, 0, c!(1.0)),
                (1, 1, c!(1.0)),
                (2, 3, c!(1.0)),
                (3, 2, c!(1.0)),
            ],
            Self::Swap => vec![
                (0, 0, c!(1.0)),
                (1, 2, c!(1.0)),
                (2, 1, c!(1.0)),
                (3, 3, c!(1.0)),
            ],
            Self::CZ => vec![
                (0, 0, c!(1.0)),
                (1, 1, c!(1.0)),
                (2, 2, c!(1.0)),
                (3, 3, c!(-1.0)),
            ],
            Self::CPhase(theta) => vec![
                (0, 0, c!(1.0)),
                (1, 1, c!(1.0)),
                (2, 2, c!(1.0)),
                (3, 3, phase::cis(theta)),
            ],
        }
    }

    fn adjoint(&self) -> Self {
        match *self {
            Self::CPhase(theta) => Self::CPhase(-theta),
            g => g,
        }
    }
}

impl fmt::Display for Q2Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CX => write!(f, "CNOT"),
            Self::Swap => write!(f, "Swap"),
            Self::CZ => write!(f, "CZ"),
            Self::CPhase(theta) => write!(f, "CPhase({theta})"),
        }
    }
}
