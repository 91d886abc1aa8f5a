//! Three-qubit gates.
//!
//! Basis index is `4 q0 + 2 q1 + q2`. Both gates here are pure permutations of
//! the basis.

use std::fmt;
use crate::c;
use super::{ Entry, GateDef, GateDefSeal, TargetedQubits };

/// A gate acting on three qubits.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Q3Gate {
    /// Toffoli gate: *X* on qubit 2, controlled by qubits 0 and 1.
    Toff,
    /// Controlled swap (Fredkin gate): swap of qubits 1 and 2, controlled by
    /// qubit 0.
    CSwap,
}

impl Q3Gate {
    /// Return `true` if `self` is `Toff`.
    pub fn is_toff(&self) -> bool { matches!(self, Self::Toff) }

    /// Return `true` if `self` is `CSwap`.
    pub fn is_cswap(&self) -> bool { matches!(self, Self::CSwap) }

    /// Return `true` if `self` is its own inverse; always `true` here.
    pub fn is_involution(&self) -> bool { true }
}

impl TargetedQubits for Q3Gate {
    fn targeted_qubits(&self) -> usize { Self::QUBITS }
}

impl GateDefSeal for Q3Gate { }
impl GateDef for Q3Gate {
    const QUBITS: usize = 3;

    fn entries(&self) -> Vec<Entry> {
        match self {
            // ∣110⟩ ↔ ∣111⟩
            Self::Toff => vec![
                (0, 0, c!(1.0)),
                (1, 1, c!(1.0)),
                (2, 2, c!(1.0)),
                (3, 3, c!(1.0)),
                (4, 4, c!(1.0)),
                (5, 5, c!(1.0)),
                (6, 7, c!(1.0)),
                (7, 6, c!(1.0)),
            ],
            // ∣101⟩ ↔ ∣110⟩
            Self::CSwap => vec![
                (0, 0, c!(1.0)),
                (1, 1, c!(1.0)),
                (2, 2, c!(1.0)),
                (3, 3, c!(1.0)),
                (4, 4, c!(1.0)),
                (5, 6, c!(1.0)),
                (6, 5, c!(1.0)),
                (7, 7, c!(1.0)),
            ],
        }
    }

    fn adjoint(&self) -> Self { *self }
}

impl fmt::Display for Q3Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Toff => write!(f, "Toffoli"),
            Self::CSwap => write!(f, "CSwap"),
        }
    }
}
