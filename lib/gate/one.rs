//! One-qubit gates, with basis ordering `∣0⟩, ∣1⟩`.

use std::{
    f64::consts::{ FRAC_1_SQRT_2, FRAC_PI_2, FRAC_PI_4 },
    fmt,
};
use crate::{ c, phase };
use super::{ Entry, GateDef, GateDefSeal, TargetedQubits };

/// A gate acting on a single qubit.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Q1Gate {
    /// Identity.
    I,
    /// Hadamard.
    H,
    /// Pauli *X*, the bit flip.
    X,
    /// Pauli *Y*.
    Y,
    /// Pauli *Z*, the phase flip.
    Z,
    /// Phase shift of `∣1⟩` by an angle in radians.
    Phase(f64),
    /// π/2 phase shift, equal to `Phase(π/2)`.
    S,
    /// π/4 phase shift, equal to `Phase(π/4)`.
    T,
}

impl Q1Gate {
    /// Return `true` if `self` is `I`.
    pub fn is_i(&self) -> bool { matches!(self, Self::I) }

    /// Return `true` if `self` is `H`.
    pub fn is_h(&self) -> bool { matches!(self, Self::H) }

    /// Return `true` if `self` is `X`.
    pub fn is_x(&self) -> bool { matches!(self, Self::X) }

    /// Return `true` if `self` is `Y`.
    pub fn is_y(&self) -> bool { matches!(self, Self::Y) }

    /// Return `true` if `self` is `Z`.
    pub fn is_z(&self) -> bool { matches!(self, Self::Z) }

    /// Return `true` if `self` is `Phase`.
    pub fn is_phase(&self) -> bool { matches!(self, Self::Phase(..)) }

    /// Return `true` if `self` is `S`.
    pub fn is_s(&self) -> bool { matches!(self, Self::S) }

    /// Return `true` if `self` is `T`.
    pub fn is_t(&self) -> bool { matches!(self, Self::T) }

    /// Return the angle of a `Phase`.
    pub fn angle(&self) -> Option<f64> {
        match self {
            Self::Phase(theta) => Some(*theta),
            _ => None,
        }
    }

    /// Return `true` if `self` is its own inverse.
    pub fn is_involution(&self) -> bool {
        matches!(self, Self::I | Self::H | Self::X | Self::Y | Self::Z)
    }
}

impl TargetedQubits for Q1Gate {
    fn targeted_qubits(&self) -> usize { Self::QUBITS }
}

impl GateDefSeal for Q1Gate { }
impl GateDef for Q1Gate {
    const QUBITS: usize = 1;

    fn entries(&self) -> Vec<Entry> {
        match *self {
            Self::I => vec![
                (0, 0, c!(1.0)),
                (1, 1, c!(1.0)),
            ],
            Self::H => vec![
                (0, 0, c!(FRAC_1_SQRT_2)),
                (0, 1, c!(FRAC_1_SQRT_2)),
                (1, 0, c!(FRAC_1_SQRT_2)),
                (1, 1, c!(-FRAC_1_SQRT_2)),
            ],
            Self::X => vec![
                (0, 1, c!(1.0)),
                (1, 0, c!(1.0)),
            ],
            Self::Y => vec![
                (0, 1, c!(i (-1.0))),
                (1, 0, c!(i 1.0)),
            ],
            Self::Z => vec![
                (0, 0, c!(1.0)),
                (1, 1, c!(-1.0)),
            ],
            Self::Phase(theta) => vec![
                (0, 0, c!(1.0)),
                (1, 1, phase::cis(theta)),
            ],
            Self::S => vec![
                (0, 0, c!(1.0)),
                (1, 1, c!(i 1.0)),
            ],
            Self::T => vec![
                (0, 0, c!(1.0)),
                (1, 1, phase::cis(FRAC_PI_4)),
            ],
        }
    }

    fn adjoint(&self) -> Self {
        match *self {
            Self::Phase(theta) => Self::Phase(-theta),
            Self::S => Self::Phase(-FRAC_PI_2),
            Self::T => Self::Phase(-FRAC_PI_4),
            g => g,
        }
    }
}

impl fmt::Display for Q1Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::I => write!(f, "I"),
            Self::H => write!(f, "H"),
            Self::X => write!(f, "X"),
            Self::Y => write!(f, "Y"),
            Self::Z => write!(f, "Z"),
            Self::Phase(theta) => write!(f, "Phase({theta})"),
            Self::S => write!(f, "S"),
            Self::T => write!(f, "T"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;
    use rand::Rng;
    use crate::{ gate::Unitary, matrix::Matrix };

    fn mat(g: Q1Gate) -> Matrix { Unitary::new(g).into_matrix() }

    fn all() -> Vec<Q1Gate> {
        vec![
            Q1Gate::I,
            Q1Gate::H,
            Q1Gate::X,
            Q1Gate::Y,
            Q1Gate::Z,
            Q1Gate::Phase(1.234),
            Q1Gate::S,
            Q1Gate::T,
        ]
    }

    #[test]
    fn matrices() {
        let r = FRAC_1_SQRT_2;
        let h = mat(Q1Gate::H);
        assert_eq!(h[(0, 0)], c!(r));
        assert_eq!(h[(0, 1)], c!(r));
        assert_eq!(h[(1, 0)], c!(r));
        assert_eq!(h[(1, 1)], c!(-r));

        let x = mat(Q1Gate::X);
        assert_eq!(x.entries().collect::<Vec<_>>(),
            vec![(0, 1, c!(1.0)), (1, 0, c!(1.0))]);

        let z = mat(Q1Gate::Z);
        assert_eq!(z.entries().collect::<Vec<_>>(),
            vec![(0, 0, c!(1.0)), (1, 1, c!(-1.0))]);

        let s = mat(Q1Gate::S);
        assert_eq!(s[(1, 1)], c!(i 1.0));
        assert_eq!(s[(0, 1)], c!(0.0));
        assert_eq!(s[(1, 0)], c!(0.0));

        let t = mat(Q1Gate::T);
        assert_eq!(t[(0, 0)], c!(1.0));
        assert!((t[(1, 1)] - c!(e PI / 4.0)).norm() < 1e-15);
    }

    #[test]
    fn pauli_y() {
        let y = mat(Q1Gate::Y);
        assert_eq!(y[(0, 0)], c!(0.0));
        assert_eq!(y[(0, 1)], c!(i (-1.0)));
        assert_eq!(y[(1, 0)], c!(i 1.0));
        assert_eq!(y[(1, 1)], c!(0.0));
        assert_eq!(y.dot(&y).unwrap(), Matrix::eye(2));
    }

    #[test]
    fn identity_exact() {
        assert_eq!(mat(Q1Gate::I), Matrix::eye(2));
        assert_eq!(mat(Q1Gate::Phase(0.0)), Matrix::eye(2));
    }

    #[test]
    fn unitarity() {
        for g in all().into_iter() {
            assert!(mat(g).is_unitary(Some(1e-9)), "{g}");
        }
    }

    #[test]
    fn unitarity_random_angle() {
        let mut rng = rand::thread_rng();
        for _ in 0..100 {
            let theta: f64 = rng.gen_range(-100.0..100.0);
            let p = mat(Q1Gate::Phase(theta));
            assert!(p.is_unitary(Some(1e-9)), "{theta}");
            assert!((p[(1, 1)] - c!(e theta)).norm() < 1e-12);
        }
    }

    #[test]
    fn phase_family() {
        assert_eq!(mat(Q1Gate::Phase(PI / 2.0)), mat(Q1Gate::S));
        assert_eq!(mat(Q1Gate::Phase(PI / 4.0)), mat(Q1Gate::T));
        assert_eq!(mat(Q1Gate::Phase(PI)), mat(Q1Gate::Z));
        assert_eq!(mat(Q1Gate::Phase(2.0 * PI)), mat(Q1Gate::I));
        assert_eq!(mat(Q1Gate::Phase(PI / 2.0 + 4.0 * PI)), mat(Q1Gate::S));
        let t = mat(Q1Gate::T);
        assert!(t.dot(&t).unwrap().approx_eq(&mat(Q1Gate::S), None));
    }

    #[test]
    fn involutions() {
        for g in all().into_iter().filter(|g| g.is_involution()) {
            let m = mat(g);
            assert!(m.dot(&m).unwrap().approx_eq(&Matrix::eye(2), None), "{g}");
        }
        assert!(!Q1Gate::S.is_involution());
        assert!(!Q1Gate::Phase(1.0).is_involution());
    }

    #[test]
    fn adjoints() {
        for g in all().into_iter() {
            assert!(mat(g.adjoint()).approx_eq(&mat(g).adjoint(), None), "{g}");
        }
        assert_eq!(Q1Gate::Phase(0.5).adjoint(), Q1Gate::Phase(-0.5));
        assert_eq!(Q1Gate::H.adjoint(), Q1Gate::H);
    }

    #[test]
    fn predicates() {
        assert!(Q1Gate::Phase(0.1).is_phase());
        assert_eq!(Q1Gate::Phase(0.1).angle(), Some(0.1));
        assert_eq!(Q1Gate::S.angle(), None);
        assert!(Q1Gate::T.is_t() && !Q1Gate::T.is_s());
        assert_eq!(Q1Gate::X.targeted_qubits(), 1);
    }
}
