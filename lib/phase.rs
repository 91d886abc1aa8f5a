//! Phase factors *e*<sup>*iθ*</sup> for parameterized gates.
//!
//! Angles that are integer multiples of *π*/4 (i.e. all phases reachable by
//! Clifford+*T* circuits) are mapped onto the exact eighth roots of unity, so
//! that e.g. a phase gate at *π*/2 is bit-for-bit identical to the *S* gate.
//! All other angles go through `cos θ + i sin θ` directly.

use std::f64::consts::{ FRAC_1_SQRT_2, FRAC_PI_4, TAU };
use num_complex::Complex64 as C64;
use num_rational::Rational64 as R64;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PhaseError {
    #[error("cannot form a phase from a fraction with zero denominator")]
    ZeroDenominator,
}
pub type PhaseResult<T> = Result<T, PhaseError>;
#[allow(unused_imports)]
use PhaseError::*;

// angles within this distance (in units of π/4) of an eighth-turn are snapped,
// provided the exact root is also this close to the computed value
const SNAP_EPSILON: f64 = 1e-12;

// beyond this many eighth-turns, the rounding error in `θ / (π/4)` is larger
// than `SNAP_EPSILON`
const SNAP_RANGE: f64 = 65536.0;

// reduce a number of turns modulo 1, constrained to [0, 1)
pub(crate) fn rempos_turns(a: R64) -> R64 {
    R64::new(a.numer().rem_euclid(*a.denom()), *a.denom())
}

// convert a rational number to a floating-point number.
pub(crate) fn r2f(a: R64) -> f64 { *a.numer() as f64 / *a.denom() as f64 }

/// Return *e*<sup>*ik*π/4</sup> exactly.
pub fn eighth_root(k: i64) -> C64 {
    match k.rem_euclid(8) {
        0 => C64::new( 1.0,            0.0          ),
        1 => C64::new( FRAC_1_SQRT_2,  FRAC_1_SQRT_2),
        2 => C64::new( 0.0,            1.0          ),
        3 => C64::new(-FRAC_1_SQRT_2,  FRAC_1_SQRT_2),
        4 => C64::new(-1.0,            0.0          ),
        5 => C64::new(-FRAC_1_SQRT_2, -FRAC_1_SQRT_2),
        6 => C64::new( 0.0,           -1.0          ),
        7 => C64::new( FRAC_1_SQRT_2, -FRAC_1_SQRT_2),
        _ => unreachable!(),
    }
}

/// Compute *e*<sup>*iθ*</sup> for `theta` in radians.
///
/// Any finite angle is accepted; angles outside [0, 2π) are handled through
/// periodicity. Integer multiples of π/4 give exact results, as long as the
/// multiple is small enough for `theta` to pin down the eighth-turn; see
/// [`cis_frac`] for exact phases at arbitrary rational angles.
///
/// ```
/// use std::f64::consts::{ FRAC_PI_2, PI };
/// use qgate_catalog::{ c, phase::cis };
///
/// assert_eq!( cis(FRAC_PI_2), c!(i 1.0)  );
/// assert_eq!( cis(-PI),       c!(-1.0)   );
/// assert_eq!( cis(0.0),       c!(1.0)    );
/// ```
pub fn cis(theta: f64) -> C64 {
    let eighths = theta / FRAC_PI_4;
    let nearest = eighths.round();
    let exact = C64::cis(theta);
    if nearest.abs() < SNAP_RANGE && (eighths - nearest).abs() < SNAP_EPSILON {
        let root = eighth_root(nearest as i64);
        if (root - exact).norm() < SNAP_EPSILON { return root; }
    }
    exact
}

/// Compute *e*<sup>2π*i* `numer` / `denom`</sup>, i.e. the phase of a rational
/// fraction of a full turn.
///
/// The fraction is reduced modulo one turn exactly, so the result is exact
/// whenever the reduced denominator divides 8, regardless of the size of
/// `numer`.
///
/// ```
/// use qgate_catalog::{ c, phase::cis_frac };
///
/// assert_eq!( cis_frac(1, 4).unwrap(),             c!(i 1.0) );
/// assert_eq!( cis_frac(4_000_000_001, 2).unwrap(), c!(-1.0)  );
/// assert!( cis_frac(1, 0).is_err() );
/// ```
pub fn cis_frac(numer: i64, denom: i64) -> PhaseResult<C64> {
    if denom == 0 { return Err(ZeroDenominator); }
    let turns = rempos_turns(R64::new(numer, denom));
    if 8 % turns.denom() == 0 {
        Ok(eighth_root(turns.numer() * (8 / turns.denom())))
    } else {
        Ok(cis(TAU * r2f(turns)))
    }
}

/// Convert the fraction of a full turn `numer / denom` to radians, reduced to
/// [0, 2π).
pub fn turns_to_radians(numer: i64, denom: i64) -> PhaseResult<f64> {
    if denom == 0 { return Err(ZeroDenominator); }
    let turns = rempos_turns(R64::new(numer, denom));
    Ok(TAU * r2f(turns))
}
