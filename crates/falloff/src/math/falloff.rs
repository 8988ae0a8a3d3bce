//! Scalar falloff curve functions.
//!
//! ## Purpose
//!
//! This module provides the falloff (easing) functions that map a real
//! input to a normalized blend weight in [0, 1]. They drive parametric
//! blending curves such as shading masks, procedural gradients, and
//! animation easing.
//!
//! ## Design notes
//!
//! * **Purity**: Every function is stateless, deterministic, and side-effect
//!   free; calls are trivially safe to run concurrently.
//! * **Totality**: Functions accept any real input, including values outside
//!   [0, 1]; out-of-range inputs are handled by the clamping and branching
//!   each curve specifies, never rejected.
//! * **Unchecked parameters**: Shape parameters are not validated here.
//!   Degenerate parameters (coincident edges, zero width) divide by zero and
//!   propagate the non-finite result unchanged; the engine's validator
//!   offers the checked alternative.
//! * **Generics**: All functions are generic over `Float`.
//!
//! ## Key concepts
//!
//! * **Edge**: Abscissa where a transition begins or ends.
//! * **Width**: Span over which a transition ramps between 0 and 1.
//! * **Plateau**: Saturated region at 1 between two ramps.
//! * **Cutoff**: Hard boundary past which the output is forced to 0.
//!
//! ## Invariants
//!
//! * For well-formed parameters every function except [`identity`] returns a
//!   value in [0, 1].
//! * Boundary tests are exclusive on the lower side, so piecewise curves are
//!   continuous at every junction given a consistent ramp slope.
//!
//! ## Non-goals
//!
//! * This module does not validate shape parameters.
//! * This module does not sample curves over grids (adapter responsibility).

// External dependencies
use num_traits::Float;

// ============================================================================
// Baseline Curves
// ============================================================================

/// Identity curve: returns the input unchanged.
///
/// The trivial baseline; the only curve whose output is not confined to
/// [0, 1].
#[inline]
pub fn identity<T: Float>(x: T) -> T {
    x
}

/// Hard threshold at `c`: 0 for `x < c`, else 1.
///
/// Right-continuous; the value at exactly `x = c` is 1.
#[inline]
pub fn step<T: Float>(c: T, x: T) -> T {
    if x < c {
        T::zero()
    } else {
        T::one()
    }
}

// ============================================================================
// Ramp Curves
// ============================================================================

/// Cubic Hermite smoothing between `e0` and `e1`.
///
/// Clamps `t = (x - e0) / (e1 - e0)` to [0, 1] and returns
/// `t^3 (6 t^2 - 15 t + 10)`, the quintic ease with zero first derivative at
/// both edges. Monotonically non-decreasing on `[e0, e1]`, constant outside.
///
/// Requires `e1 != e0`; coincident edges divide by zero.
#[inline]
pub fn smooth_step<T: Float>(e0: T, e1: T, x: T) -> T {
    let t = ((x - e0) / (e1 - e0)).max(T::zero()).min(T::one());
    let six = T::from(6.0).unwrap();
    let fifteen = T::from(15.0).unwrap();
    let ten = T::from(10.0).unwrap();
    t * t * t * (t * (t * six - fifteen) + ten)
}

/// Linear ramp of width `w` centered at `c`.
///
/// 0 below `c - w/2`, rises linearly with slope `1/w` to 1 at `c + w/2`,
/// else 1. Continuous and piecewise linear.
///
/// Requires `w != 0`.
#[inline]
pub fn slope_step<T: Float>(c: T, w: T, x: T) -> T {
    let half = T::from(0.5).unwrap();
    let lo = c - w * half;

    if x < lo {
        T::zero()
    } else if x < c + w * half {
        (x - lo) / w
    } else {
        T::one()
    }
}

// ============================================================================
// Compound Curves
// ============================================================================

/// Piecewise-linear plateau between `e0` and `e1` with ramps of width `w`.
///
/// Five regions in ascending `x`: 0 below `e0 - w`, a linear ramp up across
/// `[e0 - w, e0]`, flat at 1 across `[e0, e1]`, a linear ramp down across
/// `[e1, e1 + w]`, then 0. Both ramps share slope `1/w`, so the curve is
/// continuous at every junction.
///
/// Requires `w != 0`. Intended use has `e1 >= e0`; with `e1 < e0` the
/// plateau degenerates and the result is caller-dependent, not corrected
/// here.
#[inline]
pub fn trapezoid<T: Float>(e0: T, e1: T, w: T, x: T) -> T {
    if x < e0 - w {
        T::zero()
    } else if x < e0 {
        (x - (e0 - w)) / w
    } else if x < e1 {
        T::one()
    } else if x < e1 + w {
        T::one() - (x - e1) / w
    } else {
        T::zero()
    }
}

/// Two triangular pulses of half-width `w/2` centered at `e0` and `e1`.
///
/// Each pulse ramps linearly from 0 to 1 at its center and back to 0 over
/// `+/- w/2`; outside both pulses the result is 0.
///
/// The pulses are evaluated first-match-wins: the first pulse's ranges are
/// tested in order, and only when `x` falls past all of them are the second
/// pulse's ranges tested. When the ranges overlap (`e1 - w/2 < e0 + w/2`)
/// the first pulse therefore masks the second wherever its ranges cover
/// `x`; the pulses are never averaged or combined.
///
/// Requires `w != 0`.
#[inline]
pub fn twin_peaks<T: Float>(e0: T, e1: T, w: T, x: T) -> T {
    let hw = w * T::from(0.5).unwrap();

    // First pulse wins wherever its ranges cover x.
    if x < e0 - hw {
        return T::zero();
    }
    if x < e0 {
        return (x - (e0 - hw)) / hw;
    }
    if x < e0 + hw {
        return T::one() - (x - e0) / hw;
    }

    // Second pulse.
    if x < e1 - hw {
        T::zero()
    } else if x < e1 {
        (x - (e1 - hw)) / hw
    } else if x < e1 + hw {
        T::one() - (x - e1) / hw
    } else {
        T::zero()
    }
}

/// Ramp-up gated by a hard cutoff at `e1`.
///
/// 0 for `x > e1`, otherwise [`slope_step`]`(e0, w, x)`. The ramp is
/// truncated abruptly at the cutoff rather than ramping back down, leaving a
/// discontinuity at `x = e1` unless the ramp is still at 0 there.
///
/// Requires `w != 0`.
#[inline]
pub fn halo<T: Float>(e0: T, e1: T, w: T, x: T) -> T {
    if x > e1 {
        T::zero()
    } else {
        slope_step(e0, w, x)
    }
}
