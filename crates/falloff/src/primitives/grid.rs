//! Dense abscissa grids for curve sampling.
//!
//! ## Purpose
//!
//! This module provides [`SampleGrid`], a closed-interval arithmetic
//! progression of abscissas used to sample a falloff curve densely. The
//! reference grid for curve visualization is the unit interval [0, 1] at a
//! step of 0.001, i.e. 1001 samples.
//!
//! ## Design notes
//!
//! * **Closed interval**: `stop` is included whenever it lands on the step
//!   lattice; accumulated rounding never pushes an abscissa past `stop`.
//! * **Unchecked construction**: Like the other primitives, `SampleGrid`
//!   stores raw fields; the engine's validator rejects degenerate grids
//!   before any sampling run.
//! * **O(1) indexing**: Abscissas are computed as `start + i * step`, not
//!   accumulated, so indexing is random-access and drift-free.
//!
//! ## Invariants
//!
//! * For a valid grid (`step > 0`, `start <= stop`, all finite), every
//!   abscissa lies in `[start, stop]` and the sequence is strictly
//!   increasing except possibly at the clamped final point.
//!
//! ## Non-goals
//!
//! * This module does not validate grid parameters (engine responsibility).
//! * This module does not evaluate curves over the grid.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// ============================================================================
// Sample Grid
// ============================================================================

/// Closed-interval abscissa grid `start, start + step, ..., stop`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleGrid<T> {
    /// First abscissa (inclusive).
    pub start: T,

    /// Last abscissa (inclusive when on the step lattice).
    pub stop: T,

    /// Spacing between consecutive abscissas.
    pub step: T,
}

impl<T: Float> SampleGrid<T> {
    /// Create a grid over `[start, stop]` with the given step.
    ///
    /// Construction is unchecked; degenerate parameters are rejected by the
    /// validator when a sampling run is built.
    pub fn new(start: T, stop: T, step: T) -> Self {
        Self { start, stop, step }
    }

    /// The reference visualization grid: `[0, 1]` at step 0.001 (1001 samples).
    pub fn unit() -> Self {
        Self {
            start: T::zero(),
            stop: T::one(),
            step: T::from(0.001).unwrap(),
        }
    }

    /// Number of abscissas in the grid.
    pub fn len(&self) -> usize {
        if self.step <= T::zero() || self.stop < self.start {
            return 0;
        }

        // Lattice-inclusion tolerance scaled to the float type's precision;
        // absorbs representation error when the span is an exact multiple of
        // the step.
        let span = (self.stop - self.start) / self.step;
        let eps = (span.abs() + T::one()) * T::from(8.0).unwrap() * T::epsilon();
        (span + eps).floor().to_usize().unwrap_or(0) + 1
    }

    /// Check if the grid contains no abscissas.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Abscissa at position `i`, clamped so rounding never exceeds `stop`.
    #[inline]
    pub fn abscissa(&self, i: usize) -> T {
        let x = self.start + T::from(i).unwrap() * self.step;
        if x > self.stop {
            self.stop
        } else {
            x
        }
    }

    /// Materialize all abscissas in order.
    pub fn abscissas(&self) -> Vec<T> {
        (0..self.len()).map(|i| self.abscissa(i)).collect()
    }
}

impl<T: Float> Default for SampleGrid<T> {
    fn default() -> Self {
        Self::unit()
    }
}
