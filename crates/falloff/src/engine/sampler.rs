//! Checked curve evaluation.
//!
//! ## Purpose
//!
//! This module provides [`Sampler`], a falloff profile validated once at
//! construction. After that single check, evaluation is infallible: every
//! call is pure, O(1), and total for finite inputs.
//!
//! ## Design notes
//!
//! * **Validate once, evaluate forever**: The degenerate-parameter check
//!   runs in `new`; `evaluate`, `sample`, and `trace` cannot fail.
//! * **Value semantics**: A sampler is a small `Copy` value; concurrent use
//!   needs no synchronization.
//! * **Delegation**: Evaluation dispatches through the profile to the free
//!   functions in the math layer.
//!
//! ## Invariants
//!
//! * A constructed sampler's profile always passes validation.
//! * `sample` preserves input order and length.
//!
//! ## Non-goals
//!
//! * This module does not decide what to sample (adapter responsibility).
//! * This module does not render or persist results.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::output::FalloffTrace;
use crate::engine::validator::Validator;
use crate::math::profile::FalloffProfile;
use crate::primitives::errors::FalloffError;
use crate::primitives::grid::SampleGrid;

// ============================================================================
// Sampler
// ============================================================================

/// A falloff profile validated once, evaluated many times.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sampler<T> {
    profile: FalloffProfile<T>,
}

impl<T: Float> Sampler<T> {
    /// Validate `profile` and wrap it for infallible evaluation.
    pub fn new(profile: FalloffProfile<T>) -> Result<Self, FalloffError> {
        Validator::validate_profile(&profile)?;
        Ok(Self { profile })
    }

    /// The validated profile.
    #[inline]
    pub fn profile(&self) -> &FalloffProfile<T> {
        &self.profile
    }

    /// Evaluate the curve at a single abscissa.
    #[inline]
    pub fn evaluate(&self, x: T) -> T {
        self.profile.evaluate(x)
    }

    /// Evaluate the curve at each abscissa in order.
    pub fn sample(&self, xs: &[T]) -> Vec<T> {
        xs.iter().map(|&x| self.profile.evaluate(x)).collect()
    }

    /// Sample the curve over explicit abscissas into a trace.
    pub fn trace_over(&self, xs: &[T]) -> FalloffTrace<T> {
        FalloffTrace {
            y: self.sample(xs),
            x: xs.to_vec(),
            label: self.profile.name(),
            markers: self.profile.markers(),
        }
    }

    /// Sample the curve over a grid into a trace.
    pub fn trace(&self, grid: &SampleGrid<T>) -> FalloffTrace<T> {
        let x = grid.abscissas();
        FalloffTrace {
            y: self.sample(&x),
            x,
            label: self.profile.name(),
            markers: self.profile.markers(),
        }
    }
}
