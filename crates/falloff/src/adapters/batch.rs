//! Batch adapter for eager curve sampling.
//!
//! ## Purpose
//!
//! This module provides the batch execution adapter: it validates a profile
//! and grid once at `build()`, then materializes complete traces in memory.
//! This is the mode the reference visualization uses (1001 samples over the
//! unit interval per curve).
//!
//! ## Design notes
//!
//! * **Validation at build**: Degenerate parameters surface as
//!   `FalloffError` before any evaluation happens.
//! * **Infallible runs**: After `build()`, sampling the configured grid
//!   cannot fail; only explicit abscissa slices are re-checked (for
//!   emptiness).
//! * **Builder Pattern**: Fluent configuration with sensible defaults
//!   (identity curve, unit grid).
//!
//! ## Invariants
//!
//! * Output ordinates index-correspond to the input abscissas.
//! * A built `BatchFalloff` holds only validated state.
//!
//! ## Non-goals
//!
//! * This adapter does not stream samples lazily (use the streaming
//!   adapter).
//! * This adapter does not render or persist traces.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::output::FalloffTrace;
use crate::engine::sampler::Sampler;
use crate::engine::validator::Validator;
use crate::math::profile::FalloffProfile;
use crate::primitives::errors::FalloffError;
use crate::primitives::grid::SampleGrid;

// ============================================================================
// Batch Builder
// ============================================================================

/// Builder for the batch sampling adapter.
#[derive(Debug, Clone)]
pub struct BatchFalloffBuilder<T: Float> {
    /// Curve profile to sample.
    pub profile: FalloffProfile<T>,

    /// Abscissa grid for `trace()`.
    pub grid: SampleGrid<T>,

    /// Tracks if any parameter was set multiple times (for validation).
    pub duplicate_param: Option<&'static str>,
}

impl<T: Float> Default for BatchFalloffBuilder<T> {
    fn default() -> Self {
        Self {
            profile: FalloffProfile::default(),
            grid: SampleGrid::unit(),
            duplicate_param: None,
        }
    }
}

impl<T: Float> BatchFalloffBuilder<T> {
    /// Set the curve profile to sample.
    pub fn profile(mut self, profile: FalloffProfile<T>) -> Self {
        self.profile = profile;
        self
    }

    /// Set the abscissa grid for `trace()`.
    pub fn grid(mut self, grid: SampleGrid<T>) -> Self {
        self.grid = grid;
        self
    }

    /// Validate the configuration and produce a runnable batch sampler.
    pub fn build(self) -> Result<BatchFalloff<T>, FalloffError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;
        Validator::validate_grid(&self.grid)?;

        let sampler = Sampler::new(self.profile)?;

        Ok(BatchFalloff {
            sampler,
            grid: self.grid,
        })
    }
}

// ============================================================================
// Batch Processor
// ============================================================================

/// Eager batch sampler over a validated profile and grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BatchFalloff<T> {
    sampler: Sampler<T>,
    grid: SampleGrid<T>,
}

impl<T: Float> BatchFalloff<T> {
    /// The validated profile this processor samples.
    #[inline]
    pub fn profile(&self) -> &FalloffProfile<T> {
        self.sampler.profile()
    }

    /// The configured abscissa grid.
    #[inline]
    pub fn grid(&self) -> &SampleGrid<T> {
        &self.grid
    }

    /// Evaluate the curve at a single abscissa.
    #[inline]
    pub fn evaluate(&self, x: T) -> T {
        self.sampler.evaluate(x)
    }

    /// Materialize the trace over the configured grid.
    pub fn trace(&self) -> FalloffTrace<T> {
        self.sampler.trace(&self.grid)
    }

    /// Materialize a trace over explicit abscissas.
    ///
    /// The abscissas may lie anywhere on the real line; only an empty slice
    /// is rejected.
    pub fn sample(&self, xs: &[T]) -> Result<FalloffTrace<T>, FalloffError> {
        Validator::validate_abscissas(xs)?;
        Ok(self.sampler.trace_over(xs))
    }
}
