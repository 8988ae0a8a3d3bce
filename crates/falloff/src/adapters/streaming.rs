//! Streaming adapter for lazy curve sampling.
//!
//! ## Purpose
//!
//! This module provides the streaming execution adapter: instead of
//! materializing a full trace, it yields `(abscissa, ordinate)` pairs one at
//! a time over the configured grid, in O(1) memory.
//!
//! ## Design notes
//!
//! * **Validation at build**: Same contract as the batch adapter; the
//!   iterator itself cannot fail.
//! * **Random-access grid**: Abscissas are computed by index, so the
//!   iterator is exact-size and drift-free.
//! * **Restartable**: `samples()` borrows; calling it again restarts the
//!   sweep from the first abscissa.
//!
//! ## Invariants
//!
//! * The streamed pairs equal the batch adapter's trace pairwise for the
//!   same profile and grid.
//!
//! ## Non-goals
//!
//! * This adapter does not buffer or merge chunks; each sample is
//!   independent.
//! * This adapter does not accept externally supplied abscissa slices (use
//!   the batch adapter).

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::sampler::Sampler;
use crate::engine::validator::Validator;
use crate::math::profile::FalloffProfile;
use crate::primitives::errors::FalloffError;
use crate::primitives::grid::SampleGrid;

// ============================================================================
// Streaming Builder
// ============================================================================

/// Builder for the streaming sampling adapter.
#[derive(Debug, Clone)]
pub struct StreamingFalloffBuilder<T: Float> {
    /// Curve profile to sample.
    pub profile: FalloffProfile<T>,

    /// Abscissa grid to sweep.
    pub grid: SampleGrid<T>,

    /// Tracks if any parameter was set multiple times (for validation).
    pub duplicate_param: Option<&'static str>,
}

impl<T: Float> Default for StreamingFalloffBuilder<T> {
    fn default() -> Self {
        Self {
            profile: FalloffProfile::default(),
            grid: SampleGrid::unit(),
            duplicate_param: None,
        }
    }
}

impl<T: Float> StreamingFalloffBuilder<T> {
    /// Set the curve profile to sample.
    pub fn profile(mut self, profile: FalloffProfile<T>) -> Self {
        self.profile = profile;
        self
    }

    /// Set the abscissa grid to sweep.
    pub fn grid(mut self, grid: SampleGrid<T>) -> Self {
        self.grid = grid;
        self
    }

    /// Validate the configuration and produce a runnable streaming sampler.
    pub fn build(self) -> Result<StreamingFalloff<T>, FalloffError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;
        Validator::validate_grid(&self.grid)?;

        let sampler = Sampler::new(self.profile)?;

        Ok(StreamingFalloff {
            sampler,
            grid: self.grid,
        })
    }
}

// ============================================================================
// Streaming Processor
// ============================================================================

/// Lazy sampler yielding `(x, y)` pairs over a validated profile and grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StreamingFalloff<T> {
    sampler: Sampler<T>,
    grid: SampleGrid<T>,
}

impl<T: Float> StreamingFalloff<T> {
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

    /// Iterate `(abscissa, ordinate)` pairs over the grid.
    pub fn samples(&self) -> Samples<T> {
        Samples {
            sampler: self.sampler,
            grid: self.grid,
            index: 0,
            count: self.grid.len(),
        }
    }
}

// ============================================================================
// Sample Iterator
// ============================================================================

/// Exact-size iterator of `(abscissa, ordinate)` pairs.
#[derive(Debug, Clone)]
pub struct Samples<T> {
    sampler: Sampler<T>,
    grid: SampleGrid<T>,
    index: usize,
    count: usize,
}

impl<T: Float> Iterator for Samples<T> {
    type Item = (T, T);

    fn next(&mut self) -> Option<Self::Item> {
        if self.index >= self.count {
            return None;
        }

        let x = self.grid.abscissa(self.index);
        self.index += 1;
        Some((x, self.sampler.evaluate(x)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.count - self.index;
        (remaining, Some(remaining))
    }
}

impl<T: Float> ExactSizeIterator for Samples<T> {}
