//! High-level API for falloff curve sampling.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point for the crate.
//! It implements a fluent builder for choosing a curve profile and sample
//! grid, then transitioning to an execution adapter (Batch or Streaming).
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults (identity curve,
//!   unit grid).
//! * **Polymorphic**: Uses marker types to transition to specialized
//!   adapter builders.
//! * **Validated**: Parameters are validated when `.build()` is called on
//!   the adapter builder.
//! * **Type-Safe**: Generic over `Float` types for flexible precision.
//!
//! ## Key concepts
//!
//! * **Execution Adapters**: Batch (eager trace) and Streaming (lazy pairs).
//! * **Configuration Flow**: Builder pattern ending in
//!   `.adapter(Adapter::Type)`.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`FalloffBuilder`] via `Falloff::new()`.
//! 2. Chain configuration methods (`.profile()`, `.grid()`).
//! 3. Select an adapter via `.adapter(Batch)` to get an execution builder.
//! 4. Call `.build()` to validate and obtain a runnable sampler.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::adapters::batch::BatchFalloffBuilder;
use crate::adapters::streaming::StreamingFalloffBuilder;

// Publicly re-exported types
pub use crate::adapters::batch::BatchFalloff;
pub use crate::adapters::streaming::{Samples, StreamingFalloff};
pub use crate::engine::output::FalloffTrace;
pub use crate::math::falloff::{halo, identity, slope_step, smooth_step, step, trapezoid, twin_peaks};
pub use crate::math::profile::{Continuity, FalloffProfile};
pub use crate::primitives::errors::FalloffError;
pub use crate::primitives::grid::SampleGrid;

/// Marker types for selecting execution adapters.
#[allow(non_snake_case)]
pub mod Adapter {
    pub use super::{Batch, Streaming};
}

// ============================================================================
// Falloff Builder
// ============================================================================

/// Fluent builder for configuring a falloff sampling run.
#[derive(Debug, Clone)]
pub struct FalloffBuilder<T> {
    /// Curve profile to sample.
    pub profile: Option<FalloffProfile<T>>,

    /// Abscissa grid to sample over.
    pub grid: Option<SampleGrid<T>>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: Float> Default for FalloffBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> FalloffBuilder<T> {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            profile: None,
            grid: None,
            duplicate_param: None,
        }
    }

    /// Select an execution adapter to transition to an execution builder.
    pub fn adapter<A>(self, _adapter: A) -> A::Output
    where
        A: FalloffAdapter<T>,
    {
        A::convert(self)
    }

    /// Set the curve profile to sample.
    pub fn profile(mut self, profile: FalloffProfile<T>) -> Self {
        if self.profile.is_some() {
            self.duplicate_param = Some("profile");
        }
        self.profile = Some(profile);
        self
    }

    /// Set the abscissa grid to sample over.
    pub fn grid(mut self, grid: SampleGrid<T>) -> Self {
        if self.grid.is_some() {
            self.duplicate_param = Some("grid");
        }
        self.grid = Some(grid);
        self
    }
}

// ============================================================================
// Adapter Markers
// ============================================================================

/// Trait for transitioning from the generic builder to an execution builder.
pub trait FalloffAdapter<T: Float> {
    /// The output execution builder.
    type Output;

    /// Convert a generic [`FalloffBuilder`] into a specialized execution
    /// builder.
    fn convert(builder: FalloffBuilder<T>) -> Self::Output;
}

/// Marker for eager in-memory trace materialization.
#[derive(Debug, Clone, Copy)]
pub struct Batch;

impl<T: Float> FalloffAdapter<T> for Batch {
    type Output = BatchFalloffBuilder<T>;

    fn convert(builder: FalloffBuilder<T>) -> Self::Output {
        let mut result = BatchFalloffBuilder::default();

        if let Some(profile) = builder.profile {
            result.profile = profile;
        }
        if let Some(grid) = builder.grid {
            result.grid = grid;
        }
        result.duplicate_param = builder.duplicate_param;

        result
    }
}

/// Marker for lazy one-sample-at-a-time iteration.
#[derive(Debug, Clone, Copy)]
pub struct Streaming;

impl<T: Float> FalloffAdapter<T> for Streaming {
    type Output = StreamingFalloffBuilder<T>;

    fn convert(builder: FalloffBuilder<T>) -> Self::Output {
        let mut result = StreamingFalloffBuilder::default();

        if let Some(profile) = builder.profile {
            result.profile = profile;
        }
        if let Some(grid) = builder.grid {
            result.grid = grid;
        }
        result.duplicate_param = builder.duplicate_param;

        result
    }
}
