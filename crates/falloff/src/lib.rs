//! # falloff — parametric falloff and easing curves for Rust
//!
//! A small library of scalar falloff (easing) functions: deterministic
//! mappings from a real input to a normalized blend weight in [0, 1], used
//! to drive parametric blending curves such as shading masks, procedural
//! gradients, and animation easing — plus the thin sampling surface a
//! plotting or rendering collaborator consumes.
//!
//! ## The curves
//!
//! | Curve        | Shape                                            |
//! |--------------|--------------------------------------------------|
//! | identity     | pass-through baseline                            |
//! | step         | hard threshold, right-continuous                 |
//! | smooth step  | cubic Hermite ease, zero slope at both edges     |
//! | slope step   | linear ramp of a given width around a center     |
//! | trapezoid    | ramp up, plateau at 1, ramp down                 |
//! | twin peaks   | two triangular pulses, first-match-wins          |
//! | halo         | ramp up truncated by a hard cutoff               |
//!
//! ## Quick Start
//!
//! ```rust
//! use falloff::prelude::*;
//!
//! // Sample a trapezoid plateau over the reference unit grid.
//! let curve = Falloff::new()
//!     .profile(Trapezoid { edge0: 0.3, edge1: 0.7, width: 0.2 })
//!     .grid(SampleGrid::unit())
//!     .adapter(Batch)
//!     .build()?;
//!
//! let trace = curve.trace();
//! assert_eq!(trace.len(), 1001);
//! assert_eq!(trace.label, "trapezoid");
//! assert_eq!(trace.markers, vec![0.3, 0.7]);
//! # Result::<(), FalloffError>::Ok(())
//! ```
//!
//! The curve functions themselves are plain free functions when no sampling
//! surface is needed:
//!
//! ```rust
//! use falloff::prelude::*;
//!
//! assert_eq!(step(0.5, 0.5), 1.0);
//! assert_eq!(halo(0.5, 0.65, 0.6, 0.9), 0.0);
//! assert_eq!(halo(0.5, 0.65, 0.6, 0.5), 0.5);
//! ```
//!
//! ## Streaming
//!
//! For O(1)-memory consumption of a sweep, the streaming adapter yields
//! `(abscissa, ordinate)` pairs lazily:
//!
//! ```rust
//! use falloff::prelude::*;
//!
//! let curve = Falloff::new()
//!     .profile(SmoothStep { edge0: 0.2, edge1: 0.8 })
//!     .adapter(Streaming)
//!     .build()?;
//!
//! let (xs, ys): (Vec<f64>, Vec<f64>) = curve.samples().unzip();
//! assert_eq!(xs.len(), 1001);
//! assert_eq!(ys[0], 0.0);
//! assert_eq!(ys[1000], 1.0);
//! # Result::<(), FalloffError>::Ok(())
//! ```
//!
//! ## Errors
//!
//! Shape parameters that make a ramp denominator zero (coincident edges,
//! zero width) are rejected at `build()` with a [`prelude::FalloffError`];
//! the free functions instead reproduce the raw arithmetic and propagate
//! the non-finite result, which keeps them branch-for-branch faithful to
//! their closed forms.
//!
//! ```rust
//! use falloff::prelude::*;
//!
//! let err = Falloff::new()
//!     .profile(SlopeStep { center: 0.5, width: 0.0 })
//!     .adapter(Batch)
//!     .build()
//!     .unwrap_err();
//!
//! assert_eq!(err, FalloffError::DegenerateWidth(0.0));
//! ```
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! The crate supports `no_std` environments. Disable default features to
//! remove the standard library dependency:
//!
//! ```toml
//! [dependencies]
//! falloff = { version = "0.1", default-features = false }
//! ```
//!
//! Use `f32` inputs on targets without hardware doubles; every function is
//! generic over `num_traits::Float`.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// Layer 1: Primitives - errors and sample grids.
mod primitives;

// Layer 2: Math - pure curve functions and profiles.
mod math;

// Layer 3: Engine - validation and checked evaluation.
mod engine;

// Layer 4: Adapters - execution mode adapters.
mod adapters;

// High-level fluent API for falloff sampling.
mod api;

// Standard falloff prelude.
pub mod prelude {
    pub use crate::api::{
        Adapter::{Batch, Streaming},
        Continuity, FalloffBuilder as Falloff, FalloffError, FalloffProfile,
        FalloffProfile::{Halo, Identity, SlopeStep, SmoothStep, Step, Trapezoid, TwinPeaks},
        FalloffTrace, SampleGrid, halo, identity, slope_step, smooth_step, step, trapezoid,
        twin_peaks,
    };
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing
// purposes. It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod adapters {
        pub use crate::adapters::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
