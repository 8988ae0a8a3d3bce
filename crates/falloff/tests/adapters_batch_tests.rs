#![cfg(feature = "dev")]
//! Tests for the batch sampling adapter.
//!
//! These tests verify the eager execution path end to end:
//! - Builder flow from the fluent API through `build()`
//! - Defaults (identity curve, unit grid)
//! - Validation surfaced at build time
//! - Trace and explicit-abscissa sampling
//!
//! ## Test Organization
//!
//! 1. **Builder Flow** - configuration and defaults
//! 2. **Build Validation** - degenerate profiles, grids, duplicates
//! 3. **Sampling** - traces and explicit abscissas

use falloff::prelude::*;

// ============================================================================
// Builder Flow Tests
// ============================================================================

/// Test the full fluent flow at the reference parameters.
#[test]
fn test_batch_builder_flow() {
    let curve = Falloff::new()
        .profile(Trapezoid {
            edge0: 0.3,
            edge1: 0.7,
            width: 0.2,
        })
        .grid(SampleGrid::unit())
        .adapter(Batch)
        .build()
        .unwrap();

    let trace = curve.trace();

    assert_eq!(trace.len(), 1001);
    assert_eq!(trace.label, "trapezoid");
    assert_eq!(trace.markers, vec![0.3, 0.7]);

    // Spot-check the three plateau regions through the grid
    assert_eq!(trace.y[0], 0.0); // x = 0.0
    assert_eq!(trace.y[500], 1.0); // x = 0.5
    assert_eq!(trace.y[1000], 0.0); // x = 1.0
}

/// Test that defaults are the identity curve over the unit grid.
#[test]
fn test_batch_defaults() {
    let curve = Falloff::<f64>::new().adapter(Batch).build().unwrap();

    let trace = curve.trace();

    assert_eq!(trace.label, "identity");
    assert_eq!(trace.len(), 1001);
    for (x, y) in trace.x.iter().zip(&trace.y) {
        assert_eq!(x, y);
    }
}

/// Test the accessors of a built batch sampler.
#[test]
fn test_batch_accessors() {
    // Dyadic width keeps the midpoint value exact
    let profile = SlopeStep {
        center: 0.5,
        width: 0.5,
    };
    let curve = Falloff::new()
        .profile(profile)
        .adapter(Batch)
        .build()
        .unwrap();

    assert_eq!(*curve.profile(), profile);
    assert_eq!(*curve.grid(), SampleGrid::unit());
    assert_eq!(curve.evaluate(0.5), 0.5);
}

// ============================================================================
// Build Validation Tests
// ============================================================================

/// Test that a degenerate profile fails at build.
#[test]
fn test_build_rejects_degenerate_profile() {
    let err = Falloff::new()
        .profile(TwinPeaks {
            edge0: 0.3,
            edge1: 0.7,
            width: 0.0,
        })
        .adapter(Batch)
        .build()
        .unwrap_err();

    assert_eq!(err, FalloffError::DegenerateWidth(0.0));
}

/// Test that an invalid grid fails at build.
#[test]
fn test_build_rejects_invalid_grid() {
    let err = Falloff::new()
        .profile(Step { edge: 0.5 })
        .grid(SampleGrid::new(1.0, 0.0, 0.1))
        .adapter(Batch)
        .build()
        .unwrap_err();

    assert_eq!(
        err,
        FalloffError::InvalidGridRange {
            start: 1.0,
            stop: 0.0
        }
    );
}

/// Test that setting a parameter twice fails at build.
#[test]
fn test_build_rejects_duplicate_parameter() {
    let err = Falloff::new()
        .profile(Step { edge: 0.3 })
        .profile(Step { edge: 0.5 })
        .adapter(Batch)
        .build()
        .unwrap_err();

    assert_eq!(
        err,
        FalloffError::DuplicateParameter {
            parameter: "profile"
        }
    );
}

// ============================================================================
// Sampling Tests
// ============================================================================

/// Test sampling over explicit abscissas, including out-of-range ones.
#[test]
fn test_sample_explicit_abscissas() {
    let curve = Falloff::new()
        .profile(SmoothStep {
            edge0: 0.2,
            edge1: 0.8,
        })
        .adapter(Batch)
        .build()
        .unwrap();

    let trace = curve.sample(&[-1.0, 0.2, 0.8, 2.0]).unwrap();

    assert_eq!(trace.y, vec![0.0, 0.0, 1.0, 1.0]);
    assert_eq!(trace.label, "smooth step");
}

/// Test that an empty abscissa slice is rejected.
#[test]
fn test_sample_rejects_empty_input() {
    let curve = Falloff::<f64>::new().adapter(Batch).build().unwrap();

    assert_eq!(curve.sample(&[]).unwrap_err(), FalloffError::EmptyInput);
}

/// Test the halo reference parameters through the batch path.
#[test]
fn test_batch_halo_reference() {
    let curve = Falloff::new()
        .profile(Halo {
            edge0: 0.5,
            cutoff: 0.65,
            width: 0.6,
        })
        .adapter(Batch)
        .build()
        .unwrap();

    let trace = curve.trace();

    // Hard zero past the cutoff: x = 0.9 is index 900
    assert_eq!(trace.y[900], 0.0);

    // Ramp value at the center: x = 0.5 is index 500
    assert_eq!(trace.y[500], 0.5);
}
