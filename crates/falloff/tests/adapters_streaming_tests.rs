#![cfg(feature = "dev")]
//! Tests for the streaming sampling adapter.
//!
//! These tests verify the lazy execution path:
//! - Streamed pairs equal the batch trace pairwise
//! - Exact-size iteration and size hints
//! - Lazy prefix consumption and restartability
//!
//! ## Test Organization
//!
//! 1. **Batch Agreement** - pairwise equality with the eager adapter
//! 2. **Iterator Contract** - sizes, laziness, restart
//! 3. **Build Validation** - degenerate profiles

use falloff::prelude::*;

// ============================================================================
// Batch Agreement Tests
// ============================================================================

/// Test that streamed pairs equal the batch trace pairwise.
#[test]
fn test_streaming_matches_batch() {
    let profile = TwinPeaks {
        edge0: 0.3,
        edge1: 0.7,
        width: 0.2,
    };

    let batch = Falloff::new()
        .profile(profile)
        .adapter(Batch)
        .build()
        .unwrap()
        .trace();

    let streamed: Vec<(f64, f64)> = Falloff::new()
        .profile(profile)
        .adapter(Streaming)
        .build()
        .unwrap()
        .samples()
        .collect();

    assert_eq!(streamed.len(), batch.len());
    for (i, &(x, y)) in streamed.iter().enumerate() {
        assert_eq!(x, batch.x[i]);
        assert_eq!(y, batch.y[i]);
    }
}

// ============================================================================
// Iterator Contract Tests
// ============================================================================

/// Test exact-size iteration over the unit grid.
#[test]
fn test_streaming_exact_size() {
    let curve = Falloff::<f64>::new().adapter(Streaming).build().unwrap();

    let samples = curve.samples();
    assert_eq!(samples.len(), 1001);
    assert_eq!(samples.size_hint(), (1001, Some(1001)));
    assert_eq!(samples.count(), 1001);
}

/// Test that a prefix can be consumed without sweeping the whole grid.
#[test]
fn test_streaming_lazy_prefix() {
    let curve = Falloff::new()
        .profile(Step { edge: 0.5 })
        .grid(SampleGrid::new(0.0, 1.0, 0.25))
        .adapter(Streaming)
        .build()
        .unwrap();

    let prefix: Vec<(f64, f64)> = curve.samples().take(2).collect();

    assert_eq!(prefix, vec![(0.0, 0.0), (0.25, 0.0)]);
}

/// Test that `samples()` restarts the sweep each call.
#[test]
fn test_streaming_restartable() {
    let curve = Falloff::new()
        .profile(SmoothStep {
            edge0: 0.2,
            edge1: 0.8,
        })
        .adapter(Streaming)
        .build()
        .unwrap();

    let first: Vec<(f64, f64)> = curve.samples().collect();
    let second: Vec<(f64, f64)> = curve.samples().collect();

    assert_eq!(first, second);
}

/// Test the accessors of a built streaming sampler.
#[test]
fn test_streaming_accessors() {
    let profile = Halo {
        edge0: 0.5,
        cutoff: 0.65,
        width: 0.6,
    };
    let curve = Falloff::new()
        .profile(profile)
        .adapter(Streaming)
        .build()
        .unwrap();

    assert_eq!(*curve.profile(), profile);
    assert_eq!(*curve.grid(), SampleGrid::unit());
}

// ============================================================================
// Build Validation Tests
// ============================================================================

/// Test that degenerate profiles fail at build, same as the batch adapter.
#[test]
fn test_streaming_build_rejects_degenerate_profile() {
    let err = Falloff::new()
        .profile(SmoothStep {
            edge0: 0.5,
            edge1: 0.5,
        })
        .adapter(Streaming)
        .build()
        .unwrap_err();

    assert_eq!(
        err,
        FalloffError::DegenerateEdges {
            edge0: 0.5,
            edge1: 0.5
        }
    );
}
