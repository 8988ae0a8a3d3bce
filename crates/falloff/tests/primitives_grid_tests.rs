#![cfg(feature = "dev")]
//! Tests for dense abscissa grids.
//!
//! These tests verify the closed-interval sampling semantics:
//! - The reference unit grid (1001 samples from 0 to 1)
//! - Lattice-inclusive endpoint handling
//! - Clamping against floating-point drift
//! - Degenerate grids
//!
//! ## Test Organization
//!
//! 1. **Reference Grid** - the unit visualization grid
//! 2. **Custom Grids** - dyadic and off-lattice ranges
//! 3. **Degenerate Grids** - zero/negative steps, inverted ranges

use falloff::internals::primitives::grid::SampleGrid;

// ============================================================================
// Reference Grid Tests
// ============================================================================

/// Test the reference unit grid: 1001 samples over [0, 1].
#[test]
fn test_unit_grid_reference_sampling() {
    let grid = SampleGrid::<f64>::unit();

    assert_eq!(grid.len(), 1001);
    assert!(!grid.is_empty());
    assert_eq!(grid.abscissa(0), 0.0);
    assert_eq!(grid.abscissa(1000), 1.0);
}

/// Test that the unit grid materializes in order within [0, 1].
#[test]
fn test_unit_grid_abscissas_ordered() {
    let xs = SampleGrid::<f64>::unit().abscissas();

    assert_eq!(xs.len(), 1001);
    assert_eq!(xs[0], 0.0);
    assert_eq!(xs[1000], 1.0);

    for pair in xs.windows(2) {
        assert!(pair[0] < pair[1], "abscissas not increasing: {pair:?}");
    }
    assert!(xs.iter().all(|&x| (0.0..=1.0).contains(&x)));
}

/// Test that the default grid is the unit grid.
#[test]
fn test_default_grid_is_unit() {
    assert_eq!(SampleGrid::<f64>::default(), SampleGrid::unit());
}

/// Test the unit grid in single precision.
///
/// The lattice-inclusion tolerance must absorb f32 division error so the
/// endpoint is still included.
#[test]
fn test_unit_grid_f32() {
    let grid = SampleGrid::<f32>::unit();

    assert_eq!(grid.len(), 1001);
    assert_eq!(grid.abscissa(0), 0.0);
    assert_eq!(grid.abscissa(1000), 1.0);
}

// ============================================================================
// Custom Grid Tests
// ============================================================================

/// Test a dyadic grid where every abscissa is exact.
#[test]
fn test_dyadic_grid_exact() {
    let grid = SampleGrid::new(0.0, 1.0, 0.25);

    assert_eq!(grid.len(), 5);
    assert_eq!(grid.abscissas(), vec![0.0, 0.25, 0.5, 0.75, 1.0]);
}

/// Test a grid whose stop does not land on the step lattice.
///
/// The last abscissa stays at or below `stop`; no phantom sample is
/// appended.
#[test]
fn test_off_lattice_stop() {
    let grid = SampleGrid::new(0.0, 1.0, 0.3);

    assert_eq!(grid.len(), 4);
    let xs = grid.abscissas();
    assert_eq!(xs[0], 0.0);
    assert!(*xs.last().unwrap() <= 1.0);
    assert!(*xs.last().unwrap() > 0.85);
}

/// Test a grid over a negative range.
#[test]
fn test_negative_range() {
    let grid = SampleGrid::new(-1.0, 1.0, 0.5);

    assert_eq!(grid.len(), 5);
    assert_eq!(grid.abscissas(), vec![-1.0, -0.5, 0.0, 0.5, 1.0]);
}

/// Test that indexing clamps against drift past `stop`.
#[test]
fn test_abscissa_clamped_to_stop() {
    let grid = SampleGrid::new(0.0, 1.0, 0.001);

    for i in 0..grid.len() {
        assert!(grid.abscissa(i) <= grid.stop, "drift past stop at {i}");
    }
}

/// Test a single-point grid where start equals stop.
#[test]
fn test_single_point_grid() {
    let grid = SampleGrid::new(0.5, 0.5, 0.1);

    assert_eq!(grid.len(), 1);
    assert_eq!(grid.abscissas(), vec![0.5]);
}

// ============================================================================
// Degenerate Grid Tests
// ============================================================================

/// Test that degenerate grids report themselves empty.
///
/// Construction is unchecked; the validator rejects these before sampling,
/// but the primitive itself must not loop or divide by zero.
#[test]
fn test_degenerate_grids_empty() {
    assert_eq!(SampleGrid::new(0.0, 1.0, 0.0).len(), 0);
    assert_eq!(SampleGrid::new(0.0, 1.0, -0.1).len(), 0);
    assert_eq!(SampleGrid::new(1.0, 0.0, 0.1).len(), 0);

    assert!(SampleGrid::new(0.0, 1.0, 0.0).is_empty());
    assert!(SampleGrid::new(0.0, 1.0, 0.0).abscissas().is_empty());
}
