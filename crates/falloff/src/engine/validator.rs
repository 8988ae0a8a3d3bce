//! Input validation for falloff profiles and sample grids.
//!
//! ## Purpose
//!
//! This module provides the validation functions that guard the checked
//! sampling surface. It enforces the degenerate-parameter contract: shape
//! parameters that would make a curve's ramp denominator zero are rejected
//! here, so that evaluation downstream is total.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Degenerate parameters**: `edge1 == edge0` for the Hermite ease,
//!   `width == 0` for every ramp-based curve.
//! * **Finite checks**: Shape parameters must be finite (no NaN/Inf).
//! * **Input abscissas are never rejected for range**: out-of-range and
//!   non-[0, 1] inputs are valid by contract; only emptiness is an error.
//!
//! ## Invariants
//!
//! * A profile that passes validation evaluates to a finite value for every
//!   finite input.
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not correct invalid parameters.
//! * This module does not enforce geometric niceties the curves tolerate
//!   (e.g. `edge1 >= edge0` in the trapezoid, negative widths).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::profile::FalloffProfile;
use crate::primitives::errors::FalloffError;
use crate::primitives::grid::SampleGrid;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for falloff profiles, grids, and input abscissas.
///
/// Provides static methods returning `Result<(), FalloffError>` that fail
/// fast upon identifying the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Scalar Validation
    // ========================================================================

    /// Validate a single shape parameter for finiteness.
    pub fn validate_scalar<T: Float>(val: T, name: &str) -> Result<(), FalloffError> {
        if !val.is_finite() {
            return Err(FalloffError::InvalidNumericValue(format!(
                "{}={}",
                name,
                val.to_f64().unwrap_or(f64::NAN)
            )));
        }
        Ok(())
    }

    // ========================================================================
    // Profile Validation
    // ========================================================================

    /// Validate a profile's shape parameters.
    ///
    /// Checks finiteness first, then the degenerate-parameter conditions:
    /// coincident edges for the Hermite ease, zero width for every
    /// ramp-based curve.
    pub fn validate_profile<T: Float>(profile: &FalloffProfile<T>) -> Result<(), FalloffError> {
        match *profile {
            FalloffProfile::Identity => Ok(()),

            FalloffProfile::Step { edge } => Self::validate_scalar(edge, "edge"),

            FalloffProfile::SmoothStep { edge0, edge1 } => {
                Self::validate_scalar(edge0, "edge0")?;
                Self::validate_scalar(edge1, "edge1")?;
                if edge1 == edge0 {
                    return Err(FalloffError::DegenerateEdges {
                        edge0: edge0.to_f64().unwrap_or(f64::NAN),
                        edge1: edge1.to_f64().unwrap_or(f64::NAN),
                    });
                }
                Ok(())
            }

            FalloffProfile::SlopeStep { center, width } => {
                Self::validate_scalar(center, "center")?;
                Self::validate_width(width)
            }

            FalloffProfile::Trapezoid {
                edge0,
                edge1,
                width,
            } => {
                Self::validate_scalar(edge0, "edge0")?;
                Self::validate_scalar(edge1, "edge1")?;
                Self::validate_width(width)
            }

            FalloffProfile::TwinPeaks {
                edge0,
                edge1,
                width,
            } => {
                Self::validate_scalar(edge0, "edge0")?;
                Self::validate_scalar(edge1, "edge1")?;
                Self::validate_width(width)
            }

            FalloffProfile::Halo {
                edge0,
                cutoff,
                width,
            } => {
                Self::validate_scalar(edge0, "edge0")?;
                Self::validate_scalar(cutoff, "cutoff")?;
                Self::validate_width(width)
            }
        }
    }

    /// Validate a ramp width: finite and nonzero.
    ///
    /// Negative widths are tolerated; only `width == 0` makes the ramp slope
    /// undefined.
    pub fn validate_width<T: Float>(width: T) -> Result<(), FalloffError> {
        Self::validate_scalar(width, "width")?;
        if width == T::zero() {
            return Err(FalloffError::DegenerateWidth(
                width.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(())
    }

    // ========================================================================
    // Input Validation
    // ========================================================================

    /// Validate an abscissa slice for a batch sampling run.
    ///
    /// Only emptiness is an error; out-of-range and non-finite abscissas are
    /// valid inputs handled by the curves' own clamping and branching.
    pub fn validate_abscissas<T: Float>(xs: &[T]) -> Result<(), FalloffError> {
        if xs.is_empty() {
            return Err(FalloffError::EmptyInput);
        }
        Ok(())
    }

    /// Validate a sample grid: finite fields, positive step, ordered range.
    pub fn validate_grid<T: Float>(grid: &SampleGrid<T>) -> Result<(), FalloffError> {
        Self::validate_scalar(grid.start, "start")?;
        Self::validate_scalar(grid.stop, "stop")?;

        if !grid.step.is_finite() || grid.step <= T::zero() {
            return Err(FalloffError::InvalidGridStep(
                grid.step.to_f64().unwrap_or(f64::NAN),
            ));
        }

        if grid.start > grid.stop {
            return Err(FalloffError::InvalidGridRange {
                start: grid.start.to_f64().unwrap_or(f64::NAN),
                stop: grid.stop.to_f64().unwrap_or(f64::NAN),
            });
        }

        Ok(())
    }

    // ========================================================================
    // Builder Validation
    // ========================================================================

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), FalloffError> {
        if let Some(parameter) = duplicate_param {
            return Err(FalloffError::DuplicateParameter { parameter });
        }
        Ok(())
    }
}
