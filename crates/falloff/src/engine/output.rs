//! Output types for sampling runs.
//!
//! ## Purpose
//!
//! This module defines [`FalloffTrace`], the bundle a sampling run hands to
//! its consumer: abscissas, ordinates, the curve's display label, and the
//! annotation marker positions. A plotting collaborator needs nothing else
//! to render a labeled reference figure.
//!
//! ## Design notes
//!
//! * **Plain data**: Public fields, no behavior beyond queries and display.
//! * **Generics**: Traces are generic over `Float` types.
//! * **Ergonomics**: Implements `Display` for human-readable output.
//!
//! ## Invariants
//!
//! * `x` and `y` always have the same length and index-correspond.
//! * `markers` are in ascending curve-parameter order.
//!
//! ## Non-goals
//!
//! * This module does not perform sampling; it only stores results.
//! * This module does not provide serialization or file output.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt::{Debug, Display, Formatter, Result};
use num_traits::Float;

// ============================================================================
// Trace Structure
// ============================================================================

/// Sampled curve output: abscissas, ordinates, label, and markers.
#[derive(Debug, Clone, PartialEq)]
pub struct FalloffTrace<T> {
    /// Sampled abscissas, in input order.
    pub x: Vec<T>,

    /// Curve value at each abscissa.
    pub y: Vec<T>,

    /// Display label of the sampled curve.
    pub label: &'static str,

    /// Annotation abscissas (edges, center, cutoff) for the consumer to
    /// label; empty for the identity curve.
    pub markers: Vec<T>,
}

impl<T: Float> FalloffTrace<T> {
    // ========================================================================
    // Query Methods
    // ========================================================================

    /// Number of samples in the trace.
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Check if the trace contains no samples.
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Check if the curve carries annotation markers.
    pub fn has_markers(&self) -> bool {
        !self.markers.is_empty()
    }

    /// Minimum and maximum ordinate, if the trace is non-empty.
    pub fn y_bounds(&self) -> Option<(T, T)> {
        self.y.iter().copied().fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: Float + Display + Debug> Display for FalloffTrace<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Curve:   {}", self.label)?;
        writeln!(f, "  Samples: {}", self.len())?;

        if self.has_markers() {
            write!(f, "  Markers:")?;
            for marker in &self.markers {
                write!(f, " {}", marker)?;
            }
            writeln!(f)?;
        }
        writeln!(f)?;

        writeln!(f, "Sampled Curve:")?;
        write!(f, "{:>8} {:>12}", "X", "Y")?;
        writeln!(f)?;
        writeln!(f, "{:-<width$}", "", width = 21)?;

        // Data rows (show first 10 and last 10 if more than 20 points)
        let n = self.len();
        let show_all = n <= 20;
        let rows_to_show: Vec<usize> = if show_all {
            (0..n).collect()
        } else {
            (0..10).chain(n - 10..n).collect()
        };

        let mut prev_idx = 0;
        for (i, &idx) in rows_to_show.iter().enumerate() {
            // Add ellipsis if we skipped rows
            if i > 0 && idx != prev_idx + 1 {
                writeln!(f, "{:>8}", "...")?;
            }
            prev_idx = idx;

            writeln!(f, "{:>8.3} {:>12.6}", self.x[idx], self.y[idx])?;
        }

        Ok(())
    }
}
