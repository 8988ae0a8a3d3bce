//! Falloff Curve Catalog
//!
//! This example demonstrates the full sampling surface:
//! - Batch traces over the reference unit grid
//! - Annotation markers for plotting consumers
//! - Streaming iteration in O(1) memory
//! - Degenerate-parameter rejection

use falloff::prelude::*;

fn main() -> Result<(), FalloffError> {
    println!("{}", "=".repeat(80));
    println!("Falloff Curve Catalog");
    println!("{}", "=".repeat(80));
    println!();

    example_1_reference_traces()?;
    example_2_streaming_sweep()?;
    example_3_degenerate_parameters();

    Ok(())
}

/// Example 1: Reference Traces
/// Samples each curve over the unit grid at its visualization parameters.
fn example_1_reference_traces() -> Result<(), FalloffError> {
    println!("Example 1: Reference Traces");
    println!("{}", "-".repeat(80));

    let profiles: [FalloffProfile<f64>; 7] = [
        Identity,
        Step { edge: 0.5 },
        SmoothStep {
            edge0: 0.2,
            edge1: 0.8,
        },
        SlopeStep {
            center: 0.5,
            width: 0.2,
        },
        Trapezoid {
            edge0: 0.3,
            edge1: 0.7,
            width: 0.2,
        },
        TwinPeaks {
            edge0: 0.3,
            edge1: 0.7,
            width: 0.2,
        },
        Halo {
            edge0: 0.5,
            cutoff: 0.65,
            width: 0.6,
        },
    ];

    for profile in profiles {
        let trace = Falloff::new()
            .profile(profile)
            .grid(SampleGrid::unit())
            .adapter(Batch)
            .build()?
            .trace();

        let (y_min, y_max) = trace.y_bounds().expect("unit grid is non-empty");
        print!(
            "{:<12} {:>5} samples, y in [{:.3}, {:.3}], markers:",
            trace.label,
            trace.len(),
            y_min,
            y_max
        );
        if trace.has_markers() {
            for marker in &trace.markers {
                print!(" {marker}");
            }
        } else {
            print!(" (none)");
        }
        println!();
    }

    println!();
    Ok(())
}

/// Example 2: Streaming Sweep
/// Consumes samples lazily without materializing the full trace.
fn example_2_streaming_sweep() -> Result<(), FalloffError> {
    println!("Example 2: Streaming Sweep");
    println!("{}", "-".repeat(80));

    let curve = Falloff::new()
        .profile(SmoothStep {
            edge0: 0.2,
            edge1: 0.8,
        })
        .grid(SampleGrid::new(0.0, 1.0, 0.1))
        .adapter(Streaming)
        .build()?;

    for (x, y) in curve.samples() {
        println!("  smooth_step({x:.1}) = {y:.6}");
    }

    println!();
    Ok(())
}

/// Example 3: Degenerate Parameters
/// Shows the errors raised for parameters that would divide by zero.
fn example_3_degenerate_parameters() {
    println!("Example 3: Degenerate Parameters");
    println!("{}", "-".repeat(80));

    let coincident = Falloff::new()
        .profile(SmoothStep {
            edge0: 0.5,
            edge1: 0.5,
        })
        .adapter(Batch)
        .build();
    println!("  coincident edges -> {}", coincident.unwrap_err());

    let zero_width = Falloff::new()
        .profile(Trapezoid {
            edge0: 0.3,
            edge1: 0.7,
            width: 0.0,
        })
        .adapter(Batch)
        .build();
    println!("  zero width       -> {}", zero_width.unwrap_err());

    println!();
}
