//! Cubic Scatter Plot Example
//!
//! Plots y = 2(5x^3 + 4x^2) over 5000 evenly spaced samples with a grid,
//! a title and a custom x-axis label. The y-axis label is left unset so the
//! default is drawn.
//!
//! Run with: `cargo run --example cubic_plot [output.png|output.jpg]`

use trueno_scatter::prelude::*;

const SAMPLES: usize = 5000;
const REPS: f32 = 2.0;

fn main() -> Result<()> {
    println!("Cubic Scatter Plot Example");
    println!("==========================\n");

    let output = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "out/cubic_plot.png".to_string());
    if let Some(parent) = std::path::Path::new(&output).parent() {
        std::fs::create_dir_all(parent)?;
    }

    let (x, y) = generate_cubic();
    println!("  Generated {} data points", x.len());

    let mut plotter = Plotter::new();
    plotter
        .set_x_label("testing new")
        .set_title("cubic growth")
        .set_output_path(&output)
        .enable_grid(15);

    let report = plotter.plot(&x, &y, x.len())?;

    for warning in &report.warnings {
        println!("  warning: {warning}");
    }
    println!("  {} file saved as {}", report.format, report.path.display());

    Ok(())
}

/// x runs over the sample index centered on zero; y is evaluated on the
/// index scaled into [-1, 1).
fn generate_cubic() -> (Vec<f32>, Vec<f32>) {
    let half = (SAMPLES / 2) as f32;
    (0..SAMPLES)
        .map(|n| {
            let i = n as f32 - half;
            let t = REPS * i / SAMPLES as f32;
            (i, REPS * (5.0 * t * t * t + 4.0 * t * t))
        })
        .unzip()
}
