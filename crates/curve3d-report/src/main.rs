//! Curve3D report CLI
//!
//! Evaluates a fixed circle, ellipse and spiral at `t = π/4`, then prints
//! the circles sorted by radius and the sum of their radii.
//!
//! # Usage
//!
//! ```bash
//! curve3d
//! # Diagnostics go to stderr:
//! RUST_LOG=debug curve3d
//! ```

use std::io::{self, Write};
use std::process;

use curve3d_core::Result;
use curve3d_report::{run, ReportConfig};
use tracing_subscriber::EnvFilter;

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    // Another subscriber already installed is not an error for a CLI.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .try_init();
}

fn try_main<W: Write>(out: &mut W) -> Result<()> {
    run(&ReportConfig::default(), out)?;
    out.flush()?;
    Ok(())
}

fn main() {
    init_logging();

    if let Err(e) = try_main(&mut io::stdout().lock()) {
        tracing::error!(error = %e, "report failed");
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
