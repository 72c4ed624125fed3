//! Curve3D report: builds a fixed set of curves, evaluates them at one
//! parameter value, then sorts by effective radius and aggregates the
//! circles among them.

pub mod config;
pub mod format;
pub mod report;

pub use config::{CurveSpec, ReportConfig};
pub use report::{
    build_curves, circle_indices, circle_radii, evaluate_all, run, sort_by_effective_radius,
    sum_circle_radii, Report,
};
