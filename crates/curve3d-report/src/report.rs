//! Evaluation, sorting and circle aggregation over a curve collection.

use std::io::Write;

use curve3d_core::Result;
use curve3d_geometry::{AnyCurve, Circle, Curve, CurveSample};
use serde::Serialize;
use tracing::{debug, info};

use crate::config::{CurveSpec, ReportConfig};
use crate::format::{format_general, format_vec3};

/// Construct every curve, failing on the first invalid one.
///
/// No partial set is returned.
pub fn build_curves(specs: &[CurveSpec]) -> Result<Vec<AnyCurve>> {
    specs.iter().map(CurveSpec::build).collect()
}

/// Evaluate each curve at `t`, in collection order.
pub fn evaluate_all(curves: &[AnyCurve], t: f64) -> Vec<CurveSample> {
    curves.iter().map(|c| c.evaluate(t)).collect()
}

/// Positions of the circles within `curves`.
///
/// The indices are only valid until `curves` is reordered.
pub fn circle_indices(curves: &[AnyCurve]) -> Vec<usize> {
    curves
        .iter()
        .enumerate()
        .filter(|(_, c)| c.as_circle().is_some())
        .map(|(i, _)| i)
        .collect()
}

/// Sort ascending by effective radius.
pub fn sort_by_effective_radius(curves: &mut [AnyCurve]) {
    curves.sort_by(|a, b| a.effective_radius().total_cmp(&b.effective_radius()));
}

/// Effective radius of every circle, in collection order.
pub fn circle_radii(curves: &[AnyCurve]) -> Vec<f64> {
    curves
        .iter()
        .filter_map(AnyCurve::as_circle)
        .map(Circle::effective_radius)
        .collect()
}

pub fn sum_circle_radii(curves: &[AnyCurve]) -> f64 {
    curves
        .iter()
        .filter_map(AnyCurve::as_circle)
        .map(Circle::effective_radius)
        .sum()
}

/// Everything the report prints, computed up front.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub parameter: f64,
    /// Samples in construction order.
    pub samples: Vec<CurveSample>,
    pub circles_before_sort: Vec<usize>,
    /// The collection after sorting by effective radius.
    pub sorted: Vec<AnyCurve>,
    pub circles_after_sort: Vec<usize>,
    pub circle_radii: Vec<f64>,
    pub circle_radius_sum: f64,
}

impl Report {
    pub fn generate(config: &ReportConfig) -> Result<Self> {
        let mut curves = build_curves(&config.curves)?;
        info!(count = curves.len(), "constructed curves");

        let t = config.parameter;
        let samples = evaluate_all(&curves, t);
        debug!(t, samples = samples.len(), "evaluated curves");

        let circles_before_sort = circle_indices(&curves);
        debug!(?circles_before_sort, "circle subset");

        sort_by_effective_radius(&mut curves);
        let circles_after_sort = circle_indices(&curves);
        let order: Vec<String> = curves.iter().map(|c| c.kind().to_string()).collect();
        debug!(
            order = %order.join(", "),
            ?circles_after_sort,
            "sorted by effective radius"
        );

        let circle_radii = circle_radii(&curves);
        let circle_radius_sum = sum_circle_radii(&curves);
        info!(circles = circle_radii.len(), sum = circle_radius_sum, "aggregated circles");

        Ok(Self {
            parameter: t,
            samples,
            circles_before_sort,
            sorted: curves,
            circles_after_sort,
            circle_radii,
            circle_radius_sum,
        })
    }

    /// Render the plain-text report.
    pub fn write_to<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(
            out,
            "Coordinates and Derivatives at t = {}",
            format_general(self.parameter)
        )?;
        writeln!(out)?;
        for sample in &self.samples {
            writeln!(out, "Point: {}", format_vec3(sample.position))?;
            writeln!(out, "Derivative: {}", format_vec3(sample.velocity))?;
            writeln!(out)?;
        }

        writeln!(out, "Sorted circles by radius:")?;
        for radius in &self.circle_radii {
            writeln!(out, "Radius: {}", format_general(*radius))?;
        }
        writeln!(out, "Sum of radius: {}", format_general(self.circle_radius_sum))?;
        Ok(())
    }
}

/// Generate the report for `config` and write it to `out`.
pub fn run<W: Write>(config: &ReportConfig, out: &mut W) -> Result<()> {
    Report::generate(config)?.write_to(out)
}
