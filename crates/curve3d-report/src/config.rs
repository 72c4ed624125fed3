//! Report configuration.

use std::f64::consts::FRAC_PI_4;

use curve3d_core::Result;
use curve3d_geometry::{AnyCurve, Circle, Ellipse, Spiral};
use serde::{Deserialize, Serialize};

/// Unvalidated parameters for one curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CurveSpec {
    Circle { radius: f64 },
    Ellipse { semi_axis_a: f64, semi_axis_b: f64 },
    Spiral { radius: f64, height: f64 },
}

impl CurveSpec {
    pub fn build(&self) -> Result<AnyCurve> {
        Ok(match *self {
            CurveSpec::Circle { radius } => Circle::new(radius)?.into(),
            CurveSpec::Ellipse {
                semi_axis_a,
                semi_axis_b,
            } => Ellipse::new(semi_axis_a, semi_axis_b)?.into(),
            CurveSpec::Spiral { radius, height } => Spiral::new(radius, height)?.into(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Parameter value every curve is evaluated at.
    pub parameter: f64,
    /// Curves in construction order.
    pub curves: Vec<CurveSpec>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            parameter: FRAC_PI_4,
            curves: vec![
                CurveSpec::Circle { radius: 5.0 },
                CurveSpec::Ellipse {
                    semi_axis_a: 10.0,
                    semi_axis_b: 25.0,
                },
                CurveSpec::Spiral {
                    radius: 15.0,
                    height: 3.0,
                },
            ],
        }
    }
}
