//! Curve trait and implementations.

mod circle;
mod ellipse;
mod spiral;
mod any;

use curve3d_core::{Point3, Vector3};
use serde::Serialize;

pub use circle::Circle;
pub use ellipse::Ellipse;
pub use spiral::Spiral;
pub use any::{AnyCurve, CurveKind};

/// Position and first derivative of a curve at one parameter value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CurveSample {
    pub position: Point3,
    pub velocity: Vector3,
}

/// Trait for parametric curves in 3D space.
///
/// Implementors are immutable once constructed, so both operations are
/// infallible and defined for every real `t`.
pub trait Curve: Send + Sync {
    /// Scalar used to compare and aggregate curves of different kinds.
    fn effective_radius(&self) -> f64;

    /// Evaluate position and velocity at parameter `t`.
    fn evaluate(&self, t: f64) -> CurveSample;

    fn point_at(&self, t: f64) -> Point3 {
        self.evaluate(t).position
    }
}
