//! Circle curve.

use curve3d_core::{ensure_positive, DVec3, Result};
use serde::Serialize;

use super::{Curve, CurveSample};

/// A circle of radius `r` centered at the origin in the `z = 0` plane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Circle {
    radius: f64,
}

impl Circle {
    pub fn new(radius: f64) -> Result<Self> {
        Ok(Self {
            radius: ensure_positive("radius", radius)?,
        })
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }
}

impl Curve for Circle {
    fn effective_radius(&self) -> f64 {
        self.radius
    }

    fn evaluate(&self, t: f64) -> CurveSample {
        let (sin, cos) = t.sin_cos();
        CurveSample {
            position: DVec3::new(self.radius * cos, self.radius * sin, 0.0),
            velocity: DVec3::new(-self.radius * sin, self.radius * cos, 0.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use curve3d_core::CurveError;
    use std::f64::consts::PI;

    #[test]
    fn test_circle_points_on_circle() {
        let circle = Circle::new(3.0).unwrap();
        for i in -8..16 {
            let t = i as f64 * PI / 5.0;
            let p = circle.point_at(t);
            let dist = (p.x * p.x + p.y * p.y).sqrt();
            assert!(
                (dist - 3.0).abs() < 1e-10,
                "Point at t={} not on circle: dist={}",
                t,
                dist
            );
            assert_eq!(p.z, 0.0, "Point not in XY plane");
        }
    }

    #[test]
    fn test_circle_cardinal_points() {
        let circle = Circle::new(2.0).unwrap();

        let s0 = circle.evaluate(0.0);
        assert!((s0.position - DVec3::new(2.0, 0.0, 0.0)).length() < 1e-10);
        assert_eq!(s0.velocity.x, 0.0);
        assert!((s0.velocity.y - 2.0).abs() < 1e-10);

        let p1 = circle.point_at(PI / 2.0);
        assert!((p1 - DVec3::new(0.0, 2.0, 0.0)).length() < 1e-10);

        let p2 = circle.point_at(PI);
        assert!((p2 - DVec3::new(-2.0, 0.0, 0.0)).length() < 1e-10);
    }

    #[test]
    fn test_circle_velocity_perpendicular() {
        let circle = Circle::new(1.5).unwrap();
        for i in 0..8 {
            let t = i as f64 * PI / 4.0;
            let s = circle.evaluate(t);
            let dot = s.position.dot(s.velocity);
            assert!(
                dot.abs() < 1e-10,
                "Velocity not perpendicular at t={}: dot={}",
                t,
                dot
            );
            assert!((s.velocity.length() - 1.5).abs() < 1e-10);
        }
    }

    #[test]
    fn test_circle_effective_radius() {
        let circle = Circle::new(5.0).unwrap();
        assert_eq!(circle.effective_radius(), 5.0);
        assert_eq!(circle.radius(), 5.0);
    }

    #[test]
    fn test_circle_rejects_non_positive_radius() {
        assert!(matches!(Circle::new(0.0), Err(CurveError::InvalidParameter(_))));
        assert!(matches!(Circle::new(-1.0), Err(CurveError::InvalidParameter(_))));
    }
}
