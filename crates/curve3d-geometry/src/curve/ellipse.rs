//! Ellipse curve.

use curve3d_core::{ensure_positive, DVec3, Result};
use serde::Serialize;

use super::{Curve, CurveSample};

/// An axis-aligned ellipse centered at the origin in the `z = 0` plane.
///
/// `semi_axis_a` runs along X and `semi_axis_b` along Y.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Ellipse {
    semi_axis_a: f64,
    semi_axis_b: f64,
}

impl Ellipse {
    pub fn new(semi_axis_a: f64, semi_axis_b: f64) -> Result<Self> {
        Ok(Self {
            semi_axis_a: ensure_positive("semi_axis_a", semi_axis_a)?,
            semi_axis_b: ensure_positive("semi_axis_b", semi_axis_b)?,
        })
    }

    pub fn semi_axis_a(&self) -> f64 {
        self.semi_axis_a
    }

    pub fn semi_axis_b(&self) -> f64 {
        self.semi_axis_b
    }
}

impl Curve for Ellipse {
    /// Root mean square of the two semi-axes.
    fn effective_radius(&self) -> f64 {
        let (a, b) = (self.semi_axis_a, self.semi_axis_b);
        ((a * a + b * b) / 2.0).sqrt()
    }

    fn evaluate(&self, t: f64) -> CurveSample {
        let (sin, cos) = t.sin_cos();
        let (a, b) = (self.semi_axis_a, self.semi_axis_b);
        CurveSample {
            position: DVec3::new(a * cos, b * sin, 0.0),
            velocity: DVec3::new(-a * sin, b * cos, 0.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use curve3d_core::CurveError;
    use std::f64::consts::PI;

    #[test]
    fn test_ellipse_endpoints() {
        let ellipse = Ellipse::new(2.0, 1.0).unwrap();

        let p0 = ellipse.point_at(0.0);
        assert!((p0.x - 2.0).abs() < 1e-10);
        assert!(p0.y.abs() < 1e-10);

        let p1 = ellipse.point_at(PI / 2.0);
        assert!(p1.x.abs() < 1e-10);
        assert!((p1.y - 1.0).abs() < 1e-10);

        let p2 = ellipse.point_at(PI);
        assert!((p2.x + 2.0).abs() < 1e-10);
        assert!(p2.y.abs() < 1e-10);
    }

    #[test]
    fn test_ellipse_satisfies_implicit_equation() {
        let ellipse = Ellipse::new(10.0, 25.0).unwrap();
        for i in -10..30 {
            let t = i as f64 * 0.37;
            let p = ellipse.point_at(t);
            let implicit = (p.x / 10.0).powi(2) + (p.y / 25.0).powi(2);
            assert!(
                (implicit - 1.0).abs() < 1e-10,
                "Ellipse point off curve at t={}: {}",
                t,
                implicit
            );
            assert_eq!(p.z, 0.0);
        }
    }

    #[test]
    fn test_ellipse_velocity_at_zero() {
        let s = Ellipse::new(4.0, 3.0).unwrap().evaluate(0.0);
        assert_eq!(s.velocity.x, 0.0);
        assert!((s.velocity.y - 3.0).abs() < 1e-10);
        assert_eq!(s.velocity.z, 0.0);
    }

    #[test]
    fn test_ellipse_effective_radius_is_rms() {
        let e = Ellipse::new(10.0, 25.0).unwrap();
        assert_relative_eq!(e.effective_radius(), (362.5f64).sqrt(), epsilon = 1e-12);
        assert_relative_eq!(e.effective_radius(), 19.039_4, epsilon = 1e-4);

        let swapped = Ellipse::new(25.0, 10.0).unwrap();
        assert_eq!(e.effective_radius(), swapped.effective_radius());

        let round = Ellipse::new(7.0, 7.0).unwrap();
        assert_relative_eq!(round.effective_radius(), 7.0, epsilon = 1e-12);
    }

    #[test]
    fn test_ellipse_rejects_non_positive_axes() {
        assert!(matches!(Ellipse::new(0.0, 5.0), Err(CurveError::InvalidParameter(_))));
        assert!(matches!(Ellipse::new(5.0, 0.0), Err(CurveError::InvalidParameter(_))));
        assert!(matches!(Ellipse::new(-3.0, -3.0), Err(CurveError::InvalidParameter(_))));
    }
}
