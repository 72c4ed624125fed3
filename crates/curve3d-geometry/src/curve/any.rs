//! Tagged union over the concrete curve kinds.

use std::fmt;

use serde::Serialize;

use super::{Circle, Curve, CurveSample, Ellipse, Spiral};

/// Discriminant of an [`AnyCurve`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum CurveKind {
    Circle,
    Ellipse,
    Spiral,
}

impl fmt::Display for CurveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CurveKind::Circle => "circle",
            CurveKind::Ellipse => "ellipse",
            CurveKind::Spiral => "spiral",
        };
        f.write_str(name)
    }
}

/// Any supported curve, owned by value.
///
/// Collections of heterogeneous curves hold this type so that variant
/// selection is a `match`, not a runtime type check.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AnyCurve {
    Circle(Circle),
    Ellipse(Ellipse),
    Spiral(Spiral),
}

impl AnyCurve {
    pub fn kind(&self) -> CurveKind {
        match self {
            AnyCurve::Circle(_) => CurveKind::Circle,
            AnyCurve::Ellipse(_) => CurveKind::Ellipse,
            AnyCurve::Spiral(_) => CurveKind::Spiral,
        }
    }

    pub fn as_circle(&self) -> Option<&Circle> {
        match self {
            AnyCurve::Circle(circle) => Some(circle),
            _ => None,
        }
    }

    fn as_dyn(&self) -> &dyn Curve {
        match self {
            AnyCurve::Circle(c) => c,
            AnyCurve::Ellipse(e) => e,
            AnyCurve::Spiral(s) => s,
        }
    }
}

impl Curve for AnyCurve {
    fn effective_radius(&self) -> f64 {
        self.as_dyn().effective_radius()
    }

    fn evaluate(&self, t: f64) -> CurveSample {
        self.as_dyn().evaluate(t)
    }
}

impl From<Circle> for AnyCurve {
    fn from(c: Circle) -> Self {
        AnyCurve::Circle(c)
    }
}

impl From<Ellipse> for AnyCurve {
    fn from(e: Ellipse) -> Self {
        AnyCurve::Ellipse(e)
    }
}

impl From<Spiral> for AnyCurve {
    fn from(s: Spiral) -> Self {
        AnyCurve::Spiral(s)
    }
}
