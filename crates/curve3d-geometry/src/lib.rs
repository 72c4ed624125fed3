//! Curve3D geometry: parametric curves sharing one evaluation contract.

pub mod curve;

pub use curve::{AnyCurve, Circle, Curve, CurveKind, CurveSample, Ellipse, Spiral};
