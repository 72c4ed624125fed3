pub mod error;
pub mod validate;

pub use glam::DVec3;

pub use error::{CurveError, Result};
pub use validate::ensure_positive;

pub type Point3 = DVec3;
pub type Vector3 = DVec3;
