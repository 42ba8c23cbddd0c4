//! splinekit B-spline curves: construction, de Boor evaluation, knot
//! insertion, splitting, Bezier decomposition, and chord blending.

pub mod curve;
pub mod deboor;
pub mod knot;
mod ops;
pub mod sequence;
pub mod tessellate;

pub use curve::BSplineCurve;
pub use deboor::{DeBoorNet, ParamLocation};
pub use knot::KnotKind;
pub use sequence::CurveSequence;
