//! Curve operations: knot insertion, splitting, Bezier decomposition, and
//! chord blending. Each operation produces fresh curves; inputs are never
//! mutated.

mod buckle;
mod decompose;
mod insert;
mod split;

pub(crate) use split::SplitOutcome;
