//! Decomposition into Bezier segments.

use splinekit_core::error::Result;
use splinekit_core::Tolerance;

use crate::curve::BSplineCurve;
use crate::ops::SplitOutcome;
use crate::sequence::CurveSequence;

impl BSplineCurve {
    /// Decompose the curve into a sequence of Bezier segments by raising
    /// every interior breakpoint to full multiplicity.
    ///
    /// Each iteration splits the remaining tail at the tail's own first
    /// interior knot (`knot(order)`); the left piece is collected and the
    /// right piece becomes the new tail. When the cut lands on a domain end
    /// there is nothing left to split and the tail itself is the final
    /// segment. A clamped curve with `j` distinct interior knots yields
    /// `j + 1` segments of `order` control points each, with adjacent
    /// segments sharing their boundary point.
    pub fn to_beziers(&self, tol: Tolerance) -> Result<CurveSequence> {
        let mut segments = Vec::new();
        let mut tail = self.clone();
        loop {
            let u = tail.knot(tail.order());
            match tail.split_at(u, tol)? {
                SplitOutcome::Whole(curve, _) => {
                    segments.push(curve);
                    break;
                }
                SplitOutcome::Pieces(left, right, _) => {
                    segments.push(left);
                    tail = right;
                }
            }
        }
        Ok(CurveSequence::from(segments))
    }
}
