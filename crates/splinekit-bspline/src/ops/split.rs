//! Splitting a curve at a parameter.

use splinekit_core::error::Result;
use splinekit_core::Tolerance;

use crate::curve::{reserve_buffer, BSplineCurve};
use crate::deboor::ParamLocation;
use crate::sequence::CurveSequence;

/// Internal split result, before packing into a sequence.
pub(crate) enum SplitOutcome {
    /// The cut fell on a domain end; the curve stays whole.
    Whole(BSplineCurve, ParamLocation),
    /// Left and right pieces of a genuine cut.
    Pieces(BSplineCurve, BSplineCurve, ParamLocation),
}

impl BSplineCurve {
    /// Split the curve at parameter `u`.
    ///
    /// Returns the resulting pieces together with where `u` fell:
    /// `General` and `Boundary` yield two pieces; `LeftBoundary` and
    /// `RightBoundary` mean the cut coincides with a domain end, so the
    /// sequence holds a single exact copy of the input.
    pub fn split(&self, u: f64, tol: Tolerance) -> Result<(CurveSequence, ParamLocation)> {
        Ok(match self.split_at(u, tol)? {
            SplitOutcome::Whole(curve, location) => (CurveSequence::from(vec![curve]), location),
            SplitOutcome::Pieces(left, right, location) => {
                (CurveSequence::from(vec![left, right]), location)
            }
        })
    }

    pub(crate) fn split_at(&self, u: f64, tol: Tolerance) -> Result<SplitOutcome> {
        let net = self.evaluate(u, tol)?;

        let deg = self.deg;
        let order = deg + 1;
        let dim = self.dim;
        let n_knots = self.knots.len();

        // A cut at either end of the defined domain leaves the curve whole.
        // This also maps the opened-curve domain ends, which evaluate as
        // General, onto the clamped boundary outcomes.
        let at_start = tol.equals(self.knots[deg], u);
        let at_end = tol.equals(self.knots[n_knots - order], u);
        if at_start || at_end || !matches!(net.location(), ParamLocation::General | ParamLocation::Boundary) {
            let location = if at_start {
                ParamLocation::LeftBoundary
            } else if at_end {
                ParamLocation::RightBoundary
            } else {
                net.location()
            };
            return Ok(SplitOutcome::Whole(self.clone(), location));
        }

        let k = net.k();
        let s = net.s();
        let cut = k - s + 1; // first control point / knot index right of the cut

        let (left, right) = if net.location() == ParamLocation::General {
            // Raise u to full multiplicity: each piece takes its side of the
            // original control points plus one pyramid diagonal, and its
            // slice of the knot vector with `order` copies of u at the cut.
            let affected = net.n_affected();
            let fst = k - deg;

            let n_left = fst + affected;
            let mut ctrlp = reserve_buffer(n_left * dim)?;
            ctrlp.extend_from_slice(&self.ctrlp[..fst * dim]);
            for r in 0..affected {
                ctrlp.extend_from_slice(net.point(r, 0));
            }
            let mut knots = reserve_buffer(cut + order)?;
            knots.extend_from_slice(&self.knots[..cut]);
            knots.extend(std::iter::repeat(u).take(order));
            let left = BSplineCurve {
                deg,
                dim,
                ctrlp,
                knots,
            };

            let n_right = self.n_control_points() - cut + affected;
            let mut ctrlp = reserve_buffer(n_right * dim)?;
            for r in (0..affected).rev() {
                ctrlp.extend_from_slice(net.point(r, net.row_len(r) - 1));
            }
            ctrlp.extend_from_slice(&self.ctrlp[cut * dim..]);
            let mut knots = reserve_buffer(order + n_knots - (k + 1))?;
            knots.extend(std::iter::repeat(u).take(order));
            knots.extend_from_slice(&self.knots[k + 1..]);
            let right = BSplineCurve {
                deg,
                dim,
                ctrlp,
                knots,
            };

            (left, right)
        } else {
            // u already has full multiplicity strictly inside the domain:
            // cut between the two adjacent control points, no insertion.
            let left = BSplineCurve {
                deg,
                dim,
                ctrlp: self.ctrlp[..cut * dim].to_vec(),
                knots: self.knots[..cut + order].to_vec(),
            };
            let n_right_knots = self.n_control_points() - cut + order;
            let right = BSplineCurve {
                deg,
                dim,
                ctrlp: self.ctrlp[cut * dim..].to_vec(),
                knots: self.knots[n_knots - n_right_knots..].to_vec(),
            };
            (left, right)
        };

        Ok(SplitOutcome::Pieces(left, right, net.location()))
    }
}
