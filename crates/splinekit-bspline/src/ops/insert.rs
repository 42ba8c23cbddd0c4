//! Knot insertion with Boehm's algorithm.

use splinekit_core::error::{Result, SplineError};
use splinekit_core::Tolerance;

use crate::curve::{reserve_buffer, BSplineCurve};

impl BSplineCurve {
    /// Insert the knot `u` into the curve `n` times.
    ///
    /// Returns a new curve with `n` additional control points tracing the
    /// same shape as `self`. The new points are read off the de Boor
    /// pyramid at `u`: the first points of the outermost `n` rows replace
    /// the left side of the affected range, the row `n` entries form the
    /// middle, and the last points of the same rows (walked back outward)
    /// the right side. Fails with `MultiplicityExceeded` if `u` would end
    /// up with multiplicity above the curve order.
    pub fn insert_knot(&self, u: f64, n: usize, tol: Tolerance) -> Result<BSplineCurve> {
        let net = self.evaluate(u, tol)?;
        let order = self.order();
        if net.s() + n > order {
            return Err(SplineError::MultiplicityExceeded {
                multiplicity: net.s() + n,
                order,
            });
        }

        let deg = self.deg;
        let dim = self.dim;
        let k = net.k();
        let affected = net.n_affected();
        let fst = k - deg;

        let mut ctrlp = reserve_buffer((self.n_control_points() + n) * dim)?;
        // original control points before the affected range
        ctrlp.extend_from_slice(&self.ctrlp[..fst * dim]);
        // left pyramid diagonal, outermost row inward
        for r in 0..n {
            ctrlp.extend_from_slice(net.point(r, 0));
        }
        // the row the diagonals meet, kept whole
        if n < affected {
            let row = net.row_offset(n);
            ctrlp.extend_from_slice(&net.points()[row..row + (affected - n) * dim]);
        }
        // right pyramid diagonal, innermost row outward
        for r in (0..n).rev() {
            ctrlp.extend_from_slice(net.point(r, net.row_len(r) - 1));
        }
        // original control points after the affected range
        ctrlp.extend_from_slice(&self.ctrlp[(fst + affected) * dim..]);

        let mut knots = reserve_buffer(self.knots.len() + n)?;
        knots.extend_from_slice(&self.knots[..=k]);
        knots.extend(std::iter::repeat(u).take(n));
        knots.extend_from_slice(&self.knots[k + 1..]);

        Ok(BSplineCurve {
            deg,
            dim,
            ctrlp,
            knots,
        })
    }
}
