//! Knot vector construction and tolerant span location.

use serde::{Deserialize, Serialize};
use splinekit_core::Tolerance;

/// Initial knot-vector layout requested from the curve constructor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum KnotKind {
    /// Fully uniform spacing over `[0, 1]`.
    Opened,
    /// Runs of `order` repeated 0s/1s at the boundaries, uniform interior.
    Clamped,
}

/// Fill `knots` in place according to `kind`.
///
/// The slice length must already be `n_ctrlp + deg + 1`.
pub(crate) fn fill(knots: &mut [f64], deg: usize, kind: KnotKind) {
    let n_knots = knots.len();
    match kind {
        KnotKind::Opened => {
            let denom = (n_knots - 1) as f64;
            for (i, knot) in knots.iter_mut().enumerate() {
                *knot = i as f64 / denom;
            }
        }
        KnotKind::Clamped => {
            let order = deg + 1;
            let denom = (n_knots - 2 * deg - 1) as f64;
            for (i, knot) in knots.iter_mut().enumerate() {
                *knot = if i < order {
                    0.0
                } else if i < n_knots - order {
                    (i - deg) as f64 / denom
                } else {
                    1.0
                };
            }
        }
    }
}

/// Locate parameter `u` in a knot vector.
///
/// Returns `(k, s)` where `k` is the last index with `knots[k] <= u`
/// (tolerant matches included) and `s` is the multiplicity of `u`. The scan
/// stops at the first knot strictly greater than `u`; `k` is `-1` when `u`
/// lies below every knot.
pub(crate) fn locate(knots: &[f64], u: f64, tol: Tolerance) -> (isize, usize) {
    let mut k: isize = -1;
    let mut s: usize = 0;
    for &uk in knots {
        if tol.equals(u, uk) {
            s += 1;
        } else if u < uk {
            break;
        }
        k += 1;
    }
    (k, s)
}
