//! De Boor evaluation of B-spline curves.

use splinekit_core::error::{Result, SplineError};
use splinekit_core::Tolerance;

use crate::curve::{alloc_buffer, BSplineCurve};
use crate::knot;

/// Where an evaluation (or split) parameter fell relative to the knot
/// vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamLocation {
    /// Interior parameter; the point is found by de Boor blending.
    General,
    /// Parameter pinned to the first control point, no blending.
    LeftBoundary,
    /// Parameter pinned to the last control point, no blending.
    RightBoundary,
    /// Full-multiplicity interior knot; the two adjacent control points are
    /// the left and right limits of the curve there.
    Boundary,
}

/// The de Boor net produced by evaluating a curve at a parameter.
///
/// For a `General` evaluation the point buffer holds the full triangular
/// blending table: the `n_affected` copied control points first, then each
/// blending pass as a successively shorter row, ending in the curve point.
/// Knot insertion and splitting consume the net by value and walk its rows
/// and diagonals.
#[derive(Debug, Clone)]
pub struct DeBoorNet {
    k: usize,
    s: usize,
    h: usize,
    dim: usize,
    n_affected: usize,
    last: usize,
    location: ParamLocation,
    points: Vec<f64>,
}

impl DeBoorNet {
    pub fn location(&self) -> ParamLocation {
        self.location
    }

    /// Index of the knot span containing the parameter.
    pub fn k(&self) -> usize {
        self.k
    }

    /// Multiplicity of the parameter in the knot vector.
    pub fn s(&self) -> usize {
        self.s
    }

    /// Number of blending passes performed (`deg - s`); 0 for the
    /// no-blending boundary shapes.
    pub fn h(&self) -> usize {
        self.h
    }

    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Number of control points that affect the result.
    pub fn n_affected(&self) -> usize {
        self.n_affected
    }

    pub fn n_points(&self) -> usize {
        self.points.len() / self.dim
    }

    /// The whole point buffer, outermost pyramid row first.
    pub fn points(&self) -> &[f64] {
        &self.points
    }

    /// The evaluated curve point. For `Boundary` nets this is the
    /// right-hand limit; `points()` holds both limits.
    pub fn result(&self) -> &[f64] {
        &self.points[self.last..self.last + self.dim]
    }

    /// Coordinate offset of the first point of pyramid row `r`.
    pub(crate) fn row_offset(&self, r: usize) -> usize {
        let n = self.n_affected;
        (r * (2 * n - r + 1) / 2) * self.dim
    }

    /// Number of points in pyramid row `r`.
    pub(crate) fn row_len(&self, r: usize) -> usize {
        self.n_affected - r
    }

    /// Point `i` of pyramid row `r`.
    pub(crate) fn point(&self, r: usize, i: usize) -> &[f64] {
        let start = self.row_offset(r) + i * self.dim;
        &self.points[start..start + self.dim]
    }
}

impl BSplineCurve {
    /// Evaluate the curve at parameter `u` with de Boor's algorithm.
    ///
    /// The tolerant comparator decides how many knots `u` coincides with;
    /// that multiplicity selects between blending (`General`), the pinned
    /// boundary shapes, and the discontinuous `Boundary` case.
    pub fn evaluate(&self, u: f64, tol: Tolerance) -> Result<DeBoorNet> {
        let deg = self.deg;
        let order = deg + 1;
        let dim = self.dim;
        let n_ctrlp = self.n_control_points() as isize;

        let (k, s) = knot::locate(&self.knots, u, tol);

        if s > order {
            return Err(SplineError::MultiplicityExceeded {
                multiplicity: s,
                order,
            });
        }

        if s == order {
            // No blending: u sits on a knot of full multiplicity. Take the
            // control points k-s and k-s+1; drop whichever does not exist.
            let fst = k - s as isize;
            let snd = fst + 1;
            if fst < 0 || snd >= n_ctrlp {
                let (idx, location) = if fst < 0 {
                    (0, ParamLocation::LeftBoundary)
                } else {
                    (fst as usize, ParamLocation::RightBoundary)
                };
                let mut points = alloc_buffer(dim)?;
                points.copy_from_slice(self.control_point(idx));
                return Ok(DeBoorNet {
                    k: k as usize,
                    s,
                    h: 0,
                    dim,
                    n_affected: 1,
                    last: 0,
                    location,
                    points,
                });
            }
            let fst = fst as usize;
            let mut points = alloc_buffer(2 * dim)?;
            points.copy_from_slice(&self.ctrlp[fst * dim..(fst + 2) * dim]);
            return Ok(DeBoorNet {
                k: k as usize,
                s,
                h: 0,
                dim,
                n_affected: 2,
                last: dim,
                location: ParamLocation::Boundary,
                points,
            });
        }

        // General case: h = deg - s blending passes over the affected
        // control points [k-deg, k-s].
        let fst = k - deg as isize;
        let lst = k - s as isize;
        if fst < 0 || lst >= n_ctrlp {
            return Err(SplineError::ParameterUndefined(u));
        }
        let (fst, lst) = (fst as usize, lst as usize);
        let k = k as usize;

        let n_affected = lst - fst + 1;
        let h = deg - s;
        let n_points = n_affected * (n_affected + 1) / 2;

        let mut points = alloc_buffer(n_points * dim)?;
        points[..n_affected * dim].copy_from_slice(&self.ctrlp[fst * dim..(lst + 1) * dim]);

        let mut idx_l = 0;
        let mut idx_r = dim;
        let mut idx_to = n_affected * dim;
        for r in 1..=h {
            for i in (fst + r)..=lst {
                let ui = self.knots[i];
                let a = (u - ui) / (self.knots[i + deg - r + 1] - ui);
                let a_hat = 1.0 - a;
                for _ in 0..dim {
                    points[idx_to] = a_hat * points[idx_l] + a * points[idx_r];
                    idx_to += 1;
                    idx_l += 1;
                    idx_r += 1;
                }
            }
            idx_l += dim;
            idx_r += dim;
        }

        Ok(DeBoorNet {
            k,
            s,
            h,
            dim,
            n_affected,
            last: (n_points - 1) * dim,
            location: ParamLocation::General,
            points,
        })
    }

    /// Evaluate and return just the curve point, with the default
    /// tolerance.
    pub fn point_at(&self, u: f64) -> Result<Vec<f64>> {
        Ok(self.evaluate(u, Tolerance::default())?.result().to_vec())
    }
}
