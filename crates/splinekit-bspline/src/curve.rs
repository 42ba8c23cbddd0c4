//! B-spline curve entity: storage, construction, and accessors.

use serde::{Deserialize, Serialize};
use splinekit_core::error::{Result, SplineError};
use splinekit_core::traits::{BoundingBox, Validate};

use crate::knot::{self, KnotKind};

/// Allocate a zero-filled coordinate buffer, surfacing allocation failure.
pub(crate) fn alloc_buffer(len: usize) -> Result<Vec<f64>> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(len)
        .map_err(|_| SplineError::AllocationFailure)?;
    buf.resize(len, 0.0);
    Ok(buf)
}

/// Allocate an empty coordinate buffer with capacity for `len` values.
pub(crate) fn reserve_buffer(len: usize) -> Result<Vec<f64>> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(len)
        .map_err(|_| SplineError::AllocationFailure)?;
    Ok(buf)
}

/// A B-spline curve of arbitrary point dimension.
///
/// Control points are stored as one contiguous buffer of `n_ctrlp * dim`
/// coordinates, accessed through dimension-aware slices. The knot vector is
/// non-decreasing with `n_ctrlp + deg + 1` entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BSplineCurve {
    pub(crate) deg: usize,
    pub(crate) dim: usize,
    pub(crate) ctrlp: Vec<f64>,
    pub(crate) knots: Vec<f64>,
}

impl BSplineCurve {
    /// Create a curve of degree `deg` with `n_ctrlp` control points of
    /// dimension `dim`, and a knot vector filled according to `kind`.
    ///
    /// Control points start at the origin; populate them through
    /// [`control_point_mut`](Self::control_point_mut) or
    /// [`set_control_point`](Self::set_control_point).
    pub fn new(deg: usize, dim: usize, n_ctrlp: usize, kind: KnotKind) -> Result<Self> {
        if dim < 1 {
            return Err(SplineError::DimensionZero);
        }
        if deg >= n_ctrlp {
            return Err(SplineError::DegreeTooHigh {
                degree: deg,
                n_ctrlp,
            });
        }

        let n_knots = n_ctrlp + deg + 1;
        let ctrlp = alloc_buffer(n_ctrlp * dim)?;
        let mut knots = alloc_buffer(n_knots)?;
        knot::fill(&mut knots, deg, kind);

        Ok(Self {
            deg,
            dim,
            ctrlp,
            knots,
        })
    }

    /// Build a curve from an explicit coordinate buffer and knot vector,
    /// validating every structural invariant.
    pub fn from_parts(deg: usize, dim: usize, ctrlp: Vec<f64>, knots: Vec<f64>) -> Result<Self> {
        let curve = Self {
            deg,
            dim,
            ctrlp,
            knots,
        };
        curve.validate()?;
        Ok(curve)
    }

    pub fn degree(&self) -> usize {
        self.deg
    }

    pub fn order(&self) -> usize {
        self.deg + 1
    }

    pub fn dim(&self) -> usize {
        self.dim
    }

    pub fn n_control_points(&self) -> usize {
        self.ctrlp.len() / self.dim
    }

    pub fn n_knots(&self) -> usize {
        self.knots.len()
    }

    /// The flat coordinate buffer, `n_control_points * dim` values.
    pub fn control_points(&self) -> &[f64] {
        &self.ctrlp
    }

    /// Coordinates of control point `i`.
    pub fn control_point(&self, i: usize) -> &[f64] {
        &self.ctrlp[i * self.dim..(i + 1) * self.dim]
    }

    /// Mutable coordinates of control point `i`.
    pub fn control_point_mut(&mut self, i: usize) -> &mut [f64] {
        &mut self.ctrlp[i * self.dim..(i + 1) * self.dim]
    }

    /// Overwrite control point `i` with `coords` (length must be `dim`).
    pub fn set_control_point(&mut self, i: usize, coords: &[f64]) {
        self.control_point_mut(i).copy_from_slice(coords);
    }

    pub fn knots(&self) -> &[f64] {
        &self.knots
    }

    pub fn knot(&self, i: usize) -> f64 {
        self.knots[i]
    }

    /// The parameter range over which the curve is defined.
    pub fn domain(&self) -> (f64, f64) {
        (
            self.knots[self.deg],
            self.knots[self.knots.len() - self.order()],
        )
    }
}

impl Validate for BSplineCurve {
    fn validate(&self) -> Result<()> {
        if self.dim < 1 {
            return Err(SplineError::DimensionZero);
        }
        if self.ctrlp.len() % self.dim != 0 {
            return Err(SplineError::InvalidCurve(format!(
                "control point buffer length {} is not a multiple of dimension {}",
                self.ctrlp.len(),
                self.dim
            )));
        }
        let n_ctrlp = self.ctrlp.len() / self.dim;
        if self.deg >= n_ctrlp {
            return Err(SplineError::DegreeTooHigh {
                degree: self.deg,
                n_ctrlp,
            });
        }
        if self.knots.len() != n_ctrlp + self.deg + 1 {
            return Err(SplineError::InvalidCurve(format!(
                "expected {} knots, got {}",
                n_ctrlp + self.deg + 1,
                self.knots.len()
            )));
        }
        if !self.knots.windows(2).all(|w| w[0] <= w[1]) {
            return Err(SplineError::InvalidCurve(
                "knot vector is not non-decreasing".into(),
            ));
        }
        Ok(())
    }
}

impl BoundingBox for BSplineCurve {
    type Point = Vec<f64>;

    /// Axis-aligned bounds of the control points. By the convex hull
    /// property this also bounds the curve itself.
    fn bounding_box(&self) -> (Vec<f64>, Vec<f64>) {
        let mut min = vec![f64::INFINITY; self.dim];
        let mut max = vec![f64::NEG_INFINITY; self.dim];
        for point in self.ctrlp.chunks_exact(self.dim) {
            for (d, &coord) in point.iter().enumerate() {
                min[d] = min[d].min(coord);
                max[d] = max[d].max(coord);
            }
        }
        (min, max)
    }
}
