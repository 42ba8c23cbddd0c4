//! Polyline extraction from curves by adaptive subdivision.

use splinekit_core::error::Result;

use crate::curve::BSplineCurve;

/// Maximum recursion depth for adaptive subdivision.
const MAX_DEPTH: u32 = 12;

/// Convert a curve to a polyline using adaptive subdivision.
///
/// Segments are subdivided while the curve midpoint deviates from the chord
/// midpoint by more than `max_deviation` (Euclidean distance across all
/// coordinates).
pub fn curve_to_polyline(curve: &BSplineCurve, max_deviation: f64) -> Result<Vec<Vec<f64>>> {
    let (t_min, t_max) = curve.domain();
    let mut points = Vec::new();
    points.push(curve.point_at(t_min)?);
    subdivide(curve, t_min, t_max, max_deviation, &mut points, 0)?;
    Ok(points)
}

fn subdivide(
    curve: &BSplineCurve,
    t0: f64,
    t1: f64,
    max_deviation: f64,
    points: &mut Vec<Vec<f64>>,
    depth: u32,
) -> Result<()> {
    if depth >= MAX_DEPTH {
        points.push(curve.point_at(t1)?);
        return Ok(());
    }

    let t_mid = (t0 + t1) * 0.5;
    let p0 = curve.point_at(t0)?;
    let p1 = curve.point_at(t1)?;
    let p_mid = curve.point_at(t_mid)?;

    let mut deviation_sq = 0.0;
    for d in 0..curve.dim() {
        let chord_mid = (p0[d] + p1[d]) * 0.5;
        let diff = p_mid[d] - chord_mid;
        deviation_sq += diff * diff;
    }

    if deviation_sq.sqrt() > max_deviation {
        subdivide(curve, t0, t_mid, max_deviation, points, depth + 1)?;
        subdivide(curve, t_mid, t1, max_deviation, points, depth + 1)?;
    } else {
        points.push(p1);
    }
    Ok(())
}
