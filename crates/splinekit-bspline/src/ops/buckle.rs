//! Chord blending ("buckling") of control points.

use crate::curve::BSplineCurve;

impl BSplineCurve {
    /// Blend the control points toward the chord between the first and last
    /// control point.
    ///
    /// Control point `i` of `N` becomes `b * P_i + (1-b) * L(i)`, where
    /// `L(i)` is the point at fraction `i / (N-1)` along the chord.
    /// `b = 1` returns an unchanged copy; `b = 0` collapses every control
    /// point onto the chord. The input curve is never mutated.
    pub fn buckle(&self, b: f64) -> BSplineCurve {
        let mut out = self.clone();
        let dim = out.dim;
        let n = out.n_control_points();
        if n < 2 {
            return out;
        }

        let b_hat = 1.0 - b;
        let denom = (n - 1) as f64;
        let first = self.control_point(0).to_vec();
        let last = self.control_point(n - 1).to_vec();

        for i in 0..n {
            let w = i as f64 / denom;
            let point = out.control_point_mut(i);
            for d in 0..dim {
                point[d] = b * point[d] + b_hat * (first[d] + w * (last[d] - first[d]));
            }
        }
        out
    }
}
