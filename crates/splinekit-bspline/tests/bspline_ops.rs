use approx::assert_abs_diff_eq;
use splinekit_bspline::{BSplineCurve, KnotKind, ParamLocation};
use splinekit_core::{SplineError, Tolerance};

fn convex_arc() -> BSplineCurve {
    // Degree 2, dim 2, 5 control points forming a simple convex shape
    let mut curve = BSplineCurve::new(2, 2, 5, KnotKind::Clamped).unwrap();
    let points = [
        [0.0, 0.0],
        [1.0, 2.0],
        [3.0, 3.0],
        [5.0, 2.0],
        [6.0, 0.0],
    ];
    for (i, p) in points.iter().enumerate() {
        curve.set_control_point(i, p);
    }
    curve
}

#[test]
fn clamped_knot_vector_follows_constructor_rule() {
    let curve = convex_arc();
    let knots = curve.knots();
    assert_eq!(knots.len(), 8);

    // Boundary runs of `order` repeated values
    assert_eq!(&knots[..3], &[0.0, 0.0, 0.0]);
    assert_eq!(&knots[5..], &[1.0, 1.0, 1.0]);

    // Interior knots uniformly spaced by the constructor's rule:
    // numerator / (n_knots - 2*deg - 1)
    let denom = (knots.len() - 2 * curve.degree() - 1) as f64;
    assert_eq!(knots[3], 1.0 / denom);
    assert_eq!(knots[4], 2.0 / denom);

    assert!(knots.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn opened_knot_vector_is_fully_uniform() {
    let curve = BSplineCurve::new(3, 2, 7, KnotKind::Opened).unwrap();
    let n_knots = curve.n_knots();
    for i in 0..n_knots {
        assert_eq!(curve.knot(i), i as f64 / (n_knots - 1) as f64);
    }
}

#[test]
fn clamped_curve_interpolates_endpoints() {
    let curve = convex_arc();
    let start = curve.point_at(0.0).unwrap();
    let end = curve.point_at(1.0).unwrap();
    assert_abs_diff_eq!(start[0], 0.0, epsilon = 1e-12);
    assert_abs_diff_eq!(start[1], 0.0, epsilon = 1e-12);
    assert_abs_diff_eq!(end[0], 6.0, epsilon = 1e-12);
    assert_abs_diff_eq!(end[1], 0.0, epsilon = 1e-12);
}

#[test]
fn opened_curve_rejects_parameters_outside_support() {
    let curve = BSplineCurve::new(2, 2, 5, KnotKind::Opened).unwrap();
    let (t_min, t_max) = curve.domain();
    assert!(t_min > 0.0 && t_max < 1.0);

    assert!(matches!(
        curve.evaluate(0.0, Tolerance::default()),
        Err(SplineError::ParameterUndefined(_))
    ));
    assert!(matches!(
        curve.evaluate(1.0, Tolerance::default()),
        Err(SplineError::ParameterUndefined(_))
    ));
    // Inside the support everything is fine
    assert!(curve.evaluate((t_min + t_max) * 0.5, Tolerance::default()).is_ok());
}

#[test]
fn knot_insertion_preserves_evaluation() {
    let curve = convex_arc();
    let refined = curve.insert_knot(0.42, 1, Tolerance::default()).unwrap();
    let twice = refined.insert_knot(0.1, 2, Tolerance::default()).unwrap();

    for i in 0..=20 {
        let u = i as f64 / 20.0;
        let a = curve.point_at(u).unwrap();
        let b = refined.point_at(u).unwrap();
        let c = twice.point_at(u).unwrap();
        for d in 0..2 {
            assert_abs_diff_eq!(a[d], b[d], epsilon = 1e-10);
            assert_abs_diff_eq!(a[d], c[d], epsilon = 1e-10);
        }
    }
}

#[test]
fn split_pieces_meet_the_original_at_the_cut() {
    let curve = convex_arc();
    let u = 0.37;
    let expected = curve.point_at(u).unwrap();

    let (pieces, location) = curve.split(u, Tolerance::default()).unwrap();
    assert_eq!(location, ParamLocation::General);
    assert_eq!(pieces.len(), 2);

    let left_end = pieces[0].point_at(pieces[0].domain().1).unwrap();
    let right_start = pieces[1].point_at(pieces[1].domain().0).unwrap();
    for d in 0..2 {
        assert_abs_diff_eq!(left_end[d], expected[d], epsilon = 1e-10);
        assert_abs_diff_eq!(right_start[d], expected[d], epsilon = 1e-10);
    }
}

#[test]
fn split_at_domain_end_returns_single_copy() {
    let curve = convex_arc();
    let (pieces, location) = curve.split(0.0, Tolerance::default()).unwrap();
    assert_eq!(location, ParamLocation::LeftBoundary);
    assert_eq!(pieces.len(), 1);
    assert_eq!(pieces[0], curve);
}

#[test]
fn decomposition_yields_clamped_bezier_segments() {
    let curve = convex_arc();
    let order = curve.order();
    let interior = curve.n_knots() - 2 * order;

    let segments = curve.to_beziers(Tolerance::default()).unwrap();
    assert_eq!(segments.len(), interior + 1);

    for segment in segments.iter() {
        assert_eq!(segment.n_control_points(), order);
        let knots = segment.knots();
        // Full multiplicity at both ends of every segment
        assert_eq!(knots[0], knots[order - 1]);
        assert_eq!(knots[order], knots[2 * order - 1]);
    }

    for pair in segments.as_slice().windows(2) {
        let end = pair[0].control_point(order - 1);
        let start = pair[1].control_point(0);
        for d in 0..2 {
            assert_abs_diff_eq!(end[d], start[d], epsilon = 1e-10);
        }
    }
}

#[test]
fn decomposition_reproduces_the_curve() {
    let curve = convex_arc();
    let segments = curve.to_beziers(Tolerance::default()).unwrap();
    for i in 1..=19 {
        let u = i as f64 / 20.0;
        let expected = curve.point_at(u).unwrap();
        let segment = segments
            .iter()
            .find(|c| {
                let (lo, hi) = c.domain();
                lo <= u && u <= hi
            })
            .unwrap();
        let got = segment.point_at(u).unwrap();
        for d in 0..2 {
            assert_abs_diff_eq!(expected[d], got[d], epsilon = 1e-10);
        }
    }
}

#[test]
fn buckle_extremes_behave() {
    let curve = convex_arc();

    let same = curve.buckle(1.0);
    assert_eq!(same, curve);

    let flat = curve.buckle(0.0);
    let n = flat.n_control_points();
    let first = curve.control_point(0).to_vec();
    let last = curve.control_point(n - 1).to_vec();
    for i in 0..n {
        let w = i as f64 / (n - 1) as f64;
        let p = flat.control_point(i);
        for d in 0..2 {
            assert_abs_diff_eq!(p[d], first[d] + w * (last[d] - first[d]), epsilon = 1e-12);
        }
    }
}

#[test]
fn copy_of_copy_is_bit_identical() {
    let curve = convex_arc();
    let once = curve.clone();
    let twice = once.clone();
    assert_eq!(once.control_points(), twice.control_points());
    assert_eq!(once.knots(), twice.knots());
    assert_eq!(once, twice);
}

#[test]
fn tolerance_override_changes_multiplicity_detection() {
    let curve = convex_arc();
    // Slightly off the interior knot 1/3: with the default tolerance this is
    // a plain interior parameter, with a loose one it counts as the knot.
    let u = 1.0 / 3.0 + 1e-7;

    let strict = curve.evaluate(u, Tolerance::default()).unwrap();
    assert_eq!(strict.s(), 0);

    let loose = curve.evaluate(u, Tolerance::loose()).unwrap();
    assert_eq!(loose.s(), 1);
}
