use difftab::differences::table::{build_backward, build_central, build_forward, difference_rows, TableKind};
use difftab::point::zip_points;

fn wobbly() -> Vec<difftab::point::Point> {
    zip_points(
        &[0.0, 0.5, 1.0, 1.5, 2.0, 2.5],
        &[1.0, 1.7, 1.2, 3.9, 2.6, 4.4],
    )
}

#[test]
fn order_zero_is_the_input() {
    let pts = wobbly();
    let t = build_forward(&pts);
    let y: Vec<f64> = pts.iter().map(|p| p.y).collect();
    assert_eq!(t.order_values(0), y.as_slice());
    assert_eq!(t.n_points(), 6);
    assert_eq!(t.kind(), TableKind::Forward);
}

#[test]
fn forward_and_backward_agree() {
    let pts = wobbly();
    let fwd = build_forward(&pts);
    let bwd = build_backward(&pts);
    let n = pts.len();
    for k in 0..n {
        for i in 0..n - k {
            assert_eq!(fwd.get(k, i), bwd.get(k, i + k), "k={k}, i={i}");
            assert!(fwd.get(k, i).is_some());
        }
    }
}

#[test]
fn two_points_single_difference() {
    let pts = zip_points(&[0.0, 1.0], &[2.0, 7.0]);
    assert_eq!(build_forward(&pts).get(1, 0), Some(5.0));
    assert_eq!(build_backward(&pts).get(1, 1), Some(5.0));
}

#[test]
fn central_matches_forward_numerically() {
    let pts = wobbly();
    let fwd = build_forward(&pts);
    let cen = build_central(&pts);
    assert_eq!(cen.kind(), TableKind::Central);
    for k in 0..pts.len() {
        assert_eq!(fwd.order_values(k), cen.order_values(k));
        assert_eq!(fwd.positions(k), cen.positions(k));
    }
}

#[test]
fn absent_entries_are_none_not_zero() {
    let pts = wobbly();
    let fwd = build_forward(&pts);
    let bwd = build_backward(&pts);

    assert_eq!(fwd.get(3, 3), None);
    assert_eq!(fwd.get(6, 0), None);
    assert_eq!(bwd.get(3, 2), None);
    assert_eq!(bwd.get(3, 3), fwd.get(3, 0));
    assert_eq!(fwd.get_rel(2, 1, -2), None);
    assert_eq!(fwd.get_rel(2, 2, -2), fwd.get(2, 0));
}

#[test]
fn raw_rows_shape() {
    let rows = difference_rows(&[1.0, 4.0, 9.0, 16.0]);
    let lens: Vec<usize> = rows.iter().map(Vec::len).collect();
    assert_eq!(lens, vec![4, 3, 2, 1]);
    assert_eq!(rows[1], vec![3.0, 5.0, 7.0]);
    assert_eq!(rows[3], vec![0.0]);
    assert!(difference_rows(&[]).is_empty());
}
