use difftab::differences::annotated::{
    build_backward_annotated, build_central_annotated, build_forward_annotated, AnnotatedTable,
    DEFAULT_DISPLAY_DECIMALS,
};
use difftab::differences::table::build_forward;
use difftab::point::zip_points;

fn cubes() -> Vec<difftab::point::Point> {
    zip_points(&[1.0, 2.0, 3.0, 4.0], &[1.0, 8.0, 27.0, 64.0])
}

#[test]
fn forward_headers_and_cells() {
    let t = build_forward_annotated(&cubes(), 6);
    assert_eq!(t.headers(), &["x", "y", "Δy", "Δ²y", "Δ³y"]);
    assert_eq!(t.n_rows(), 4);
    assert_eq!(t.cell(0, 3), Some(6.0));
    assert_eq!(t.cell(1, 3), None);
    assert_eq!(t.cell_text(1, 3), "");
    assert_eq!(t.cell_text(2, 1), "37");
}

#[test]
fn backward_cells_align_to_the_bottom() {
    let t = build_backward_annotated(&cubes(), 6);
    assert_eq!(t.headers()[2], "∇y");
    assert_eq!(t.cell(0, 1), None);
    assert_eq!(t.cell(3, 1), Some(37.0));
    assert_eq!(t.cell(3, 3), Some(6.0));
    assert_eq!(t.records()[0], vec!["1", "1", "", "", ""]);
}

#[test]
fn central_uses_delta_labels() {
    let t = build_central_annotated(&cubes(), 6);
    assert_eq!(t.headers()[3], "δ²y");
}

#[test]
fn rounding_applies_to_display_only() {
    let pts = zip_points(&[0.0, 1.0], &[0.0, 1.0 / 3.0]);
    let t = build_forward_annotated(&pts, 4);
    assert_eq!(t.cell_text(0, 1), "0.3333");
    assert_eq!(t.cell(0, 1), Some(1.0 / 3.0));
}

#[test]
fn renders_as_a_table() {
    let out = build_forward_annotated(&cubes(), 6).to_string();
    assert!(out.contains("Δ³y"));
    assert!(out.contains("64"));
    assert!(out.lines().count() >= 6);
}

#[test]
fn default_decimals() {
    let pts = zip_points(&[0.0, 1.0], &[0.0, 1.0 / 3.0]);
    let t = AnnotatedTable::with_default_decimals(&build_forward(&pts), &pts);
    assert_eq!(DEFAULT_DISPLAY_DECIMALS, 6);
    assert_eq!(t.cell_text(0, 1), "0.333333");
    assert_eq!(t, build_forward_annotated(&pts, DEFAULT_DISPLAY_DECIMALS));
}
