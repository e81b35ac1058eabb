use difftab::interpolation::config::{SpacingMode, SpacingRule};
use difftab::interpolation::errors::InterpolationError;
use difftab::interpolation::preprocess::{validate, validate_with};
use difftab::point::{zip_points, Point};

type DiffResult = Result<(), InterpolationError>;

#[test]
fn duplicate_abscissa_rejected() {
    let pts = [Point::new(1.0, 2.0), Point::new(1.0, 5.0)];
    let err = validate(&pts).unwrap_err();
    assert_eq!(err, InterpolationError::DuplicateAbscissa { x: 1.0 });
}

#[test]
fn unequal_gaps_reported_not_raised() -> DiffResult {
    let pts = zip_points(&[0.0, 1.0, 3.0], &[1.0, 2.0, 4.0]);
    let prep = validate(&pts)?;
    assert!(!prep.equally_spaced);
    assert_eq!(prep.step_size, 1.0);
    assert_eq!(prep.max_deviation, 1.0);
    Ok(())
}

#[test]
fn unequal_gaps_refused_on_demand() -> DiffResult {
    let pts = zip_points(&[0.0, 1.0, 3.0], &[1.0, 2.0, 4.0]);
    let prep = validate(&pts)?;
    let err = prep.require_equal_spacing(SpacingRule::default()).unwrap_err();
    assert!(matches!(err, InterpolationError::UnequalSpacing { max_deviation, tol }
        if max_deviation == 1.0 && tol == 1e-4));
    Ok(())
}

#[test]
fn too_few_points() {
    let err = validate(&[Point::new(0.0, 1.0)]).unwrap_err();
    assert_eq!(err, InterpolationError::InsufficientData { got: 1, need: 2 });

    let err = validate(&[]).unwrap_err();
    assert_eq!(err, InterpolationError::InsufficientData { got: 0, need: 2 });
}

#[test]
fn non_finite_values_rejected() {
    let pts = zip_points(&[0.0, 1.0, 2.0], &[1.0, f64::NAN, 3.0]);
    assert_eq!(validate(&pts).unwrap_err(), InterpolationError::NonFiniteValue { idx: 1 });

    let pts = zip_points(&[0.0, f64::INFINITY], &[1.0, 2.0]);
    assert_eq!(validate(&pts).unwrap_err(), InterpolationError::NonFiniteValue { idx: 1 });
}

#[test]
fn sorts_ascending() -> DiffResult {
    let pts = zip_points(&[2.0, 0.0, 1.0], &[4.0, 0.0, 1.0]);
    let prep = validate(&pts)?;
    let xs: Vec<f64> = prep.points.iter().map(|p| p.x).collect();
    let ys: Vec<f64> = prep.points.iter().map(|p| p.y).collect();
    assert_eq!(xs, vec![0.0, 1.0, 2.0]);
    assert_eq!(ys, vec![0.0, 1.0, 4.0]);
    assert!(prep.equally_spaced);
    assert_eq!(prep.x_range(), (0.0, 2.0));
    Ok(())
}

#[test]
fn gap_within_tolerance_counts_as_equal() -> DiffResult {
    let pts = zip_points(&[0.0, 1.0, 2.00005], &[0.0, 1.0, 2.0]);
    assert!(validate(&pts)?.equally_spaced);

    let pts = zip_points(&[0.0, 1.0, 2.001], &[0.0, 1.0, 2.0]);
    assert!(!validate(&pts)?.equally_spaced);
    Ok(())
}

#[test]
fn duplicate_detected_after_sorting() {
    let pts = zip_points(&[3.0, 1.0, 2.0, 1.0], &[0.0, 0.0, 0.0, 0.0]);
    assert_eq!(validate(&pts).unwrap_err(), InterpolationError::DuplicateAbscissa { x: 1.0 });
}

#[test]
fn relative_spacing_scales_with_step() -> DiffResult {
    let pts = zip_points(&[0.0, 1000.0, 2000.2], &[1.0, 2.0, 3.0]);
    assert!(!validate(&pts)?.equally_spaced);

    let rule = SpacingRule::new(1e-3, SpacingMode::Relative);
    let prep = validate_with(&pts, rule)?;
    assert!(prep.equally_spaced);
    assert_eq!(prep.step_size, 1000.0);
    Ok(())
}

#[test]
fn duplicates_need_exact_equality() -> DiffResult {
    let pts = zip_points(&[0.0, 1e-13, 1.0], &[1.0, 2.0, 3.0]);
    let prep = validate(&pts)?;
    assert_eq!(prep.points.len(), 3);
    assert!(!prep.equally_spaced);

    let signed_zero = [Point::new(-0.0, 1.0), Point::new(0.0, 2.0)];
    let err = validate(&signed_zero).unwrap_err();
    assert!(matches!(err, InterpolationError::DuplicateAbscissa { x } if x == 0.0));
    Ok(())
}
