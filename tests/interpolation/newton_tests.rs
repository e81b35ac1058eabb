use approx::assert_abs_diff_eq;
use difftab::interpolation::newton_backward::NewtonBackward;
use difftab::interpolation::newton_forward::NewtonForward;
use difftab::interpolation::traits::Formula;
use difftab::interpolation::Method;
use difftab::point::{zip_points, Point};

fn squares() -> Vec<Point> {
    zip_points(&[0.0, 1.0, 2.0, 3.0, 4.0], &[0.0, 1.0, 4.0, 9.0, 16.0])
}

#[test]
fn forward_reproduces_quadratic() {
    let rep = NewtonForward.evaluate(&squares(), 2.5);
    assert_eq!(rep.method, Method::NewtonForward);
    assert_eq!(rep.method_name, "newton_forward");
    assert_abs_diff_eq!(rep.value, 6.25, epsilon = 1e-9);
    assert_eq!(rep.parameter, 2.5);
    assert_eq!(rep.reference_index, 0);
    assert_eq!(rep.orders_used(), vec![1, 2, 3, 4]);
    assert_eq!(rep.terms_used, 4);
}

#[test]
fn forward_term_values_in_trace() {
    let rep = NewtonForward.evaluate(&squares(), 2.5);
    let terms: Vec<f64> = rep
        .steps
        .iter()
        .filter(|s| s.order.is_some())
        .filter_map(|s| s.numeric_value)
        .collect();
    assert_eq!(terms, vec![2.5, 3.75, 0.0, 0.0]);

    let second = rep.steps.iter().find(|s| s.order == Some(2)).unwrap();
    let text = second.formula.as_deref().unwrap();
    assert!(text.starts_with("u(u−1)/2! · Δ²y₀"), "{text}");
}

#[test]
fn forward_trace_brackets_the_result() {
    let rep = NewtonForward.evaluate(&squares(), 1.5);
    let first = rep.steps.first().unwrap();
    assert!(first.table_snapshot.is_some());
    let last = rep.steps.last().unwrap();
    assert_eq!(last.numeric_value, Some(rep.value));
    assert!(rep.computation_time_ms >= 0.0);
}

#[test]
fn forward_at_first_node() {
    let rep = NewtonForward.evaluate(&squares(), 0.0);
    assert_eq!(rep.value, 0.0);
    assert!(rep.warning.is_none());
}

#[test]
fn forward_warns_past_the_middle() {
    let rep = NewtonForward.evaluate(&squares(), 2.5);
    let w = rep.warning.unwrap();
    assert!(w.contains("second half"), "{w}");
}

#[test]
fn forward_extrapolation_warns() {
    let rep = NewtonForward.evaluate(&squares(), 5.0);
    assert_abs_diff_eq!(rep.value, 25.0, epsilon = 1e-9);
    let w = rep.warning.unwrap();
    assert!(w.contains("extrapolation"), "{w}");
}

#[test]
fn forward_two_points_is_linear() {
    let pts = zip_points(&[0.0, 2.0], &[1.0, 5.0]);
    let rep = NewtonForward.evaluate(&pts, 1.0);
    assert_abs_diff_eq!(rep.value, 3.0, epsilon = 1e-12);
    assert_eq!(rep.terms_used, 1);
}

#[test]
fn backward_reproduces_quadratic() {
    let rep = NewtonBackward.evaluate(&squares(), 3.5);
    assert_abs_diff_eq!(rep.value, 12.25, epsilon = 1e-9);
    assert_eq!(rep.reference_index, 4);
    assert_eq!(rep.parameter, -0.5);
    assert!(rep.warning.is_none());
}

#[test]
fn backward_reads_last_row() {
    let rep = NewtonBackward.evaluate(&squares(), 3.5);
    let second = rep.steps.iter().find(|s| s.order == Some(2)).unwrap();
    let text = second.formula.as_deref().unwrap();
    assert!(text.contains("∇²y₄"), "{text}");
    assert_eq!(second.numeric_value, Some(-0.25));
}

#[test]
fn backward_warns_near_the_start() {
    let rep = NewtonBackward.evaluate(&squares(), 0.5);
    assert_abs_diff_eq!(rep.value, 0.25, epsilon = 1e-9);
    let w = rep.warning.unwrap();
    assert!(w.contains("first half"), "{w}");
}

#[test]
fn forward_trace_states_step_and_parameter() {
    let pts = zip_points(&[1.0, 1.5, 2.0], &[1.0, 2.25, 4.0]);
    let rep = NewtonForward.evaluate(&pts, 1.25);

    let step = rep.steps.iter().find(|s| s.description.starts_with("Step size")).unwrap();
    assert_eq!(step.numeric_value, Some(0.5));
    assert_eq!(step.formula.as_deref(), Some("h = x₁ − x₀ = 1.5 − 1 = 0.5"));

    let param = rep.steps.iter().find(|s| s.description == "Parameter u").unwrap();
    assert_eq!(param.formula.as_deref(), Some("u = (x − x₀) / h = (1.25 − 1) / 0.5 = 0.5"));
}
