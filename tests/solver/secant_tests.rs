//! tests for the secant method
use approx::assert_abs_diff_eq;
use raices::solver::{secant, RunOutcome, SecantParams, SolveError};

const CUBIC: &str = "x^3 - x - 2";
const CUBIC_ROOT: f64 = 1.521_379_706_804_567_6;

fn params(x0: f64, x1: f64) -> SecantParams {
    SecantParams { x0, x1, tol: 1e-6, max_iter: 50 }
}

#[test]
fn converges_on_cubic() {
    match secant(CUBIC, &params(1.0, 2.0)) {
        RunOutcome::Converged { root, trace } => {
            assert_abs_diff_eq!(root, CUBIC_ROOT, epsilon = 1e-6);
            assert!(trace.len() < 15);
        }
        other => panic!("expected convergence, got {other:?}"),
    }
}

#[test]
fn error_is_against_the_previous_estimate_even_on_the_first_row() {
    let outcome = secant(CUBIC, &params(1.0, 2.0));
    let trace = outcome.trace();
    // f(1) = -2, f(2) = 4: x2 = 2 - 4 * (2 - 1) / (4 - (-2)) = 4/3
    assert_abs_diff_eq!(trace[0].x2, 4.0 / 3.0, epsilon = 1e-12);
    assert_abs_diff_eq!(trace[0].err, 2.0 - 4.0 / 3.0, epsilon = 1e-12);
    for row in trace {
        assert_abs_diff_eq!(row.err, (row.x2 - row.x1).abs(), epsilon = 1e-15);
    }
}

#[test]
fn rows_shift_the_guess_pair() {
    let outcome = secant(CUBIC, &params(1.0, 2.0));
    for pair in outcome.trace().windows(2) {
        assert_eq!(pair[1].x0, pair[0].x1);
        assert_eq!(pair[1].x1, pair[0].x2);
        assert_eq!(pair[1].f_x0, pair[0].f_x1);
    }
}

#[test]
fn constant_function_fails_with_zero_denominator() {
    match secant("5", &params(0.0, 1.0)) {
        RunOutcome::Failed { reason, trace } => {
            assert_eq!(reason, SolveError::ZeroDenominator { x0: 0.0, x1: 1.0 });
            assert!(trace.is_empty());
        }
        other => panic!("expected failure, got {other:?}"),
    }
}

#[test]
fn non_finite_endpoint_fails_with_empty_trace() {
    match secant("log(x)", &params(-1.0, 1.0)) {
        RunOutcome::Failed { reason, trace } => {
            assert!(matches!(
                reason,
                SolveError::NonFiniteEvaluation { x, fx } if x == -1.0 && fx.is_nan()
            ));
            assert!(trace.is_empty());
        }
        other => panic!("expected failure, got {other:?}"),
    }
}

#[test]
fn exact_zero_residual_converges_on_the_first_row() {
    // line through (0, -3) and (1, -2) hits zero at exactly x = 3
    match secant("x - 3", &params(0.0, 1.0)) {
        RunOutcome::Converged { root, trace } => {
            assert_eq!(root, 3.0);
            assert_eq!(trace.len(), 1);
        }
        other => panic!("expected convergence, got {other:?}"),
    }
}

#[test]
fn unreachable_tolerance_exhausts_with_exactly_max_iter_rows() {
    let p = SecantParams { x0: 10.0, x1: 12.0, tol: 1e-300, max_iter: 5 };
    match secant(CUBIC, &p) {
        RunOutcome::Exhausted { root, trace } => {
            assert_eq!(trace.len(), 5);
            assert_eq!(root, Some(trace[4].x2));
        }
        other => panic!("expected exhaustion, got {other:?}"),
    }
}

#[test]
fn non_finite_guess_fails_the_gate() {
    let p = SecantParams { x0: 0.0, x1: f64::NAN, tol: 1e-6, max_iter: 10 };
    assert!(matches!(
        secant(CUBIC, &p),
        RunOutcome::Failed { reason: SolveError::InvalidInput { name: "x1", .. }, .. }
    ));
}

#[test]
fn reruns_are_identical() {
    let p = params(1.0, 2.0);
    assert_eq!(secant(CUBIC, &p), secant(CUBIC, &p));
}
