//! tests for the Newton-Raphson method and its fixed-derivative variant
use approx::assert_abs_diff_eq;
use raices::solver::{newton, newton_modified, GuessParams, RunOutcome, SolveError};

const F: &str = "x^3 - x - 2";
const DF: &str = "3*x^2 - 1";
const CUBIC_ROOT: f64 = 1.521_379_706_804_567_6;

fn params(x0: f64) -> GuessParams {
    GuessParams { x0, tol: 1e-6, max_iter: 50 }
}

#[test]
fn converges_on_cubic() {
    match newton(F, DF, &params(1.5)) {
        RunOutcome::Converged { root, trace } => {
            assert_abs_diff_eq!(root, CUBIC_ROOT, epsilon = 1e-6);
            assert!(trace.len() < 10, "quadratic convergence expected");
        }
        other => panic!("expected convergence, got {other:?}"),
    }
}

#[test]
fn rows_record_the_recurrence() {
    let outcome = newton(F, DF, &params(1.5));
    for row in outcome.trace() {
        assert_abs_diff_eq!(
            row.x_next,
            row.x_i - row.f_xi / row.df_xi,
            epsilon = 1e-15
        );
        assert_abs_diff_eq!(row.err, (row.x_next - row.x_i).abs(), epsilon = 1e-15);
    }
}

#[test]
fn zero_derivative_fails_with_empty_trace() {
    match newton("x^2 + 1", "2*x", &params(0.0)) {
        RunOutcome::Failed { reason, trace } => {
            assert_eq!(reason, SolveError::ZeroDerivative { x: 0.0 });
            assert!(trace.is_empty());
        }
        other => panic!("expected failure, got {other:?}"),
    }
}

#[test]
fn non_finite_function_value_fails_before_the_row() {
    match newton("sqrt(x)", "1/(2*sqrt(x))", &params(-1.0)) {
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
fn exact_zero_residual_converges_regardless_of_tolerance() {
    // x0 = 0 on f(x) = x - 3 lands on the root in one step with err = 3
    match newton("x - 3", "1", &params(0.0)) {
        RunOutcome::Converged { root, trace } => {
            assert_eq!(root, 3.0);
            assert_eq!(trace.len(), 1);
            assert_eq!(trace[0].err, 3.0);
        }
        other => panic!("expected convergence, got {other:?}"),
    }
}

#[test]
fn unreachable_tolerance_exhausts_with_exactly_max_iter_rows() {
    let p = GuessParams { x0: 10.0, tol: 1e-300, max_iter: 5 };
    match newton(F, DF, &p) {
        RunOutcome::Exhausted { root, trace } => {
            assert_eq!(trace.len(), 5);
            assert_eq!(root, Some(trace[4].x_next));
        }
        other => panic!("expected exhaustion, got {other:?}"),
    }
}

#[test]
fn modified_variant_converges_with_frozen_derivative() {
    match newton_modified(F, DF, &params(1.5)) {
        RunOutcome::Converged { root, trace } => {
            assert_abs_diff_eq!(root, CUBIC_ROOT, epsilon = 1e-5);
            let df0 = 3.0 * 1.5 * 1.5 - 1.0;
            for row in trace {
                assert_eq!(row.df_xi, df0);
            }
        }
        other => panic!("expected convergence, got {other:?}"),
    }
}

#[test]
fn modified_variant_rejects_zero_derivative_at_the_guess() {
    match newton_modified("x^2 + 1", "2*x", &params(0.0)) {
        RunOutcome::Failed { reason, trace } => {
            assert_eq!(reason, SolveError::ZeroDerivative { x: 0.0 });
            assert!(trace.is_empty());
        }
        other => panic!("expected failure, got {other:?}"),
    }
}

#[test]
fn invalid_derivative_expression_fails_the_gate() {
    assert!(matches!(
        newton(F, "3*x^2 -", &params(1.5)),
        RunOutcome::Failed { reason: SolveError::InvalidExpression(_), .. }
    ));
}

#[test]
fn reruns_are_identical() {
    let p = params(1.5);
    assert_eq!(newton(F, DF, &p), newton(F, DF, &p));
}
