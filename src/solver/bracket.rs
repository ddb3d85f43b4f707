//! Bracketed methods: bisection and false position.
//!
//! Both run the same loop over a sign-changing interval `[a, b]` and differ
//! only in how the new estimate is produced:
//! - bisection      : `x_r = (a + b) / 2`
//! - false position : `x_r = b - f(b)(b - a) / (f(b) - f(a))`
//!
//! The bracket update is sign-preserving: if `f(a)·f(x_r) < 0` the root lies
//! in `[a, x_r]` and `b` is replaced, otherwise `a` is. The sign of `f`
//! therefore differs between the endpoints on every recorded row.

use crate::expr::compile;
use super::errors::SolveError;
use super::params::BracketParams;
use super::policy::{opposite_sign, run_iterations, StepOutcome};
use super::trace::{BracketStep, RunOutcome};

#[derive(Debug, Clone, Copy)]
enum BracketKind {
    Bisection,
    FalsePosition,
}

/// Finds a root of `expr` on `[a, b]` using the
/// [bisection method](https://en.wikipedia.org/wiki/Bisection_method).
///
/// # Arguments
/// - `expr`   : expression in `x` (see [`crate::expr::compile`])
/// - `params` : interval bounds, tolerance, iteration cap
///
/// # Outcome
/// - `Converged` : error metric fell below `tol`, or `f` is exactly zero at
///   the new estimate; an exact zero at `a` or `b` converges immediately
///   with an empty trace
/// - `Exhausted` : cap reached; root is the last midpoint
/// - `Failed`    : [`SolveError::InvalidExpression`] / [`SolveError::InvalidInput`]
///   / [`SolveError::InvalidTolerance`] / [`SolveError::InvalidBracket`]
///   before iterating, or [`SolveError::NonFiniteEvaluation`] mid-run
#[must_use]
pub fn bisection(expr: &str, params: &BracketParams) -> RunOutcome<BracketStep> {
    bracket_run(BracketKind::Bisection, expr, params)
}

/// Finds a root of `expr` on `[a, b]` using the
/// [false position method](https://en.wikipedia.org/wiki/Regula_falsi).
///
/// Same contract as [`bisection`]; only the estimate recurrence differs.
#[must_use]
pub fn false_position(expr: &str, params: &BracketParams) -> RunOutcome<BracketStep> {
    bracket_run(BracketKind::FalsePosition, expr, params)
}

fn bracket_run(
    kind: BracketKind,
    expr: &str,
    params: &BracketParams,
) -> RunOutcome<BracketStep> {
    let f = match compile(expr) {
        Ok(f)  => f,
        Err(e) => return RunOutcome::failed(e.into()),
    };
    if let Err(reason) = params.validate() {
        return RunOutcome::failed(reason);
    }

    let (mut a, mut b) = (params.a, params.b);

    let mut fa = f.eval(a);
    if !fa.is_finite() {
        return RunOutcome::failed(SolveError::NonFiniteEvaluation { x: a, fx: fa });
    }
    if fa == 0.0 {
        return RunOutcome::Converged { root: a, trace: Vec::new() };
    }
    let mut fb = f.eval(b);
    if !fb.is_finite() {
        return RunOutcome::failed(SolveError::NonFiniteEvaluation { x: b, fx: fb });
    }
    if fb == 0.0 {
        return RunOutcome::Converged { root: b, trace: Vec::new() };
    }
    if !opposite_sign(fa, fb) {
        return RunOutcome::failed(SolveError::InvalidBracket { a, b });
    }

    // seed for the error metric: the first step reports the bracket width
    let mut prev = f64::NAN;

    run_iterations(params.tol, params.max_iter, |i| {
        let x_r = match kind {
            BracketKind::Bisection     => (a + b) / 2.0,
            // fb - fa is nonzero: the endpoints have opposite signs
            BracketKind::FalsePosition => b - fb * (b - a) / (fb - fa),
        };
        let f_xr = f.eval(x_r);
        // both recurrences can overflow for bounds near ±f64::MAX
        if !x_r.is_finite() || !f_xr.is_finite() {
            return Err(SolveError::NonFiniteEvaluation { x: x_r, fx: f_xr });
        }

        let err = if i == 1 { (b - a).abs() } else { (x_r - prev).abs() };
        let record = BracketStep { i, a, b, x_r, f_a: fa, f_b: fb, f_xr, err };

        if opposite_sign(fa, f_xr) {
            b = x_r;
            fb = f_xr;
        } else {
            a = x_r;
            fa = f_xr;
        }
        prev = x_r;

        Ok(StepOutcome {
            record,
            estimate: x_r,
            err,
            residual: Some(f_xr),
            abort: None,
        })
    })
}
