//! Secant method: two-point steps without a derivative.

use crate::expr::compile;
use super::errors::SolveError;
use super::params::SecantParams;
use super::policy::{run_iterations, StepOutcome};
use super::trace::{RunOutcome, SecantStep};

/// Finds a root of `expr` using the
/// [secant method](https://en.wikipedia.org/wiki/Secant_method):
/// `x_2 = x_1 - f(x_1)(x_1 - x_0) / (f(x_1) - f(x_0))`.
///
/// The error metric is `|x_2 - x_1|` — the new estimate against the
/// immediately preceding one — at every iteration including the first.
///
/// # Outcome
/// - `Converged` : error metric fell below `tol`, or `f(x_2)` is exactly zero
/// - `Exhausted` : cap reached; root is the last `x_2`
/// - `Failed`    : validation-gate errors before iterating;
///   [`SolveError::NonFiniteEvaluation`] when either secant endpoint has a
///   non-finite function value; [`SolveError::ZeroDenominator`] when
///   `f(x_1) - f(x_0)` is exactly zero. Mid-run failures are detected
///   before the row is appended.
#[must_use]
pub fn secant(expr: &str, params: &SecantParams) -> RunOutcome<SecantStep> {
    let f = match compile(expr) {
        Ok(f)  => f,
        Err(e) => return RunOutcome::failed(e.into()),
    };
    if let Err(reason) = params.validate() {
        return RunOutcome::failed(reason);
    }

    let (mut x0, mut x1) = (params.x0, params.x1);
    let mut f_x0 = f.eval(x0);
    let mut f_x1 = f.eval(x1);

    run_iterations(params.tol, params.max_iter, |i| {
        if !f_x0.is_finite() {
            return Err(SolveError::NonFiniteEvaluation { x: x0, fx: f_x0 });
        }
        if !f_x1.is_finite() {
            return Err(SolveError::NonFiniteEvaluation { x: x1, fx: f_x1 });
        }
        if f_x1 - f_x0 == 0.0 {
            return Err(SolveError::ZeroDenominator { x0, x1 });
        }

        let x2 = x1 - f_x1 * (x1 - x0) / (f_x1 - f_x0);
        let err = (x2 - x1).abs();
        let record = SecantStep { i, x0, x1, f_x0, f_x1, x2, err };

        // f(x2) is the residual now and f(x_1) next iteration
        let f_x2 = f.eval(x2);
        x0 = x1;
        f_x0 = f_x1;
        x1 = x2;
        f_x1 = f_x2;

        Ok(StepOutcome {
            record,
            estimate: x2,
            err,
            residual: Some(f_x2),
            abort: None,
        })
    })
}
