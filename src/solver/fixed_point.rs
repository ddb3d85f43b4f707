//! Fixed-point iteration: `x_{i+1} = g(x_i)`.

use crate::expr::compile;
use super::errors::SolveError;
use super::params::GuessParams;
use super::policy::{run_iterations, StepOutcome};
use super::trace::{FixedPointStep, RunOutcome};

/// Finds a fixed point of `g_expr` (a value `x` with `g(x) = x`) by
/// [fixed-point iteration](https://en.wikipedia.org/wiki/Fixed-point_iteration)
/// from the initial guess `x0`.
///
/// The error metric is `|g(x_i) - x_i|`: the new estimate against the
/// previous one, which is the current iterate. There is no residual here
/// (the compiled function is `g`, not `f`), so the run stops on the error
/// metric alone.
///
/// # Outcome
/// - `Converged` : error metric fell below `tol`; root is the last `g(x_i)`
/// - `Exhausted` : cap reached; root is the last `g(x_i)`
/// - `Failed`    : validation-gate errors before iterating, or
///   [`SolveError::NonFiniteEvaluation`] when `g(x_i)` leaves ℝ — the
///   offending row stays in the partial trace
#[must_use]
pub fn fixed_point(g_expr: &str, params: &GuessParams) -> RunOutcome<FixedPointStep> {
    let g = match compile(g_expr) {
        Ok(g)  => g,
        Err(e) => return RunOutcome::failed(e.into()),
    };
    if let Err(reason) = params.validate() {
        return RunOutcome::failed(reason);
    }

    let mut x = params.x0;

    run_iterations(params.tol, params.max_iter, |i| {
        let g_xi = g.eval(x);
        let err = (g_xi - x).abs();
        let record = FixedPointStep { i, x_i: x, g_xi, err };

        // recorded first, then reported: the bad row is part of the trace
        let abort = (!g_xi.is_finite())
            .then(|| SolveError::NonFiniteEvaluation { x, fx: g_xi });

        x = g_xi;
        Ok(StepOutcome {
            record,
            estimate: g_xi,
            err,
            residual: None,
            abort,
        })
    })
}
