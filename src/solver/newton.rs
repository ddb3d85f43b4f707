//! Newton-Raphson method, classic and modified.
//!
//! Classic re-evaluates the derivative at every iterate; the modified
//! variant freezes `f'` at `x0` and reuses it for every step, trading
//! quadratic convergence for one derivative evaluation per run.

use crate::expr::{compile, CompiledFn};
use super::errors::SolveError;
use super::params::GuessParams;
use super::policy::{run_iterations, StepOutcome};
use super::trace::{NewtonStep, RunOutcome};

#[derive(Debug, Clone, Copy)]
enum Derivative {
    /// `f'(x_i)` re-evaluated each iteration.
    Live,
    /// `f'(x0)` evaluated once before iterating.
    Frozen(f64),
}

/// Finds a root of `f_expr` using the
/// [Newton-Raphson method](https://en.wikipedia.org/wiki/Newton%27s_method):
/// `x_{i+1} = x_i - f(x_i) / f'(x_i)`.
///
/// # Arguments
/// - `f_expr`  : expression for `f(x)`
/// - `df_expr` : expression for the analytic derivative `f'(x)`
/// - `params`  : initial guess, tolerance, iteration cap
///
/// # Outcome
/// - `Converged` : error metric `|x_{i+1} - x_i|` fell below `tol`, or `f`
///   is exactly zero at the new estimate
/// - `Exhausted` : cap reached; root is the last `x_{i+1}`
/// - `Failed`    : validation-gate errors before iterating;
///   [`SolveError::NonFiniteEvaluation`] when `f(x_i)` or `f'(x_i)` leaves ℝ;
///   [`SolveError::ZeroDerivative`] when `f'(x_i)` is exactly zero.
///   Mid-run failures are detected before the row is appended.
#[must_use]
pub fn newton(f_expr: &str, df_expr: &str, params: &GuessParams) -> RunOutcome<NewtonStep> {
    let (f, df) = match compile_pair(f_expr, df_expr) {
        Ok(pair)    => pair,
        Err(reason) => return RunOutcome::failed(reason),
    };
    if let Err(reason) = params.validate() {
        return RunOutcome::failed(reason);
    }
    newton_run(&f, &df, params, Derivative::Live)
}

/// Modified Newton-Raphson: the derivative is evaluated once at `x0` and
/// held fixed, so every step is `x_{i+1} = x_i - f(x_i) / f'(x0)`.
///
/// A zero or non-finite `f'(x0)` fails the run before any step is recorded.
/// Otherwise the contract matches [`newton`].
#[must_use]
pub fn newton_modified(
    f_expr: &str,
    df_expr: &str,
    params: &GuessParams,
) -> RunOutcome<NewtonStep> {
    let (f, df) = match compile_pair(f_expr, df_expr) {
        Ok(pair)    => pair,
        Err(reason) => return RunOutcome::failed(reason),
    };
    if let Err(reason) = params.validate() {
        return RunOutcome::failed(reason);
    }

    let df0 = df.eval(params.x0);
    if !df0.is_finite() {
        return RunOutcome::failed(SolveError::NonFiniteEvaluation { x: params.x0, fx: df0 });
    }
    if df0 == 0.0 {
        return RunOutcome::failed(SolveError::ZeroDerivative { x: params.x0 });
    }
    newton_run(&f, &df, params, Derivative::Frozen(df0))
}

fn compile_pair(f_expr: &str, df_expr: &str) -> Result<(CompiledFn, CompiledFn), SolveError> {
    let f = compile(f_expr)?;
    let df = compile(df_expr)?;
    Ok((f, df))
}

fn newton_run(
    f: &CompiledFn,
    df: &CompiledFn,
    params: &GuessParams,
    derivative: Derivative,
) -> RunOutcome<NewtonStep> {
    let mut x = params.x0;
    // f(x_{i+1}) from the residual check doubles as the next f(x_i)
    let mut fx_carried = None;

    run_iterations(params.tol, params.max_iter, |i| {
        let f_xi = match fx_carried {
            Some(fx) => fx,
            None     => f.eval(x),
        };
        if !f_xi.is_finite() {
            return Err(SolveError::NonFiniteEvaluation { x, fx: f_xi });
        }

        let df_xi = match derivative {
            Derivative::Live        => df.eval(x),
            Derivative::Frozen(df0) => df0,
        };
        if !df_xi.is_finite() {
            return Err(SolveError::NonFiniteEvaluation { x, fx: df_xi });
        }
        if df_xi == 0.0 {
            return Err(SolveError::ZeroDerivative { x });
        }

        let x_next = x - f_xi / df_xi;
        // the previous estimate is the current iterate, including at i = 1
        // where the seed is |x1 - x0|
        let err = (x_next - x).abs();
        let record = NewtonStep { i, x_i: x, f_xi, df_xi, x_next, err };

        let residual = f.eval(x_next);
        fx_carried = Some(residual);
        x = x_next;

        Ok(StepOutcome {
            record,
            estimate: x_next,
            err,
            residual: Some(residual),
            abort: None,
        })
    })
}
