//! Step records and the terminal [`RunOutcome`] returned by every method.
//!
//! One step record is one row of the convergence table. Fields vary per
//! method but every record carries the 1-based iteration index, the values
//! fed into the recurrence, the new estimate, and the error metric for that
//! step. Traces are append-only; insertion order is iteration order.

use super::errors::SolveError;

/// One bisection / false-position row.
/// - `a`, `b`       : bracket endpoints entering the iteration
/// - `f_a`, `f_b`   : their function values
/// - `x_r`, `f_xr`  : new estimate and its function value
/// - `err`          : `|b - a|` on the first iteration, else `|x_r - prev|`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BracketStep {
    pub i:    usize,
    pub a:    f64,
    pub b:    f64,
    pub x_r:  f64,
    pub f_a:  f64,
    pub f_b:  f64,
    pub f_xr: f64,
    pub err:  f64,
}

/// One fixed-point row: `g_xi = g(x_i)` is the new estimate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedPointStep {
    pub i:    usize,
    pub x_i:  f64,
    pub g_xi: f64,
    pub err:  f64,
}

/// One Newton-Raphson row.
/// `x_next = x_i - f_xi / df_xi`; for the modified variant `df_xi` is the
/// derivative frozen at `x0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NewtonStep {
    pub i:      usize,
    pub x_i:    f64,
    pub f_xi:   f64,
    pub df_xi:  f64,
    pub x_next: f64,
    pub err:    f64,
}

/// One secant row: `x2` is the intercept of the line through
/// `(x0, f_x0)` and `(x1, f_x1)`; `err = |x2 - x1|` at every iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SecantStep {
    pub i:    usize,
    pub x0:   f64,
    pub x1:   f64,
    pub f_x0: f64,
    pub f_x1: f64,
    pub x2:   f64,
    pub err:  f64,
}

/// Terminal result of one run, generic over the method's step record.
///
/// Exactly one of:
/// - `Converged` : the stopping rule fired; `root` is the newest estimate
/// - `Exhausted` : the iteration cap was reached; `root` is the last
///   appended estimate, or `None` if zero steps were appended (cap of zero)
/// - `Failed`    : a typed reason plus the partial trace accumulated before
///   detection
#[derive(Debug, Clone, PartialEq)]
pub enum RunOutcome<S> {
    Converged { root: f64, trace: Vec<S> },
    Exhausted { root: Option<f64>, trace: Vec<S> },
    Failed    { reason: SolveError, trace: Vec<S> },
}

impl<S> RunOutcome<S> {
    /// The approximate root, if the run produced one.
    #[must_use]
    pub fn root(&self) -> Option<f64> {
        match self {
            RunOutcome::Converged { root, .. } => Some(*root),
            RunOutcome::Exhausted { root, .. } => *root,
            RunOutcome::Failed { .. }          => None,
        }
    }

    /// The ordered step records, however the run ended.
    #[must_use]
    pub fn trace(&self) -> &[S] {
        match self {
            RunOutcome::Converged { trace, .. }
            | RunOutcome::Exhausted { trace, .. }
            | RunOutcome::Failed { trace, .. } => trace,
        }
    }

    #[must_use]
    pub fn is_converged(&self) -> bool {
        matches!(self, RunOutcome::Converged { .. })
    }

    pub(crate) fn failed(reason: SolveError) -> Self {
        RunOutcome::Failed { reason, trace: Vec::new() }
    }
}
