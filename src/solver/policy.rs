//! Shared convergence policy: the validation gate, the stopping rule, the
//! iteration driver every method runs on, and display-only rounding.
//!
//! The stopping rule operates on full-precision values; [`round_to`] is a
//! render-time transform and is never consulted here.

use super::errors::SolveError;
use super::trace::RunOutcome;

/// Rejects NaN/∞ scalar parameters before a run starts.
#[inline]
pub(crate) fn require_finite(name: &'static str, got: f64) -> Result<(), SolveError> {
    if got.is_finite() {
        Ok(())
    } else {
        Err(SolveError::InvalidInput { name, got })
    }
}

/// Rejects a non-positive (or non-finite) convergence tolerance.
#[inline]
pub(crate) fn require_tolerance(tol: f64) -> Result<(), SolveError> {
    require_finite("tol", tol)?;
    if tol <= 0.0 {
        return Err(SolveError::InvalidTolerance { got: tol });
    }
    Ok(())
}

/// Returns `true` if `x` and `y` have opposite signs.
/// Sign-based rather than a product test, so large magnitudes cannot
/// overflow the comparison.
#[inline]
pub(crate) fn opposite_sign(x: f64, y: f64) -> bool {
    x.is_sign_positive() != y.is_sign_positive()
}

/// Product of one state-machine step while iterating.
///
/// - `record`   : the row to append to the trace
/// - `estimate` : the new root estimate this step produced
/// - `err`      : the step's error metric (seeded per method at `i = 1`)
/// - `residual` : `f` at the new estimate, when the method has an `f`;
///   an exact zero declares convergence regardless of `err`
/// - `abort`    : failure to report *after* the row is appended
///   (fixed-point keeps its offending row in the partial trace)
pub(crate) struct StepOutcome<S> {
    pub record:   S,
    pub estimate: f64,
    pub err:      f64,
    pub residual: Option<f64>,
    pub abort:    Option<SolveError>,
}

/// Runs the shared iteration loop: one call to `next` per iteration,
/// appending its record and applying the stopping rule until convergence,
/// failure, or exhaustion of `max_iter`.
///
/// Stopping rule: exact-zero residual, or `err` strictly below `tol`.
/// On exhaustion the newest appended estimate is reported (`None` when
/// `max_iter` is zero and no step ever ran).
pub(crate) fn run_iterations<S, F>(tol: f64, max_iter: usize, mut next: F) -> RunOutcome<S>
where
    F: FnMut(usize) -> Result<StepOutcome<S>, SolveError>,
{
    let mut trace: Vec<S> = Vec::new();
    let mut last = None;

    for i in 1..=max_iter {
        let step = match next(i) {
            Ok(step)    => step,
            Err(reason) => return RunOutcome::Failed { reason, trace },
        };

        trace.push(step.record);
        last = Some(step.estimate);

        if let Some(reason) = step.abort {
            return RunOutcome::Failed { reason, trace };
        }
        if step.residual.is_some_and(|r| r == 0.0) || step.err < tol {
            return RunOutcome::Converged { root: step.estimate, trace };
        }
    }

    RunOutcome::Exhausted { root: last, trace }
}

/// How [`round_to`] treats the digit after the cut.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundMode {
    /// Round to nearest at `digits` decimal places.
    Approx,
    /// Truncate toward zero at `digits` decimal places.
    Trunc,
}

/// Display-only rounding of `value` to `digits` decimal places.
/// Non-finite values pass through unchanged. Never used by the stopping
/// rule, so it cannot change which outcome or root a run produces.
#[must_use]
pub fn round_to(value: f64, digits: u32, mode: RoundMode) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let factor = 10f64.powi(digits as i32);
    match mode {
        RoundMode::Approx => (value * factor).round() / factor,
        RoundMode::Trunc  => (value * factor).trunc() / factor,
    }
}
