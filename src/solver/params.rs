//! Per-method problem parameters and the shared validation gate.
//!
//! One record per method family, immutable for the duration of a run.
//! Validation rejects, in order:
//! ├ non-finite scalars     → [`SolveError::InvalidInput`]
//! ├ tolerance <= 0         → [`SolveError::InvalidTolerance`]
//! └ method preconditions   → e.g. [`SolveError::InvalidBracket`]
//!
//! `max_iter` is the iteration cap; a cap of zero runs no iterations and
//! the run reports `Exhausted` with no estimate.

use super::errors::SolveError;
use super::policy::{require_finite, require_tolerance};

/// Inputs for the bracketed methods (bisection, false position).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BracketParams {
    pub a:        f64,
    pub b:        f64,
    pub tol:      f64,
    pub max_iter: usize,
}

impl BracketParams {
    pub(crate) fn validate(&self) -> Result<(), SolveError> {
        require_finite("a", self.a)?;
        require_finite("b", self.b)?;
        require_tolerance(self.tol)?;
        if self.a >= self.b {
            return Err(SolveError::InvalidBracket { a: self.a, b: self.b });
        }
        Ok(())
    }
}

/// Inputs for the single-guess open methods (fixed point, Newton variants).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GuessParams {
    pub x0:       f64,
    pub tol:      f64,
    pub max_iter: usize,
}

impl GuessParams {
    pub(crate) fn validate(&self) -> Result<(), SolveError> {
        require_finite("x0", self.x0)?;
        require_tolerance(self.tol)
    }
}

/// Inputs for the secant method (two starting guesses).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SecantParams {
    pub x0:       f64,
    pub x1:       f64,
    pub tol:      f64,
    pub max_iter: usize,
}

impl SecantParams {
    pub(crate) fn validate(&self) -> Result<(), SolveError> {
        require_finite("x0", self.x0)?;
        require_finite("x1", self.x1)?;
        require_tolerance(self.tol)
    }
}
