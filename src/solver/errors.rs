//! Failure taxonomy shared by every method iterator.
//!
//! All failures are definitional, not transient: each one terminates the run
//! immediately with [`RunOutcome::Failed`](super::RunOutcome::Failed)
//! carrying the reason and whatever partial trace was accumulated.

use crate::expr::ParseError;
use thiserror::Error;

/// Why a run failed.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SolveError {
    /// The expression text did not compile.
    #[error("invalid expression: {0}")]
    InvalidExpression(#[from] ParseError),

    /// A numeric parameter was NaN or infinite.
    #[error("invalid input: {name}={got} must be finite")]
    InvalidInput { name: &'static str, got: f64 },

    /// The convergence tolerance was not strictly positive.
    #[error("invalid tolerance: must be > 0. got {got}")]
    InvalidTolerance { got: f64 },

    /// Bracket methods: `a >= b`, or same-sign endpoints without an exact zero.
    #[error("invalid bracket [{a}, {b}]: requires a < b and a sign change")]
    InvalidBracket { a: f64, b: f64 },

    /// A function evaluation produced NaN/∞ where a finite value was required.
    #[error("function non-finite at x={x}, f(x)={fx}")]
    NonFiniteEvaluation { x: f64, fx: f64 },

    /// Newton: `f'` was exactly zero at the current iterate.
    #[error("derivative is zero at x={x}: cannot continue")]
    ZeroDerivative { x: f64 },

    /// Secant: `f(x1) - f(x0)` was exactly zero.
    #[error("zero denominator in secant step: f({x1}) - f({x0}) = 0")]
    ZeroDenominator { x0: f64, x1: f64 },
}
