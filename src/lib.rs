//! Root-finding engine for single-variable real functions.
//!
//! Takes a textual expression in `x`, compiles it to a callable function,
//! and runs one of the classical iteration schemes against it, recording
//! every intermediate state in a convergence trace:
//!
//! - [`solver::bisection`]      : bracketed midpoint steps
//! - [`solver::false_position`] : bracketed secant-line steps
//! - [`solver::fixed_point`]    : `x_{i+1} = g(x_i)`
//! - [`solver::newton`]         : `x_{i+1} = x_i - f(x_i)/f'(x_i)`
//! - [`solver::newton_modified`]: Newton with `f'` frozen at `x0`
//! - [`solver::secant`]         : two-point secant steps
//!
//! Each run is single-shot and stateless: it owns its parameters and its
//! trace, consults no globals, and returns a [`solver::RunOutcome`] that is
//! either converged, exhausted, or failed with a typed reason.
//!
//! ```
//! use raices::solver::{bisection, BracketParams, RunOutcome};
//!
//! let params = BracketParams { a: 1.0, b: 2.0, tol: 1e-6, max_iter: 50 };
//! match bisection("x^3 - x - 2", &params) {
//!     RunOutcome::Converged { root, trace } => {
//!         assert!((root - 1.521_379_7).abs() < 1e-5);
//!         assert!(!trace.is_empty());
//!     }
//!     other => panic!("expected convergence, got {other:?}"),
//! }
//! ```

pub mod expr;
pub mod solver;
