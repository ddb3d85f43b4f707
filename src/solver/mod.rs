// shared contract
pub mod errors;
pub mod params;
pub mod policy;
pub mod trace;

// method iterators
pub mod bracket;
pub mod fixed_point;
pub mod newton;
pub mod secant;

pub use bracket::{bisection, false_position};
pub use errors::SolveError;
pub use fixed_point::fixed_point;
pub use newton::{newton, newton_modified};
pub use params::{BracketParams, GuessParams, SecantParams};
pub use policy::{round_to, RoundMode};
pub use secant::secant;
pub use trace::{BracketStep, FixedPointStep, NewtonStep, RunOutcome, SecantStep};
