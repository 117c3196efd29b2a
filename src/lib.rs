mod algorithms;
mod matrix;
mod options;
mod problem;
mod util;

/// Numeric type of every supply, demand, cost and total.
pub type Value = i64;

pub use matrix::Matrix;
pub use options::*;
pub use problem::{Problem, ProblemState, Solution};
pub use util::{Result, SolverError};
