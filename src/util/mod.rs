mod error_handling;
mod random_problem;

pub use error_handling::{Result, SolverError};
