use std::{error::Error, fmt::Display};

use crate::Value;

pub type Result<T> = std::result::Result<T, SolverError>;

#[derive(Debug)]
pub enum SolverError {
    ProblemIOError(std::io::Error),
    ProblemSerializationError(serde_json::Error),
    ProblemParseError(String),

    InvalidShape(String),
    InvalidInput(String),
    Unbalanced(Value, Value),

    SkippedSolveError,
    InvalidSolutionError(String),
}

impl Display for SolverError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                SolverError::ProblemIOError(e) => format!("Failed to read problem from file: {e}."),
                SolverError::ProblemSerializationError(e) =>
                    format!("Failed to parse the problem: {e}."),
                SolverError::ProblemParseError(e) => format!("Failed to parse the problem: {e}."),
                SolverError::InvalidShape(e) => format!("Problem has an invalid shape: {e}."),
                SolverError::InvalidInput(e) => format!("The method is not applicable: {e}."),
                SolverError::Unbalanced(supply, demand) => format!(
                    "The problem is not balanced: total supply {supply} differs from total demand {demand}."
                ),
                SolverError::SkippedSolveError =>
                    "No solution found for validation. Forgot to solve?".to_owned(),
                SolverError::InvalidSolutionError(e) =>
                    format!("Found a solution, but it is invalid: {e}."),
            }
        )
    }
}

impl Error for SolverError {}

impl From<serde_json::Error> for SolverError {
    fn from(value: serde_json::Error) -> Self {
        SolverError::ProblemSerializationError(value)
    }
}

impl From<std::io::Error> for SolverError {
    fn from(value: std::io::Error) -> Self {
        SolverError::ProblemIOError(value)
    }
}
