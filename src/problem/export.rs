use serde::Serialize;
use std::{fs::OpenOptions, io::Write};

use crate::{options::Method, Result, SolverError, Value};

use super::{Problem, Solution};

/// Summary measures of one solution, written as one JSON line per solution.
#[derive(Serialize, Debug)]
pub(super) struct SolutionData {
    num_sources: usize,
    num_destinations: usize,
    total_supply: Value,

    method: Method,
    total_cost: Value,
    num_basic: usize,
    degenerate: bool,
    steps: usize,

    time_solve: u128,
}

impl SolutionData {
    pub(super) fn from_solution(problem: &Problem, solution: &Solution) -> Self {
        SolutionData {
            num_sources: problem.supply.len(),
            num_destinations: problem.demand.len(),
            total_supply: problem.supply.iter().sum(),

            method: solution.method,
            total_cost: solution.state.total_cost(),
            num_basic: solution.state.num_basic(),
            degenerate: solution.state.is_degenerate(),
            steps: solution.steps,

            time_solve: solution.elapsed.as_micros(),
        }
    }
}

impl Problem {
    /// Appends the measures of every solution to `filename`.
    pub fn export(&self, filename: &str) -> Result<()> {
        let Some(solutions) = &self.solutions else {
            return Err(SolverError::SkippedSolveError);
        };
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(filename)?;
        for solution in solutions {
            let json_str = serde_json::to_string(&SolutionData::from_solution(self, solution))?;
            log::debug!("Appending {json_str} to {filename}");
            writeln!(file, "{json_str}")?;
        }
        Ok(())
    }
}
