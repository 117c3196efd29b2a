use serde::{Deserialize, Serialize};
use std::{fs::File, io::BufReader, time::Instant};

use crate::{matrix::Matrix, options::Options, Result, SolverError, Value};

use super::{solution::Solution, ProblemState};

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct Problem {
    pub supply: Vec<Value>,
    pub demand: Vec<Value>,
    pub costs: Matrix<Value>,
    #[serde(skip)]
    pub options: Options,
    #[serde(skip)]
    pub(crate) solutions: Option<Vec<Solution>>,
}

impl Problem {
    pub fn new(supply: Vec<Value>, demand: Vec<Value>, costs: Matrix<Value>) -> Self {
        Problem {
            supply,
            demand,
            costs,
            options: Options::default(),
            solutions: None,
        }
    }

    pub fn with_options(mut self, options: &Options) -> Self {
        self.options = options.clone();
        self
    }

    pub fn from_file(filename: &str) -> Result<Self> {
        let file = File::open(filename)?;
        let reader = BufReader::new(file);

        log::debug!("Deserializing problem from {}", filename);
        let problem: Problem = serde_json::from_reader(reader)?;
        Ok(problem)
    }

    pub fn serialize(&self, filename: &str) -> Result<()> {
        let json_str = serde_json::to_string(self)?;
        log::debug!("Writing\n{json_str}\nto {filename}");
        std::fs::write(filename, json_str)?;
        Ok(())
    }

    /// Rejects shapes that do not fit together, negative values, totals too large for
    /// [`Value`] and unequal totals, in that order.
    pub fn validate(&self) -> Result<()> {
        if self.supply.len() != self.costs.num_rows()
            || self.demand.len() != self.costs.num_columns()
        {
            return Err(SolverError::InvalidShape(format!(
                "{} supplies and {} demands do not fit a ({}, {}) cost matrix",
                self.supply.len(),
                self.demand.len(),
                self.costs.num_rows(),
                self.costs.num_columns()
            )));
        }

        if has_negative_values(&self.supply) {
            return Err(SolverError::InvalidInput("supply is negative".to_owned()));
        }
        if has_negative_values(&self.demand) {
            return Err(SolverError::InvalidInput("demand is negative".to_owned()));
        }
        if self.costs.has_negative_values() {
            return Err(SolverError::InvalidInput("cost is negative".to_owned()));
        }

        let total_supply = checked_total(&self.supply, "supply")?;
        let total_demand = checked_total(&self.demand, "demand")?;
        let max_cost = self.costs.elements().copied().max().unwrap_or(0);
        if total_supply.max(total_demand).checked_mul(max_cost).is_none() {
            return Err(SolverError::InvalidInput(format!(
                "total cost may exceed {}",
                Value::MAX
            )));
        }
        if total_supply != total_demand {
            return Err(SolverError::Unbalanced(total_supply, total_demand));
        }

        log::info!("Problem is valid.");
        Ok(())
    }

    pub fn initial_state(&self) -> Result<ProblemState> {
        ProblemState::new(&self.supply, &self.demand, &self.costs)
    }

    /// Runs every configured method on its own copy of the problem.
    pub fn solve(&mut self) -> Result<()> {
        self.validate()?;
        log::info!("Attempting to find initial basic feasible solutions...");

        let mut solutions = vec![];
        for method in self.options.methods.iter() {
            let mut state = self.initial_state()?;
            let start_solve = Instant::now();
            let steps = state.solve(method);
            solutions.push(Solution {
                method: *method,
                state,
                steps,
                elapsed: start_solve.elapsed(),
            });
        }
        self.solutions = Some(solutions);
        Ok(())
    }

    pub fn solutions(&self) -> Option<&[Solution]> {
        self.solutions.as_deref()
    }

    pub fn validate_solution(&self) -> Result<()> {
        let Some(solutions) = &self.solutions else {
            return Err(SolverError::SkippedSolveError);
        };
        log::info!("Assessing validity of found solutions...");
        for solution in solutions {
            solution.state.validate_solution()?;
        }
        log::info!("Validity check complete.");
        Ok(())
    }
}

fn has_negative_values(values: &[Value]) -> bool {
    values.iter().any(|x| *x < 0)
}

fn checked_total(values: &[Value], name: &str) -> Result<Value> {
    values
        .iter()
        .try_fold(0 as Value, |total, x| total.checked_add(*x))
        .ok_or_else(|| {
            SolverError::InvalidInput(format!("total {name} exceeds {}", Value::MAX))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::Method;

    fn setup() -> Problem {
        Problem::new(
            vec![160, 140, 170],
            vec![120, 50, 190, 110],
            Matrix::from_rows(&[vec![7, 4, 1, 2], vec![4, 5, 9, 8], vec![9, 2, 3, 6]]),
        )
    }

    #[test]
    fn test_validate_accepts_fixture() {
        assert!(setup().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_negative_values() {
        let mut problem = setup();
        problem.costs.set(1, 2, -9);
        assert!(matches!(problem.validate(), Err(SolverError::InvalidInput(_))));

        let mut problem = setup();
        problem.supply[0] = -160;
        assert!(matches!(problem.solve(), Err(SolverError::InvalidInput(_))));
        assert!(problem.solutions().is_none());

        let mut problem = setup();
        problem.demand[3] = -1;
        assert!(matches!(problem.validate(), Err(SolverError::InvalidInput(_))));
    }

    #[test]
    fn test_validate_rejects_unbalanced() {
        let mut problem = Problem::new(
            vec![1, 1],
            vec![1, 2],
            Matrix::from_rows(&[vec![1, 2], vec![3, 4]]),
        );
        assert!(matches!(problem.solve(), Err(SolverError::Unbalanced(2, 3))));
        assert!(problem.solutions().is_none());
    }

    #[test]
    fn test_validate_rejects_overflowing_totals() {
        let mut problem = Problem::new(
            vec![Value::MAX, 1],
            vec![Value::MAX, 1],
            Matrix::from_rows(&[vec![1, 2], vec![3, 4]]),
        );
        assert!(matches!(problem.validate(), Err(SolverError::InvalidInput(_))));
        assert!(matches!(problem.solve(), Err(SolverError::InvalidInput(_))));
        assert!(problem.solutions().is_none());

        let mut problem = Problem::new(
            vec![Value::MAX / 2],
            vec![Value::MAX / 2],
            Matrix::from_rows(&[vec![1000]]),
        );
        assert!(matches!(problem.solve(), Err(SolverError::InvalidInput(_))));

        let mut problem = Problem::new(
            vec![Value::MAX / 1000],
            vec![Value::MAX / 1000],
            Matrix::from_rows(&[vec![1000]]),
        );
        problem.solve().unwrap();
        assert_eq!(
            Value::MAX / 1000 * 1000,
            problem.solutions().unwrap()[0].state.total_cost()
        );
    }

    #[test]
    fn test_validate_rejects_mismatched_shape() {
        let problem = Problem::new(
            vec![1, 1, 1],
            vec![3],
            Matrix::from_rows(&[vec![1], vec![3]]),
        );
        assert!(matches!(problem.validate(), Err(SolverError::InvalidShape(_))));
    }

    #[test]
    fn test_solve_runs_every_method_independently() {
        let mut problem = setup();
        problem.solve().unwrap();
        assert!(problem.validate_solution().is_ok());

        let solutions = problem.solutions().unwrap();
        assert_eq!(
            vec![Method::NorthwestCorner, Method::Vogel, Method::Russell],
            solutions.iter().map(|s| s.method).collect::<Vec<_>>()
        );
        assert_eq!(
            vec![3060, 1330, 1530],
            solutions.iter().map(|s| s.state.total_cost()).collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_validate_solution_before_solve() {
        assert!(matches!(
            setup().validate_solution(),
            Err(SolverError::SkippedSolveError)
        ));
    }

    #[test]
    fn test_deserialize_from_json() {
        let problem: Problem = serde_json::from_str(
            r#"{"supply": [5, 5], "demand": [4, 6], "costs": [[1, 2], [3, 4]]}"#,
        )
        .unwrap();
        assert_eq!(vec![5, 5], problem.supply);
        assert_eq!(vec![4, 6], problem.demand);
        assert_eq!(Matrix::from_rows(&[vec![1, 2], vec![3, 4]]), problem.costs);
        assert_eq!(Method::all(), problem.options.methods);
    }
}
