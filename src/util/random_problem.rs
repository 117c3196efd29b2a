use rand::Rng;

use crate::{matrix::Matrix, problem::Problem, Result, SolverError, Value};

impl Problem {
    /// A balanced problem with supplies and costs drawn uniformly from the given inclusive
    /// ranges. Demands split the total supply at random cut points. Empty or negative
    /// ranges are rejected.
    pub fn from_random(
        num_sources: usize,
        num_destinations: usize,
        range_supply: (Value, Value),
        range_cost: (Value, Value),
    ) -> Result<Self> {
        check_range(range_supply, "supply")?;
        check_range(range_cost, "cost")?;
        let supply = generate_random_vec(num_sources, range_supply);
        let total_supply = supply
            .iter()
            .try_fold(0 as Value, |total, x| total.checked_add(*x))
            .ok_or_else(|| {
                SolverError::InvalidInput(format!("total supply exceeds {}", Value::MAX))
            })?;
        let demand = generate_random_split(total_supply, num_destinations);
        let costs = Matrix::from_elements(
            &generate_random_vec(num_sources * num_destinations, range_cost),
            num_sources,
            num_destinations,
        );
        log::debug!(
            "Generated random problem with supply {:?}, demand {:?} and costs\n{}",
            supply,
            demand,
            costs
        );

        Ok(Problem::new(supply, demand, costs))
    }
}

fn check_range(range_values: (Value, Value), name: &str) -> Result<()> {
    let (min, max) = range_values;
    if min < 0 || min > max {
        return Err(SolverError::InvalidInput(format!(
            "{name} range [{min}, {max}] is empty or negative"
        )));
    }
    Ok(())
}

fn generate_random_vec(len: usize, range_values: (Value, Value)) -> Vec<Value> {
    let mut rng = rand::thread_rng();
    (0..len)
        .map(|_| rng.gen_range(range_values.0..=range_values.1))
        .collect()
}

fn generate_random_split(total: Value, parts: usize) -> Vec<Value> {
    if parts == 0 {
        return vec![];
    }
    let mut rng = rand::thread_rng();
    let mut cuts: Vec<Value> = (1..parts).map(|_| rng.gen_range(0..=total)).collect();
    cuts.push(0);
    cuts.push(total);
    cuts.sort_unstable();
    cuts.windows(2).map(|w| w[1] - w[0]).collect()
}
