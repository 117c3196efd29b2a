use crate::{matrix::Matrix, options::Method, Result, SolverError, Value};

/// Bookkeeping of one heuristic run: what is left to ship, which routes are basic and which
/// sources and destinations are closed. All mutation goes through [`choose_as_basic`].
///
/// [`choose_as_basic`]: ProblemState::choose_as_basic
#[derive(Debug, Clone)]
pub struct ProblemState {
    supply: Vec<Value>,
    demand: Vec<Value>,
    init_supply: Vec<Value>,
    init_demand: Vec<Value>,

    costs: Matrix<Value>,
    basics: Matrix<bool>,
    basic_values: Matrix<Value>,

    supply_closed: Vec<bool>,
    demand_closed: Vec<bool>,
    total_cost: Value,
}

impl ProblemState {
    pub fn new(supply: &[Value], demand: &[Value], costs: &Matrix<Value>) -> Result<Self> {
        if supply.len() != costs.num_rows() || demand.len() != costs.num_columns() {
            return Err(SolverError::InvalidShape(format!(
                "{} supplies and {} demands do not fit a ({}, {}) cost matrix",
                supply.len(),
                demand.len(),
                costs.num_rows(),
                costs.num_columns()
            )));
        }

        let (h, w) = (supply.len(), demand.len());
        Ok(ProblemState {
            supply: supply.to_vec(),
            demand: demand.to_vec(),
            init_supply: supply.to_vec(),
            init_demand: demand.to_vec(),
            costs: costs.clone(),
            basics: Matrix::new(h, w),
            basic_values: Matrix::new(h, w),
            supply_closed: vec![false; h],
            demand_closed: vec![false; w],
            total_cost: 0,
        })
    }

    /// Ships as much as possible on `(row, col)` and closes the side that runs out. When
    /// remaining supply and demand are equal only the row is closed, leaving the column open
    /// with zero demand.
    ///
    /// Panics if the row or column is closed or the cell is already basic.
    pub fn choose_as_basic(&mut self, row: usize, col: usize) -> Value {
        assert!(
            row < self.supply.len() && col < self.demand.len(),
            "Attempted to choose ({row}, {col}) as basic, but the problem has shape ({}, {})",
            self.supply.len(),
            self.demand.len()
        );
        assert!(
            !self.supply_closed[row],
            "Attempted to choose ({row}, {col}) as basic, but source {row} is closed"
        );
        assert!(
            !self.demand_closed[col],
            "Attempted to choose ({row}, {col}) as basic, but destination {col} is closed"
        );
        assert!(
            !*self.basics.get(row, col),
            "Attempted to choose ({row}, {col}) as basic twice"
        );

        let inc = if self.supply[row] <= self.demand[col] {
            self.supply_closed[row] = true;
            self.supply[row]
        } else {
            self.demand_closed[col] = true;
            self.demand[col]
        };
        self.supply[row] -= inc;
        self.demand[col] -= inc;
        self.basics.set(row, col, true);
        self.basic_values.set(row, col, inc);
        self.total_cost += inc * self.costs.get(row, col);

        log::debug!(
            "Chose ({}, {}) as basic with value {} at cost {}, closing {}.",
            row,
            col,
            inc,
            self.costs.get(row, col),
            if self.supply_closed[row] {
                format!("source {row}")
            } else {
                format!("destination {col}")
            }
        );
        inc
    }

    /// Runs `method` until it finds nothing left to allocate. Returns the number of steps.
    pub fn solve(&mut self, method: &Method) -> usize {
        log::info!("Solving with {}...", method);
        let mut steps = 0;
        while let Some((row, col)) = method.select_next(self) {
            self.choose_as_basic(row, col);
            steps += 1;
        }
        log::info!(
            "{} finished after {} steps with total cost {}.",
            method,
            steps,
            self.total_cost
        );
        log::trace!(
            "Resulting basic cells:\n{}\nwith values:\n{}",
            self.basics,
            self.basic_values
        );
        steps
    }

    pub fn supply(&self) -> &[Value] {
        &self.init_supply
    }

    pub fn demand(&self) -> &[Value] {
        &self.init_demand
    }

    pub fn remaining_supply(&self) -> &[Value] {
        &self.supply
    }

    pub fn remaining_demand(&self) -> &[Value] {
        &self.demand
    }

    pub fn costs(&self) -> &Matrix<Value> {
        &self.costs
    }

    pub fn basics(&self) -> &Matrix<bool> {
        &self.basics
    }

    pub fn basic_values(&self) -> &Matrix<Value> {
        &self.basic_values
    }

    pub fn basic_value(&self, row: usize, col: usize) -> Value {
        *self.basic_values.get(row, col)
    }

    pub fn is_basic(&self, row: usize, col: usize) -> bool {
        *self.basics.get(row, col)
    }

    pub fn supply_is_closed(&self, row: usize) -> bool {
        self.supply_closed[row]
    }

    pub fn demand_is_closed(&self, col: usize) -> bool {
        self.demand_closed[col]
    }

    pub fn closed_supplies(&self) -> &[bool] {
        &self.supply_closed
    }

    pub fn closed_demands(&self) -> &[bool] {
        &self.demand_closed
    }

    pub fn total_cost(&self) -> Value {
        self.total_cost
    }

    pub fn num_sources(&self) -> usize {
        self.init_supply.len()
    }

    pub fn num_destinations(&self) -> usize {
        self.init_demand.len()
    }

    /// Compares the remaining, not the initial, totals.
    pub fn balanced(&self) -> bool {
        self.supply.iter().sum::<Value>() == self.demand.iter().sum::<Value>()
    }

    /// Cells in an open row and an open column that are not basic yet, row-major.
    pub fn live_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.basics.indices().filter(|(row, col)| {
            !self.supply_closed[*row] && !self.demand_closed[*col] && !*self.basics.get(*row, *col)
        })
    }

    pub fn basic_cells(&self) -> Vec<(usize, usize)> {
        self.basics
            .indices()
            .filter(|(row, col)| *self.basics.get(*row, *col))
            .collect()
    }

    pub fn num_basic(&self) -> usize {
        self.basics.elements().filter(|x| **x).count()
    }

    pub fn is_degenerate(&self) -> bool {
        self.num_basic() + 1 < self.num_sources() + self.num_destinations()
            || self
                .basic_cells()
                .iter()
                .any(|(row, col)| self.basic_value(*row, *col) == 0)
    }

    pub fn validate_solution(&self) -> Result<()> {
        for (row, supply) in self.init_supply.iter().enumerate() {
            let shipped: Value = (0..self.num_destinations())
                .map(|col| self.basic_value(row, col))
                .sum();
            if shipped != *supply {
                return Err(SolverError::InvalidSolutionError(format!(
                    "source {row} ships {shipped}, but has supply {supply}"
                )));
            }
        }
        for (col, demand) in self.init_demand.iter().enumerate() {
            let received: Value = self.basic_values.column(col).iter().sum();
            if received != *demand {
                return Err(SolverError::InvalidSolutionError(format!(
                    "destination {col} receives {received}, but has demand {demand}"
                )));
            }
        }

        let max_basic = (self.num_sources() + self.num_destinations()).saturating_sub(1);
        if self.num_basic() > max_basic {
            return Err(SolverError::InvalidSolutionError(format!(
                "{} basic cells exceed the limit of {max_basic}",
                self.num_basic()
            )));
        }

        let recomputed: Value = self
            .basic_cells()
            .iter()
            .map(|(row, col)| self.basic_value(*row, *col) * self.costs.get(*row, *col))
            .sum();
        if recomputed != self.total_cost {
            return Err(SolverError::InvalidSolutionError(format!(
                "total cost is recorded as {}, but the basic cells cost {recomputed}",
                self.total_cost
            )));
        }

        if let Some((row, col)) = self.live_cells().next() {
            return Err(SolverError::InvalidSolutionError(format!(
                "cell ({row}, {col}) could still receive an allocation"
            )));
        }
        Ok(())
    }
}
