use std::fmt::Display;

use crate::matrix::Matrix;

use super::{Problem, ProblemState};

impl ProblemState {
    /// Header row and column with 1-based indices, closed ones marked with `*`, and the
    /// supply and demand margins.
    fn table_frame(&self) -> Matrix<String> {
        let (h, w) = (self.num_sources(), self.num_destinations());
        let mut table: Matrix<String> = Matrix::new(h + 2, w + 2);
        table.set(0, 0, "Source\\Dest".to_string());
        for col in 0..w {
            let marker = if self.demand_is_closed(col) { "*" } else { "" };
            table.set(0, col + 1, format!("{}{}", col + 1, marker));
        }
        for row in 0..h {
            let marker = if self.supply_is_closed(row) { "*" } else { "" };
            table.set(row + 1, 0, format!("{}{}", row + 1, marker));
        }
        table.set(h + 1, 0, "Demand".to_string());
        table.set(0, w + 1, "Supply".to_string());
        table
    }

    pub fn render_initial_table(&self) -> Matrix<String> {
        let (h, w) = (self.num_sources(), self.num_destinations());
        let mut table = self.table_frame();
        for (row, supply) in self.supply().iter().enumerate() {
            table.set(row + 1, w + 1, supply.to_string());
        }
        for (col, demand) in self.demand().iter().enumerate() {
            table.set(h + 1, col + 1, demand.to_string());
        }
        for (row, col) in self.costs().indices() {
            table.set(row + 1, col + 1, format!("${}", self.costs().get(row, col)));
        }
        table
    }

    /// Basic cells as `amount ($cost)`, margins as `(remaining) initial`.
    pub fn render(&self) -> Matrix<String> {
        let (h, w) = (self.num_sources(), self.num_destinations());
        let mut table = self.table_frame();
        for (row, supply) in self.supply().iter().enumerate() {
            table.set(
                row + 1,
                w + 1,
                format!("({}) {}", self.remaining_supply()[row], supply),
            );
        }
        for (col, demand) in self.demand().iter().enumerate() {
            table.set(
                h + 1,
                col + 1,
                format!("({}) {}", self.remaining_demand()[col], demand),
            );
        }
        for (row, col) in self.basic_cells() {
            table.set(
                row + 1,
                col + 1,
                format!(
                    "{} (${})",
                    self.basic_value(row, col),
                    self.costs().get(row, col)
                ),
            );
        }
        table
    }

    /// `[x11, x23] = [120, 40]`, with 1-based source and destination indices.
    pub fn basic_vector(&self) -> String {
        let cells = self.basic_cells();
        format!(
            "[{}] = [{}]",
            cells
                .iter()
                .map(|(row, col)| format!("x{}{}", row + 1, col + 1))
                .collect::<Vec<_>>()
                .join(", "),
            cells
                .iter()
                .map(|(row, col)| self.basic_value(*row, *col).to_string())
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}

impl Display for Problem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut string_repr: Vec<String> = vec![];
        string_repr.push("Input parameter table:".to_string());
        string_repr.push(match self.initial_state() {
            Ok(state) => state.render_initial_table().to_table(),
            Err(e) => e.to_string(),
        });
        string_repr.push("".to_string());
        match &self.solutions {
            Some(solutions) => {
                string_repr.push("--- Initial basic feasible solutions ---".to_string());
                string_repr.push("".to_string());
                solutions.iter().for_each(|solution| {
                    string_repr.push(format!("{}\n", solution));
                });
            }
            None => string_repr.push("Solution has not been calculated yet.".to_string()),
        }
        write!(f, "{}", string_repr.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::Method;

    fn setup() -> ProblemState {
        let costs = Matrix::from_rows(&[vec![7, 4, 1, 2], vec![4, 5, 9, 8], vec![9, 2, 3, 6]]);
        ProblemState::new(&[160, 140, 170], &[120, 50, 190, 110], &costs).unwrap()
    }

    #[test]
    fn test_render_initial_table() {
        let table = setup().render_initial_table();
        assert_eq!(5, table.num_rows());
        assert_eq!(6, table.num_columns());
        assert_eq!("Source\\Dest", table.get(0, 0));
        assert_eq!("4", table.get(0, 4));
        assert_eq!("Supply", table.get(0, 5));
        assert_eq!("$7", table.get(1, 1));
        assert_eq!("170", table.get(3, 5));
        assert_eq!("Demand", table.get(4, 0));
        assert_eq!("110", table.get(4, 4));
        assert_eq!("", table.get(4, 5));
    }

    #[test]
    fn test_render_marks_closed_and_basic() {
        let mut state = setup();
        state.choose_as_basic(0, 0);
        let table = state.render();

        assert_eq!("1*", table.get(0, 1));
        assert_eq!("1", table.get(1, 0));
        assert_eq!("120 ($7)", table.get(1, 1));
        assert_eq!("", table.get(1, 2));
        assert_eq!("(40) 160", table.get(1, 5));
        assert_eq!("(0) 120", table.get(4, 1));
    }

    #[test]
    fn test_basic_vector() {
        let mut state = setup();
        state.solve(&Method::NorthwestCorner);
        assert_eq!(
            "[x11, x12, x22, x23, x33, x34] = [120, 40, 10, 130, 60, 110]",
            state.basic_vector()
        );
    }

    #[test]
    fn test_display_problem_before_and_after_solve() {
        let mut problem = Problem::new(
            vec![5, 5],
            vec![5, 5],
            Matrix::from_rows(&[vec![1, 2], vec![3, 4]]),
        );
        assert!(problem
            .to_string()
            .ends_with("Solution has not been calculated yet."));

        problem.solve().unwrap();
        let repr = problem.to_string();
        for method in Method::all() {
            assert!(repr.contains(&format!("{}:", method)));
        }
        assert!(repr.contains("Total cost: "));
        assert_eq!(25, problem.solutions().unwrap()[0].state.total_cost());
    }
}
