use std::{fmt::Display, time::Duration};

use crate::options::Method;

use super::ProblemState;

/// The finished state of one method's run.
#[derive(Debug, Clone)]
pub struct Solution {
    pub method: Method,
    pub state: ProblemState,
    pub steps: usize,
    pub elapsed: Duration,
}

impl Display for Solution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut string_repr: Vec<String> = vec![];
        string_repr.push(format!("{}:", self.method));
        string_repr.push(
            self.state
                .render()
                .highlight(
                    &self
                        .state
                        .basic_cells()
                        .iter()
                        .map(|(row, col)| (row + 1, col + 1))
                        .collect::<Vec<_>>(),
                    colored::Color::Green,
                )
                .to_table(),
        );
        string_repr.push(format!("Basic variables: {}", self.state.basic_vector()));
        string_repr.push(format!("Total cost: {}", self.state.total_cost()));
        if self.state.is_degenerate() {
            string_repr.push("The solution is degenerate.".to_string());
        }
        write!(f, "{}", string_repr.join("\n"))
    }
}
