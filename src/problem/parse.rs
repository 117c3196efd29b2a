use crate::{matrix::Matrix, options::Options, Result, SolverError, Value};

use super::Problem;

impl Problem {
    /// Reads a line of supplies, one line of costs per source and a line of demands.
    /// Blank lines are skipped and `M` stands for `options.big_m`.
    pub fn from_text(text: &str, options: &Options) -> Result<Self> {
        let mut lines = text.lines().filter(|line| !line.trim().is_empty());

        let supply = parse_line(lines.next(), "supply", options)?;
        let cost_rows = (0..supply.len())
            .map(|i| parse_line(lines.next(), &format!("costs of source {}", i + 1), options))
            .collect::<Result<Vec<_>>>()?;
        let demand = parse_line(lines.next(), "demand", options)?;

        let costs = if cost_rows.is_empty() {
            Matrix::new(0, demand.len())
        } else {
            Matrix::try_from_rows(&cost_rows)?
        };
        log::debug!(
            "Parsed {} supplies, {} demands and costs\n{}",
            supply.len(),
            demand.len(),
            costs
        );
        Ok(Problem::new(supply, demand, costs).with_options(options))
    }

    pub fn from_text_file(filename: &str, options: &Options) -> Result<Self> {
        log::debug!("Reading problem text from {}", filename);
        let text = std::fs::read_to_string(filename)?;
        Problem::from_text(&text, options)
    }
}

fn parse_line(line: Option<&str>, what: &str, options: &Options) -> Result<Vec<Value>> {
    let Some(line) = line else {
        return Err(SolverError::ProblemParseError(format!(
            "expected a line of {what}, but the input ended"
        )));
    };
    line.split_whitespace()
        .map(|token| {
            if token.eq_ignore_ascii_case("m") {
                Ok(options.big_m)
            } else {
                token.parse::<Value>().map_err(|e| {
                    SolverError::ProblemParseError(format!(
                        "\"{token}\" in the line of {what} is not a number: {e}"
                    ))
                })
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_text() {
        let text = "160 140 170\n7 4 1 2\n4 5 9 8\n\n9 2 3 6\n120 50 190 110\n";
        let problem = Problem::from_text(text, &Options::default()).unwrap();

        assert_eq!(vec![160, 140, 170], problem.supply);
        assert_eq!(vec![120, 50, 190, 110], problem.demand);
        assert_eq!(vec![4, 5, 9, 8], problem.costs.as_rows()[1]);
        assert!(problem.validate().is_ok());
    }

    #[test]
    fn test_big_m_token() {
        let options = Options {
            big_m: 99,
            ..Options::default()
        };
        let problem = Problem::from_text("1 1\n1 M\nm 1\n1 1", &options).unwrap();
        assert_eq!(
            Matrix::from_rows(&[vec![1, 99], vec![99, 1]]),
            problem.costs
        );
        assert_eq!(99, problem.options.big_m);
    }

    #[test]
    fn test_negative_values_parse_but_fail_validation() {
        let problem = Problem::from_text("1 1\n1 -2\n3 4\n1 1", &Options::default()).unwrap();
        assert!(matches!(problem.validate(), Err(SolverError::InvalidInput(_))));
    }

    #[test]
    fn test_missing_line() {
        assert!(matches!(
            Problem::from_text("1 1\n1 2\n", &Options::default()),
            Err(SolverError::ProblemParseError(_))
        ));
    }

    #[test]
    fn test_bad_token() {
        assert!(matches!(
            Problem::from_text("1 x\n1 2\n3 4\n1 1", &Options::default()),
            Err(SolverError::ProblemParseError(_))
        ));
    }

    #[test]
    fn test_ragged_costs() {
        assert!(matches!(
            Problem::from_text("1 1\n1 2\n3\n1 1", &Options::default()),
            Err(SolverError::InvalidShape(_))
        ));
    }
}
