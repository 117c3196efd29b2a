use crate::{problem::ProblemState, Value};

/// Picks the live cell with the most negative `cost - u[row] - v[col]`, where `u` and `v`
/// are the largest live costs of each row and column. Ties go to the first cell in
/// row-major order. The opportunity value is taken in `i128` since it can fall below
/// `-Value::MAX`.
pub(crate) fn russell(state: &ProblemState) -> Option<(usize, usize)> {
    let costs = state.costs();
    let live: Vec<(usize, usize)> = state.live_cells().collect();

    let mut u: Vec<Value> = vec![Value::MIN; state.num_sources()];
    let mut v: Vec<Value> = vec![Value::MIN; state.num_destinations()];
    for (row, col) in live.iter() {
        let cost = *costs.get(*row, *col);
        u[*row] = u[*row].max(cost);
        v[*col] = v[*col].max(cost);
    }

    let ((row, col), delta) = live
        .iter()
        .map(|(row, col)| {
            let delta = i128::from(*costs.get(*row, *col))
                - i128::from(u[*row])
                - i128::from(v[*col]);
            ((*row, *col), delta)
        })
        .min_by_key(|(_, delta)| *delta)?;
    log::trace!("Row maxima {:?}, column maxima {:?}.", u, v);

    if delta > 0 {
        return None;
    }
    log::debug!("Smallest opportunity value {} selects ({}, {}).", delta, row, col);
    Some((row, col))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{algorithms::tests::setup, matrix::Matrix, options::Method};

    #[test]
    fn test_first_selection() {
        // (0, 2) and (2, 2) share the smallest value of -15, (0, 2) comes first
        let state = setup();
        assert_eq!(Some((0, 2)), russell(&state));
    }

    #[test]
    fn test_opportunity_below_value_range() {
        let costs = Matrix::from_rows(&[vec![0, Value::MAX], vec![Value::MAX, 5]]);
        let state = ProblemState::new(&[1, 1], &[1, 1], &costs).unwrap();
        assert_eq!(Some((0, 0)), russell(&state));
    }

    #[test]
    fn test_ties_go_to_first_cell() {
        let costs = Matrix::from_rows(&[vec![3, 3], vec![3, 3]]);
        let state = ProblemState::new(&[5, 5], &[5, 5], &costs).unwrap();
        assert_eq!(Some((0, 0)), russell(&state));
    }

    #[test]
    fn test_allocation_sequence() {
        let mut state = setup();
        let mut chosen = vec![];
        while let Some((row, col)) = russell(&state) {
            chosen.push((row, col, state.choose_as_basic(row, col)));
        }
        assert_eq!(
            vec![
                (0, 2, 160),
                (2, 2, 30),
                (1, 0, 120),
                (2, 1, 50),
                (1, 3, 20),
                (2, 3, 90)
            ],
            chosen
        );
    }

    #[test]
    fn test_total_cost() {
        let mut state = setup();
        state.solve(&Method::Russell);
        assert_eq!(1530, state.total_cost());
    }
}
