use crate::problem::ProblemState;

/// Pairs the first open destination with the first open source, ignoring costs.
pub(crate) fn northwest_corner(state: &ProblemState) -> Option<(usize, usize)> {
    let col = (0..state.num_destinations()).find(|col| !state.demand_is_closed(*col))?;
    let row = (0..state.num_sources()).find(|row| !state.supply_is_closed(*row))?;
    Some((row, col))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{algorithms::tests::setup, options::Method};

    #[test]
    fn test_first_selection_is_top_left() {
        let mut state = setup();
        assert_eq!(Some((0, 0)), northwest_corner(&state));
        assert_eq!(120, state.choose_as_basic(0, 0));
        assert!(state.demand_is_closed(0));
    }

    #[test]
    fn test_walks_the_staircase() {
        let mut state = setup();
        let mut chosen = vec![];
        while let Some((row, col)) = northwest_corner(&state) {
            chosen.push((row, col, state.choose_as_basic(row, col)));
        }
        assert_eq!(
            vec![
                (0, 0, 120),
                (0, 1, 40),
                (1, 1, 10),
                (1, 2, 130),
                (2, 2, 60),
                (2, 3, 110)
            ],
            chosen
        );
    }

    #[test]
    fn test_total_cost() {
        let mut state = setup();
        assert_eq!(6, state.solve(&Method::NorthwestCorner));
        assert_eq!(3060, state.total_cost());
    }
}
