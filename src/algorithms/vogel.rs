use crate::{problem::ProblemState, Value};

type Candidate = (Value, usize);

/// Picks the open row or column with the largest gap between its two cheapest live costs
/// and allocates at its cheapest cell. Columns are scanned before rows and the first
/// largest penalty wins.
pub(crate) fn vogel(state: &ProblemState) -> Option<(usize, usize)> {
    let costs = state.costs();
    let (h, w) = (state.num_sources(), state.num_destinations());
    let mut best: Option<(Value, usize, usize)> = None;

    for col in (0..w).filter(|col| !state.demand_is_closed(*col)) {
        let live = (0..h)
            .filter(|row| !state.is_basic(*row, col) && !state.supply_is_closed(*row))
            .map(|row| (*costs.get(row, col), row));
        let Some((cheapest, runner_up)) = two_min(live) else {
            continue;
        };
        let penalty = runner_up.0 - cheapest.0;
        log::trace!("Penalty of destination {} is {}.", col, penalty);
        if best.map_or(true, |(best_penalty, _, _)| best_penalty < penalty) {
            best = Some((penalty, cheapest.1, col));
        }
    }

    for row in (0..h).filter(|row| !state.supply_is_closed(*row)) {
        let live = (0..w)
            .filter(|col| !state.is_basic(row, *col) && !state.demand_is_closed(*col))
            .map(|col| (*costs.get(row, col), col));
        let Some((cheapest, runner_up)) = two_min(live) else {
            continue;
        };
        let penalty = runner_up.0 - cheapest.0;
        log::trace!("Penalty of source {} is {}.", row, penalty);
        if best.map_or(true, |(best_penalty, _, _)| best_penalty < penalty) {
            best = Some((penalty, row, cheapest.1));
        }
    }

    best.map(|(penalty, row, col)| {
        log::debug!("Largest penalty {} selects ({}, {}).", penalty, row, col);
        (row, col)
    })
}

/// The two smallest candidates, ordered by cost and then by index. A single candidate is
/// returned twice.
fn two_min(candidates: impl Iterator<Item = Candidate>) -> Option<(Candidate, Candidate)> {
    let mut cheapest: Option<Candidate> = None;
    let mut runner_up: Option<Candidate> = None;
    for candidate in candidates {
        match cheapest {
            Some(current) if candidate < current => {
                runner_up = Some(current);
                cheapest = Some(candidate);
            }
            Some(_) => {
                if runner_up.map_or(true, |current| candidate < current) {
                    runner_up = Some(candidate);
                }
            }
            None => cheapest = Some(candidate),
        }
    }
    cheapest.map(|cheapest| (cheapest, runner_up.unwrap_or(cheapest)))
}
