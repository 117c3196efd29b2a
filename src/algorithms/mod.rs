mod northwest_corner;
mod russell;
mod vogel;

use northwest_corner::northwest_corner;
use russell::russell;
use vogel::vogel;

use crate::{options::Method, problem::ProblemState};

impl Method {
    /// Chooses the next cell to make basic, or `None` once nothing is left to allocate.
    /// Never mutates the state; [`ProblemState::solve`] applies the choice.
    pub fn select_next(&self, state: &ProblemState) -> Option<(usize, usize)> {
        match self {
            Method::NorthwestCorner => northwest_corner(state),
            Method::Vogel => vogel(state),
            Method::Russell => russell(state),
        }
    }
}
