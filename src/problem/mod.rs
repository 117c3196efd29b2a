mod display;
mod export;
mod parse;
#[allow(clippy::module_inception)]
mod problem;
mod solution;
mod state;

pub use problem::Problem;
pub use solution::Solution;
pub use state::ProblemState;
