mod args;
mod benchmark;
mod logging;

pub(super) use args::{Args, Commands};
pub(super) use benchmark::run_benchmark;
pub(super) use logging::{level_from_flags, setup_logger};
