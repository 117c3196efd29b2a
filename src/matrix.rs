mod display;
mod eq;
#[allow(clippy::module_inception)]
mod matrix;
mod serde;

pub use matrix::Matrix;
