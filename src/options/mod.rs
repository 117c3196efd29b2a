mod method;

pub use method::Method;

use crate::Value;

/// Cost standing in for the token `M` in text input, large enough to keep a route unused.
pub const DEFAULT_BIG_M: Value = 1000;

#[derive(Debug, Clone)]
pub struct Options {
    pub methods: Vec<Method>,
    pub big_m: Value,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            methods: Method::all(),
            big_m: DEFAULT_BIG_M,
        }
    }
}
