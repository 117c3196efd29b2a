use clap::ValueEnum;
use serde::Serialize;
use strum::Display;

/// Construction heuristic used to find an initial basic feasible solution.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Display, Serialize)]
#[clap(rename_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum Method {
    #[strum(to_string = "North-west corner rule")]
    NorthwestCorner,
    #[strum(to_string = "Vogel approximation")]
    Vogel,
    #[strum(to_string = "Russell approximation")]
    Russell,
}

impl Method {
    pub fn all() -> Vec<Method> {
        vec![Method::NorthwestCorner, Method::Vogel, Method::Russell]
    }

    pub fn shorthand(&self) -> String {
        match self {
            Method::NorthwestCorner => "nwcr",
            Method::Vogel => "vam",
            Method::Russell => "ram",
        }
        .to_string()
    }
}
