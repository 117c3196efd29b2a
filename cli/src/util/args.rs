use clap::{Parser, Subcommand};
use transport_ibfs::{Method, Value, DEFAULT_BIG_M};

/// CLI for finding initial basic feasible solutions of balanced transportation problems.
#[derive(Parser, Debug)]
#[command()]
pub(crate) struct Args {
    #[command(subcommand)]
    pub(crate) command: Commands,

    /// Enable [v]erbose debug logging
    #[arg(long, short = 'v', global = true, display_order = 1)]
    pub(crate) debug: bool,

    /// Enable [t]race logging
    #[arg(long, short, global = true, display_order = 2)]
    pub(crate) trace: bool,

    /// Disable logging, [q]uieting output. Takes precedence over debug.
    #[arg(long, short, global = true, display_order = 3)]
    pub(crate) quiet: bool,

    /// [E]xport the measures of every solution, appending them to the given file.
    #[arg(long, short, global = true, display_order = 4)]
    pub(crate) export: Option<String>,

    /// [M]ethods used to construct initial solutions
    #[arg(long, short = 'm', value_enum, num_args = 1.., default_values_t = Method::all(), global = true, display_order = 11, help_heading = "Solver Parameters")]
    pub(crate) methods: Vec<Method>,

    /// Cost used for routes marked "M" in text input
    #[arg(long, default_value_t = DEFAULT_BIG_M, global = true, display_order = 12, help_heading = "Solver Parameters")]
    pub(crate) big_m: Value,
}

#[derive(Subcommand, Debug)]
pub(crate) enum Commands {
    /// Solve the problem stored in the given file.
    Solve {
        /// Path to a file containing a problem to be used as input.
        file: String,

        /// Read the file as lines of supplies, costs and demands instead of JSON
        #[arg(long, display_order = 0)]
        text: bool,

        /// Path to [o]utput file to save the problem in as JSON
        #[arg(short, long, display_order = 0)]
        output: Option<String>,
    },
    /// Enter supplies, costs and demands line by line.
    Interactive {
        /// Path to [o]utput file to save the problem in as JSON
        #[arg(short, long, display_order = 0)]
        output: Option<String>,
    },
    /// Create a random balanced problem instead of using an input file.
    Random {
        /// Number of sources
        sources: usize,

        /// Number of destinations
        destinations: usize,

        /// Path to [o]utput file to save the problem in as JSON
        #[arg(short, long, display_order = 0)]
        output: Option<String>,

        /// Minimum supply of a source
        #[arg(long, default_value_t = 10, display_order = 100, help_heading = "Random Problem")]
        smin: Value,

        /// Maximum supply of a source
        #[arg(long, default_value_t = 200, display_order = 101, help_heading = "Random Problem")]
        smax: Value,

        /// Minimum route cost
        #[arg(long, default_value_t = 1, display_order = 102, help_heading = "Random Problem")]
        cmin: Value,

        /// Maximum route cost
        #[arg(long, default_value_t = 12, display_order = 103, help_heading = "Random Problem")]
        cmax: Value,
    },
    /// Benchmark the construction of initial solutions.
    Benchmark {
        /// Path to a file containing a problem to be used as input.
        file: String,

        /// Read the file as lines of supplies, costs and demands instead of JSON
        #[arg(long, display_order = 0)]
        text: bool,

        /// Number of [i]terations over which to average
        #[arg(short, long, display_order = 0)]
        iterations: usize,
    },
}
