mod util;

use clap::Parser;
use std::io::Write;
use text_io::read;

use transport_ibfs::{Options, Problem, Result};
use util::{level_from_flags, run_benchmark, setup_logger, Args, Commands};

macro_rules! attempt {
    ($e:expr) => {
        match $e {
            Ok(result) => result,
            Err(e) => {
                log::error!("{e}");
                println!("{e}");
                std::process::exit(1);
            }
        }
    };
}

fn main() {
    let args = Args::parse();
    setup_logger(level_from_flags(args.quiet, args.trace, args.debug));

    let options = Options {
        methods: args.methods.clone(),
        big_m: args.big_m,
    };

    match &args.command {
        Commands::Solve { file, text, output } => {
            let problem = attempt!(load(file, *text, &options));
            attempt!(solve(problem, output, &args.export));
        }
        Commands::Interactive { output } => {
            let problem = attempt!(read_interactively(&options));
            attempt!(solve(problem, output, &args.export));
        }
        Commands::Random {
            sources,
            destinations,
            output,
            smin,
            smax,
            cmin,
            cmax,
        } => {
            let problem = attempt!(Problem::from_random(
                *sources,
                *destinations,
                (*smin, *smax),
                (*cmin, *cmax)
            ))
            .with_options(&options);
            attempt!(solve(problem, output, &args.export));
        }
        Commands::Benchmark {
            file,
            text,
            iterations,
        } => {
            let problem = attempt!(load(file, *text, &options));
            attempt!(run_benchmark(&problem, *iterations));
        }
    }
}

fn load(file: &str, text: bool, options: &Options) -> Result<Problem> {
    if text {
        Problem::from_text_file(file, options)
    } else {
        Ok(Problem::from_file(file)?.with_options(options))
    }
}

fn solve(mut problem: Problem, output: &Option<String>, export: &Option<String>) -> Result<()> {
    problem.solve()?;
    println!("{}", problem);
    problem.validate_solution()?;

    if let Some(filename) = output {
        problem.serialize(filename)?;
    }
    if let Some(filename) = export {
        problem.export(filename)?;
    }
    Ok(())
}

fn read_interactively(options: &Options) -> Result<Problem> {
    let mut lines: Vec<String> = vec![];

    print!("A vector of coefficients of supply: ");
    let _ = std::io::stdout().flush();
    let supply: String = read!("{}\n");
    let num_sources = supply.split_whitespace().count();
    lines.push(supply);

    println!("A matrix of coefficients of costs:");
    for _ in 0..num_sources {
        let costs: String = read!("{}\n");
        lines.push(costs);
    }

    print!("A vector of coefficients of demand: ");
    let _ = std::io::stdout().flush();
    let demand: String = read!("{}\n");
    lines.push(demand);

    Problem::from_text(&lines.join("\n"), options)
}
