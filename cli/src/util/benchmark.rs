use std::time::Duration;

use transport_ibfs::{Method, Problem, Result};

pub(crate) fn run_benchmark(problem: &Problem, iterations: usize) -> Result<()> {
    let methods = &problem.options.methods;
    let mut solve: Vec<Duration> = vec![Duration::ZERO; methods.len()];

    for _ in 0..iterations {
        let mut p: Problem = problem.clone();
        p.solve()?;
        if let Some(solutions) = p.solutions() {
            for (total, solution) in solve.iter_mut().zip(solutions) {
                *total += solution.elapsed;
            }
        }
    }

    for (method, total) in methods.iter().zip(solve) {
        print_average(method, total / iterations.max(1) as u32, iterations);
    }
    Ok(())
}

fn print_average(method: &Method, elapsed: Duration, iterations: usize) {
    println!(
        "{} ({}) took {}s and {}µs on average (n={}).",
        method,
        method.shorthand(),
        elapsed.as_secs(),
        elapsed.subsec_micros(),
        iterations,
    );
}
