// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Command line entry point: load an instance file, solve it, print the
//! optimal assignment and the search statistics.

use qap_model::loading::InstanceLoader;
use qap_solver::SolverBuilder;
use std::process::ExitCode;

struct Args {
    instance_path: String,
    num_workers: Option<usize>,
    quiet: bool,
}

fn print_usage(program: &str) {
    eprintln!("Usage: {} <instance-file> [--workers N] [--quiet]", program);
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --workers N  number of worker threads (default: all hardware threads)");
    eprintln!("  --quiet      suppress incumbent improvement logging");
}

fn parse_args(mut args: std::env::Args) -> Result<Args, String> {
    let _program = args.next();

    let mut instance_path = None;
    let mut num_workers = None;
    let mut quiet = false;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--workers" => {
                let value = args
                    .next()
                    .ok_or_else(|| "--workers requires a value".to_string())?;
                let workers: usize = value
                    .parse()
                    .map_err(|_| format!("invalid worker count: {}", value))?;
                if workers == 0 {
                    return Err("worker count must be at least 1".to_string());
                }
                num_workers = Some(workers);
            }
            "--quiet" => quiet = true,
            other if other.starts_with("--") => {
                return Err(format!("unknown option: {}", other));
            }
            other => {
                if instance_path.replace(other.to_string()).is_some() {
                    return Err("expected exactly one instance file".to_string());
                }
            }
        }
    }

    let instance_path = instance_path.ok_or_else(|| "missing instance file".to_string())?;
    Ok(Args {
        instance_path,
        num_workers,
        quiet,
    })
}

fn main() -> ExitCode {
    let args = match parse_args(std::env::args()) {
        Ok(args) => args,
        Err(message) => {
            eprintln!("error: {}", message);
            print_usage("qap-solver");
            return ExitCode::from(2);
        }
    };

    let loader = InstanceLoader::new();
    let instance = match loader.from_path::<i64, _>(&args.instance_path) {
        Ok(instance) => instance,
        Err(error) => {
            eprintln!("error: failed to load '{}': {}", args.instance_path, error);
            return ExitCode::FAILURE;
        }
    };

    let mut builder = SolverBuilder::new();
    if let Some(workers) = args.num_workers {
        builder = builder.with_workers(workers);
    }
    if !args.quiet {
        builder = builder.with_improvement_logging();
    }
    let solver = builder.build();

    println!(
        "Solving instance '{}' (n = {}) with {} worker(s)...",
        args.instance_path,
        instance.n(),
        solver.num_workers()
    );

    let outcome = solver.solve(&instance);
    println!("{}", outcome.solution());
    if args.quiet {
        // With logging enabled the monitor already printed the statistics.
        println!("{}", outcome.statistics());
    }

    ExitCode::SUCCESS
}
