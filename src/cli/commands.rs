//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::fmt::Debug;

use eulerkit_primes::{IntoLimit, Limit, Strategy};

use crate::bench::{BenchConfig, time_and_test};
use crate::solvers::{SolverError, even_fibonacci, multiples, smallest_multiple};

use super::{CliError, CliResult, ExitCode, FibMethod, LcmMethod, MultiplesMethod, Problem};

/// Bounds above this allocate a large sieve mask; worth a warning.
const LARGE_LIMIT: usize = 1_000_000_000;

const DEFAULT_FIB_UPTO: &str = "4000000";
const DEFAULT_MULTIPLES_UPTO: &str = "999";
const DEFAULT_PRIMES_LIMIT: &str = "10000";
const DEFAULT_LCM_MAX_DIVISOR: &str = "20";
const DEFAULT_DIVISORS: [u64; 2] = [3, 5];

// ============================================================================
// Argument conversion
// ============================================================================

/// Parse a numeric bound from command-line text.
///
/// Accepts integers and whole floats (`100`, `100.0`, `1e3`); anything else is reported with the
/// `InvalidArgument` message from the prime core.
pub fn parse_limit(text: &str) -> CliResult<Limit> {
    let limit = text.into_limit().map_err(|e| CliError::failure(e.to_string()))?;
    if limit.get() > LARGE_LIMIT {
        tracing::warn!(limit = limit.get(), "large bound; this may take a while and use a lot of memory");
    }
    Ok(limit)
}

fn parse_u64(text: &str) -> CliResult<u64> {
    let limit = parse_limit(text)?;
    u64::try_from(limit.get()).map_err(|_| CliError::failure(format!("bound '{text}' does not fit in 64 bits")))
}

fn solver_failure(err: SolverError) -> CliError {
    CliError::failure(err.to_string())
}

// ============================================================================
// Rendering
// ============================================================================

/// Render a prime list as space-separated numbers.
pub fn render_primes(primes: &[usize]) -> String {
    primes.iter().map(ToString::to_string).collect::<Vec<_>>().join(" ")
}

// ============================================================================
// Commands
// ============================================================================

/// `eulerkit primes <LIMIT>`
pub fn primes(limit: &str, strategy: Strategy, count: bool) -> CliResult<ExitCode> {
    let limit = parse_limit(limit)?;
    let primes = strategy.primes(limit);
    if count {
        println!("{}", primes.len());
    } else {
        println!("{}", render_primes(&primes));
    }
    Ok(ExitCode::SUCCESS)
}

/// `eulerkit fib <UPTO>`
pub fn fib(upto: &str, method: FibMethod) -> CliResult<ExitCode> {
    let upto = parse_u64(upto)?;
    let total = solve_fib(upto, method).map_err(solver_failure)?;
    println!("{total}");
    Ok(ExitCode::SUCCESS)
}

/// `eulerkit multiples <UPTO>`
pub fn multiples(upto: &str, divisors: &[u64], method: MultiplesMethod) -> CliResult<ExitCode> {
    let upto = parse_u64(upto)?;
    let total = solve_multiples(upto, divisors, method).map_err(solver_failure)?;
    println!("{total}");
    Ok(ExitCode::SUCCESS)
}

/// `eulerkit lcm <MAX_DIVISOR>`
pub fn lcm(max_divisor: &str, method: LcmMethod, step: Option<u64>) -> CliResult<ExitCode> {
    let max_divisor = parse_u64(max_divisor)?;
    let step = match step {
        Some(step) => step,
        None => smallest_multiple::default_step(max_divisor).map_err(solver_failure)?,
    };
    match solve_lcm(max_divisor, method, step).map_err(solver_failure)? {
        Some(answer) => {
            println!("{answer}");
            Ok(ExitCode::SUCCESS)
        }
        None => Err(CliError::failure(format!(
            "no multiple of {step} below {} is divisible by 1..={max_divisor}",
            smallest_multiple::SEARCH_CEILING
        ))),
    }
}

/// `eulerkit bench <PROBLEM>`: print one report line per strategy.
pub fn bench(problem: Problem, arg: Option<&str>, repeats: u32, loops: u32) -> CliResult<ExitCode> {
    let config = BenchConfig::new(repeats, loops).map_err(|e| CliError::failure(e.to_string()))?;
    for line in bench_lines(problem, arg, config)? {
        println!("{line}");
    }
    Ok(ExitCode::SUCCESS)
}

/// Run every strategy for `problem` and render the reports.
pub fn bench_lines(problem: Problem, arg: Option<&str>, config: BenchConfig) -> CliResult<Vec<String>> {
    let lines: Vec<String> = match problem {
        Problem::Fib => {
            let upto = parse_u64(arg.unwrap_or(DEFAULT_FIB_UPTO))?;
            [FibMethod::Brute, FibMethod::Third, FibMethod::Lazy]
                .into_iter()
                .map(|m| report(format!("{m:?}"), config, || solve_fib(upto, m)))
                .collect()
        }
        Problem::Multiples => {
            let upto = parse_u64(arg.unwrap_or(DEFAULT_MULTIPLES_UPTO))?;
            [
                MultiplesMethod::Division,
                MultiplesMethod::Remainder,
                MultiplesMethod::Euler,
            ]
            .into_iter()
            .map(|m| report(format!("{m:?}"), config, || solve_multiples(upto, &DEFAULT_DIVISORS, m)))
            .collect()
        }
        Problem::Primes => {
            let limit = parse_limit(arg.unwrap_or(DEFAULT_PRIMES_LIMIT))?;
            Strategy::ALL
                .into_iter()
                .map(|s| report(s.as_str(), config, || strategy_count(s, limit)))
                .collect()
        }
        Problem::Lcm => {
            let max_divisor = parse_u64(arg.unwrap_or(DEFAULT_LCM_MAX_DIVISOR))?;
            let step = smallest_multiple::default_step(max_divisor).map_err(solver_failure)?;
            [LcmMethod::Stepping, LcmMethod::Powers]
                .into_iter()
                .map(|m| report(format!("{m:?}"), config, || solve_lcm(max_divisor, m, step)))
                .collect()
        }
    };
    Ok(lines)
}

fn report<T: Debug>(label: impl Into<String>, config: BenchConfig, f: impl FnMut() -> T) -> String {
    time_and_test(label, config, f).to_string()
}

fn strategy_count(strategy: Strategy, limit: Limit) -> usize {
    strategy.primes(limit).len()
}

// ============================================================================
// Strategy dispatch
// ============================================================================

pub fn solve_fib(upto: u64, method: FibMethod) -> Result<u64, SolverError> {
    match method {
        FibMethod::Brute => even_fibonacci::brute_force(upto),
        FibMethod::Third => even_fibonacci::every_third(upto),
        FibMethod::Lazy => even_fibonacci::lazy_sum(upto),
    }
}

pub fn solve_multiples(upto: u64, divisors: &[u64], method: MultiplesMethod) -> Result<u64, SolverError> {
    match method {
        MultiplesMethod::Division => multiples::by_division(upto, divisors),
        MultiplesMethod::Remainder => multiples::by_remainder(upto, divisors),
        MultiplesMethod::Euler => multiples::inclusion_exclusion(upto, divisors),
    }
}

pub fn solve_lcm(max_divisor: u64, method: LcmMethod, step: u64) -> Result<Option<u64>, SolverError> {
    match method {
        LcmMethod::Powers => smallest_multiple::by_prime_powers(max_divisor).map(Some),
        LcmMethod::Stepping => smallest_multiple::by_stepping(max_divisor, step),
    }
}
