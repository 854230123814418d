//! CLI module for eulerkit
//!
//! ## Commands
//!
//! - `primes <LIMIT>` - List (or count) the primes up to a bound
//! - `fib <UPTO>` - Sum the even Fibonacci numbers below a bound
//! - `multiples <UPTO>` - Sum the multiples of a set of divisors
//! - `lcm <MAX_DIVISOR>` - Smallest number divisible by `1..=MAX_DIVISOR`
//! - `bench <PROBLEM>` - Time every strategy of one problem against each other
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;

use std::fmt;
use std::process;

use clap::{Parser, Subcommand, ValueEnum};
use eulerkit_primes::Strategy;

use crate::version::EULERKIT_VERSION;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Numeric puzzle solvers with competing strategies
#[derive(Parser, Debug)]
#[command(name = "eulerkit")]
#[command(version = EULERKIT_VERSION)]
#[command(about = "Numeric puzzle solvers with competing strategies", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List the primes up to LIMIT (inclusive)
    Primes {
        /// Upper bound; integers or whole floats (e.g. 100, 100.0)
        #[arg(value_name = "LIMIT", allow_negative_numbers = true)]
        limit: String,
        #[arg(short, long, value_enum, default_value_t = PrimeMethod::Sieve)]
        method: PrimeMethod,
        /// Print only how many primes were found
        #[arg(long)]
        count: bool,
    },

    /// Sum the even Fibonacci numbers below UPTO
    Fib {
        #[arg(value_name = "UPTO", allow_negative_numbers = true)]
        upto: String,
        #[arg(short, long, value_enum, default_value_t = FibMethod::Third)]
        method: FibMethod,
    },

    /// Sum the numbers up to UPTO (inclusive) divisible by any divisor
    Multiples {
        #[arg(value_name = "UPTO", allow_negative_numbers = true)]
        upto: String,
        /// Divisor to include (repeatable)
        #[arg(short = 'd', long = "divisor", value_name = "N", default_values_t = [3, 5])]
        divisors: Vec<u64>,
        #[arg(short, long, value_enum, default_value_t = MultiplesMethod::Euler)]
        method: MultiplesMethod,
    },

    /// Smallest number evenly divisible by every integer in 1..=MAX_DIVISOR
    Lcm {
        #[arg(value_name = "MAX_DIVISOR", allow_negative_numbers = true)]
        max_divisor: String,
        #[arg(short, long, value_enum, default_value_t = LcmMethod::Powers)]
        method: LcmMethod,
        /// Step for the stepping search (default: lcm of 1..=min(MAX_DIVISOR, 10))
        #[arg(long)]
        step: Option<u64>,
    },

    /// Time every strategy of one problem
    Bench {
        #[arg(value_enum)]
        problem: Problem,
        /// Problem argument (defaults to the classic puzzle input)
        #[arg(value_name = "ARG")]
        arg: Option<String>,
        #[arg(short, long, default_value_t = 3)]
        repeats: u32,
        #[arg(short, long, default_value_t = 100)]
        loops: u32,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PrimeMethod {
    /// Odd-only sieve of Eratosthenes
    Sieve,
    /// Trial division
    Trial,
    /// Lazy trial division
    Lazy,
}

impl From<PrimeMethod> for Strategy {
    fn from(method: PrimeMethod) -> Self {
        match method {
            PrimeMethod::Sieve => Strategy::Sieve,
            PrimeMethod::Trial => Strategy::TrialDivision,
            PrimeMethod::Lazy => Strategy::Lazy,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FibMethod {
    /// Walk every Fibonacci number
    Brute,
    /// Jump between even terms
    Third,
    /// Sum a lazy iterator of even terms
    Lazy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MultiplesMethod {
    /// `(n / d) * d == n`
    Division,
    /// `n % d == 0`
    Remainder,
    /// Closed form with inclusion-exclusion
    Euler,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LcmMethod {
    /// Prime factorisation via the sieve
    Powers,
    /// Try multiples of --step
    Stepping,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Problem {
    Fib,
    Multiples,
    Primes,
    Lcm,
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the CLI command and return result.
pub fn execute(cli: Cli) -> CliResult<ExitCode> {
    match cli.command {
        Command::Primes { limit, method, count } => commands::primes(&limit, method.into(), count),
        Command::Fib { upto, method } => commands::fib(&upto, method),
        Command::Multiples {
            upto,
            divisors,
            method,
        } => commands::multiples(&upto, &divisors, method),
        Command::Lcm {
            max_divisor,
            method,
            step,
        } => commands::lcm(&max_divisor, method, step),
        Command::Bench {
            problem,
            arg,
            repeats,
            loops,
        } => commands::bench(problem, arg.as_deref(), repeats, loops),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_primes_defaults() {
        let cli = Cli::try_parse_from(["eulerkit", "primes", "100"]).unwrap();
        if let Command::Primes { limit, method, count } = cli.command {
            assert_eq!(limit, "100");
            assert_eq!(method, PrimeMethod::Sieve);
            assert!(!count);
        } else {
            panic!("Expected Primes command");
        }
    }

    #[test]
    fn test_cli_parse_primes_method() {
        let cli = Cli::try_parse_from(["eulerkit", "primes", "10.0", "-m", "trial", "--count"]).unwrap();
        if let Command::Primes { method, count, .. } = cli.command {
            assert_eq!(method, PrimeMethod::Trial);
            assert!(count);
        } else {
            panic!("Expected Primes command");
        }
    }

    #[test]
    fn test_cli_parse_multiples_default_divisors() {
        let cli = Cli::try_parse_from(["eulerkit", "multiples", "999"]).unwrap();
        if let Command::Multiples { divisors, method, .. } = cli.command {
            assert_eq!(divisors, vec![3, 5]);
            assert_eq!(method, MultiplesMethod::Euler);
        } else {
            panic!("Expected Multiples command");
        }
    }

    #[test]
    fn test_cli_parse_multiples_custom_divisors() {
        let cli = Cli::try_parse_from(["eulerkit", "multiples", "100", "-d", "4", "-d", "6"]).unwrap();
        if let Command::Multiples { divisors, .. } = cli.command {
            assert_eq!(divisors, vec![4, 6]);
        } else {
            panic!("Expected Multiples command");
        }
    }

    #[test]
    fn test_cli_parse_lcm_step_is_optional() {
        let cli = Cli::try_parse_from(["eulerkit", "lcm", "20", "-m", "stepping"]).unwrap();
        if let Command::Lcm { step, method, .. } = cli.command {
            assert_eq!(step, None);
            assert_eq!(method, LcmMethod::Stepping);
        } else {
            panic!("Expected Lcm command");
        }
        let cli = Cli::try_parse_from(["eulerkit", "lcm", "20", "--step", "2520"]).unwrap();
        assert!(matches!(cli.command, Command::Lcm { step: Some(2520), .. }));
    }

    #[test]
    fn test_cli_parse_bench() {
        let cli = Cli::try_parse_from(["eulerkit", "bench", "lcm", "-r", "1", "-l", "5"]).unwrap();
        if let Command::Bench {
            problem,
            arg,
            repeats,
            loops,
        } = cli.command
        {
            assert_eq!(problem, Problem::Lcm);
            assert_eq!(arg, None);
            assert_eq!(repeats, 1);
            assert_eq!(loops, 5);
        } else {
            panic!("Expected Bench command");
        }
    }

    #[test]
    fn test_cli_rejects_unknown_method() {
        assert!(Cli::try_parse_from(["eulerkit", "fib", "10", "-m", "magic"]).is_err());
    }

    #[test]
    fn test_execute_reports_invalid_limit() {
        let cli = Cli::try_parse_from(["eulerkit", "primes", "10.5"]).unwrap();
        let err = execute(cli).unwrap_err();
        assert_eq!(err.exit_code, ExitCode::FAILURE);
        assert!(err.message.starts_with("InvalidArgument"), "{}", err.message);
    }
}
