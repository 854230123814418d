//! End-to-end checks of the command layer (argument parsing through command execution).

use clap::Parser;
use eulerkit::bench::BenchConfig;
use eulerkit::cli::commands::{bench_lines, parse_limit, render_primes};
use eulerkit::cli::{Cli, ExitCode, Problem, execute};
use eulerkit::prime_sieve;

fn run(args: &[&str]) -> Result<ExitCode, String> {
    let mut argv = vec!["eulerkit"];
    argv.extend_from_slice(args);
    let cli = Cli::try_parse_from(argv).map_err(|e| e.to_string())?;
    execute(cli).map_err(|e| e.message)
}

#[test]
fn every_subcommand_succeeds_on_classic_input() {
    assert_eq!(run(&["primes", "100"]), Ok(ExitCode::SUCCESS));
    assert_eq!(run(&["primes", "100.0", "--method", "lazy", "--count"]), Ok(ExitCode::SUCCESS));
    assert_eq!(run(&["fib", "4000000", "-m", "brute"]), Ok(ExitCode::SUCCESS));
    assert_eq!(run(&["multiples", "999", "-d", "3", "-d", "5"]), Ok(ExitCode::SUCCESS));
    assert_eq!(run(&["lcm", "20", "-m", "stepping"]), Ok(ExitCode::SUCCESS));
    assert_eq!(run(&["bench", "fib", "-r", "1", "-l", "1"]), Ok(ExitCode::SUCCESS));
}

#[test]
fn invalid_bounds_fail_with_invalid_argument() {
    for bad in ["10.5", "abc", "-3", "NaN"] {
        let err = run(&["primes", bad]).unwrap_err();
        assert!(err.starts_with("InvalidArgument"), "{bad}: {err}");
    }
}

#[test]
fn solver_errors_are_reported() {
    let err = run(&["multiples", "10", "-d", "0"]).unwrap_err();
    assert_eq!(err, "ZeroDivisionError: divisor must be non-zero");

    let err = run(&["lcm", "100"]).unwrap_err();
    assert!(err.starts_with("OverflowError"), "{err}");
}

#[test]
fn lcm_of_a_huge_range_overflows_instead_of_sieving() {
    for method in ["powers", "stepping"] {
        let err = run(&["lcm", "1e19", "-m", method]).unwrap_err();
        assert_eq!(err, "OverflowError: result of smallest multiple does not fit in 64 bits", "{method}");
    }
}

#[test]
fn lcm_stepping_default_step_fits_small_ranges() {
    assert_eq!(run(&["lcm", "5", "-m", "stepping"]), Ok(ExitCode::SUCCESS));
    let config = BenchConfig::new(1, 1).unwrap();
    for arg in ["0", "1", "5", "7", "12", "23"] {
        let lines = bench_lines(Problem::Lcm, Some(arg), config).unwrap();
        let outputs: Vec<&str> = lines
            .iter()
            .map(|l| l.split(" in best ").next().unwrap().split_whitespace().last().unwrap())
            .collect();
        assert_eq!(outputs[0], outputs[1], "{arg}: {lines:?}");
    }
}

#[test]
fn bench_rejects_zero_loops() {
    let err = run(&["bench", "primes", "-l", "0"]).unwrap_err();
    assert_eq!(err, "invalid benchmark configuration: loops must be at least 1");
}

#[test]
fn bench_reports_agree_on_output() {
    let config = BenchConfig::new(1, 2).unwrap();
    for problem in [Problem::Fib, Problem::Multiples, Problem::Lcm] {
        let lines = bench_lines(problem, None, config).unwrap();
        let outputs: Vec<&str> = lines
            .iter()
            .map(|l| l.split(" in best ").next().unwrap().split_whitespace().last().unwrap())
            .collect();
        assert!(outputs.windows(2).all(|w| w[0] == w[1]), "{problem:?}: {lines:?}");
    }
}

#[test]
fn rendered_primes_match_sieve() {
    let limit = parse_limit("30").unwrap();
    let primes = prime_sieve(limit).unwrap();
    insta::assert_snapshot!(render_primes(&primes), @"2 3 5 7 11 13 17 19 23 29");
}
