#![forbid(unsafe_code)]
//! eulerkit: numeric puzzle solvers with competing strategies
//!
//! Each puzzle (even Fibonacci sum, multiples sum, smallest common multiple) is solved two or three
//! different ways, and the `bench` harness times the strategies against each other. Prime
//! generation lives in the `eulerkit_primes` crate and is re-exported here.
//!
//! ## Panic Policy
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module
//!   enforces `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.

pub mod bench;
pub mod cli;
pub mod solvers;
pub mod version;

pub use eulerkit_primes::{
    IntoLimit, Limit, Numeric, PrimeError, PrimeSeq, Strategy, eratosthenes_sieve, prime_sieve, primes_upto,
};
pub use solvers::{SolverError, SolverResult};
