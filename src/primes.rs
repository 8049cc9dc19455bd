//! The candidate secret set: every five-digit prime.
//!
//! The pool is computed once at startup by filtering the 10000..=99999 range
//! through a trial-division primality test. Game code never runs the test
//! itself; it validates guesses and draws secrets through [`SecretPool`].

use rand::seq::SliceRandom;
use rand::Rng;
use rayon::prelude::*;
use tracing::info;

/// Deterministic primality test by trial division.
///
/// More than fast enough for the five-digit range this game draws from.
pub fn is_prime(n: u32) -> bool {
    if n < 2 {
        return false;
    }
    if n % 2 == 0 {
        return n == 2;
    }
    let mut d: u32 = 3;
    while u64::from(d) * u64::from(d) <= u64::from(n) {
        if n % d == 0 {
            return false;
        }
        d += 2;
    }
    true
}

/// The read-only set of candidate secrets, held as 5-digit strings in
/// ascending order.
#[derive(Debug, Clone)]
pub struct SecretPool {
    primes: Vec<String>,
}

impl SecretPool {
    /// Build the full pool by filtering the five-digit range in parallel.
    pub fn new() -> Self {
        let primes: Vec<String> = (10_000u32..100_000)
            .into_par_iter()
            .filter(|&n| is_prime(n))
            .map(|n| n.to_string())
            .collect();
        info!(count = primes.len(), "candidate pool built");
        Self { primes }
    }

    /// Build a pool from pre-selected primes, e.g. a fixed secret in tests.
    pub fn from_primes(mut primes: Vec<String>) -> Self {
        primes.sort();
        primes.dedup();
        Self { primes }
    }

    /// Pick a secret uniformly at random. `None` only for an empty pool.
    pub fn choose(&self, rng: &mut impl Rng) -> Option<&str> {
        self.primes.choose(rng).map(String::as_str)
    }

    /// Whether `guess` is one of the candidate primes.
    pub fn contains(&self, guess: &str) -> bool {
        self.primes
            .binary_search_by(|p| p.as_str().cmp(guess))
            .is_ok()
    }

    pub fn len(&self) -> usize {
        self.primes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.primes.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.primes
    }
}

impl Default for SecretPool {
    fn default() -> Self {
        Self::new()
    }
}
