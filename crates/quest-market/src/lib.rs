//! Market value maximizer.
//!
//! Given prices and an increment budget `k`, the score of a chosen mex
//! target is `mex * product(price + 1) mod 1e9+7`, where the whole
//! budget goes into the largest price before the product is taken. The
//! answer maximizes the score over every candidate mex value, taken over
//! reduced residues as the reference behavior dictates.

use hashbrown::HashSet;

use quest_common::{mul_mod, ScanError, Scanner};

pub const MOD: u64 = 1_000_000_007;

/// Length of the longest prefix 0, 1, 2, ... fully present in `prices`.
pub fn mex_limit(prices: &[u64]) -> u64 {
    let have: HashSet<u64> = prices.iter().copied().collect();
    let mut limit = 0;
    while have.contains(&limit) {
        limit += 1;
    }
    limit
}

/// Best `mex * product(price + 1) mod 1e9+7` with all of `budget` added
/// to the largest price.
pub fn max_market_value(prices: &[u64], budget: u64) -> u64 {
    let mut boosted = prices.to_vec();
    boosted.sort_unstable();
    if let Some(largest) = boosted.last_mut() {
        *largest += budget;
    }

    let mut prod = 1;
    for &price in &boosted {
        prod = mul_mod(prod, (price % MOD + 1) % MOD, MOD);
    }

    let mut best = 0;
    for mex in 0..=mex_limit(prices) {
        best = best.max(mul_mod(mex % MOD, prod, MOD));
    }
    best
}

/// Full input driver: `n k` then `n` prices.
/// Output: the best value as a single line, no trailing newline.
pub fn solve(input: &str) -> Result<String, ScanError> {
    let mut scanner = Scanner::new(input);
    let n: usize = scanner.next()?;
    let k: u64 = scanner.next()?;
    let prices: Vec<u64> = scanner.next_many(n)?;
    scanner.finish()?;

    Ok(max_market_value(&prices, k).to_string())
}
