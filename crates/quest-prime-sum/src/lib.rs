//! Prime-sum partition range solver.
//!
//! For each test case `(n, l, r)`, report the minimum and maximum part
//! count `k` in `[l, r]` under which `n` splits into `k` parts, or `-1`
//! when no such `k` exists. The feasibility rules are the problem's
//! given policy and are preserved exactly:
//!
//!   - any `k` in `[max(l, 3), min(r, n / 2)]` is feasible;
//!   - `k = 2` is feasible iff `n >= 4` and (`n` is even or `n - 2` is
//!     prime).

pub mod primality;

pub use primality::is_prime;

use quest_common::{ScanError, Scanner};

/// Can `n` be split into exactly two parts? False below 4; even numbers
/// are taken as always splittable; odd `n` needs `n - 2` prime.
pub fn feasible_two(n: u64) -> bool {
    if n < 4 {
        return false;
    }
    if n % 2 == 0 {
        return true;
    }
    is_prime(n - 2)
}

/// Minimum and maximum feasible part count in `[l, r]`, or `None`.
///
/// The selection order matters and mirrors the rules above: the 2-case
/// wins the minimum when it applies, the 3+-range wins the maximum when
/// it is non-empty.
pub fn part_range(n: u64, l: u64, r: u64) -> Option<(u64, u64)> {
    let x_min3 = l.max(3);
    let x_max3 = r.min(n / 2);
    let has_three_plus = x_min3 <= x_max3;
    let has_two = l <= 2 && 2 <= r && feasible_two(n);

    if !has_three_plus && !has_two {
        return None;
    }

    let min = if has_two { 2 } else { x_min3 };
    let max = if has_three_plus { x_max3 } else { 2 };
    Some((min, max))
}

/// Full judge-input driver.
///
/// Input: `T`, then `n l r` per test case. Output: one line per test
/// case, `"-1"` or `"<min> <max>"`, with no trailing newline.
pub fn solve(input: &str) -> Result<String, ScanError> {
    let mut scanner = Scanner::new(input);
    let cases: usize = scanner.next()?;
    let mut out_lines = Vec::new();

    for _ in 0..cases {
        let n: u64 = scanner.next()?;
        let l: u64 = scanner.next()?;
        let r: u64 = scanner.next()?;
        match part_range(n, l, r) {
            Some((min, max)) => out_lines.push(format!("{min} {max}")),
            None => out_lines.push("-1".into()),
        }
    }

    scanner.finish()?;
    Ok(out_lines.join("\n"))
}
