//! Reachable-GCD solver.
//!
//! For an array `a`, a value `g` is *reachable* if some non-empty
//! subsequence of `a` has gcd exactly `g`. The closure below builds the
//! full set of reachable values in one left-to-right pass: extending any
//! previously achievable gcd with one more element covers every
//! subsequence, and set semantics absorb the duplicates.

use hashbrown::HashSet;

use quest_common::{gcd, ScanError, Scanner};

/// The exact set of gcds achievable over non-empty subsequences of `values`.
pub fn reachable_gcds(values: &[u64]) -> HashSet<u64> {
    let mut reachable = HashSet::new();
    for &a in values {
        let mut extended = Vec::with_capacity(reachable.len() + 1);
        extended.push(a);
        for &g in &reachable {
            extended.push(gcd(g, a));
        }
        reachable.extend(extended);
    }
    reachable
}

/// Full judge-input driver.
///
/// Input: `T`, then per test case `N`, `N` values, `Q`, `Q` queries.
/// Output: one `Y`/`N` line per query, across all test cases, in input
/// order, with no trailing newline.
pub fn solve(input: &str) -> Result<String, ScanError> {
    let mut scanner = Scanner::new(input);
    let cases: usize = scanner.next()?;
    let mut out_lines = Vec::new();

    for _ in 0..cases {
        let n: usize = scanner.next()?;
        let values: Vec<u64> = scanner.next_many(n)?;
        let reachable = reachable_gcds(&values);

        let q: usize = scanner.next()?;
        for _ in 0..q {
            let query: u64 = scanner.next()?;
            out_lines.push(if reachable.contains(&query) { "Y" } else { "N" });
        }
    }

    scanner.finish()?;
    Ok(out_lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    /// Ground truth: gcd of every non-empty subsequence, by enumeration.
    fn brute_force(values: &[u64]) -> HashSet<u64> {
        let mut expected = HashSet::new();
        for mask in 1u32..(1 << values.len()) {
            let mut g = 0;
            for (index, &value) in values.iter().enumerate() {
                if mask & (1 << index) != 0 {
                    g = gcd(g, value);
                }
            }
            expected.insert(g);
        }
        expected
    }

    #[test]
    fn test_reachable_fixed() {
        let reachable = reachable_gcds(&[4, 6, 8]);
        let expected: HashSet<u64> = [2, 4, 6, 8].into_iter().collect();
        assert_eq!(reachable, expected);
    }

    #[test]
    fn test_reachable_empty_array() {
        assert!(reachable_gcds(&[]).is_empty());
    }

    #[test]
    fn test_reachable_matches_brute_force_small() {
        for values in [
            vec![1],
            vec![2, 4],
            vec![6, 10, 15],
            vec![12, 18, 27, 36],
            vec![5, 5, 5],
            vec![7, 11, 13, 30, 42],
        ] {
            assert_eq!(reachable_gcds(&values), brute_force(&values), "values: {values:?}");
        }
    }

    #[test]
    fn test_solve_single_case() {
        let input = "1\n3\n4 6 8\n4\n2 3 4 12\n";
        assert_eq!(solve(input).unwrap(), "Y\nN\nY\nN");
    }

    #[test]
    fn test_solve_multiple_cases_preserve_order() {
        let input = "2\n2\n6 10\n3\n2 6 10\n1\n9\n2\n9 3\n";
        // Case 1: reachable {6, 10, 2}; case 2: reachable {9}.
        assert_eq!(solve(input).unwrap(), "Y\nY\nY\nY\nN");
    }

    #[test]
    fn test_solve_empty_array_answers_n() {
        let input = "1\n0\n2\n1 7\n";
        assert_eq!(solve(input).unwrap(), "N\nN");
    }

    #[test]
    fn test_solve_short_input_is_an_error() {
        assert_eq!(solve("1\n3\n4 6\n"), Err(ScanError::UnexpectedEof));
    }

    proptest! {
        /// The one-pass closure equals brute-force subsequence enumeration.
        #[test]
        fn prop_closure_matches_brute_force(values in prop::collection::vec(1u64..60, 1..12)) {
            prop_assert_eq!(reachable_gcds(&values), brute_force(&values));
        }

        /// Re-running the solver on identical input yields identical output.
        #[test]
        fn prop_solve_is_idempotent(values in prop::collection::vec(1u64..40, 0..8)) {
            let mut input = format!("1\n{}\n", values.len());
            for value in &values {
                input.push_str(&format!("{value} "));
            }
            input.push_str("\n2\n1 6\n");
            let first = solve(&input).unwrap();
            let second = solve(&input).unwrap();
            prop_assert_eq!(first, second);
        }
    }
}
