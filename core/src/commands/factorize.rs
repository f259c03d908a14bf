// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Divisor enumeration and prime factorization by trial division.
//!
//! Both walks stop at the square root: divisors come in pairs `(i, n / i)`
//! with one member at most `√n`, and a number has at most one prime
//! factor greater than its square root.

use super::InputError;
use num::integer::Roots;
use std::collections::{BTreeMap, BTreeSet};

fn check_positive(operation: &str, n: u64) -> Result<(), InputError> {
    if n == 0 {
        Err(InputError::NotPositive {
            operation: operation.to_owned(),
            got: 0,
        })
    } else {
        Ok(())
    }
}

/// Returns every positive divisor of `n` in ascending order.
///
/// Runs in `O(√n + d log d)` where `d` is the number of divisors.
pub fn find_divisors(n: u64) -> Result<Vec<u64>, InputError> {
    check_positive("divisors", n)?;
    let mut divisors = vec![];
    // Odd numbers have no even divisors.
    let step = if n % 2 == 0 { 1 } else { 2 };
    for i in (1..=n.sqrt()).step_by(step) {
        if n % i == 0 {
            divisors.push(i);
            // The root of a perfect square pairs with itself.
            if i != n / i {
                divisors.push(n / i);
            }
        }
    }
    divisors.sort_unstable();
    Ok(divisors)
}

/// Returns the distinct primes dividing `n`. Empty for `n = 1`.
pub fn find_prime_factors(n: u64) -> Result<BTreeSet<u64>, InputError> {
    check_positive("prime factors", n)?;
    Ok(factor_walk(n).into_iter().map(|(p, _)| p).collect())
}

/// Returns each prime dividing `n` together with its multiplicity.
pub fn prime_factorization(n: u64) -> Result<BTreeMap<u64, u32>, InputError> {
    check_positive("factorization", n)?;
    Ok(factor_walk(n))
}

fn factor_walk(n: u64) -> BTreeMap<u64, u32> {
    let mut factors = BTreeMap::new();
    let twos = n.trailing_zeros();
    if twos > 0 {
        factors.insert(2, twos);
    }
    let mut m = n >> twos;
    let mut i = 3;
    // Bound tracks the shrinking cofactor. Only odd candidates remain.
    while i <= m / i {
        while m % i == 0 {
            *factors.entry(i).or_insert(0) += 1;
            m /= i;
        }
        i += 2;
    }
    if m > 1 {
        *factors.entry(m).or_insert(0) += 1;
    }
    factors
}

#[cfg(test)]
mod test {
    use super::*;

    fn set(items: &[u64]) -> BTreeSet<u64> {
        items.iter().cloned().collect()
    }

    #[test]
    fn divisors_of_small_numbers() {
        assert_eq!(find_divisors(1).unwrap(), vec![1]);
        assert_eq!(find_divisors(12).unwrap(), vec![1, 2, 3, 4, 6, 12]);
        assert_eq!(find_divisors(13).unwrap(), vec![1, 13]);
        assert_eq!(find_divisors(16).unwrap(), vec![1, 2, 4, 8, 16]);
        assert_eq!(
            find_divisors(60).unwrap(),
            vec![1, 2, 3, 4, 5, 6, 10, 12, 15, 20, 30, 60]
        );
        assert_eq!(
            find_divisors(100).unwrap(),
            vec![1, 2, 4, 5, 10, 20, 25, 50, 100]
        );
    }

    #[test]
    fn prime_factor_sets() {
        assert_eq!(find_prime_factors(1).unwrap(), set(&[]));
        assert_eq!(find_prime_factors(12).unwrap(), set(&[2, 3]));
        assert_eq!(find_prime_factors(13).unwrap(), set(&[13]));
        assert_eq!(find_prime_factors(32).unwrap(), set(&[2]));
        assert_eq!(find_prime_factors(60).unwrap(), set(&[2, 3, 5]));
        assert_eq!(find_prime_factors(100).unwrap(), set(&[2, 5]));
    }

    #[test]
    fn factorization_keeps_multiplicity() {
        let factors = prime_factorization(60).unwrap();
        assert_eq!(factors.into_iter().collect::<Vec<_>>(), vec![(2, 2), (3, 1), (5, 1)]);
        let factors = prime_factorization(1 << 40).unwrap();
        assert_eq!(factors.into_iter().collect::<Vec<_>>(), vec![(2, 40)]);
        assert!(prime_factorization(1).unwrap().is_empty());
    }

    #[test]
    fn large_inputs() {
        let p = 1_000_000_007;
        assert_eq!(find_divisors(p).unwrap(), vec![1, p]);
        assert_eq!(find_prime_factors(p).unwrap(), set(&[p]));
        // Largest prime below 2^16, squared.
        let q = 65_521u64;
        assert_eq!(find_prime_factors(q * q).unwrap(), set(&[q]));
        assert_eq!(find_divisors(q * q).unwrap(), vec![1, q, q * q]);
        // A prime cofactor far above the scanned range.
        assert_eq!(find_prime_factors(2 * p).unwrap(), set(&[2, p]));
    }

    #[test]
    fn odd_and_even_walks_match_brute_force() {
        for n in 1..3_000u64 {
            let brute: Vec<u64> = (1..=n).filter(|d| n % d == 0).collect();
            assert_eq!(find_divisors(n).unwrap(), brute, "divisors of {}", n);
            let product: u64 = prime_factorization(n)
                .unwrap()
                .iter()
                .map(|(p, k)| p.pow(*k))
                .product();
            assert_eq!(product, n);
        }
        let factors = prime_factorization(3 * 3 * 7 * 1024).unwrap();
        assert_eq!(
            factors.into_iter().collect::<Vec<_>>(),
            vec![(2, 10), (3, 2), (7, 1)]
        );
        assert_eq!(find_prime_factors(9).unwrap(), set(&[3]));
        assert_eq!(find_divisors(225).unwrap(), vec![1, 3, 5, 9, 15, 25, 45, 75, 225]);
    }

    #[test]
    fn zero_is_rejected() {
        assert_eq!(
            find_divisors(0),
            Err(InputError::NotPositive {
                operation: "divisors".to_owned(),
                got: 0
            })
        );
        assert!(find_prime_factors(0).is_err());
        assert!(prime_factorization(0).is_err());
    }
}
