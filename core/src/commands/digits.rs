// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

/// Counts decimal digits by repeated division. `0` has one digit.
pub fn count_digits(n: u64) -> u32 {
    if n == 0 {
        return 1;
    }
    let mut n = n;
    let mut count = 0;
    while n > 0 {
        n /= 10;
        count += 1;
    }
    count
}

/// Counts decimal digits as `floor(log10(n)) + 1`.
pub fn count_digits_log(n: u64) -> u32 {
    if n == 0 {
        1
    } else {
        n.ilog10() + 1
    }
}

/// Returns the decimal digits of `n`, least significant first.
pub fn extract_digits(n: u64) -> Vec<u8> {
    if n == 0 {
        return vec![0];
    }
    let mut n = n;
    let mut digits = vec![];
    while n > 0 {
        digits.push((n % 10) as u8);
        n /= 10;
    }
    digits
}

/// Sum of each digit raised to the number of digits.
pub fn armstrong_sum(n: u64) -> u128 {
    let power = count_digits(n);
    extract_digits(n)
        .into_iter()
        .map(|digit| (digit as u128).pow(power))
        .sum()
}

/// Whether `n` equals the sum of its digits each raised to the digit
/// count, like `153 = 1^3 + 5^3 + 3^3`.
pub fn is_armstrong(n: u64) -> bool {
    armstrong_sum(n) == n as u128
}

/// Checks a number for being a palindrome by building its reverse
/// arithmetically. Negative numbers never are.
pub fn is_palindrome_number(n: i128) -> bool {
    if n < 0 {
        return false;
    }
    let mut rest = n;
    let mut reversed: i128 = 0;
    while rest > 0 {
        reversed = match reversed
            .checked_mul(10)
            .and_then(|r| r.checked_add(rest % 10))
        {
            Some(r) => r,
            // A reversal that overflows is longer than the input can be.
            None => return false,
        };
        rest /= 10;
    }
    reversed == n
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn counting() {
        for &(n, expected) in &[
            (0, 1),
            (7, 1),
            (10, 2),
            (99, 2),
            (8_837_923, 7),
            (u64::MAX, 20),
        ] {
            assert_eq!(count_digits(n), expected, "count_digits({})", n);
            assert_eq!(count_digits_log(n), expected, "count_digits_log({})", n);
        }
    }

    #[test]
    fn extraction() {
        assert_eq!(extract_digits(0), vec![0]);
        assert_eq!(extract_digits(1234), vec![4, 3, 2, 1]);
        assert_eq!(extract_digits(1000), vec![0, 0, 0, 1]);
    }

    #[test]
    fn armstrong_numbers() {
        let found: Vec<u64> = (0..100_000).filter(|&n| is_armstrong(n)).collect();
        assert_eq!(
            found,
            vec![0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 153, 370, 371, 407, 1634, 8208, 9474, 54748, 92727, 93084]
        );
        assert_eq!(armstrong_sum(123), 36);
        assert!(!is_armstrong(u64::MAX));
    }

    #[test]
    fn numeric_palindromes() {
        assert!(is_palindrome_number(0));
        assert!(is_palindrome_number(121));
        assert!(is_palindrome_number(4_567_654));
        assert!(!is_palindrome_number(10));
        assert!(!is_palindrome_number(-121));
        assert!(!is_palindrome_number(i128::MAX));
    }
}
