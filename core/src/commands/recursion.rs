// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Factorial, Fibonacci, slice reversal and string palindromes, each
//! with a loop form and a recursive form. Fibonacci also comes
//! memoized and table-driven.

use num::traits::{One, Zero};
use num::BigUint;
use std::collections::HashMap;

/// `n!` computed with a loop. `0! = 1`.
pub fn factorial(n: u64) -> BigUint {
    let mut result = BigUint::one();
    for i in 2..=n {
        result *= i;
    }
    result
}

/// `n!` computed as `n * (n - 1)!`. Recursion depth is `n`.
pub fn factorial_recursive(n: u64) -> BigUint {
    if n <= 1 {
        BigUint::one()
    } else {
        factorial_recursive(n - 1) * n
    }
}

/// The `n`th Fibonacci number, with `F(0) = 0` and `F(1) = 1`.
pub fn fibonacci(n: u64) -> BigUint {
    let mut a = BigUint::zero();
    let mut b = BigUint::one();
    for _ in 0..n {
        let next = &a + &b;
        a = std::mem::replace(&mut b, next);
    }
    a
}

/// `F(0)` through `F(n)` inclusive.
pub fn fibonacci_sequence(n: u64) -> Vec<BigUint> {
    let mut sequence = Vec::with_capacity(n as usize + 1);
    let mut a = BigUint::zero();
    let mut b = BigUint::one();
    for _ in 0..=n {
        let next = &a + &b;
        sequence.push(std::mem::replace(&mut a, std::mem::replace(&mut b, next)));
    }
    sequence
}

/// Naive doubly recursive Fibonacci. Takes `O(2^n)` time, so only
/// small `n` are practical.
pub fn fibonacci_recursive(n: u32) -> u64 {
    match n {
        0 => 0,
        1 => 1,
        _ => fibonacci_recursive(n - 1) + fibonacci_recursive(n - 2),
    }
}

/// Top-down Fibonacci that caches each `F(k)` the first time it is
/// computed, turning the exponential recursion linear. Recursion depth
/// is `n`.
pub fn fibonacci_memo(n: u64) -> BigUint {
    fn go(n: u64, memo: &mut HashMap<u64, BigUint>) -> BigUint {
        if n < 2 {
            return BigUint::from(n);
        }
        if let Some(value) = memo.get(&n) {
            return value.clone();
        }
        let value = go(n - 1, memo) + go(n - 2, memo);
        memo.insert(n, value.clone());
        value
    }

    go(n, &mut HashMap::new())
}

/// Bottom-up Fibonacci that fills a table from `F(0)` to `F(n)`.
pub fn fibonacci_table(n: u64) -> BigUint {
    let mut table = vec![BigUint::zero(), BigUint::one()];
    for i in 2..=n as usize {
        let next = &table[i - 1] + &table[i - 2];
        table.push(next);
    }
    table.swap_remove(n as usize)
}

/// Reverses a slice by swapping from both ends toward the middle.
pub fn reverse_in_place<T>(items: &mut [T]) {
    if items.is_empty() {
        return;
    }
    let mut left = 0;
    let mut right = items.len() - 1;
    while left < right {
        items.swap(left, right);
        left += 1;
        right -= 1;
    }
}

/// Reverses a slice by swapping the outer pair and recursing inward.
pub fn reverse_recursive<T>(items: &mut [T]) {
    let len = items.len();
    if len < 2 {
        return;
    }
    items.swap(0, len - 1);
    reverse_recursive(&mut items[1..len - 1]);
}

/// Compares characters from both ends moving toward the center.
pub fn is_palindrome_str(input: &str) -> bool {
    let chars: Vec<char> = input.chars().collect();
    let mut forward = chars.iter();
    let mut backward = chars.iter().rev();
    for _ in 0..chars.len() / 2 {
        if forward.next() != backward.next() {
            return false;
        }
    }
    true
}

/// Two-pointer check written as recursion on the inner slice. Recursion
/// depth is half the character count.
pub fn is_palindrome_recursive(input: &str) -> bool {
    fn go(chars: &[char]) -> bool {
        match chars {
            [] | [_] => true,
            [first, inner @ .., last] => first == last && go(inner),
        }
    }

    let chars: Vec<char> = input.chars().collect();
    go(&chars)
}

/// Palindrome check that ignores case and anything that isn't a letter
/// or digit, so `"A man, a plan, a canal: Panama"` passes.
pub fn is_palindrome_normalized(input: &str) -> bool {
    let cleaned: String = input
        .chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect();
    is_palindrome_str(&cleaned)
}
