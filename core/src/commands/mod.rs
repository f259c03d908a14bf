// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The algorithms themselves. Every function here is pure and can be
//! called directly without going through the query layer.

mod digits;
mod duplicates;
mod error;
mod factorize;
mod recursion;
mod sorting;

pub use digits::{
    armstrong_sum, count_digits, count_digits_log, extract_digits, is_armstrong,
    is_palindrome_number,
};
pub use duplicates::{has_duplicates, has_duplicates_naive};
pub use error::{at_most, non_negative, positive, InputError};
pub use factorize::{find_divisors, find_prime_factors, prime_factorization};
pub use recursion::{
    factorial, factorial_recursive, fibonacci, fibonacci_memo, fibonacci_recursive,
    fibonacci_sequence, fibonacci_table, is_palindrome_normalized, is_palindrome_recursive,
    is_palindrome_str, reverse_in_place, reverse_recursive,
};
pub use sorting::{bubble_sort, insertion_sort, selection_sort, SortAlgorithm};
