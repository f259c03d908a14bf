// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Duplicate detection, once with nested loops and once with a hash set.

use std::collections::HashSet;
use std::hash::Hash;

/// Compares every pair. `O(n^2)` time, no extra memory.
pub fn has_duplicates_naive<T: PartialEq>(items: &[T]) -> bool {
    for (i, item) in items.iter().enumerate() {
        if items[i + 1..].contains(item) {
            return true;
        }
    }
    false
}

/// Remembers each value seen so far. `O(n)` time and memory.
pub fn has_duplicates<T: Hash + Eq>(items: &[T]) -> bool {
    let mut seen = HashSet::with_capacity(items.len());
    !items.iter().all(|item| seen.insert(item))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn detects_repeats() {
        let cases: &[(&[i32], bool)] = &[
            (&[], false),
            (&[1], false),
            (&[1, 2, 3, 4], false),
            (&[1, 2, 3, 1], true),
            (&[5, 5], true),
            (&[-1, 0, 1, 0], true),
        ];
        for &(items, expected) in cases {
            assert_eq!(has_duplicates(items), expected, "{:?}", items);
            assert_eq!(has_duplicates_naive(items), expected, "{:?}", items);
        }
    }

    #[test]
    fn works_on_strings() {
        assert!(has_duplicates(&["a", "b", "a"]));
        assert!(!has_duplicates_naive(&["a", "b", "c"]));
    }
}
