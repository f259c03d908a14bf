// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use serde_derive::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Repeatedly swaps adjacent out-of-order pairs. Stops early once a
/// full pass makes no swaps, so sorted input takes one pass.
pub fn bubble_sort<T: Ord>(items: &mut [T]) {
    let len = items.len();
    for pass in 0..len {
        let mut swapped = false;
        for j in 0..len - 1 - pass {
            if items[j] > items[j + 1] {
                items.swap(j, j + 1);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
    }
}

/// Grows a sorted prefix, moving each new element left past every
/// larger one.
pub fn insertion_sort<T: Ord>(items: &mut [T]) {
    for i in 1..items.len() {
        let mut j = i;
        while j > 0 && items[j - 1] > items[j] {
            items.swap(j - 1, j);
            j -= 1;
        }
    }
}

/// Swaps the minimum of the unsorted tail into the next position.
/// Not stable.
pub fn selection_sort<T: Ord>(items: &mut [T]) {
    for i in 0..items.len() {
        let mut min = i;
        for j in i + 1..items.len() {
            if items[j] < items[min] {
                min = j;
            }
        }
        if min != i {
            items.swap(i, min);
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortAlgorithm {
    Bubble,
    Insertion,
    Selection,
}

impl SortAlgorithm {
    pub const ALL: [SortAlgorithm; 3] = [
        SortAlgorithm::Bubble,
        SortAlgorithm::Insertion,
        SortAlgorithm::Selection,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SortAlgorithm::Bubble => "bubble",
            SortAlgorithm::Insertion => "insertion",
            SortAlgorithm::Selection => "selection",
        }
    }

    pub fn sort<T: Ord>(self, items: &mut [T]) {
        match self {
            SortAlgorithm::Bubble => bubble_sort(items),
            SortAlgorithm::Insertion => insertion_sort(items),
            SortAlgorithm::Selection => selection_sort(items),
        }
    }
}

impl fmt::Display for SortAlgorithm {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "{}", self.name())
    }
}

impl FromStr for SortAlgorithm {
    type Err = String;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        SortAlgorithm::ALL
            .iter()
            .cloned()
            .find(|algorithm| algorithm.name() == input)
            .ok_or_else(|| {
                format!(
                    "Unknown sorting algorithm `{}`, expected bubble, insertion or selection",
                    input
                )
            })
    }
}
