// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The divisor and prime factor walkthrough printed by `--demo`.

use crate::config::Config;
use crate::fmt::print_fmt;
use eyre::{eyre, Result};

const DIVISOR_CASES: &[u64] = &[12, 13, 16, 1, 100];
const PRIME_FACTOR_CASES: &[u64] = &[12, 60, 13, 100, 1];
const WALKTHROUGH: u64 = 60;

fn banner(title: &str) {
    let rule = "=".repeat(50);
    println!("{}\n{}\n{}", rule, title, rule);
}

/// Builds the queries in the order they are printed, one section at a
/// time.
pub fn sections() -> Vec<(&'static str, Vec<String>)> {
    vec![
        (
            "DIVISORS TEST",
            DIVISOR_CASES
                .iter()
                .map(|n| format!("divisors {}", n))
                .collect(),
        ),
        (
            "PRIME FACTORS TEST",
            PRIME_FACTOR_CASES
                .iter()
                .map(|n| format!("factors {}", n))
                .collect(),
        ),
        (
            "DETAILED WALKTHROUGH",
            vec![
                format!("divisors {}", WALKTHROUGH),
                format!("factors {}", WALKTHROUGH),
                format!("factorize {}", WALKTHROUGH),
            ],
        ),
    ]
}

pub fn run(config: &Config) -> Result<()> {
    for (i, (title, queries)) in sections().into_iter().enumerate() {
        if i > 0 {
            println!();
        }
        banner(title);
        for query in queries {
            let reply = numlab_core::eval(&query)
                .map_err(|err| eyre!("Demo query `{}` failed: {}", query, err))?;
            print_fmt(config, &reply);
        }
    }
    Ok(())
}
