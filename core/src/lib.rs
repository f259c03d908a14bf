// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Numlab is a small collection of classic textbook algorithms with a
//! query language on top. It is available as a CLI; `numlab_core` is
//! the library behind it.
//!
//! The algorithms live in [commands] and can be called directly. The
//! centerpiece is trial division bounded by the square root:
//!
//! ```rust
//! use numlab_core::commands::{find_divisors, find_prime_factors};
//!
//! assert_eq!(find_divisors(16).unwrap(), vec![1, 2, 4, 8, 16]);
//! let factors: Vec<u64> = find_prime_factors(60).unwrap().into_iter().collect();
//! assert_eq!(factors, vec![2, 3, 5]);
//! // Only positive integers have divisors.
//! assert!(find_divisors(0).is_err());
//! ```
//!
//! ## Queries
//!
//! Frontends take a line of text, evaluate it, and print the reply.
//!
//! ```rust
//! # fn main() -> Result<(), String> {
//! println!("{}", numlab_core::one_line("factorize 60")?);
//! // Prints: Factorization: 60 = 2^2 * 3 * 5
//! # Ok(())
//! # }
//! ```
//!
//! ## Markup
//!
//! To add color highlighting, use [eval] instead of [one_line] and then
//! call [output::fmt::TokenFmt::to_spans] on the result. This returns a
//! tree of spans, each of which has a formatting hint attached to it.
//! See [output::fmt::Span] and [output::fmt::FmtToken].

#![allow(clippy::match_like_matches_macro)]

pub mod ast;
pub mod commands;
pub mod output;
pub mod parsing;
pub mod runtime;

pub(crate) mod algorithms;
mod helpers;

pub use helpers::{eval, one_line, parse, reformat};
