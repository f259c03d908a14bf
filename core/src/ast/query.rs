// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::commands::SortAlgorithm;
use serde_derive::Serialize;
use std::fmt;

/// The argument of a `palindrome` query: a lone integer, or any other
/// text up to the end of the line.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
#[serde(tag = "type", content = "value")]
pub enum Palindrome {
    Number(i128),
    Text(String),
}

/// A parsed query. Integer arguments are kept as written (signed and
/// wide) and only validated when the query is evaluated, so range
/// errors can name the operation they came from.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
#[serde(tag = "type", content = "value")]
pub enum Query {
    Divisors(i128),
    PrimeFactors(i128),
    Factorize(i128),
    Factorial(i128),
    Fibonacci(i128),
    FibonacciSequence(i128),
    Digits(i128),
    Armstrong(i128),
    Palindrome(Palindrome),
    Reverse(Vec<i128>),
    Duplicates(Vec<i128>),
    #[serde(rename_all = "camelCase")]
    Sort {
        algorithm: SortAlgorithm,
        values: Vec<i128>,
    },
    /// A command word that isn't recognized.
    Unknown(String),
    Error(String),
}

struct List<'a>(&'a [i128]);

impl<'a> fmt::Display for List<'a> {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, value) in self.0.iter().enumerate() {
            if i > 0 {
                write!(fmt, ", ")?;
            }
            write!(fmt, "{}", value)?;
        }
        Ok(())
    }
}

impl fmt::Display for Palindrome {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Palindrome::Number(n) => write!(fmt, "{}", n),
            Palindrome::Text(ref text) => write!(fmt, "{}", text),
        }
    }
}

impl fmt::Display for Query {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Query::Divisors(n) => write!(fmt, "divisors {}", n),
            Query::PrimeFactors(n) => write!(fmt, "factors {}", n),
            Query::Factorize(n) => write!(fmt, "factorize {}", n),
            Query::Factorial(n) => write!(fmt, "factorial {}", n),
            Query::Fibonacci(n) => write!(fmt, "fib {}", n),
            Query::FibonacciSequence(n) => write!(fmt, "fibs {}", n),
            Query::Digits(n) => write!(fmt, "digits {}", n),
            Query::Armstrong(n) => write!(fmt, "armstrong {}", n),
            Query::Palindrome(ref arg) => write!(fmt, "palindrome {}", arg),
            Query::Reverse(ref values) => write!(fmt, "reverse {}", List(values)),
            Query::Duplicates(ref values) => write!(fmt, "duplicates {}", List(values)),
            Query::Sort {
                algorithm,
                ref values,
            } => write!(fmt, "sort {} {}", algorithm, List(values)),
            Query::Unknown(ref name) => write!(fmt, "{}", name),
            Query::Error(ref err) => write!(fmt, "<error: {}>", err),
        }
    }
}
