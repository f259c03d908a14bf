// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::fmt::{join, write_spans, Span, TokenFmt};
use crate::commands::{InputError, SortAlgorithm};
use displaydoc::Display;
use serde_derive::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use thiserror::Error;

fn number_list<'a, T: ToString>(values: impl Iterator<Item = T>) -> impl Iterator<Item = Span<'a>> {
    join(
        values.map(|value| Span::number(value.to_string())),
        Span::list_sep(", "),
    )
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DivisorsReply {
    pub number: u64,
    pub divisors: Vec<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrimeFactorsReply {
    pub number: u64,
    pub factors: BTreeSet<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactorizationReply {
    pub number: u64,
    /// Each prime with its multiplicity.
    pub factors: BTreeMap<u64, u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactorialReply {
    pub number: u64,
    /// Decimal digits of `number!`.
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FibonacciReply {
    pub index: u64,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FibonacciSequenceReply {
    /// F(0) through F(last).
    pub values: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DigitsReply {
    pub number: u64,
    pub count: u32,
    /// Least significant first, in the order they are extracted.
    pub digits: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArmstrongReply {
    pub number: u64,
    /// Most significant first.
    pub digits: Vec<u8>,
    pub power: u32,
    pub sum: u128,
    pub is_armstrong: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PalindromeReply {
    pub subject: String,
    /// Text is quoted when displayed, numbers aren't.
    pub is_text: bool,
    pub is_palindrome: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReverseReply {
    pub values: Vec<i128>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DuplicatesReply {
    pub values: Vec<i128>,
    pub has_duplicates: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SortReply {
    pub algorithm: SortAlgorithm,
    pub values: Vec<i128>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum QueryReply {
    Divisors(DivisorsReply),
    PrimeFactors(PrimeFactorsReply),
    Factorization(FactorizationReply),
    Factorial(FactorialReply),
    Fibonacci(FibonacciReply),
    FibonacciSequence(FibonacciSequenceReply),
    Digits(DigitsReply),
    Armstrong(ArmstrongReply),
    Palindrome(PalindromeReply),
    Reverse(ReverseReply),
    Duplicates(DuplicatesReply),
    Sort(SortReply),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotFoundError {
    pub got: String,
    pub suggestion: Option<String>,
}

#[derive(Error, Display, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(tag = "type", content = "value")]
pub enum QueryError {
    /// {0}
    Input(#[from] InputError),
    /// {0}
    NotFound(NotFoundError),
    /// {0}
    Generic(String),
}

impl From<NotFoundError> for QueryError {
    fn from(v: NotFoundError) -> Self {
        QueryError::NotFound(v)
    }
}

impl From<String> for QueryError {
    fn from(s: String) -> Self {
        QueryError::Generic(s)
    }
}

impl<'a> TokenFmt<'a> for DivisorsReply {
    fn to_spans(&'a self) -> Vec<Span<'a>> {
        let mut tokens = vec![
            Span::plain("Divisors of "),
            Span::number(self.number.to_string()),
            Span::list_begin(": "),
        ];
        tokens.extend(number_list(self.divisors.iter()));
        tokens
    }
}

impl<'a> TokenFmt<'a> for PrimeFactorsReply {
    fn to_spans(&'a self) -> Vec<Span<'a>> {
        let mut tokens = vec![
            Span::plain("Prime factors of "),
            Span::number(self.number.to_string()),
        ];
        if self.factors.is_empty() {
            tokens.push(Span::plain(": none"));
        } else {
            tokens.push(Span::list_begin(": "));
            tokens.extend(number_list(self.factors.iter()));
        }
        tokens
    }
}

impl<'a> TokenFmt<'a> for FactorizationReply {
    fn to_spans(&'a self) -> Vec<Span<'a>> {
        let mut tokens = vec![
            Span::plain("Factorization: "),
            Span::number(self.number.to_string()),
            Span::plain(" = "),
        ];
        if self.factors.is_empty() {
            tokens.push(Span::number("1"));
            return tokens;
        }
        for (i, (prime, power)) in self.factors.iter().enumerate() {
            if i > 0 {
                tokens.push(Span::plain(" * "));
            }
            tokens.push(Span::number(prime.to_string()));
            if *power != 1 {
                tokens.push(Span::pow(format!("^{}", power)));
            }
        }
        tokens
    }
}

impl<'a> TokenFmt<'a> for FactorialReply {
    fn to_spans(&'a self) -> Vec<Span<'a>> {
        vec![
            Span::number(self.number.to_string()),
            Span::plain("! = "),
            Span::number(&self.value[..]),
        ]
    }
}

impl<'a> TokenFmt<'a> for FibonacciReply {
    fn to_spans(&'a self) -> Vec<Span<'a>> {
        vec![
            Span::plain("F("),
            Span::number(self.index.to_string()),
            Span::plain(") = "),
            Span::number(&self.value[..]),
        ]
    }
}

impl<'a> TokenFmt<'a> for FibonacciSequenceReply {
    fn to_spans(&'a self) -> Vec<Span<'a>> {
        let last = self.values.len().saturating_sub(1);
        let mut tokens = vec![
            Span::plain("Fibonacci F(0)..F("),
            Span::number(last.to_string()),
            Span::plain(")"),
            Span::list_begin(": "),
        ];
        tokens.extend(join(
            self.values.iter().map(|value| Span::number(&value[..])),
            Span::list_sep(", "),
        ));
        tokens
    }
}

impl<'a> TokenFmt<'a> for DigitsReply {
    fn to_spans(&'a self) -> Vec<Span<'a>> {
        let mut tokens = vec![
            Span::plain("Digits of "),
            Span::number(self.number.to_string()),
            Span::plain(" ("),
            Span::number(self.count.to_string()),
            Span::plain(" total, last to first)"),
            Span::list_begin(": "),
        ];
        tokens.extend(number_list(self.digits.iter()));
        tokens
    }
}

impl<'a> TokenFmt<'a> for ArmstrongReply {
    fn to_spans(&'a self) -> Vec<Span<'a>> {
        let mut tokens = vec![Span::number(self.number.to_string())];
        if self.is_armstrong {
            tokens.push(Span::plain(" is an Armstrong number ("));
        } else {
            tokens.push(Span::plain(" is not an Armstrong number ("));
        }
        for (i, digit) in self.digits.iter().enumerate() {
            if i > 0 {
                tokens.push(Span::plain(" + "));
            }
            tokens.push(Span::number(digit.to_string()));
            tokens.push(Span::pow(format!("^{}", self.power)));
        }
        tokens.push(Span::plain(" = "));
        tokens.push(Span::number(self.sum.to_string()));
        tokens.push(Span::plain(")"));
        tokens
    }
}

impl<'a> TokenFmt<'a> for PalindromeReply {
    fn to_spans(&'a self) -> Vec<Span<'a>> {
        let mut tokens = vec![];
        if self.is_text {
            tokens.push(Span::plain("\""));
            tokens.push(Span::user_input(&self.subject[..]));
            tokens.push(Span::plain("\""));
        } else {
            tokens.push(Span::number(&self.subject[..]));
        }
        if self.is_palindrome {
            tokens.push(Span::plain(" is a palindrome"));
        } else {
            tokens.push(Span::plain(" is not a palindrome"));
        }
        tokens
    }
}

impl<'a> TokenFmt<'a> for ReverseReply {
    fn to_spans(&'a self) -> Vec<Span<'a>> {
        let mut tokens = vec![Span::plain("Reversed"), Span::list_begin(": ")];
        tokens.extend(number_list(self.values.iter()));
        tokens
    }
}

impl<'a> TokenFmt<'a> for DuplicatesReply {
    fn to_spans(&'a self) -> Vec<Span<'a>> {
        let mut tokens: Vec<Span<'a>> = join(
            self.values.iter().map(|value| Span::number(value.to_string())),
            Span::plain(", "),
        )
        .collect();
        if self.has_duplicates {
            tokens.push(Span::plain(" contains duplicates"));
        } else {
            tokens.push(Span::plain(" has no duplicates"));
        }
        tokens
    }
}

impl<'a> TokenFmt<'a> for SortReply {
    fn to_spans(&'a self) -> Vec<Span<'a>> {
        let mut tokens = vec![
            Span::plain("Sorted with "),
            Span::keyword(self.algorithm.name()),
            Span::plain(" sort"),
            Span::list_begin(": "),
        ];
        tokens.extend(number_list(self.values.iter()));
        tokens
    }
}

impl<'a> TokenFmt<'a> for QueryReply {
    fn to_spans(&'a self) -> Vec<Span<'a>> {
        match self {
            QueryReply::Divisors(reply) => reply.to_spans(),
            QueryReply::PrimeFactors(reply) => reply.to_spans(),
            QueryReply::Factorization(reply) => reply.to_spans(),
            QueryReply::Factorial(reply) => reply.to_spans(),
            QueryReply::Fibonacci(reply) => reply.to_spans(),
            QueryReply::FibonacciSequence(reply) => reply.to_spans(),
            QueryReply::Digits(reply) => reply.to_spans(),
            QueryReply::Armstrong(reply) => reply.to_spans(),
            QueryReply::Palindrome(reply) => reply.to_spans(),
            QueryReply::Reverse(reply) => reply.to_spans(),
            QueryReply::Duplicates(reply) => reply.to_spans(),
            QueryReply::Sort(reply) => reply.to_spans(),
        }
    }
}

impl<'a> TokenFmt<'a> for NotFoundError {
    fn to_spans(&'a self) -> Vec<Span<'a>> {
        let mut tokens = vec![Span::error("No such command "), Span::user_input(&self.got[..])];
        if let Some(ref suggestion) = self.suggestion {
            tokens.push(Span::error(", did you mean "));
            tokens.push(Span::keyword(&suggestion[..]));
            tokens.push(Span::error("?"));
        }
        tokens
    }
}

impl<'a> TokenFmt<'a> for QueryError {
    fn to_spans(&'a self) -> Vec<Span<'a>> {
        match self {
            QueryError::Input(err) => vec![Span::error(err.to_string())],
            QueryError::NotFound(err) => vec![Span::child(err)],
            QueryError::Generic(message) => vec![Span::error(&message[..])],
        }
    }
}

macro_rules! display_via_spans {
    ($($ty:ty),* $(,)?) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
                    write_spans(fmt, &self.to_spans())
                }
            }
        )*
    };
}

display_via_spans!(
    DivisorsReply,
    PrimeFactorsReply,
    FactorizationReply,
    FactorialReply,
    FibonacciReply,
    FibonacciSequenceReply,
    DigitsReply,
    ArmstrongReply,
    PalindromeReply,
    ReverseReply,
    DuplicatesReply,
    SortReply,
    QueryReply,
    NotFoundError,
);
