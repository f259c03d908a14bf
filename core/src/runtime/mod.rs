// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Evaluates parsed queries by dispatching to [crate::commands].

use crate::algorithms::search_impl;
use crate::ast::{Palindrome, Query};
use crate::commands::{self, at_most, non_negative, positive};
use crate::output::*;
use crate::parsing::text_query::COMMANDS;

/// Largest `n` accepted by `factorial`.
pub const MAX_FACTORIAL: u64 = 20_000;
/// Largest index accepted by `fib`.
pub const MAX_FIBONACCI: u64 = 100_000;
/// Largest last index accepted by `fibs`.
pub const MAX_FIBONACCI_SEQUENCE: u64 = 1_000;

fn suggest(name: &str) -> Option<String> {
    search_impl(COMMANDS.iter().cloned(), name, 1)
        .into_iter()
        .next()
        .map(ToOwned::to_owned)
}

pub fn eval_query(query: &Query) -> Result<QueryReply, QueryError> {
    match *query {
        Query::Divisors(n) => {
            let number = positive("divisors", n)?;
            Ok(QueryReply::Divisors(DivisorsReply {
                number,
                divisors: commands::find_divisors(number)?,
            }))
        }
        Query::PrimeFactors(n) => {
            let number = positive("prime factors", n)?;
            Ok(QueryReply::PrimeFactors(PrimeFactorsReply {
                number,
                factors: commands::find_prime_factors(number)?,
            }))
        }
        Query::Factorize(n) => {
            let number = positive("factorization", n)?;
            Ok(QueryReply::Factorization(FactorizationReply {
                number,
                factors: commands::prime_factorization(number)?,
            }))
        }
        Query::Factorial(n) => {
            let number = at_most("factorial", n, MAX_FACTORIAL)?;
            Ok(QueryReply::Factorial(FactorialReply {
                number,
                value: commands::factorial(number).to_string(),
            }))
        }
        Query::Fibonacci(n) => {
            let index = at_most("fibonacci", n, MAX_FIBONACCI)?;
            Ok(QueryReply::Fibonacci(FibonacciReply {
                index,
                value: commands::fibonacci(index).to_string(),
            }))
        }
        Query::FibonacciSequence(n) => {
            let last = at_most("fibonacci sequence", n, MAX_FIBONACCI_SEQUENCE)?;
            Ok(QueryReply::FibonacciSequence(FibonacciSequenceReply {
                values: commands::fibonacci_sequence(last)
                    .iter()
                    .map(ToString::to_string)
                    .collect(),
            }))
        }
        Query::Digits(n) => {
            let number = non_negative("digits", n)?;
            Ok(QueryReply::Digits(DigitsReply {
                number,
                count: commands::count_digits(number),
                digits: commands::extract_digits(number),
            }))
        }
        Query::Armstrong(n) => {
            let number = non_negative("armstrong", n)?;
            let mut digits = commands::extract_digits(number);
            digits.reverse();
            Ok(QueryReply::Armstrong(ArmstrongReply {
                number,
                power: commands::count_digits(number),
                digits,
                sum: commands::armstrong_sum(number),
                is_armstrong: commands::is_armstrong(number),
            }))
        }
        Query::Palindrome(ref arg) => {
            let reply = match *arg {
                Palindrome::Number(n) => PalindromeReply {
                    subject: n.to_string(),
                    is_text: false,
                    is_palindrome: commands::is_palindrome_number(n),
                },
                Palindrome::Text(ref text) => PalindromeReply {
                    subject: text.clone(),
                    is_text: true,
                    is_palindrome: commands::is_palindrome_normalized(text),
                },
            };
            Ok(QueryReply::Palindrome(reply))
        }
        Query::Reverse(ref values) => {
            let mut values = values.clone();
            commands::reverse_in_place(&mut values);
            Ok(QueryReply::Reverse(ReverseReply { values }))
        }
        Query::Duplicates(ref values) => Ok(QueryReply::Duplicates(DuplicatesReply {
            has_duplicates: commands::has_duplicates(values),
            values: values.clone(),
        })),
        Query::Sort {
            algorithm,
            ref values,
        } => {
            let mut values = values.clone();
            algorithm.sort(&mut values);
            Ok(QueryReply::Sort(SortReply { algorithm, values }))
        }
        Query::Unknown(ref name) => Err(QueryError::NotFound(NotFoundError {
            got: name.clone(),
            suggestion: suggest(name),
        })),
        Query::Error(ref err) => Err(QueryError::Generic(err.clone())),
    }
}
