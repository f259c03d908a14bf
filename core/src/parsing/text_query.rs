// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::ast::{Palindrome, Query};
use crate::commands::SortAlgorithm;
use std::iter::Peekable;
use std::str::Chars;

/// Every command word the parser understands, including aliases.
pub const COMMANDS: &[&str] = &[
    "armstrong",
    "digits",
    "divisors",
    "duplicates",
    "factorial",
    "factorize",
    "factors",
    "fib",
    "fibonacci",
    "fibs",
    "palindrome",
    "prime_factors",
    "reverse",
    "sort",
];

#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    Word(String),
    Integer(i128),
    Comma,
    Eof,
    Error(String),
}

fn describe(token: &Token) -> String {
    match *token {
        Token::Word(ref word) => format!("`{}`", word),
        Token::Integer(value) => format!("number `{}`", value),
        Token::Comma => "`,`".to_owned(),
        Token::Eof => "eof".to_owned(),
        Token::Error(ref e) => format!("<{}>", e),
    }
}

fn is_integer_literal(word: &str) -> bool {
    let digits = word
        .strip_prefix('-')
        .or_else(|| word.strip_prefix('+'))
        .unwrap_or(word);
    digits.starts_with(|c: char| c.is_ascii_digit())
        && digits.chars().all(|c| c.is_ascii_digit() || c == '_')
}

#[derive(Clone)]
pub struct TokenIterator<'a>(Peekable<Chars<'a>>);

impl<'a> TokenIterator<'a> {
    pub fn new(input: &'a str) -> TokenIterator<'a> {
        TokenIterator(input.chars().peekable())
    }
}

impl<'a> Iterator for TokenIterator<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        while let Some(c) = self.0.peek() {
            if c.is_whitespace() {
                self.0.next();
            } else {
                break;
            }
        }
        let first = match self.0.next() {
            Some(c) => c,
            None => return Some(Token::Eof),
        };
        if first == ',' {
            return Some(Token::Comma);
        }
        let mut word = String::new();
        // U+2212 MINUS SIGN
        word.push(if first == '\u{2212}' { '-' } else { first });
        while let Some(&c) = self.0.peek() {
            if c.is_whitespace() || c == ',' {
                break;
            }
            word.push(c);
            self.0.next();
        }
        if is_integer_literal(&word) {
            let cleaned: String = word.chars().filter(|&c| c != '_').collect();
            Some(match cleaned.parse::<i128>() {
                Ok(value) => Token::Integer(value),
                Err(_) => Token::Error(format!("Integer literal too large: {}", word)),
            })
        } else {
            Some(Token::Word(word))
        }
    }
}

pub type Iter<'a> = Peekable<TokenIterator<'a>>;

fn expect_end(iter: &mut Iter<'_>, query: Query) -> Query {
    match iter.next().unwrap_or(Token::Eof) {
        Token::Eof => query,
        x => Query::Error(format!("Expected end of query, got {}", describe(&x))),
    }
}

fn parse_integer(iter: &mut Iter<'_>, command: &str) -> Result<i128, String> {
    match iter.next().unwrap_or(Token::Eof) {
        Token::Integer(value) => Ok(value),
        x => Err(format!(
            "Expected an integer after `{}`, got {}",
            command,
            describe(&x)
        )),
    }
}

fn parse_integer_list(iter: &mut Iter<'_>, command: &str) -> Result<Vec<i128>, String> {
    let mut values = vec![parse_integer(iter, command)?];
    loop {
        match iter.peek().cloned().unwrap_or(Token::Eof) {
            Token::Eof => return Ok(values),
            Token::Comma => {
                iter.next();
            }
            Token::Integer(value) => {
                iter.next();
                values.push(value);
            }
            x => {
                return Err(format!(
                    "Expected an integer or `,` in `{}` list, got {}",
                    command,
                    describe(&x)
                ))
            }
        }
    }
}

fn single(iter: &mut Iter<'_>, command: &str, make: fn(i128) -> Query) -> Query {
    match parse_integer(iter, command) {
        Ok(value) => expect_end(iter, make(value)),
        Err(err) => Query::Error(err),
    }
}

/// A lone integer is checked as a number. Anything else is joined back
/// into a single phrase.
fn parse_palindrome(iter: &mut Iter<'_>) -> Query {
    let mut phrase = String::new();
    match iter.next().unwrap_or(Token::Eof) {
        Token::Integer(value) => {
            if iter.peek().map_or(true, |token| *token == Token::Eof) {
                return Query::Palindrome(Palindrome::Number(value));
            }
            phrase.push_str(&value.to_string());
        }
        Token::Word(word) => phrase.push_str(&word),
        Token::Comma => phrase.push(','),
        x => {
            return Query::Error(format!(
                "Expected a number or text after `palindrome`, got {}",
                describe(&x)
            ))
        }
    }
    loop {
        let word = match iter.next().unwrap_or(Token::Eof) {
            Token::Eof => return Query::Palindrome(Palindrome::Text(phrase)),
            Token::Error(err) => return Query::Error(err),
            Token::Comma => {
                phrase.push(',');
                continue;
            }
            Token::Word(word) => word,
            Token::Integer(value) => value.to_string(),
        };
        phrase.push(' ');
        phrase.push_str(&word);
    }
}

/// Parses one line of input into a query.
pub fn parse_query(iter: &mut Iter<'_>) -> Query {
    let command = match iter.next().unwrap_or(Token::Eof) {
        Token::Word(word) => word,
        x => return Query::Error(format!("Expected a command, got {}", describe(&x))),
    };
    match &command[..] {
        "divisors" => single(iter, &command, Query::Divisors),
        "factors" | "prime_factors" => single(iter, &command, Query::PrimeFactors),
        "factorize" => single(iter, &command, Query::Factorize),
        "factorial" => single(iter, &command, Query::Factorial),
        "fib" | "fibonacci" => single(iter, &command, Query::Fibonacci),
        "fibs" => single(iter, &command, Query::FibonacciSequence),
        "digits" => single(iter, &command, Query::Digits),
        "armstrong" => single(iter, &command, Query::Armstrong),
        "palindrome" => parse_palindrome(iter),
        "reverse" => match parse_integer_list(iter, &command) {
            Ok(values) => Query::Reverse(values),
            Err(err) => Query::Error(err),
        },
        "duplicates" => match parse_integer_list(iter, &command) {
            Ok(values) => Query::Duplicates(values),
            Err(err) => Query::Error(err),
        },
        "sort" => {
            let algorithm = match iter.next().unwrap_or(Token::Eof) {
                Token::Word(ref name) => match name.parse::<SortAlgorithm>() {
                    Ok(algorithm) => algorithm,
                    Err(err) => return Query::Error(err),
                },
                x => {
                    return Query::Error(format!(
                        "Expected a sorting algorithm after `sort`, got {}",
                        describe(&x)
                    ))
                }
            };
            match parse_integer_list(iter, &command) {
                Ok(values) => Query::Sort { algorithm, values },
                Err(err) => Query::Error(err),
            }
        }
        _ => Query::Unknown(command),
    }
}
