// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use numlab_core::output::fmt::{FmtToken, Span, TokenFmt};

// Flattens the token tree, keeping formatting hints.
fn flatten<'a>(out: &mut Vec<(String, FmtToken)>, obj: &'a dyn TokenFmt<'a>) {
    for span in obj.to_spans() {
        match span {
            Span::Content { text, token } => out.push((text.into_owned(), token)),
            Span::Child(obj) => flatten(out, obj),
        }
    }
}

fn test(input: &str, expected: &[(&str, FmtToken)]) {
    let mut actual = vec![];
    match numlab_core::eval(input) {
        Ok(ref v) => flatten(&mut actual, v),
        Err(ref v) => flatten(&mut actual, v),
    }
    let expected: Vec<(String, FmtToken)> = expected
        .iter()
        .map(|(text, token)| (text.to_string(), *token))
        .collect();
    similar_asserts::assert_eq!(actual, expected);
}

#[test]
fn divisor_list() {
    use FmtToken::*;
    test(
        "divisors 6",
        &[
            ("Divisors of ", Plain),
            ("6", Number),
            (": ", ListBegin),
            ("1", Number),
            (", ", ListSep),
            ("2", Number),
            (", ", ListSep),
            ("3", Number),
            (", ", ListSep),
            ("6", Number),
        ],
    );
}

#[test]
fn factorization_powers() {
    use FmtToken::*;
    test(
        "factorize 12",
        &[
            ("Factorization: ", Plain),
            ("12", Number),
            (" = ", Plain),
            ("2", Number),
            ("^2", Pow),
            (" * ", Plain),
            ("3", Number),
        ],
    );
}

#[test]
fn empty_prime_factors() {
    use FmtToken::*;
    test(
        "factors 1",
        &[("Prime factors of ", Plain), ("1", Number), (": none", Plain)],
    );
}

#[test]
fn unknown_command_suggestion() {
    use FmtToken::*;
    test(
        "fatcors 6",
        &[
            ("No such command ", Error),
            ("fatcors", UserInput),
            (", did you mean ", Error),
            ("factors", Keyword),
            ("?", Error),
        ],
    );
}

#[test]
fn word_palindrome() {
    use FmtToken::*;
    test(
        "palindrome racecar",
        &[
            ("\"", Plain),
            ("racecar", UserInput),
            ("\"", Plain),
            (" is a palindrome", Plain),
        ],
    );
}

#[test]
fn input_error() {
    test(
        "divisors 0",
        &[(
            "divisors is only defined for positive integers, got 0",
            FmtToken::Error,
        )],
    );
}
