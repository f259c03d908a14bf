// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use assert_json_diff::assert_json_eq;
use numlab_core::output::{QueryError, QueryReply};
use numlab_core::parse;
use serde_json::{json, to_value};

#[test]
fn check_single_argument() {
    assert_json_eq!(
        to_value(parse("divisors 60")).unwrap(),
        json!({
            "type": "divisors",
            "value": 60,
        })
    );
    assert_json_eq!(
        to_value(parse("prime_factors 12")).unwrap(),
        json!({
            "type": "primeFactors",
            "value": 12,
        })
    );
}

#[test]
fn check_palindrome() {
    assert_json_eq!(
        to_value(parse("palindrome level")).unwrap(),
        json!({
            "type": "palindrome",
            "value": {
                "type": "text",
                "value": "level",
            },
        })
    );
    assert_json_eq!(
        to_value(parse("palindrome Never odd, or even")).unwrap(),
        json!({
            "type": "palindrome",
            "value": {
                "type": "text",
                "value": "Never odd, or even",
            },
        })
    );
}

#[test]
fn check_sort() {
    assert_json_eq!(
        to_value(parse("sort selection 3 1 2")).unwrap(),
        json!({
            "type": "sort",
            "value": {
                "algorithm": "selection",
                "values": [3, 1, 2],
            },
        })
    );
}

#[test]
fn check_error() {
    assert_json_eq!(
        to_value(parse("divisors x")).unwrap(),
        json!({
            "type": "error",
            "value": "Expected an integer after `divisors`, got `x`",
        })
    );
}

#[test]
fn check_replies() {
    let reply = numlab_core::eval("factors 60").unwrap();
    assert_json_eq!(
        to_value(&reply).unwrap(),
        json!({
            "primeFactors": {
                "number": 60,
                "factors": [2, 3, 5],
            },
        })
    );
    let back: QueryReply = serde_json::from_value(to_value(&reply).unwrap()).unwrap();
    assert_eq!(back, reply);

    let reply = numlab_core::eval("factorize 60").unwrap();
    assert_json_eq!(
        to_value(&reply).unwrap(),
        json!({
            "factorization": {
                "number": 60,
                "factors": { "2": 2, "3": 1, "5": 1 },
            },
        })
    );

    let reply = numlab_core::eval("armstrong 153").unwrap();
    assert_json_eq!(
        to_value(&reply).unwrap(),
        json!({
            "armstrong": {
                "number": 153,
                "digits": [1, 5, 3],
                "power": 3,
                "sum": 153,
                "isArmstrong": true,
            },
        })
    );
}

#[test]
fn check_errors() {
    let err = numlab_core::eval("divisors 0").unwrap_err();
    assert_json_eq!(
        to_value(&err).unwrap(),
        json!({
            "type": "input",
            "value": {
                "notPositive": {
                    "operation": "divisors",
                    "got": 0,
                },
            },
        })
    );

    let err = numlab_core::eval("divisrs 6").unwrap_err();
    assert_json_eq!(
        to_value(&err).unwrap(),
        json!({
            "type": "notFound",
            "value": {
                "got": "divisrs",
                "suggestion": "divisors",
            },
        })
    );
    let back: QueryError = serde_json::from_value(to_value(&err).unwrap()).unwrap();
    assert_eq!(back, err);
}
