// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::ast::Query;
use crate::output::{QueryError, QueryReply};
use crate::parsing::text_query;
use crate::runtime::eval_query;

/// Parses a single line of input into a query.
pub fn parse(line: &str) -> Query {
    let mut iter = text_query::TokenIterator::new(line.trim()).peekable();
    text_query::parse_query(&mut iter)
}

/// Helper function that parses a query and evaluates it.
pub fn eval(line: &str) -> Result<QueryReply, QueryError> {
    eval_query(&parse(line))
}

/// A version of eval() that converts results and errors into plain-text strings.
pub fn one_line(line: &str) -> Result<String, String> {
    eval(line)
        .as_ref()
        .map(ToString::to_string)
        .map_err(ToString::to_string)
}

/// Reformats a query into its canonical spelling (e.g. `fibonacci 3`
/// becomes `fib 3`).
pub fn reformat(line: &str) -> String {
    parse(line).to_string()
}
