// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use rustyline::{
    completion::{extract_word, Completer, Pair},
    highlight::Highlighter,
    hint::Hinter,
    validate::Validator,
    Helper,
};
use rustyline::{Context as LineContext, Result};

use numlab_core::commands::SortAlgorithm;
use numlab_core::parsing::text_query::COMMANDS;

/// Completes command names at the start of a line, and algorithm names
/// after `sort`.
pub struct NumlabHelper;

impl NumlabHelper {
    pub fn new() -> NumlabHelper {
        NumlabHelper
    }

    pub fn candidates(line: &str, pos: usize) -> (usize, Vec<&'static str>) {
        let (res_pos, word) = extract_word(line, pos, None, &[b' ']);
        let before = line[..res_pos].trim();
        let names: Vec<&'static str> = if before.is_empty() {
            COMMANDS.to_vec()
        } else if before == "sort" {
            SortAlgorithm::ALL.iter().map(|a| a.name()).collect()
        } else {
            vec![]
        };
        let results = names
            .into_iter()
            .filter(|name| name.starts_with(word))
            .collect();
        (res_pos, results)
    }
}

impl Default for NumlabHelper {
    fn default() -> Self {
        NumlabHelper::new()
    }
}

impl Completer for NumlabHelper {
    type Candidate = Pair;

    fn complete(&self, line: &str, pos: usize, _ctx: &LineContext) -> Result<(usize, Vec<Pair>)> {
        let (res_pos, names) = NumlabHelper::candidates(line, pos);
        let results = names
            .into_iter()
            .map(|name| Pair {
                display: name.to_owned(),
                replacement: format!("{} ", name),
            })
            .collect();
        Ok((res_pos, results))
    }
}

impl Helper for NumlabHelper {}

impl Validator for NumlabHelper {}

impl Highlighter for NumlabHelper {}

impl Hinter for NumlabHelper {
    type Hint = String;
}
