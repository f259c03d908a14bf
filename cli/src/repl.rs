// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::config::{history_path, Config};
use crate::fmt::print_fmt;
use crate::NumlabHelper;
use eyre::Result;
use numlab_core::one_line;
use rustyline::{config::Configurer, error::ReadlineError, CompletionType, Editor};
use std::io::{BufRead, ErrorKind};

/// Whether a line holds nothing to evaluate.
fn is_blank(line: &str) -> bool {
    let line = line.trim();
    line.is_empty() || line.starts_with('#')
}

/// Evaluates one query per line, printing plain-text replies. Blank
/// lines and `#` comments are skipped. Returns whether every query
/// succeeded.
pub fn noninteractive<T: BufRead>(mut f: T) -> Result<bool> {
    let mut line = String::new();
    let mut all_ok = true;
    loop {
        line.clear();
        if f.read_line(&mut line)? == 0 {
            return Ok(all_ok);
        }
        if is_blank(&line) {
            continue;
        }
        match one_line(&line) {
            Ok(v) => println!("{}", v),
            Err(e) => {
                println!("{}", e);
                all_ok = false;
            }
        };
    }
}

pub const HELP_TEXT: &str = "Commands:
  divisors N        all divisors of N
  factors N         distinct prime factors of N
  factorize N       prime factorization with exponents
  factorial N       N!
  fib N, fibs N     Nth Fibonacci number, or F(0) through F(N)
  digits N          digit count and digits of N
  armstrong N       Armstrong (narcissistic) number check
  palindrome X      palindrome check for a number or a phrase
  reverse A B ...   reverse a list
  duplicates A B .. whether a list repeats any value
  sort ALGO A B ... sort with bubble, insertion or selection sort
To quit, type `quit` or press Ctrl+D.";

pub fn interactive(config: Config) -> Result<()> {
    let mut rl = Editor::<NumlabHelper>::new();
    rl.set_helper(Some(NumlabHelper::new()));
    rl.set_completion_type(CompletionType::List);

    let hpath = history_path();
    if let Some(ref path) = hpath {
        match rl.load_history(path) {
            // Ignore file not found errors.
            Err(ReadlineError::Io(ref err)) if err.kind() == ErrorKind::NotFound => (),
            Err(err) => eprintln!("Loading history failed: {}", err),
            Ok(()) => (),
        };
    }

    let save_history = |rl: &mut Editor<NumlabHelper>| {
        if let Some(ref path) = hpath {
            if let Some(parent) = path.parent() {
                // ignore error - if this fails, saving will as well.
                let _ = std::fs::create_dir_all(parent);
            }
            rl.save_history(path).unwrap_or_else(|e| {
                eprintln!("Saving history failed: {}", e);
            });
        }
    };

    loop {
        let readline = rl.readline(&config.numlab.prompt);
        match readline {
            Ok(ref line) if line.trim() == "help" => {
                println!("{}", HELP_TEXT);
            }
            Ok(ref line) if ["quit", ":q", "exit"].contains(&line.trim()) => {
                save_history(&mut rl);
                break;
            }
            Ok(ref line) if is_blank(line) => (),
            Ok(line) => {
                rl.add_history_entry(line.as_str());
                match numlab_core::eval(&line) {
                    Ok(ref reply) => print_fmt(&config, reply),
                    Err(ref err) => print_fmt(&config, err),
                }
            }
            Err(ReadlineError::Interrupted) => {}
            Err(ReadlineError::Eof) => {
                save_history(&mut rl);
                break;
            }
            Err(err) => {
                println!("{:?}", eyre::eyre!(err).wrap_err("Readline"));
                break;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn noninteractive_reports_failures() {
        let ok = noninteractive(Cursor::new("# comment\n\ndivisors 6\nfactors 60\n")).unwrap();
        assert!(ok);
        let failed = noninteractive(Cursor::new("divisors 6\ndivisors 0\nfib 3\n")).unwrap();
        assert!(!failed);
    }
}
