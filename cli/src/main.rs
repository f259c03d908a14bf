// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use clap::{Arg, ArgAction, Command};
use eyre::{Result, WrapErr};
use std::fs::File;
use std::io::{stdin, BufReader};
use std::process::ExitCode;

use numlab::{config, demo, repl};

fn exit_code(all_ok: bool) -> ExitCode {
    if all_ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn main() -> Result<ExitCode> {
    let matches = Command::new("Numlab")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Numlab Contributors")
        .about("Divisors, prime factors and other classic number algorithms")
        .arg(
            Arg::new("QUERY")
                .help("Evaluate a list of queries. If no arguments are provided, an interactive session will start.")
                .num_args(..)
                .required(false),
        )
        .arg(
            Arg::new("file")
                .short('f')
                .long("file")
                .help("Reads queries from a file, one per line. Use `-` for stdin"),
        )
        .arg(
            Arg::new("demo")
                .long("demo")
                .help("Prints the divisor and prime factor walkthrough, then exits")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config-path")
                .long("config-path")
                .help("Prints a path to the config file, then exits")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .num_args(1)
                .long("config")
                .action(ArgAction::Set)
                .help("Set path to config.toml"),
        )
        .get_matches();

    color_eyre::install()?;
    let config = config::read_config(matches.get_one::<String>("config").map(|s| &**s))?;

    if matches.get_flag("config-path") {
        println!("{}", config::config_toml_path()?.display());
        Ok(ExitCode::SUCCESS)
    } else if matches.get_flag("demo") {
        demo::run(&config).map(|_| ExitCode::SUCCESS)
    } else if let Some(filename) = matches.get_one::<String>("file") {
        match &filename[..] {
            "-" => {
                let stdin_handle = stdin();
                repl::noninteractive(stdin_handle.lock()).map(exit_code)
            }
            _ => {
                let file = File::open(filename)
                    .wrap_err(format!("Failed to open input file `{}`", filename))?;
                repl::noninteractive(BufReader::new(file)).map(exit_code)
            }
        }
    } else if let Some(queries) = matches.get_many::<String>("QUERY") {
        let mut all_ok = true;
        for query in queries {
            println!("> {}", query);
            match numlab_core::one_line(query) {
                Ok(v) => println!("{}", v),
                Err(e) => {
                    println!("{}", e);
                    all_ok = false;
                }
            }
        }
        Ok(exit_code(all_ok))
    } else {
        repl::interactive(config).map(|_| ExitCode::SUCCESS)
    }
}
