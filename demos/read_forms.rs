//! Reads Lisp forms from a file (or stdin) and prints each one back.
//!
//! Run as:  `RUST_LOG=debug cargo run --example read_forms -- [FILE] [--reify]`.
//!
//! Symbols come back upper-cased and escapes re-encoded, so the output is the
//! reader's view of the input rather than a copy of it.

use std::fs::File;
use std::io::{self, Read};
use std::process;

use clap::{Arg, Command};
use colored::*;

use lisp_reader::Reader;


fn main() {
    // Setup logging.
    env_logger::Builder::from_default_env().init();

    // Parse args.
    let matches = Command::new("read_forms")
        .about("Print the forms a Lisp source file reads as")
        .arg(
            Arg::new("file")
                .help("Source file; reads stdin if absent")
                .index(1),
        )
        .arg(
            Arg::new("reify")
                .long("reify")
                .help("Print errors as reader data"),
        )
        .get_matches();

    let input: Box<dyn Read> = match matches.value_of("file") {
        Some(path) => match File::open(path) {
            Ok(file) => Box::new(file),
            Err(err) => {
                eprintln!("{} {}: {}", "error:".red().bold(), path, err);
                process::exit(2);
            }
        },
        None => Box::new(io::stdin()),
    };

    let mut count = 0;
    for result in Reader::new(input) {
        match result {
            Ok(value) => {
                count += 1;
                println!("{}", value);
            }
            Err(err) => {
                if matches.is_present("reify") {
                    println!("{}", err.reify());
                } else {
                    eprintln!("{} {}", "error:".red().bold(), err);
                }
                process::exit(1);
            }
        }
    }

    eprintln!("{} {}", "forms read:".green(), count);
}
