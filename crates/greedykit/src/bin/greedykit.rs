#![allow(clippy::exit)]
#![allow(clippy::print_stdout)]
#![allow(clippy::print_stderr)]

//! Command line front-end for the greedy kernels.

use clap::Parser;
use greedykit::cli::{execute, Args};

fn main() {
    env_logger::init();

    let args = Args::parse();
    match execute(&args.command) {
        Ok(output) => println!("{output}"),
        Err(error) => {
            eprintln!("ERROR: {error}");
            std::process::exit(error.exit_code());
        }
    }
}
