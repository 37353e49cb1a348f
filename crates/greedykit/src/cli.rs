//! Command line parsing and execution for the `greedykit` binary.
//!
//! [`execute`] turns a parsed [`Command`] into the text printed on stdout, or
//! a [`CliError`] that knows its process exit code.

use crate::explain::{explain_collisions, explain_run_time};
use clap::{Parser, Subcommand};
use greedykit_core::collisions::{count_collisions, simulate_collisions};
use greedykit_core::run_time::RuntimeSearch;
use greedykit_core::types::Road;
use greedykit_core::GreedyError;
use thiserror::Error;

/// Top-level arguments.
#[derive(Parser, Debug)]
#[clap(name = "greedykit", version, about)]
pub struct Args {
    /// Subcommand to run.
    #[clap(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Count collisions on a road written as a string of 'L', 'R' and 'S'.
    Collisions {
        /// Car directions from left to right, e.g. RLRSLL.
        directions: String,

        /// Print the trimming steps.
        #[clap(long)]
        explain: bool,

        /// Cross-check the count against a car-by-car simulation.
        #[clap(long)]
        verify: bool,
    },
    /// Longest time N computers can run together on the given batteries.
    Runtime {
        /// Number of computers.
        #[clap(short = 'n', long)]
        computers: usize,

        /// Battery capacities in minutes.
        #[clap(required = true)]
        batteries: Vec<u64>,

        /// Print the search summary and the per-battery contributions.
        #[clap(long)]
        explain: bool,
    },
}

/// Failures reported by the command line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CliError {
    /// The input violated an operation's contract.
    #[error(transparent)]
    Input(#[from] GreedyError),

    /// `--verify` found the closed form and the simulation disagreeing.
    #[error("closed form gave {closed_form}, simulation gave {simulated}")]
    Mismatch {
        /// Count from the trim-and-count reduction
        closed_form: u64,
        /// Count from the car-by-car simulation
        simulated: u64,
    },
}

impl CliError {
    /// Process exit code for this failure.
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Input(_) => 1,
            Self::Mismatch { .. } => 2,
        }
    }
}

/// Run `command` and return what should be printed on stdout.
pub fn execute(command: &Command) -> Result<String, CliError> {
    match command {
        Command::Collisions {
            directions,
            explain,
            verify,
        } => {
            let road: Road = directions.parse()?;
            let closed_form = count_collisions(road.as_slice())?;

            if *verify {
                let simulated = simulate_collisions(road.as_slice())?;
                if closed_form != simulated {
                    return Err(CliError::Mismatch {
                        closed_form,
                        simulated,
                    });
                }
                log::info!("simulation agrees: {simulated}");
            }

            if *explain {
                Ok(explain_collisions(&road)?)
            } else {
                Ok(closed_form.to_string())
            }
        }
        Command::Runtime {
            computers,
            batteries,
            explain,
        } => {
            let report = RuntimeSearch::default().solve(*computers, batteries)?;
            if *explain {
                Ok(explain_run_time(&report, batteries))
            } else {
                Ok(report.run_time.to_string())
            }
        }
    }
}
