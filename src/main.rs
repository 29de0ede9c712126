// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Counts the subsets of {1,...,2000} whose sum is divisible by 5 and
//! prints the count.
//!
//! No arguments or configuration; set `RUST_LOG` for progress logging on
//! stderr. Exits non-zero if either internal consistency check fails -
//! that means the arithmetic itself is defective, and aborting beats
//! printing a silently wrong answer.

use std::process::ExitCode;

use subset_count::constants::{COLUMN_SIZE, MODULUS, SET_SIZE};
use subset_count::{ComputeContext, ConsistencyFailure};

fn main() -> ExitCode {
    env_logger::init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(failure) => {
            eprintln!("internal consistency failure: {}", failure);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), ConsistencyFailure> {
    let mut ctx = ComputeContext::new(COLUMN_SIZE)?;
    ctx.run()?;

    println!(
        "Number of subsets of {{1,...,{}}} whose sum is divisible by {}:",
        SET_SIZE, MODULUS
    );
    println!("{}", ctx.divisible_count());
    Ok(())
}
