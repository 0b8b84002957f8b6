//! # licensure
//!
//! A tool that checks source files begin with a license header.

mod cli;
mod output;

use std::process::ExitCode;

use crate::cli::{Cli, run_check};

#[tokio::main]
async fn main() -> ExitCode {
  let args = Cli::parse_args();

  match run_check(args.check_args).await {
    Ok(code) => code,
    Err(e) => {
      eprintln!("ERROR: {e:#}");
      ExitCode::from(cli::EXIT_ERROR)
    }
  }
}
