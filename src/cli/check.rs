//! # Check Command
//!
//! This module implements the check/write command for license headers.

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Args;
use licensure::Error;
use licensure::comment::CommentRegistry;
use licensure::config::load_config;
use licensure::logging::{ColorMode, init_tracing, set_quiet, set_verbose};
use licensure::processor::{Processor, ProcessorConfig, absolutize_path};
use tracing::debug;

use crate::output::{print_all_files_ok, print_blank_line, print_hint, print_missing_files, print_start_message};

/// Exit status when some file is missing its license header.
pub const EXIT_MISSING: u8 = 1;

/// Exit status for any other failure.
pub const EXIT_ERROR: u8 = 2;

/// Arguments for the check command
#[derive(Args, Debug)]
pub struct CheckArgs {
  /// Directory to scan recursively
  #[arg(long, short = 'r', value_name = "DIR", default_value = ".")]
  pub root: PathBuf,

  /// File holding the canonical license text
  #[arg(long, short = 'l', value_name = "FILE")]
  pub license: PathBuf,

  /// Insert the license header into files missing it
  #[arg(long, short = 'w')]
  pub write: bool,

  /// Path to config file (default: .licensure.toml in the scanned root)
  #[arg(long, value_name = "FILE")]
  pub config: Option<PathBuf>,

  /// Ignore config file even if present
  #[arg(long, conflicts_with = "config")]
  pub no_config: bool,

  /// Increase verbosity (-v info, -vv debug, -vvv trace)
  #[arg(short, long, action = clap::ArgAction::Count)]
  pub verbose: u8,

  /// Only print the paths of files missing the header
  #[arg(short, long, conflicts_with = "verbose")]
  pub quiet: bool,

  /// Control when to use colored output (auto, never, always)
  #[arg(
    long,
    value_name = "WHEN",
    num_args = 0..=1,
    default_value_t = ColorMode::Auto,
    default_missing_value = "always",
    value_enum
  )]
  pub colors: ColorMode,
}

/// Run the check command with the given arguments.
///
/// Returns the process exit code: success when every file has its header,
/// [`EXIT_MISSING`] when some file lacks it. Other failures are returned as
/// errors.
pub async fn run_check(args: CheckArgs) -> Result<ExitCode> {
  // Initialize tracing subscriber for structured logging
  init_tracing(args.quiet, args.verbose);

  // Set output mode for the info_log! and verbose_log! macros
  if args.verbose > 0 {
    set_verbose();
  } else if args.quiet {
    set_quiet();
  }
  args.colors.apply();

  let root = absolutize_path(&args.root)?;

  let config = load_config(args.config.as_deref(), &root, args.no_config)?;
  let registry = match config {
    Some(ref cfg) if cfg.has_overrides() => {
      debug!("Using configuration file for comment style overrides");
      CommentRegistry::with_overrides(cfg)
    }
    _ => CommentRegistry::builtin(),
  };
  debug!("Registered {} extensions", registry.len());

  print_start_message(&root, args.write);

  let processor = Processor::new(ProcessorConfig {
    write: args.write,
    registry,
    ..ProcessorConfig::new(root.clone(), args.license.clone())
  });

  let start_time = Instant::now();
  let result = processor.run().await;
  debug!("Run finished in {}ms", start_time.elapsed().as_millis());

  match result {
    Ok(summary) => {
      print_blank_line();
      print_all_files_ok(&summary);
      Ok(ExitCode::SUCCESS)
    }
    Err(Error::NoLicense(err)) => {
      print_blank_line();
      print_missing_files(err.files(), &root, args.write);
      if !args.write {
        print_blank_line();
        print_hint("Run with --write to add missing headers.");
      }
      Ok(ExitCode::from(EXIT_MISSING))
    }
    Err(err) => Err(err).with_context(|| format!("Failed to check {}", root.display())),
  }
}
