//! # licensure
//!
//! A tool that checks every source file under a directory begins with a given
//! license header, and can insert the header where it is missing.
//!
//! The header is synthesized per file type from the plain license text and the
//! file type's comment syntax. Interpreter directives (`#!` lines) stay on the
//! first line, with the header placed right after them.
//!
//! ## Features
//!
//! * Recursive scan honoring `.gitignore` and `.licenseignore` files
//! * Builtin comment styles for common languages, extensible via `.licensure.toml`
//! * Check-only mode reporting every file missing its header
//! * Write mode inserting missing headers in place
//!
//! ## Usage as a Library
//!
//! ```rust,no_run
//! use licensure::{Error, Options};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let options = Options {
//!         root: "src".into(),
//!         license: "LICENSE".into(),
//!         write: false,
//!     };
//!
//!     match licensure::run(options).await {
//!         Ok(()) => println!("All files have license headers"),
//!         Err(Error::NoLicense(err)) => {
//!             for file in err.files() {
//!                 println!("missing: {}", file.display());
//!             }
//!         }
//!         Err(err) => return Err(err.into()),
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Modules
//!
//! * [`processor`] - The scan over candidate files
//! * [`templates`] - License text loading and header synthesis
//! * [`comment`] - Extension to comment style registry
//! * [`logging`] - Logging utilities for verbose output
//!
//! [`processor`]: crate::processor
//! [`templates`]: crate::templates
//! [`comment`]: crate::comment
//! [`logging`]: crate::logging

pub mod comment;
pub mod config;
pub mod error;
pub mod logging;
pub mod processor;
pub mod templates;

use std::path::PathBuf;

pub use error::{Error, NoLicenseError, Result};
use processor::{Processor, ProcessorConfig};

/// Options for a single run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Options {
  /// Directory to scan
  pub root: PathBuf,
  /// Path to the canonical license text file
  pub license: PathBuf,
  /// Insert missing headers in place
  pub write: bool,
}

/// Scans `options.root` with the builtin comment styles.
///
/// Resolves with `()` when every scanned file carries its header.
///
/// # Errors
///
/// Fails with [`Error::NoLicense`] listing every file missing its header, in
/// scan order, regardless of `write`. Any I/O or traversal failure is returned
/// as soon as it happens.
pub async fn run(options: Options) -> Result<()> {
  let processor = Processor::new(ProcessorConfig {
    write: options.write,
    ..ProcessorConfig::new(options.root, options.license)
  });
  processor.run().await.map(|_| ())
}
