//! # Error Module
//!
//! Errors returned by a licensure run.
//!
//! A run fails in one of two distinguishable ways: files are missing their
//! license header ([`Error::NoLicense`]), or the environment is broken
//! (unreadable license file, unreadable or unwritable candidate file, failed
//! traversal, invalid configuration).

use std::fmt;
use std::path::{Path, PathBuf};

use crate::config::ConfigError;

/// Result alias used throughout the library.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Files that lack the expected license header.
///
/// The list is fixed at construction, in the order the files were scanned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoLicenseError {
  files: Vec<PathBuf>,
}

impl NoLicenseError {
  pub const fn new(files: Vec<PathBuf>) -> Self {
    Self { files }
  }

  /// The files missing a header, in scan order.
  pub fn files(&self) -> &[PathBuf] {
    &self.files
  }
}

impl fmt::Display for NoLicenseError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "No license content in the following files:")?;
    for file in &self.files {
      write!(f, "\n{}", file.display())?;
    }
    Ok(())
  }
}

impl std::error::Error for NoLicenseError {}

/// Error type for licensure runs.
#[derive(Debug, thiserror::Error)]
pub enum Error {
  /// One or more files lack the license header.
  #[error(transparent)]
  NoLicense(#[from] NoLicenseError),

  /// A file could not be read or written.
  #[error("I/O error on '{path}': {source}")]
  Io { path: PathBuf, source: std::io::Error },

  /// Directory traversal failed.
  #[error("Failed to walk directory tree: {0}")]
  Walk(#[from] ignore::Error),

  /// The configuration is invalid.
  #[error(transparent)]
  Config(#[from] ConfigError),
}

impl Error {
  pub(crate) fn io(path: &Path, source: std::io::Error) -> Self {
    Self::Io {
      path: path.to_path_buf(),
      source,
    }
  }

  /// The files missing a header, if this is a [`Error::NoLicense`] failure.
  pub fn no_license_files(&self) -> Option<&[PathBuf]> {
    match self {
      Self::NoLicense(err) => Some(err.files()),
      _ => None,
    }
  }
}
