//! # File I/O Module
//!
//! This module provides the asynchronous file reads and writes used by the
//! processor. Failures keep the underlying [`std::io::Error`] and record the
//! path involved.

use std::path::Path;

use crate::error::{Error, Result};

/// File I/O operations for the processor.
pub struct FileIO;

impl FileIO {
  /// Read the full content of a file as UTF-8 text.
  ///
  /// # Errors
  ///
  /// Returns [`Error::Io`] if the file cannot be read or is not valid UTF-8.
  pub async fn read_full_content(path: &Path) -> Result<String> {
    tokio::fs::read_to_string(path)
      .await
      .map_err(|source| Error::io(path, source))
  }

  /// Write file content, replacing the previous content.
  ///
  /// # Errors
  ///
  /// Returns [`Error::Io`] if the file cannot be written.
  pub async fn write_file(path: &Path, content: &str) -> Result<()> {
    tokio::fs::write(path, content)
      .await
      .map_err(|source| Error::io(path, source))
  }
}
