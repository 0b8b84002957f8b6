//! # Processor Module
//!
//! This module contains the scan that checks every candidate file for its
//! license header and optionally inserts missing headers.
//!
//! The module is organized into several submodules:
//! - [`file_io`] - Asynchronous file reading and writing
//! - [`content_transformer`] - Shebang-aware header location, comparison and insertion
//! - [`file_collector`] - Streaming directory traversal
//!
//! The [`Processor`] struct is the main entry point, orchestrating the
//! submodules for one run.

pub mod content_transformer;
pub mod file_collector;
mod file_io;

use std::path::{Path, PathBuf};

pub use content_transformer::{find_insertion_offset, has_header, insert_header};
pub use file_collector::{CandidateStream, FileCollector, LICENSE_IGNORE_FILENAME, absolutize_path};
pub use file_io::FileIO;
use futures::StreamExt;
use tracing::{debug, info, trace};

use crate::comment::CommentRegistry;
use crate::error::{NoLicenseError, Result};
use crate::templates::{HeaderCache, LicenseText};

/// Configuration for creating a Processor instance.
pub struct ProcessorConfig {
  /// Directory to scan
  pub root: PathBuf,

  /// Path to the canonical license text
  pub license: PathBuf,

  /// Whether to insert missing headers in place
  pub write: bool,

  /// Extension to comment style mapping
  pub registry: CommentRegistry,
}

impl ProcessorConfig {
  /// Creates a new ProcessorConfig in check-only mode with the builtin
  /// comment styles.
  ///
  /// Use struct update syntax to override specific fields:
  /// ```ignore
  /// ProcessorConfig {
  ///     write: true,
  ///     ..ProcessorConfig::new(root, license)
  /// }
  /// ```
  pub fn new(root: impl Into<PathBuf>, license: impl Into<PathBuf>) -> Self {
    Self {
      root: root.into(),
      license: license.into(),
      write: false,
      registry: CommentRegistry::builtin(),
    }
  }
}

/// Counts gathered during a successful run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ScanSummary {
  /// Files read and compared
  pub files_scanned: usize,
  /// Files that already carried the header
  pub compliant: usize,
  /// Files missing the header and left untouched
  pub missing: usize,
  /// Files that had the header inserted
  pub written: usize,
  /// Distinct extensions for which a header was rendered
  pub extensions_seen: usize,
}

impl ScanSummary {
  fn record(&mut self, outcome: FileOutcome) {
    self.files_scanned += 1;
    match outcome {
      FileOutcome::Compliant => self.compliant += 1,
      FileOutcome::Missing => self.missing += 1,
      FileOutcome::Written => self.written += 1,
    }
  }
}

/// Outcome of checking one file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOutcome {
  /// The header is already present
  Compliant,
  /// The header is missing and the file was left untouched
  Missing,
  /// The header was missing and has been inserted
  Written,
}

impl FileOutcome {
  pub const fn is_violation(self) -> bool {
    matches!(self, Self::Missing | Self::Written)
  }
}

/// Processor for checking and inserting license headers.
///
/// A processor can be run any number of times; each run reads the license
/// file afresh and starts with an empty header cache.
pub struct Processor {
  root: PathBuf,
  license: PathBuf,
  write: bool,
  registry: CommentRegistry,
}

impl Processor {
  pub fn new(config: ProcessorConfig) -> Self {
    Self {
      root: config.root,
      license: config.license,
      write: config.write,
      registry: config.registry,
    }
  }

  /// Runs a scan of the configured root.
  ///
  /// Consumes the traversal stream one file at a time. Files missing their
  /// header are collected in scan order and, in write mode, fixed in place.
  ///
  /// # Errors
  ///
  /// - [`Error::NoLicense`](crate::Error::NoLicense) once the whole tree has
  ///   been scanned, if any file lacked its header. Write mode does not
  ///   suppress this.
  /// - [`Error::Io`](crate::Error::Io) or [`Error::Walk`](crate::Error::Walk)
  ///   immediately, if reading the license, reading or writing a file, or the
  ///   traversal fails.
  pub async fn run(&self) -> Result<ScanSummary> {
    let license = LicenseText::load(&self.license).await?;
    let collector = FileCollector::new(&self.root, &self.registry)?;
    let mut files = collector.stream()?;
    self.process_stream(license, &mut files).await
  }

  /// Processes an already-open stream of candidate files.
  pub async fn process_stream(&self, license: LicenseText, files: &mut CandidateStream) -> Result<ScanSummary> {
    let mut cache = HeaderCache::new(license);
    let mut missing = Vec::new();
    let mut summary = ScanSummary::default();

    while let Some(file) = files.next().await {
      let file = file?;
      trace!("Got file {}", file.display());

      let Some(outcome) = self.process_file(&file, &mut cache).await? else {
        continue;
      };
      summary.record(outcome);
      if outcome.is_violation() {
        missing.push(file);
      }
    }

    summary.extensions_seen = cache.len();
    info!(
      "Scanned {} files: {} compliant, {} missing, {} written",
      summary.files_scanned, summary.compliant, summary.missing, summary.written
    );

    if missing.is_empty() {
      Ok(summary)
    } else {
      Err(NoLicenseError::new(missing).into())
    }
  }

  /// Checks a single file, inserting the header in write mode.
  ///
  /// Returns `None` for files without a registered comment style.
  pub async fn process_file(&self, path: &Path, cache: &mut HeaderCache) -> Result<Option<FileOutcome>> {
    let Some((ext, style)) = self.registry.lookup_path(path) else {
      trace!("Skipping: {} (no comment style defined for extension)", path.display());
      return Ok(None);
    };

    let header = cache.get_or_synthesize(ext, style);
    let content = FileIO::read_full_content(path).await?;

    let offset = find_insertion_offset(&content);
    if offset > 0 {
      debug!("Found shebang in file {}, starts with index {}", path.display(), offset);
    }

    if has_header(&content, offset, header) {
      return Ok(Some(FileOutcome::Compliant));
    }

    debug!("Found no license in file {}", path.display());
    if !self.write {
      return Ok(Some(FileOutcome::Missing));
    }

    debug!("Writing license back to file {}", path.display());
    let updated = insert_header(&content, offset, header);
    FileIO::write_file(path, &updated).await?;
    Ok(Some(FileOutcome::Written))
  }
}
