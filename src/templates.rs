//! # Templates Module
//!
//! This module turns the canonical license text into the header block expected
//! at the top of each file.
//!
//! The module includes:
//! - [`LicenseText`] for loading the trimmed license text once per run
//! - [`synthesize`] for rendering the text with a [`CommentStyle`]
//! - [`HeaderCache`] for memoizing rendered headers per extension
//!
//! ## Example
//!
//! ```rust
//! use licensure::comment::CommentStyle;
//! use licensure::templates::synthesize;
//!
//! let header = synthesize("Copyright 2020\n\nMIT", &CommentStyle::block("/*", " * ", " */"));
//! assert_eq!(header, "/*\n * Copyright 2020\n *\n * MIT\n */");
//! ```

use std::collections::HashMap;
use std::path::Path;

use tracing::debug;

use crate::comment::CommentStyle;
use crate::error::{Error, Result};

/// The canonical license text with surrounding whitespace trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LicenseText(String);

impl LicenseText {
  /// Wraps raw license content, trimming leading and trailing whitespace and
  /// a leading byte order mark.
  pub fn new(raw: &str) -> Self {
    Self(raw.trim_start_matches('\u{feff}').trim().to_string())
  }

  /// Reads the license file at `path`.
  ///
  /// # Errors
  ///
  /// Returns [`Error::Io`] if the file cannot be read or is not valid UTF-8.
  pub async fn load(path: &Path) -> Result<Self> {
    let raw = tokio::fs::read_to_string(path)
      .await
      .map_err(|source| Error::io(path, source))?;
    Ok(Self::new(&raw))
  }

  pub fn as_str(&self) -> &str {
    &self.0
  }
}

/// Renders license text as a comment in the given style.
///
/// Every output line is the style's prefix followed by one line of the text,
/// with trailing whitespace stripped per line. Block styles additionally get
/// the opening and closing lines. Lines are joined with `\n` and no trailing
/// newline is added.
pub fn synthesize(license_text: &str, style: &CommentStyle) -> String {
  let prefix = style.prefix();
  let body = license_text
    .split('\n')
    .map(|line| format!("{prefix}{line}").trim_end().to_string());

  let lines: Vec<String> = match style {
    CommentStyle::Line { .. } => body.collect(),
    CommentStyle::Block { open, close, .. } => std::iter::once(open.to_string())
      .chain(body)
      .chain(std::iter::once(close.to_string()))
      .collect(),
  };

  lines.join("\n")
}

/// Per-run memo of synthesized headers, keyed by extension.
///
/// A header is rendered the first time its extension is seen and reused for
/// every later file with the same extension.
#[derive(Debug)]
pub struct HeaderCache {
  license: LicenseText,
  headers: HashMap<String, String>,
}

impl HeaderCache {
  pub fn new(license: LicenseText) -> Self {
    Self {
      license,
      headers: HashMap::new(),
    }
  }

  /// Returns the header for `extension`, rendering it with `style` on a miss.
  pub fn get_or_synthesize(&mut self, extension: &str, style: &CommentStyle) -> &str {
    let license = &self.license;
    self.headers.entry(extension.to_string()).or_insert_with(|| {
      debug!("Generating license comment for {} file by {:?}", extension, style);
      synthesize(license.as_str(), style)
    })
  }

  /// Number of distinct extensions rendered so far.
  pub fn len(&self) -> usize {
    self.headers.len()
  }

  /// Returns `true` before the first header is rendered.
  pub fn is_empty(&self) -> bool {
    self.headers.is_empty()
  }
}
