//! # Comment Module
//!
//! This module maps file extensions to the comment syntax used to render a
//! license header for that file type.
//!
//! The module includes:
//! - [`CommentStyle`] for describing line-style and block-style comments
//! - [`CommentRegistry`] for looking up the style of an extension, with the
//!   builtin table optionally extended by configuration
//!
//! Extensions are matched case-sensitively against the text following the
//! final `.` of a file name. Extensions that are not registered (`json`, for
//! example) are never scanned.

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::path::Path;

use crate::config::Config;

/// How plain text is wrapped to become a comment in one file type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommentStyle {
  /// Every line is prefixed with the same token (e.g. `# `).
  Line {
    /// Token placed in front of each line
    prefix: Cow<'static, str>,
  },

  /// An opening line, a prefix for each body line, and a closing line.
  Block {
    /// Line placed before the body (e.g. `/*`)
    open: Cow<'static, str>,
    /// Token placed in front of each body line (e.g. ` * `)
    prefix: Cow<'static, str>,
    /// Line placed after the body (e.g. ` */`)
    close: Cow<'static, str>,
  },
}

impl CommentStyle {
  /// Create a line-comment style.
  pub const fn line(prefix: &'static str) -> Self {
    Self::Line {
      prefix: Cow::Borrowed(prefix),
    }
  }

  /// Create a block-comment style.
  pub const fn block(open: &'static str, prefix: &'static str, close: &'static str) -> Self {
    Self::Block {
      open: Cow::Borrowed(open),
      prefix: Cow::Borrowed(prefix),
      close: Cow::Borrowed(close),
    }
  }

  /// Create a style from owned tokens, e.g. from a configuration file.
  ///
  /// `open` and `close` must either both be present (block style) or both be
  /// absent (line style); any other combination yields a line style using only
  /// `prefix`. Validation of that rule happens when the config is loaded.
  pub fn from_tokens(open: Option<String>, prefix: String, close: Option<String>) -> Self {
    match (open, close) {
      (Some(open), Some(close)) => Self::Block {
        open: Cow::Owned(open),
        prefix: Cow::Owned(prefix),
        close: Cow::Owned(close),
      },
      _ => Self::Line {
        prefix: Cow::Owned(prefix),
      },
    }
  }

  /// The per-line prefix token, present in both shapes.
  pub fn prefix(&self) -> &str {
    match self {
      Self::Line { prefix } | Self::Block { prefix, .. } => prefix,
    }
  }

  /// Returns `true` for block-style comments.
  pub const fn is_block(&self) -> bool {
    matches!(self, Self::Block { .. })
  }
}

const C_BLOCK: CommentStyle = CommentStyle::block("/*", " * ", " */");
const HASH: CommentStyle = CommentStyle::line("# ");
const MARKUP: CommentStyle = CommentStyle::block("<!--", "     ", "-->");
const DOUBLE_DASH: CommentStyle = CommentStyle::line("-- ");
const DOUBLE_SEMICOLON: CommentStyle = CommentStyle::line(";; ");
const PERCENT: CommentStyle = CommentStyle::line("% ");
const QUOTE: CommentStyle = CommentStyle::line("\" ");

/// The builtin extension table.
///
/// `json` is intentionally absent: strict JSON has no comment syntax.
const BUILTIN_STYLES: &[(&str, CommentStyle)] = &[
  // C family
  ("c", C_BLOCK),
  ("h", C_BLOCK),
  ("cc", C_BLOCK),
  ("cpp", C_BLOCK),
  ("cxx", C_BLOCK),
  ("hh", C_BLOCK),
  ("hpp", C_BLOCK),
  ("hxx", C_BLOCK),
  ("cs", C_BLOCK),
  ("java", C_BLOCK),
  ("js", C_BLOCK),
  ("mjs", C_BLOCK),
  ("cjs", C_BLOCK),
  ("jsx", C_BLOCK),
  ("ts", C_BLOCK),
  ("mts", C_BLOCK),
  ("cts", C_BLOCK),
  ("tsx", C_BLOCK),
  ("go", C_BLOCK),
  ("rs", C_BLOCK),
  ("swift", C_BLOCK),
  ("kt", C_BLOCK),
  ("kts", C_BLOCK),
  ("scala", C_BLOCK),
  ("groovy", C_BLOCK),
  ("gradle", C_BLOCK),
  ("dart", C_BLOCK),
  ("css", C_BLOCK),
  ("scss", C_BLOCK),
  ("less", C_BLOCK),
  ("proto", C_BLOCK),
  ("sol", C_BLOCK),
  // Hash comments
  ("py", HASH),
  ("rb", HASH),
  ("sh", HASH),
  ("bash", HASH),
  ("zsh", HASH),
  ("fish", HASH),
  ("pl", HASH),
  ("pm", HASH),
  ("r", HASH),
  ("yaml", HASH),
  ("yml", HASH),
  ("toml", HASH),
  ("tf", HASH),
  ("bzl", HASH),
  ("cmake", HASH),
  ("ps1", HASH),
  ("coffee", HASH),
  ("ex", HASH),
  ("exs", HASH),
  ("jl", HASH),
  ("nim", HASH),
  ("tcl", HASH),
  ("cr", HASH),
  // Markup
  ("html", MARKUP),
  ("htm", MARKUP),
  ("xhtml", MARKUP),
  ("xml", MARKUP),
  ("xsd", MARKUP),
  ("xsl", MARKUP),
  ("svg", MARKUP),
  ("vue", MARKUP),
  // Other line comments
  ("sql", DOUBLE_DASH),
  ("hs", DOUBLE_DASH),
  ("lua", DOUBLE_DASH),
  ("elm", DOUBLE_DASH),
  ("el", DOUBLE_SEMICOLON),
  ("lisp", DOUBLE_SEMICOLON),
  ("clj", DOUBLE_SEMICOLON),
  ("cljs", DOUBLE_SEMICOLON),
  ("scm", DOUBLE_SEMICOLON),
  ("erl", PERCENT),
  ("hrl", PERCENT),
  ("tex", PERCENT),
  ("vim", QUOTE),
];

/// Looks up the builtin comment style for an extension.
///
/// Returns `None` when the extension has no builtin style.
pub fn builtin_style(extension: &str) -> Option<&'static CommentStyle> {
  BUILTIN_STYLES
    .iter()
    .find(|(ext, _)| *ext == extension)
    .map(|(_, style)| style)
}

/// Returns the extension of a path as used for registry lookups.
///
/// This is the text after the final `.` of the file name, so `index.d.ts`
/// yields `ts`. Dot-files such as `.bashrc` have no extension.
pub fn extension_of(path: &Path) -> Option<&str> {
  path.extension().and_then(|ext| ext.to_str())
}

/// Mapping from extension to comment style for one run.
///
/// Each registered extension maps to exactly one [`CommentStyle`]. The key set
/// also decides which files are scanned at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentRegistry {
  styles: BTreeMap<String, CommentStyle>,
}

impl Default for CommentRegistry {
  fn default() -> Self {
    Self::builtin()
  }
}

impl CommentRegistry {
  /// Creates a registry holding the builtin table.
  pub fn builtin() -> Self {
    let styles = BUILTIN_STYLES
      .iter()
      .map(|(ext, style)| ((*ext).to_string(), style.clone()))
      .collect();
    Self { styles }
  }

  /// Creates a registry from the builtin table with configured styles layered
  /// on top. A configured extension replaces the builtin style or adds a new
  /// extension.
  pub fn with_overrides(config: &Config) -> Self {
    let mut registry = Self::builtin();
    for (ext, style) in &config.comment_styles {
      registry.insert(ext.clone(), CommentStyle::from(style));
    }
    registry
  }

  /// Registers `style` for `extension`, replacing any previous entry.
  pub fn insert(&mut self, extension: impl Into<String>, style: CommentStyle) {
    self.styles.insert(extension.into(), style);
  }

  /// Looks up the style registered for an extension.
  pub fn lookup(&self, extension: &str) -> Option<&CommentStyle> {
    self.styles.get(extension)
  }

  /// Looks up the style for a path by its final extension.
  pub fn lookup_path(&self, path: &Path) -> Option<(&str, &CommentStyle)> {
    let ext = extension_of(path)?;
    let (key, style) = self.styles.get_key_value(ext)?;
    Some((key.as_str(), style))
  }

  /// Registered extensions, in sorted order.
  pub fn extensions(&self) -> impl Iterator<Item = &str> {
    self.styles.keys().map(String::as_str)
  }

  /// Glob patterns matching every registered extension (`*.rs`, `*.py`, ...).
  pub fn glob_patterns(&self) -> Vec<String> {
    self.extensions().map(|ext| format!("*.{ext}")).collect()
  }

  /// Number of registered extensions.
  pub fn len(&self) -> usize {
    self.styles.len()
  }

  /// Returns `true` if no extension is registered.
  pub fn is_empty(&self) -> bool {
    self.styles.is_empty()
  }
}
