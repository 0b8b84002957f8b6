//! # Configuration Module
//!
//! This module provides configuration support for licensure, allowing users to
//! register comment styles for extra file extensions or override the builtin
//! style of an extension.
//!
//! Configuration can be specified in a `.licensure.toml` file in the scanned
//! root, via the `--config` flag, or via the `LICENSURE_CONFIG` environment
//! variable.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::comment::CommentStyle;
use crate::verbose_log;

/// The default config file name.
pub const DEFAULT_CONFIG_FILENAME: &str = ".licensure.toml";

/// Environment variable for specifying config file path.
pub const CONFIG_ENV_VAR: &str = "LICENSURE_CONFIG";

/// User-defined comment style configuration.
///
/// A style with only `middle` is a line comment. A style with `top` and
/// `bottom` is a block comment whose body lines are prefixed with `middle`.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct CommentStyleConfig {
  /// The line placed before the body (e.g., "/*").
  /// Empty for line-style comments.
  #[serde(default)]
  pub top: String,

  /// The prefix of each body line (e.g., " * " or "// ").
  pub middle: String,

  /// The line placed after the body (e.g., " */").
  /// Empty for line-style comments.
  #[serde(default)]
  pub bottom: String,
}

impl CommentStyleConfig {
  /// Create a new line-comment style.
  pub fn line(prefix: &str) -> Self {
    Self {
      top: String::new(),
      middle: prefix.to_string(),
      bottom: String::new(),
    }
  }

  /// Create a new block-comment style.
  pub fn block(top: &str, middle: &str, bottom: &str) -> Self {
    Self {
      top: top.to_string(),
      middle: middle.to_string(),
      bottom: bottom.to_string(),
    }
  }
}

impl From<&CommentStyleConfig> for CommentStyle {
  fn from(config: &CommentStyleConfig) -> Self {
    let non_empty = |s: &str| (!s.is_empty()).then(|| s.to_string());
    Self::from_tokens(
      non_empty(&config.top),
      config.middle.clone(),
      non_empty(&config.bottom),
    )
  }
}

/// Main configuration struct for licensure.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
  /// Comment styles keyed by file extension without the leading dot
  /// (e.g., "java", "jsonc"). Keys are case-sensitive.
  #[serde(default, rename = "comment-styles")]
  pub comment_styles: HashMap<String, CommentStyleConfig>,
}

/// Error type for configuration operations.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
  /// The config file could not be read.
  #[error("Failed to read config file '{path}': {source}")]
  ReadError { path: PathBuf, source: std::io::Error },

  /// The config file contains invalid TOML.
  #[error("Failed to parse config file '{path}': {source}")]
  ParseError { path: PathBuf, source: toml::de::Error },

  /// A comment style configuration is invalid.
  #[error("Invalid comment style for '{extension}': {message}")]
  InvalidCommentStyle { extension: String, message: String },
}

impl Config {
  /// Load configuration from a file.
  ///
  /// # Errors
  ///
  /// Returns a [`ConfigError`] if the file cannot be read, is not valid TOML,
  /// or declares an invalid comment style.
  pub fn load(path: &Path) -> Result<Self, ConfigError> {
    verbose_log!("Loading config from: {}", path.display());

    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
      path: path.to_path_buf(),
      source: e,
    })?;

    let config = Self::parse(&content).map_err(|e| match e {
      ConfigError::ParseError { source, .. } => ConfigError::ParseError {
        path: path.to_path_buf(),
        source,
      },
      other => other,
    })?;

    verbose_log!("Loaded {} comment style overrides", config.comment_styles.len());

    Ok(config)
  }

  /// Parse and validate configuration from TOML text.
  pub fn parse(content: &str) -> Result<Self, ConfigError> {
    let config: Self = toml::from_str(content).map_err(|e| ConfigError::ParseError {
      path: PathBuf::new(),
      source: e,
    })?;
    config.validate()?;
    Ok(config)
  }

  /// Validate the configuration.
  ///
  /// Checks that:
  /// - Extension keys are non-empty and contain no `.`
  /// - All `middle` fields are non-empty
  /// - `top` and `bottom` are either both set or both empty
  fn validate(&self) -> Result<(), ConfigError> {
    for (ext, style) in &self.comment_styles {
      let invalid = |message: &str| ConfigError::InvalidCommentStyle {
        extension: ext.clone(),
        message: message.to_string(),
      };

      if ext.is_empty() {
        return Err(invalid("extension cannot be empty"));
      }

      if ext.starts_with('.') {
        return Err(invalid("extension should not include leading dot"));
      }

      if ext.contains('.') {
        return Err(invalid("only the final extension segment is matched"));
      }

      if style.middle.is_empty() {
        return Err(invalid("middle field cannot be empty"));
      }

      if style.top.is_empty() != style.bottom.is_empty() {
        return Err(invalid("top and bottom must both be set for block comments"));
      }
    }

    Ok(())
  }

  /// Check if the configuration has any comment style overrides.
  pub fn has_overrides(&self) -> bool {
    !self.comment_styles.is_empty()
  }
}

/// Discover the configuration file path.
///
/// The configuration file is discovered in the following order:
/// 1. Path specified via `--config` flag (passed as `explicit_path`), whether
///    or not it exists
/// 2. Path specified via `LICENSURE_CONFIG` environment variable
/// 3. `.licensure.toml` in the scanned root
pub fn discover_config_path(explicit_path: Option<&Path>, root: &Path) -> Option<PathBuf> {
  // An explicit path is used even if it does not exist, so loading reports it.
  if let Some(path) = explicit_path {
    verbose_log!("Using explicit config path: {}", path.display());
    return Some(path.to_path_buf());
  }

  if let Ok(env_path) = std::env::var(CONFIG_ENV_VAR) {
    let path = PathBuf::from(&env_path);
    if path.exists() {
      verbose_log!("Using config from {}: {}", CONFIG_ENV_VAR, path.display());
      return Some(path);
    }
    verbose_log!("{} path does not exist: {}", CONFIG_ENV_VAR, env_path);
  }

  let root_config = root.join(DEFAULT_CONFIG_FILENAME);
  if root_config.exists() {
    verbose_log!("Using root config: {}", root_config.display());
    return Some(root_config);
  }

  verbose_log!("No config file found");
  None
}

/// Load configuration from the discovered path.
///
/// Returns `Ok(None)` when discovery is disabled or no file is found.
pub fn load_config(explicit_path: Option<&Path>, root: &Path, no_config: bool) -> Result<Option<Config>, ConfigError> {
  if no_config {
    verbose_log!("Config file discovery disabled (--no-config)");
    return Ok(None);
  }

  match discover_config_path(explicit_path, root) {
    Some(path) => Config::load(&path).map(Some),
    None => Ok(None),
  }
}
