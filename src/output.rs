//! # Output Module
//!
//! This module centralizes all user-facing output for the licensure binary.
//! It provides consistent formatting, colors, and symbols for terminal output.
//!
//! - **Scannable**: Use formatting to make output easy to parse visually
//! - **Progressive**: More detail with `-v`, silence with `-q`
//! - **Scriptable**: In quiet mode only bare file paths reach stdout

use std::path::{Path, PathBuf};

use licensure::info_log;
use licensure::logging::{is_quiet, is_verbose};
use licensure::processor::ScanSummary;
use owo_colors::{OwoColorize, Stream};

/// Symbols used in output
pub mod symbols {
  /// Success/has license
  pub const SUCCESS: &str = "\u{2713}"; // ✓
  /// Missing license/failure
  pub const FAILURE: &str = "\u{2717}"; // ✗
}

/// Maximum number of files to show in the default output before truncating
const DEFAULT_FILE_LIST_LIMIT: usize = 20;

/// Print the initial "Checking <root>..." message.
pub fn print_start_message(root: &Path, write: bool) {
  if is_quiet() {
    return;
  }

  let verb = if write { "Processing" } else { "Checking" };
  println!("{} {}...", verb, root.display());
}

/// Print a blank line for visual separation (respects quiet mode).
pub fn print_blank_line() {
  if !is_quiet() {
    println!();
  }
}

/// Print the list of files missing license headers, in scan order.
///
/// In write mode the headers have already been inserted, so the heading says
/// so. Shows up to `DEFAULT_FILE_LIST_LIMIT` files unless verbose.
pub fn print_missing_files(files: &[PathBuf], root: &Path, write: bool) {
  if files.is_empty() {
    return;
  }

  if is_quiet() {
    // In quiet mode, just print the file paths (for scripting)
    for file in files {
      println!("{}", make_relative_path(file, root));
    }
    return;
  }

  let count = files.len();
  let files_word = if count == 1 { "file" } else { "files" };
  let header = if write {
    format!(
      "{} Added license to {} {} that had none:",
      symbols::SUCCESS.if_supports_color(Stream::Stdout, |s| s.green()),
      count,
      files_word
    )
  } else {
    format!(
      "{} {} {} missing license headers:",
      symbols::FAILURE.if_supports_color(Stream::Stdout, |s| s.red()),
      count,
      files_word
    )
  };
  println!("{}", header);

  let show_all = is_verbose();
  let limit = if show_all { count } else { DEFAULT_FILE_LIST_LIMIT };

  for file in files.iter().take(limit) {
    println!("  {}", make_relative_path(file, root));
  }

  if !show_all && count > limit {
    let remaining = count - limit;
    println!(
      "  {} ... and {} more (use -v to see all)",
      "".if_supports_color(Stream::Stdout, |s| s.dimmed()),
      remaining
    );
  }
}

/// Print the success message when all files have license headers.
pub fn print_all_files_ok(summary: &ScanSummary) {
  if is_quiet() {
    return;
  }

  let files_word = if summary.files_scanned == 1 { "file" } else { "files" };
  println!(
    "{} All {} {} have license headers.",
    symbols::SUCCESS.if_supports_color(Stream::Stdout, |s| s.green()),
    summary.files_scanned.if_supports_color(Stream::Stdout, |s| s.cyan()),
    files_word
  );
}

/// Print a hint for the user about what to do next.
pub fn print_hint(message: &str) {
  info_log!("{}", message);
}

/// Display `path` relative to `root` when possible.
pub fn make_relative_path(path: &Path, root: &Path) -> String {
  let relative = path
    .strip_prefix(root)
    .map(Path::to_path_buf)
    .ok()
    .or_else(|| pathdiff::diff_paths(path, root))
    .unwrap_or_else(|| path.to_path_buf());

  relative.to_string_lossy().replace('\\', "/")
}
