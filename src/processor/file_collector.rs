//! # File Collector Module
//!
//! This module discovers candidate files under a root directory and yields
//! them as a stream, so processing can start before the walk finishes.
//!
//! The walk:
//! - keeps only files whose extension has a registered comment style
//! - recurses into subdirectories without following symlinks
//! - honors `.gitignore` and `.licenseignore` files (gitignore syntax)
//! - skips hidden files and directories
//! - yields absolute paths, sorted by file name within each directory

use std::path::{Path, PathBuf};

use futures::StreamExt;
use futures::stream::BoxStream;
use ignore::{DirEntry, WalkBuilder};
use ignore::types::{Types, TypesBuilder};
use tokio::sync::mpsc;
use tracing::{debug, trace};

use crate::comment::CommentRegistry;
use crate::error::{Error, Result};

/// Name of the per-directory ignore file, in gitignore syntax.
pub const LICENSE_IGNORE_FILENAME: &str = ".licenseignore";

/// Name of the file type selected during the walk.
const FILE_TYPE_NAME: &str = "licensure";

/// Number of discovered paths buffered ahead of the processor.
const CHANNEL_CAPACITY: usize = 64;

/// Stream of candidate files in discovery order.
pub type CandidateStream = BoxStream<'static, Result<PathBuf>>;

/// File collector for directory traversal.
pub struct FileCollector {
  /// Absolute root of the walk
  root: PathBuf,

  /// File-name globs selecting candidate files (`*.rs`, ...)
  patterns: Vec<String>,
}

impl FileCollector {
  /// Creates a collector for `root` selecting every extension in `registry`.
  ///
  /// # Errors
  ///
  /// Returns [`Error::Io`] if `root` cannot be made absolute.
  pub fn new(root: &Path, registry: &CommentRegistry) -> Result<Self> {
    Ok(Self {
      root: absolutize_path(root)?,
      patterns: registry.glob_patterns(),
    })
  }

  fn build_types(&self) -> Result<Types> {
    let mut builder = TypesBuilder::new();
    for pattern in &self.patterns {
      builder.add(FILE_TYPE_NAME, pattern)?;
    }
    builder.select(FILE_TYPE_NAME);
    Ok(builder.build()?)
  }

  fn build_walker(&self) -> Result<ignore::Walk> {
    let types = self.build_types()?;

    let walker = WalkBuilder::new(&self.root)
      .types(types)
      .follow_links(false)
      .hidden(true)
      .parents(false)
      .ignore(false)
      .git_ignore(true)
      .git_global(false)
      .git_exclude(false)
      .require_git(false)
      .add_custom_ignore_filename(LICENSE_IGNORE_FILENAME)
      // A type match takes precedence over the hidden rule, so dot-files are
      // filtered here as well.
      .filter_entry(|entry| !is_hidden(entry))
      .sort_by_file_name(|a, b| a.cmp(b))
      .build();

    Ok(walker)
  }

  /// Starts the walk and returns the stream of candidate files.
  ///
  /// The walk runs on a blocking thread and feeds a bounded channel. The
  /// first traversal error is yielded as the last item of the stream.
  /// Dropping the stream stops the walk.
  ///
  /// Must be called from within a tokio runtime.
  pub fn stream(&self) -> Result<CandidateStream> {
    let walker = self.build_walker()?;
    let (tx, rx) = mpsc::channel::<Result<PathBuf>>(CHANNEL_CAPACITY);

    debug!("Scanning {:?} in {}", self.patterns, self.root.display());

    tokio::task::spawn_blocking(move || {
      for entry in walker {
        let item = match entry {
          Ok(entry) => {
            if !entry.file_type().is_some_and(|ft| ft.is_file()) {
              trace!("Skipping: {} (not a regular file)", entry.path().display());
              continue;
            }
            Ok(entry.into_path())
          }
          Err(err) => Err(Error::Walk(err)),
        };

        let failed = item.is_err();
        if tx.blocking_send(item).is_err() || failed {
          break;
        }
      }
    });

    let stream = futures::stream::unfold(rx, |mut rx| async move {
      let item = rx.recv().await?;
      Some((item, rx))
    });

    Ok(stream.boxed())
  }
}

/// Returns `true` for entries below the root whose name starts with `.`.
fn is_hidden(entry: &DirEntry) -> bool {
  entry.depth() > 0 && entry.file_name().as_encoded_bytes().starts_with(b".")
}

/// Converts a potentially relative path to an absolute path.
///
/// The path is not canonicalized, so symlinks in it are kept.
pub fn absolutize_path(path: &Path) -> Result<PathBuf> {
  std::path::absolute(path).map_err(|source| Error::io(path, source))
}

#[cfg(test)]
mod tests {
  use std::fs;

  use futures::TryStreamExt;
  use tempfile::tempdir;

  use super::*;

  async fn collect(root: &Path) -> Result<Vec<PathBuf>> {
    let collector = FileCollector::new(root, &CommentRegistry::builtin())?;
    collector.stream()?.try_collect().await
  }

  fn names(root: &Path, files: &[PathBuf]) -> Vec<String> {
    files
      .iter()
      .map(|f| {
        f.strip_prefix(root)
          .unwrap_or(f.as_path())
          .to_string_lossy()
          .replace('\\', "/")
      })
      .collect()
  }

  #[test]
  fn test_absolutize_path_already_absolute() {
    let path = std::env::temp_dir();
    assert_eq!(absolutize_path(&path).unwrap(), path);
  }

  #[test]
  fn test_absolutize_path_relative() {
    let result = absolutize_path(Path::new("src")).unwrap();
    assert!(result.is_absolute());
    assert!(result.ends_with("src"));
  }

  #[tokio::test]
  async fn test_only_registered_extensions() -> anyhow::Result<()> {
    let temp_dir = tempdir()?;
    let root = temp_dir.path();
    fs::write(root.join("a.rs"), "")?;
    fs::write(root.join("b.py"), "")?;
    fs::write(root.join("c.json"), "{}")?;
    fs::write(root.join("Makefile"), "")?;

    let files = collect(root).await?;
    assert_eq!(names(root, &files), vec!["a.rs", "b.py"]);
    assert!(files.iter().all(|f| f.is_absolute()));
    Ok(())
  }

  #[tokio::test]
  async fn test_recurses_in_sorted_order() -> anyhow::Result<()> {
    let temp_dir = tempdir()?;
    let root = temp_dir.path();
    fs::create_dir_all(root.join("src/nested"))?;
    fs::write(root.join("z.js"), "")?;
    fs::write(root.join("src/main.rs"), "")?;
    fs::write(root.join("src/nested/lib.go"), "")?;
    fs::write(root.join("a.ts"), "")?;

    let files = collect(root).await?;
    assert_eq!(
      names(root, &files),
      vec!["a.ts", "src/main.rs", "src/nested/lib.go", "z.js"]
    );
    Ok(())
  }

  #[tokio::test]
  async fn test_honors_gitignore_without_git_repo() -> anyhow::Result<()> {
    let temp_dir = tempdir()?;
    let root = temp_dir.path();
    fs::create_dir_all(root.join("build"))?;
    fs::write(root.join(".gitignore"), "build/\ngenerated.rs\n")?;
    fs::write(root.join("build/out.js"), "")?;
    fs::write(root.join("generated.rs"), "")?;
    fs::write(root.join("kept.rs"), "")?;

    let files = collect(root).await?;
    assert_eq!(names(root, &files), vec!["kept.rs"]);
    Ok(())
  }

  #[tokio::test]
  async fn test_honors_licenseignore() -> anyhow::Result<()> {
    let temp_dir = tempdir()?;
    let root = temp_dir.path();
    fs::create_dir_all(root.join("vendor"))?;
    fs::write(root.join(LICENSE_IGNORE_FILENAME), "vendor/\n")?;
    fs::write(root.join("vendor/dep.c"), "")?;
    fs::write(root.join("main.c"), "")?;

    let files = collect(root).await?;
    assert_eq!(names(root, &files), vec!["main.c"]);
    Ok(())
  }

  #[tokio::test]
  async fn test_skips_hidden_entries() -> anyhow::Result<()> {
    let temp_dir = tempdir()?;
    let root = temp_dir.path();
    fs::create_dir_all(root.join(".cache"))?;
    fs::write(root.join(".cache/tmp.py"), "")?;
    fs::write(root.join(".hidden.py"), "")?;
    fs::write(root.join(".eslintrc.js"), "")?;
    fs::write(root.join(".licensure.toml"), "")?;
    fs::write(root.join("visible.py"), "")?;

    let files = collect(root).await?;
    assert_eq!(names(root, &files), vec!["visible.py"]);
    Ok(())
  }

  #[cfg(unix)]
  #[tokio::test]
  async fn test_skips_symlinks() -> anyhow::Result<()> {
    let temp_dir = tempdir()?;
    let root = temp_dir.path();
    fs::write(root.join("real.rs"), "")?;
    std::os::unix::fs::symlink(root.join("real.rs"), root.join("link.rs"))?;

    let files = collect(root).await?;
    assert_eq!(names(root, &files), vec!["real.rs"]);
    Ok(())
  }

  #[tokio::test]
  async fn test_missing_root_is_walk_error() {
    let result = collect(Path::new("/nonexistent/licensure/root")).await;
    assert!(matches!(result, Err(Error::Walk(_))));
  }
}
