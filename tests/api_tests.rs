mod common;

use std::fs;

use anyhow::Result;
use common::{
  BLOCK_HEADER, FOO_JS, FOO_JSON, FOO_PY, HASH_HEADER, licensed, licensed_shebang, write_fixtures, write_license,
};
// Import the public API
use licensure::{Error, Options};
use tempfile::tempdir;

#[tokio::test]
async fn test_finds_all_files_without_license() -> Result<()> {
  let temp_dir = tempdir()?;
  let license = write_license(temp_dir.path())?;
  let root = write_fixtures(&temp_dir.path().join("tmp"))?;

  let err = licensure::run(Options {
    root: root.clone(),
    license,
    write: false,
  })
  .await
  .expect_err("fixtures lack headers");

  let files = err.no_license_files().expect("a NoLicense failure");
  assert_eq!(files.len(), 3);
  assert!(files.contains(&root.join("foo.js")));
  assert!(files.contains(&root.join("foo.py")));
  assert!(files.contains(&root.join("shebang.py")));
  assert!(!files.contains(&root.join("foo.json")));

  // Nothing was written in check-only mode.
  assert_eq!(fs::read_to_string(root.join("foo.js"))?, FOO_JS);
  Ok(())
}

#[tokio::test]
async fn test_writes_back_license_when_write_is_enabled() -> Result<()> {
  let temp_dir = tempdir()?;
  let license = write_license(temp_dir.path())?;
  let root = write_fixtures(&temp_dir.path().join("tmp"))?;

  let result = licensure::run(Options {
    root: root.clone(),
    license,
    write: true,
  })
  .await;

  // Reporting is unconditional, even though the files were fixed.
  match result {
    Err(Error::NoLicense(err)) => assert_eq!(err.files().len(), 3),
    other => panic!("expected NoLicense failure, got {other:?}"),
  }

  assert_eq!(fs::read_to_string(root.join("foo.js"))?, licensed(BLOCK_HEADER, FOO_JS));
  assert_eq!(fs::read_to_string(root.join("foo.py"))?, licensed(HASH_HEADER, FOO_PY));
  assert_eq!(fs::read_to_string(root.join("shebang.py"))?, licensed_shebang());
  assert_eq!(fs::read_to_string(root.join("foo.json"))?, FOO_JSON);
  Ok(())
}

#[tokio::test]
async fn test_write_is_idempotent() -> Result<()> {
  let temp_dir = tempdir()?;
  let license = write_license(temp_dir.path())?;
  let root = write_fixtures(&temp_dir.path().join("tmp"))?;
  let options = Options {
    root: root.clone(),
    license,
    write: true,
  };

  assert!(licensure::run(options.clone()).await.is_err());
  let snapshot: Vec<String> = ["foo.js", "foo.py", "shebang.py", "foo.json"]
    .iter()
    .map(|name| fs::read_to_string(root.join(name)))
    .collect::<std::io::Result<_>>()?;

  // The second run finds every header in place and changes nothing.
  licensure::run(options).await?;
  let after: Vec<String> = ["foo.js", "foo.py", "shebang.py", "foo.json"]
    .iter()
    .map(|name| fs::read_to_string(root.join(name)))
    .collect::<std::io::Result<_>>()?;

  assert_eq!(snapshot, after);
  Ok(())
}

#[tokio::test]
async fn test_compliant_tree_succeeds() -> Result<()> {
  let temp_dir = tempdir()?;
  let license = write_license(temp_dir.path())?;
  let root = temp_dir.path().join("src");
  fs::create_dir_all(&root)?;
  fs::write(root.join("main.rs"), licensed(BLOCK_HEADER, "fn main() {}\n"))?;
  fs::write(root.join("data.json"), "{}")?;

  licensure::run(Options {
    root,
    license,
    write: false,
  })
  .await?;
  Ok(())
}

#[tokio::test]
async fn test_missing_license_file_is_io_error() -> Result<()> {
  let temp_dir = tempdir()?;
  let root = write_fixtures(&temp_dir.path().join("tmp"))?;

  let err = licensure::run(Options {
    root,
    license: temp_dir.path().join("no-such-license"),
    write: true,
  })
  .await
  .expect_err("license file is missing");

  assert!(matches!(err, Error::Io { .. }));
  assert!(err.no_license_files().is_none());
  Ok(())
}

#[tokio::test]
async fn test_violations_follow_scan_order() -> Result<()> {
  let temp_dir = tempdir()?;
  let license = write_license(temp_dir.path())?;
  let root = temp_dir.path().join("tree");
  fs::create_dir_all(root.join("b"))?;
  fs::write(root.join("c.go"), "package c\n")?;
  fs::write(root.join("a.rb"), "puts 1\n")?;
  fs::write(root.join("b/inner.ts"), "export {}\n")?;

  let err = licensure::run(Options {
    root: root.clone(),
    license,
    write: false,
  })
  .await
  .expect_err("files lack headers");

  assert_eq!(
    err.no_license_files().expect("a NoLicense failure"),
    [root.join("a.rb"), root.join("b/inner.ts"), root.join("c.go")]
  );
  Ok(())
}
