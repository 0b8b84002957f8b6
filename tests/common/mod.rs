#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;

/// License text used by the fixtures, with the surrounding blank lines a
/// license file usually has.
pub const LICENSE: &str = "\nMIT License\n\nCopyright (c) 2020 Test Company\n\nPermission is hereby granted, free of charge.\n";

/// The license rendered for C-family block comments.
pub const BLOCK_HEADER: &str = "/*\n * MIT License\n *\n * Copyright (c) 2020 Test Company\n *\n * Permission is hereby granted, free of charge.\n */";

/// The license rendered for hash line comments.
pub const HASH_HEADER: &str = "# MIT License\n#\n# Copyright (c) 2020 Test Company\n#\n# Permission is hereby granted, free of charge.";

pub const FOO_JS: &str = "const foo = 'bar'\n\nmodule.exports = foo\n";
pub const FOO_PY: &str = "def foo():\n    return 'bar'\n";
pub const SHEBANG_PY: &str = "#!/usr/bin/env python\n\nprint('hello')\n";
pub const FOO_JSON: &str = "{\n  \"foo\": \"bar\"\n}\n";

/// Writes the license file outside the scanned root and returns its path.
pub fn write_license(dir: &Path) -> Result<PathBuf> {
  let path = dir.join("license");
  fs::write(&path, LICENSE)?;
  Ok(path)
}

/// Populates `root` with the unlicensed fixture files and returns the root.
pub fn write_fixtures(root: &Path) -> Result<PathBuf> {
  fs::create_dir_all(root)?;
  fs::write(root.join("foo.js"), FOO_JS)?;
  fs::write(root.join("foo.py"), FOO_PY)?;
  fs::write(root.join("shebang.py"), SHEBANG_PY)?;
  fs::write(root.join("foo.json"), FOO_JSON)?;
  Ok(root.to_path_buf())
}

/// The expected content of a fixture after the header was inserted.
pub fn licensed(header: &str, content: &str) -> String {
  format!("{header}\n{content}")
}

/// The expected content of `shebang.py` after the header was inserted.
pub fn licensed_shebang() -> String {
  format!("#!/usr/bin/env python\n{HASH_HEADER}\n\nprint('hello')\n")
}
