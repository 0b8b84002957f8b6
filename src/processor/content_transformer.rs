//! # Content Transformer Module
//!
//! Locating, checking and inserting the license header within file content.
//! The header belongs at the start of the file, or right after an interpreter
//! directive (`#!`) line.

/// Returns the byte offset at which the license header belongs.
///
/// Without a shebang this is 0. With one it is the index just past the first
/// `\n`. A file that is a single shebang line without a newline yields its
/// full length, so the header ends up appended at end of file.
pub fn find_insertion_offset(content: &str) -> usize {
  if !content.starts_with("#!") {
    return 0;
  }

  match content.find('\n') {
    Some(index) => index + 1,
    None => content.len(),
  }
}

/// Checks whether `header` appears verbatim at `offset`.
pub fn has_header(content: &str, offset: usize, header: &str) -> bool {
  content
    .get(offset..)
    .is_some_and(|rest| rest.as_bytes().starts_with(header.as_bytes()))
}

/// Inserts `header` and one newline at `offset`, keeping all existing content.
pub fn insert_header(content: &str, offset: usize, header: &str) -> String {
  let (before, after) = content.split_at(offset);
  let mut result = String::with_capacity(content.len() + header.len() + 1);
  result.push_str(before);
  result.push_str(header);
  result.push('\n');
  result.push_str(after);
  result
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_offset_without_shebang() {
    assert_eq!(find_insertion_offset("print('hi')\n"), 0);
    assert_eq!(find_insertion_offset(""), 0);
    assert_eq!(find_insertion_offset("#not a shebang\n"), 0);
    assert_eq!(find_insertion_offset(" #!/bin/sh\n"), 0);
  }

  #[test]
  fn test_offset_after_shebang_line() {
    let content = "#!/usr/bin/env python\nprint('hi')\n";
    assert_eq!(find_insertion_offset(content), "#!/usr/bin/env python\n".len());
  }

  #[test]
  fn test_offset_single_line_shebang_is_end_of_file() {
    let content = "#!/bin/sh";
    assert_eq!(find_insertion_offset(content), content.len());
  }

  #[test]
  fn test_has_header_exact_match() {
    let content = "# Copyright\nbody\n";
    assert!(has_header(content, 0, "# Copyright"));
    assert!(!has_header(content, 0, "# Copyright 2020"));
    assert!(!has_header(content, 0, "# copyright"));
  }

  #[test]
  fn test_has_header_after_shebang() {
    let content = "#!/bin/sh\n# Copyright\necho hi\n";
    let offset = find_insertion_offset(content);
    assert!(has_header(content, offset, "# Copyright"));
    assert!(!has_header(content, 0, "# Copyright"));
  }

  #[test]
  fn test_has_header_shorter_content() {
    assert!(!has_header("/*", 0, "/*\n * MIT\n */"));
    assert!(!has_header("#!/bin/sh", 9, "# MIT"));
  }

  #[test]
  fn test_insert_header_at_start() {
    let updated = insert_header("const a = 1\n", 0, "/*\n * MIT\n */");
    assert_eq!(updated, "/*\n * MIT\n */\nconst a = 1\n");
  }

  #[test]
  fn test_insert_header_after_shebang() {
    let content = "#!/usr/bin/env python\nprint('hi')\n";
    let offset = find_insertion_offset(content);
    let updated = insert_header(content, offset, "# MIT");
    assert_eq!(updated, "#!/usr/bin/env python\n# MIT\nprint('hi')\n");
  }

  #[test]
  fn test_insert_header_preserves_mismatched_header() {
    let content = "# Old license\ncode\n";
    let updated = insert_header(content, 0, "# MIT");
    assert_eq!(updated, "# MIT\n# Old license\ncode\n");
  }

  #[test]
  fn test_insert_header_single_line_shebang_appends() {
    let content = "#!/bin/sh";
    let updated = insert_header(content, find_insertion_offset(content), "# MIT");
    assert_eq!(updated, "#!/bin/sh# MIT\n");
  }
}
