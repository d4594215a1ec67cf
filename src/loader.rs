//! Import preprocessor (§6.2): splices `import "relpath";` statements
//! appearing in the leading run of a source file (before any other
//! statement) with the imported file's own source text, recursively,
//! deduplicating by canonical absolute path. A line with import syntax
//! anywhere past that leading run is left untouched — imports are not
//! permitted mid-body. Grounded in the teacher's `src/loader/mod.rs`,
//! simplified down from its module/export bookkeeping since TinyLang's
//! imports are a flat textual splice rather than a namespaced module
//! system.
use std::collections::HashSet;
use std::path::{Path, PathBuf};

use log::{debug, trace};

use crate::error::TinyLangError;

/// Loads `entry` and returns the fully spliced source text, with every
/// `import "relpath";` line replaced by the referenced file's own
/// (recursively spliced) contents.
pub fn load(entry: &Path) -> Result<String, TinyLangError> {
    let mut seen = HashSet::new();
    load_recursive(entry, &mut seen)
}

fn load_recursive(path: &Path, seen: &mut HashSet<PathBuf>) -> Result<String, TinyLangError> {
    let canonical = std::fs::canonicalize(path)
        .map_err(|e| TinyLangError::Io(format!("could not resolve '{}': {e}", path.display())))?;

    if seen.contains(&canonical) {
        trace!("skipping already-loaded module '{}'", canonical.display());
        return Ok(String::new());
    }
    seen.insert(canonical.clone());

    debug!("loading module '{}'", canonical.display());
    let content = std::fs::read_to_string(&canonical)
        .map_err(|e| TinyLangError::Io(format!("could not read '{}': {e}", canonical.display())))?;

    let parent = canonical.parent().map(Path::to_path_buf).unwrap_or_else(|| PathBuf::from("."));
    let mut merged = String::new();
    let mut in_header = true;

    for line in content.lines() {
        if in_header && line.trim().is_empty() {
            merged.push('\n');
            continue;
        }

        match parse_import_line(line).filter(|_| in_header) {
            Some(relpath) => {
                let imported_path = parent.join(&relpath);
                let spliced = load_recursive(&imported_path, seen).map_err(|_| {
                    TinyLangError::Io(format!("could not resolve import '{relpath}' from '{}'", canonical.display()))
                })?;
                merged.push_str(&spliced);
                merged.push('\n');
            }
            None => {
                in_header = false;
                merged.push_str(line);
                merged.push('\n');
            }
        }
    }

    Ok(merged)
}

/// Recognizes a single `import "relpath";` line, only honored while still
/// within the leading run of import lines at the top of a file — imports
/// are not permitted mid-body, so once a non-import, non-blank line is
/// seen, no later line is treated as an import even if it has this shape.
fn parse_import_line(line: &str) -> Option<String> {
    let trimmed = line.trim();
    let rest = trimmed.strip_prefix("import")?;
    let rest = rest.trim_start();
    let rest = rest.strip_prefix('"')?;
    let end = rest.find('"')?;
    let path = &rest[..end];
    let after = rest[end + 1..].trim_start();
    if after == ";" {
        Some(path.to_owned())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_a_bare_import_line() {
        assert_eq!(parse_import_line("import \"util.tl\";"), Some("util.tl".to_owned()));
    }

    #[test]
    fn ignores_lines_that_are_not_imports() {
        assert_eq!(parse_import_line("int x = 1;"), None);
        assert_eq!(parse_import_line("// import \"util.tl\";"), None);
    }

    #[test]
    fn an_import_line_past_the_leading_header_is_left_as_plain_text() {
        let mut seen = HashSet::new();
        let dir = std::env::temp_dir().join("tinylang_loader_test_mid_body_import");
        std::fs::create_dir_all(&dir).unwrap();
        let util_path = dir.join("util.tl");
        std::fs::write(&util_path, "ComeAndDo noop() { return 0; }\n").unwrap();
        let entry_path = dir.join("entry.tl");
        std::fs::write(&entry_path, "int x = 1;\nimport \"util.tl\";\n").unwrap();

        let merged = load_recursive(&entry_path, &mut seen).unwrap();
        assert!(merged.contains("import \"util.tl\";"));
        assert!(!merged.contains("ComeAndDo noop"));
    }
}
