//! Barrel file maintenance
//!
//! Each installed item gets one re-export line in `{target_dir}/index.ts` (or
//! `index.js`). An export counts as present when its exact line already occurs
//! anywhere in the file; equivalent lines written differently are not
//! recognised and get appended again.

use anyhow::{Context, Result};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::OutputFormat;

/// What the barrel file step did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndexOutcome {
    /// The export line was appended
    Appended(PathBuf),
    /// The export line was already in the file; nothing was written
    AlreadyPresent(PathBuf),
}

/// Path of the barrel file for `format`
#[must_use]
pub fn index_path(target_dir: &Path, format: OutputFormat) -> PathBuf {
    target_dir.join(format!("index.{}", format.index_extension()))
}

/// Canonical re-export line for a default export
#[must_use]
pub fn export_line(symbol: &str, module_path: &str) -> String {
    format!("export {{ default as {symbol} }} from '{module_path}';")
}

/// Add a re-export of `symbol` from `module_path` unless the line exists
///
/// # Errors
///
/// Returns an error if the barrel file cannot be created, read or appended to.
pub fn append_export(
    target_dir: &Path,
    symbol: &str,
    module_path: &str,
    format: OutputFormat,
) -> Result<IndexOutcome> {
    let path = index_path(target_dir, format);

    if !path.exists() {
        fs::create_dir_all(target_dir)
            .with_context(|| format!("Failed to create directory: {}", target_dir.display()))?;
        fs::write(&path, "")
            .with_context(|| format!("Failed to create {}", path.display()))?;
    }

    let content =
        fs::read_to_string(&path).with_context(|| format!("Failed to read {}", path.display()))?;
    let line = export_line(symbol, module_path);

    if content.contains(&line) {
        return Ok(IndexOutcome::AlreadyPresent(path));
    }

    let separator = if content.is_empty() || content.ends_with('\n') {
        ""
    } else {
        "\n"
    };

    let mut file = OpenOptions::new()
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open {}", path.display()))?;
    writeln!(file, "{separator}{line}")
        .with_context(|| format!("Failed to append to {}", path.display()))?;

    tracing::debug!(path = %path.display(), line = %line, "appended export");
    Ok(IndexOutcome::Appended(path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_export_line() {
        assert_eq!(
            export_line("Button", "./button/Button"),
            "export { default as Button } from './button/Button';"
        );
    }

    #[test]
    fn test_index_extension_follows_format() {
        let dir = Path::new("src/components");
        assert_eq!(index_path(dir, OutputFormat::Typed), dir.join("index.ts"));
        assert_eq!(index_path(dir, OutputFormat::Untyped), dir.join("index.js"));
    }

    #[test]
    fn test_creates_missing_index_and_directory() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("src/components");

        let outcome =
            append_export(&target, "Button", "./button/Button", OutputFormat::Typed).unwrap();

        let path = target.join("index.ts");
        assert_eq!(outcome, IndexOutcome::Appended(path.clone()));
        assert_eq!(
            fs::read_to_string(path).unwrap(),
            "export { default as Button } from './button/Button';\n"
        );
    }

    #[test]
    fn test_second_append_is_a_no_op() {
        let dir = TempDir::new().unwrap();

        append_export(dir.path(), "Toast", "./toast/Toast.jsx", OutputFormat::Untyped).unwrap();
        let outcome =
            append_export(dir.path(), "Toast", "./toast/Toast.jsx", OutputFormat::Untyped).unwrap();

        assert!(matches!(outcome, IndexOutcome::AlreadyPresent(_)));
        let content = fs::read_to_string(dir.path().join("index.js")).unwrap();
        assert_eq!(content.matches("default as Toast").count(), 1);
    }

    #[test]
    fn test_appends_after_existing_content_without_newline() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("index.ts"), "export * from './legacy';").unwrap();

        append_export(dir.path(), "Badge", "./badge/Badge", OutputFormat::Typed).unwrap();

        assert_eq!(
            fs::read_to_string(dir.path().join("index.ts")).unwrap(),
            "export * from './legacy';\nexport { default as Badge } from './badge/Badge';\n"
        );
    }

    #[test]
    fn test_differently_formatted_export_is_appended_again() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("index.ts"),
            "export { default as Button } from \"./button/Button\";\n",
        )
        .unwrap();

        let outcome =
            append_export(dir.path(), "Button", "./button/Button", OutputFormat::Typed).unwrap();

        assert!(matches!(outcome, IndexOutcome::Appended(_)));
        let content = fs::read_to_string(dir.path().join("index.ts")).unwrap();
        assert_eq!(content.lines().count(), 2);
    }
}
