//! Entry stylesheet discovery and Tailwind directive injection
//!
//! Conventional stylesheet locations are tried in order and the first one that
//! exists is used. Only when none exists is the operator asked where the
//! stylesheet should live, so common layouts are configured without a prompt
//! and unusual bundler setups are never guessed at.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::prompt::Prompter;

/// Stylesheet paths checked in order, relative to the project root
pub const STYLESHEET_CANDIDATES: &[&str] = &[
    "src/index.css",
    "src/App.css",
    "src/styles/globals.css",
    "src/app/globals.css",
    "app/globals.css",
    "styles/globals.css",
    "src/main.css",
];

/// Path suggested when no conventional stylesheet exists
pub const DEFAULT_STYLESHEET: &str = "src/index.css";

/// Text whose presence means the directives were already added
pub const DIRECTIVE_MARKER: &str = "@tailwind";

/// The three Tailwind layer directives
pub const DIRECTIVES: &str = "@tailwind base;\n@tailwind components;\n@tailwind utilities;\n";

/// What happened to the entry stylesheet
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StylesheetOutcome {
    /// An existing stylesheet already had the directives
    AlreadyPresent(PathBuf),
    /// The directives were prepended to an existing stylesheet
    Updated(PathBuf),
    /// A new stylesheet was written at an operator-chosen path
    Created(PathBuf),
}

impl StylesheetOutcome {
    /// Path of the stylesheet that was inspected or written
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::AlreadyPresent(path) | Self::Updated(path) | Self::Created(path) => path,
        }
    }
}

/// First conventional stylesheet that exists under `project_root`
#[must_use]
pub fn find_existing(project_root: &Path) -> Option<PathBuf> {
    STYLESHEET_CANDIDATES
        .iter()
        .map(|candidate| project_root.join(candidate))
        .find(|path| path.is_file())
}

/// Make sure the project's entry stylesheet carries the Tailwind directives
///
/// # Errors
///
/// Returns an error if the stylesheet cannot be read or written, or if the
/// operator prompt fails.
pub fn ensure_directives(
    project_root: &Path,
    prompter: &dyn Prompter,
) -> Result<StylesheetOutcome> {
    if let Some(path) = find_existing(project_root) {
        return prepend_directives(path);
    }

    let answer = prompter.input(
        "No stylesheet found. Where should the Tailwind directives go?",
        DEFAULT_STYLESHEET,
    )?;
    let relative = answer.trim();
    let relative = if relative.is_empty() {
        DEFAULT_STYLESHEET
    } else {
        relative
    };
    let path = project_root.join(relative);

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    // The operator may name a file that exists outside the conventional list.
    if path.is_file() {
        return prepend_directives(path);
    }

    fs::write(&path, DIRECTIVES)
        .with_context(|| format!("Failed to write stylesheet: {}", path.display()))?;
    tracing::debug!(path = %path.display(), "created stylesheet");

    Ok(StylesheetOutcome::Created(path))
}

fn prepend_directives(path: PathBuf) -> Result<StylesheetOutcome> {
    let content = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read stylesheet: {}", path.display()))?;

    if content.contains(DIRECTIVE_MARKER) {
        return Ok(StylesheetOutcome::AlreadyPresent(path));
    }

    fs::write(&path, format!("{DIRECTIVES}\n{content}"))
        .with_context(|| format!("Failed to write stylesheet: {}", path.display()))?;
    tracing::debug!(path = %path.display(), "prepended tailwind directives");

    Ok(StylesheetOutcome::Updated(path))
}
