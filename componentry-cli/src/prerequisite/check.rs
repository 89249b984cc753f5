//! Read-only Tailwind CSS detection

use serde_json::Value;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use super::{CONFIG_FILES, REQUIRED_MAJOR, TAILWIND_PACKAGE};

/// Result of inspecting a project for Tailwind CSS
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrerequisiteStatus {
    /// Installed at the required major version and configured
    Satisfied,
    /// Missing or misconfigured, with a human-readable reason
    Unsatisfied(String),
}

impl PrerequisiteStatus {
    /// Whether nothing needs to be done
    #[must_use]
    pub const fn is_satisfied(&self) -> bool {
        matches!(self, Self::Satisfied)
    }
}

/// Inspect `project_root` for an installed and configured Tailwind CSS
#[must_use]
pub fn check(project_root: &Path) -> PrerequisiteStatus {
    let manifest_path = project_root.join("package.json");
    let content = match fs::read_to_string(&manifest_path) {
        Ok(content) => content,
        Err(e) => {
            return PrerequisiteStatus::Unsatisfied(format!(
                "could not read {}: {e}",
                manifest_path.display()
            ))
        }
    };
    let manifest: Value = match serde_json::from_str(&content) {
        Ok(manifest) => manifest,
        Err(e) => {
            return PrerequisiteStatus::Unsatisfied(format!(
                "could not parse {}: {e}",
                manifest_path.display()
            ))
        }
    };

    let declared = declared_dependencies(&manifest);
    let Some(range) = declared.get(TAILWIND_PACKAGE) else {
        return PrerequisiteStatus::Unsatisfied(format!(
            "{TAILWIND_PACKAGE} is not listed in package.json"
        ));
    };

    match declared_major(range) {
        Some(REQUIRED_MAJOR) => {}
        Some(major) => {
            return PrerequisiteStatus::Unsatisfied(format!(
                "found major version {major} ({TAILWIND_PACKAGE} {range}), \
                 but version {REQUIRED_MAJOR}.x is required"
            ))
        }
        None => {
            return PrerequisiteStatus::Unsatisfied(format!(
                "{TAILWIND_PACKAGE} version '{range}' could not be recognised as {REQUIRED_MAJOR}.x"
            ))
        }
    }

    if let Some(missing) = CONFIG_FILES
        .iter()
        .find(|file| !project_root.join(file).is_file())
    {
        return PrerequisiteStatus::Unsatisfied(format!("{missing} is missing"));
    }

    tracing::debug!(range = %range, "tailwind prerequisite satisfied");
    PrerequisiteStatus::Satisfied
}

/// `dependencies` merged with `devDependencies`, the latter winning on conflicts
fn declared_dependencies(manifest: &Value) -> BTreeMap<String, String> {
    ["dependencies", "devDependencies"]
        .iter()
        .filter_map(|section| manifest.get(section).and_then(Value::as_object))
        .flat_map(|section| section.iter())
        .filter_map(|(name, range)| range.as_str().map(|range| (name.clone(), range.to_string())))
        .collect()
}

/// Major version a package.json range pins, if it can be determined
///
/// Understands semver requirements (`^3.4.1`, `~3.3`, `3.x`, `>=3.0.0 <4`) and
/// falls back to the first number for npm-only syntax such as hyphen ranges.
fn declared_major(range: &str) -> Option<u64> {
    let range = range.trim();
    if let Ok(requirement) = semver::VersionReq::parse(range) {
        return requirement.comparators.first().map(|comparator| comparator.major);
    }

    let digits: String = range
        .trim_start_matches(|c: char| !c.is_ascii_digit())
        .chars()
        .take_while(char::is_ascii_digit)
        .collect();
    digits.parse().ok()
}
