//! Tailwind CSS installation and configuration
//!
//! Every step is best effort. A failed step prints the manual recipe for it and
//! the rest of the installation carries on.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use super::stylesheet::{self, StylesheetOutcome, DIRECTIVES};
use super::{REQUIRED_MAJOR, TAILWIND_PACKAGE};
use crate::package_manager::{CommandRunner, PackageManager, ShellCommand};
use crate::prompt::Prompter;
use crate::ui;

/// `tailwind.config.js` written into projects without one
pub const TAILWIND_CONFIG: &str = r#"/** @type {import('tailwindcss').Config} */
module.exports = {
  content: [
    "./index.html",
    "./src/**/*.{js,ts,jsx,tsx}",
    "./app/**/*.{js,ts,jsx,tsx}",
    "./pages/**/*.{js,ts,jsx,tsx}",
    "./components/**/*.{js,ts,jsx,tsx}",
  ],
  theme: {
    extend: {},
  },
  plugins: [],
};
"#;

/// `postcss.config.js` written into projects without one
pub const POSTCSS_CONFIG: &str = r"module.exports = {
  plugins: {
    tailwindcss: {},
    autoprefixer: {},
  },
};
";

/// Result of provisioning Tailwind CSS
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProvisionOutcome {
    /// Packages installed; `warnings` counts later steps that need manual follow-up
    Provisioned {
        /// Config or stylesheet steps that failed
        warnings: usize,
    },
    /// The package install failed; manual steps were printed
    Failed {
        /// Command that failed
        command: String,
    },
}

/// Packages installed as dev dependencies
#[must_use]
pub fn packages() -> [String; 3] {
    [
        format!("{TAILWIND_PACKAGE}@{REQUIRED_MAJOR}"),
        "postcss".to_string(),
        "autoprefixer".to_string(),
    ]
}

/// Command that installs Tailwind CSS and its PostCSS peers
#[must_use]
pub fn install_command(project_root: &Path) -> ShellCommand {
    PackageManager::detect(project_root).install_command(&packages(), true)
}

/// Install and configure Tailwind CSS in `project_root`
pub fn provision(
    project_root: &Path,
    runner: &dyn CommandRunner,
    prompter: &dyn Prompter,
) -> ProvisionOutcome {
    let command = install_command(project_root);

    ui::step("Installing Tailwind CSS");
    ui::command(&command);
    if let Err(e) = runner.run(&command, project_root) {
        tracing::warn!(error = %e, "tailwind install failed");
        ui::failure(&e);
        print_manual_setup(&command);
        return ProvisionOutcome::Failed {
            command: command.to_string(),
        };
    }
    ui::success("Installed tailwindcss, postcss and autoprefixer");

    let mut warnings = 0;

    for (file, content) in [
        ("tailwind.config.js", TAILWIND_CONFIG),
        ("postcss.config.js", POSTCSS_CONFIG),
    ] {
        match write_if_absent(project_root, file, content) {
            Ok(true) => ui::success(format!("Created {file}")),
            Ok(false) => ui::info(format!("{file} already exists, left unchanged")),
            Err(e) => {
                warnings += 1;
                ui::warning(format!("{e:#}"));
                ui::manual_steps(
                    &format!("Create {file} manually with:"),
                    &[content.trim_end().to_string()],
                );
            }
        }
    }

    match stylesheet::ensure_directives(project_root, prompter) {
        Ok(outcome) => {
            let relative = display_relative(project_root, outcome.path());
            match outcome {
                StylesheetOutcome::AlreadyPresent(_) => {
                    ui::info(format!("Tailwind directives already present in {relative}"));
                }
                StylesheetOutcome::Updated(_) => {
                    ui::success(format!("Added Tailwind directives to {relative}"));
                }
                StylesheetOutcome::Created(_) => {
                    ui::success(format!("Created {relative} with Tailwind directives"));
                    ui::info(format!(
                        "Remember to import {relative} from your application entry point"
                    ));
                }
            }
        }
        Err(e) => {
            warnings += 1;
            ui::warning(format!("{e:#}"));
            ui::manual_steps(
                "Add these lines to the top of your main stylesheet:",
                &[DIRECTIVES.trim_end().to_string()],
            );
        }
    }

    ProvisionOutcome::Provisioned { warnings }
}

/// Write `content` to `project_root/file` unless the file exists; `true` if written
fn write_if_absent(project_root: &Path, file: &str, content: &str) -> Result<bool> {
    let path = project_root.join(file);
    if path.exists() {
        return Ok(false);
    }
    fs::write(&path, content).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(true)
}

fn display_relative(project_root: &Path, path: &Path) -> String {
    path.strip_prefix(project_root)
        .unwrap_or(path)
        .display()
        .to_string()
}

fn print_manual_setup(command: &ShellCommand) {
    ui::manual_steps(
        "Set up Tailwind CSS manually:",
        &[
            format!("Install the packages: {command}"),
            "Generate both config files: npx tailwindcss init -p".to_string(),
            "Point `content` in tailwind.config.js at your source files".to_string(),
            format!(
                "Add to the top of your main stylesheet:\n     {}",
                DIRECTIVES.trim_end().replace('\n', "\n     ")
            ),
        ],
    );
}
