//! Host package manager detection and invocation
//!
//! The package manager is chosen from the lockfile in the project root, and
//! every install goes through a [`CommandRunner`] so the workflow can be
//! exercised without npm on the machine.

use std::fmt;
use std::path::Path;
use std::process::{Command, Stdio};

use crate::error::CommandError;

/// Supported package managers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageManager {
    /// npm (default when no other lockfile is present)
    Npm,
    /// Yarn, detected by `yarn.lock`
    Yarn,
    /// pnpm, detected by `pnpm-lock.yaml`
    Pnpm,
}

impl PackageManager {
    /// Detect the package manager of a project from its lockfile
    ///
    /// `pnpm-lock.yaml` wins over `yarn.lock`; with neither present npm is used.
    #[must_use]
    pub fn detect(project_root: &Path) -> Self {
        let detected = if project_root.join("pnpm-lock.yaml").exists() {
            Self::Pnpm
        } else if project_root.join("yarn.lock").exists() {
            Self::Yarn
        } else {
            Self::Npm
        };
        tracing::debug!(package_manager = %detected, "detected package manager");
        detected
    }

    /// Executable name
    #[must_use]
    pub const fn program(self) -> &'static str {
        match self {
            Self::Npm => "npm",
            Self::Yarn => "yarn",
            Self::Pnpm => "pnpm",
        }
    }

    /// Subcommand and flags that add packages
    #[must_use]
    pub const fn install_args(self, dev: bool) -> &'static [&'static str] {
        match (self, dev) {
            (Self::Npm, false) => &["install"],
            (Self::Npm, true) => &["install", "--save-dev"],
            (Self::Yarn, false) => &["add"],
            (Self::Yarn, true) => &["add", "--dev"],
            (Self::Pnpm, false) => &["add"],
            (Self::Pnpm, true) => &["add", "-D"],
        }
    }

    /// One command installing all `packages`
    #[must_use]
    pub fn install_command<S: AsRef<str>>(self, packages: &[S], dev: bool) -> ShellCommand {
        let args = self
            .install_args(dev)
            .iter()
            .map(|arg| (*arg).to_string())
            .chain(packages.iter().map(|package| package.as_ref().to_string()))
            .collect();

        ShellCommand {
            program: self.program().to_string(),
            args,
        }
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.program())
    }
}

/// A program invocation, displayed exactly as a user would type it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellCommand {
    /// Program name
    pub program: String,
    /// Arguments in order
    pub args: Vec<String>,
}

impl fmt::Display for ShellCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// Executes shell commands on behalf of the installer
#[cfg_attr(test, mockall::automock)]
pub trait CommandRunner {
    /// Run `command` in `cwd` to completion
    ///
    /// # Errors
    ///
    /// Returns an error if the program cannot be started or exits unsuccessfully.
    fn run(&self, command: &ShellCommand, cwd: &Path) -> Result<(), CommandError>;
}

/// Runs commands as child processes sharing this terminal
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl SystemRunner {
    /// Package manager shims are batch files on Windows
    fn executable(program: &str) -> String {
        if cfg!(windows) {
            format!("{program}.cmd")
        } else {
            program.to_string()
        }
    }
}

impl CommandRunner for SystemRunner {
    fn run(&self, command: &ShellCommand, cwd: &Path) -> Result<(), CommandError> {
        tracing::info!(command = %command, cwd = %cwd.display(), "running command");

        let status = Command::new(Self::executable(&command.program))
            .args(&command.args)
            .current_dir(cwd)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|source| CommandError::Spawn {
                command: command.to_string(),
                source,
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(CommandError::Failed {
                command: command.to_string(),
                status: status.to_string(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_detect_defaults_to_npm() {
        let dir = TempDir::new().unwrap();
        assert_eq!(PackageManager::detect(dir.path()), PackageManager::Npm);
    }

    #[test]
    fn test_detect_by_lockfile() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("yarn.lock"), "").unwrap();
        assert_eq!(PackageManager::detect(dir.path()), PackageManager::Yarn);

        fs::write(dir.path().join("pnpm-lock.yaml"), "").unwrap();
        assert_eq!(PackageManager::detect(dir.path()), PackageManager::Pnpm);
    }

    #[test]
    fn test_package_lock_still_means_npm() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("package-lock.json"), "{}").unwrap();
        assert_eq!(PackageManager::detect(dir.path()), PackageManager::Npm);
    }

    #[test]
    fn test_install_commands() {
        let packages = ["clsx", "framer-motion"];
        assert_eq!(
            PackageManager::Npm.install_command(&packages, false).to_string(),
            "npm install clsx framer-motion"
        );
        assert_eq!(
            PackageManager::Npm.install_command(&packages, true).to_string(),
            "npm install --save-dev clsx framer-motion"
        );
        assert_eq!(
            PackageManager::Yarn.install_command(&packages, true).to_string(),
            "yarn add --dev clsx framer-motion"
        );
        assert_eq!(
            PackageManager::Pnpm.install_command(&packages, true).to_string(),
            "pnpm add -D clsx framer-motion"
        );
        assert_eq!(
            PackageManager::Pnpm.install_command(&packages, false).to_string(),
            "pnpm add clsx framer-motion"
        );
    }

    #[test]
    fn test_missing_program_is_spawn_error() {
        let dir = TempDir::new().unwrap();
        let command = ShellCommand {
            program: "componentry-definitely-not-installed".to_string(),
            args: vec!["add".to_string()],
        };
        let error = SystemRunner.run(&command, dir.path()).unwrap_err();
        assert!(matches!(error, CommandError::Spawn { .. }));
        assert!(error.command().starts_with("componentry-definitely-not-installed"));
    }
}
