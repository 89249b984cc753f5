//! npm dependency installation for catalog items

use std::path::Path;

use crate::error::CommandError;
use crate::package_manager::{CommandRunner, PackageManager};
use crate::ui;

/// Result of one dependency install
#[derive(Debug)]
pub enum DependencyOutcome {
    /// The manifest declares no packages of this kind
    NothingToInstall,
    /// All packages were installed by a single command
    Installed {
        /// Command that ran
        command: String,
    },
    /// The command could not start or exited unsuccessfully
    Failed(CommandError),
}

impl DependencyOutcome {
    /// Whether the outcome should be counted as a warning in the report
    #[must_use]
    pub const fn is_warning(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}

/// Install `packages` with the project's package manager
///
/// Failures are printed together with the command to run by hand and never
/// propagate: the item's files are already in place by the time this runs.
pub fn install_dependencies(
    runner: &dyn CommandRunner,
    project_root: &Path,
    packages: &[&str],
    dev: bool,
) -> DependencyOutcome {
    if packages.is_empty() {
        return DependencyOutcome::NothingToInstall;
    }

    let command = PackageManager::detect(project_root).install_command(packages, dev);
    ui::command(&command);

    match runner.run(&command, project_root) {
        Ok(()) => {
            ui::success(format!(
                "Installed {}{}",
                packages.join(", "),
                if dev { " (dev)" } else { "" }
            ));
            DependencyOutcome::Installed {
                command: command.to_string(),
            }
        }
        Err(e) => {
            tracing::warn!(error = %e, "dependency install failed");
            ui::warning(&e);
            ui::info("The component files are installed. Finish by running:");
            ui::command(&command);
            DependencyOutcome::Failed(e)
        }
    }
}
