//! Tailwind CSS prerequisite handling
//!
//! Most catalog items are styled with Tailwind CSS utility classes. Before such
//! an item is installed the project is [checked](check::check); if Tailwind is
//! missing and the operator agrees, it is [provisioned](provision::provision).

pub mod check;
pub mod provision;
pub mod stylesheet;

use std::path::Path;

pub use check::{check, PrerequisiteStatus};
pub use provision::{provision, ProvisionOutcome};
pub use stylesheet::StylesheetOutcome;

use crate::package_manager::CommandRunner;
use crate::prompt::Prompter;
use crate::ui;

/// npm package providing the styling framework
pub const TAILWIND_PACKAGE: &str = "tailwindcss";

/// Major version the catalog markup is written against
pub const REQUIRED_MAJOR: u64 = 3;

/// Configuration files a configured project must have
pub const CONFIG_FILES: [&str; 2] = ["tailwind.config.js", "postcss.config.js"];

/// How the prerequisite step ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrerequisiteOutcome {
    /// Tailwind was already set up
    AlreadySatisfied,
    /// Tailwind was installed during this run
    Provisioned {
        /// Config or stylesheet steps that need manual follow-up
        warnings: usize,
    },
    /// The operator chose not to set Tailwind up
    Declined {
        /// Why the check failed
        reason: String,
    },
    /// Installing Tailwind failed
    Failed {
        /// Command that failed
        command: String,
    },
}

impl PrerequisiteOutcome {
    /// Whether the outcome should be counted as a warning in the report
    #[must_use]
    pub const fn is_warning(&self) -> bool {
        match self {
            Self::AlreadySatisfied => false,
            Self::Provisioned { warnings } => *warnings > 0,
            Self::Declined { .. } | Self::Failed { .. } => true,
        }
    }
}

/// Check for Tailwind CSS and offer to set it up when it is missing
pub fn ensure(
    project_root: &Path,
    runner: &dyn CommandRunner,
    prompter: &dyn Prompter,
) -> PrerequisiteOutcome {
    let reason = match check(project_root) {
        PrerequisiteStatus::Satisfied => {
            ui::success("Tailwind CSS is installed and configured");
            return PrerequisiteOutcome::AlreadySatisfied;
        }
        PrerequisiteStatus::Unsatisfied(reason) => reason,
    };

    ui::warning(format!("Tailwind CSS is not set up: {reason}"));

    let confirmed = prompter
        .confirm("Install and configure Tailwind CSS now?", true)
        .unwrap_or_else(|e| {
            tracing::warn!(error = %e, "confirmation prompt failed");
            false
        });

    if !confirmed {
        ui::info("Skipping Tailwind CSS setup; installed items may render unstyled");
        return PrerequisiteOutcome::Declined { reason };
    }

    match provision(project_root, runner, prompter) {
        ProvisionOutcome::Provisioned { warnings } => PrerequisiteOutcome::Provisioned { warnings },
        ProvisionOutcome::Failed { command } => {
            ui::warning("Continuing without Tailwind CSS");
            PrerequisiteOutcome::Failed { command }
        }
    }
}
