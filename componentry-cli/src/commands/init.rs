//! Set up Tailwind CSS in an existing project

use anyhow::Result;
use clap::Args;
use componentry::prerequisite::{self, PrerequisiteOutcome};
use componentry::{AssumeYes, InstallError, Prompter, SystemRunner, TerminalPrompter};
use console::style;
use std::path::Path;

/// Check for Tailwind CSS and offer to install it
#[derive(Debug, Args)]
pub struct InitCommand {
    /// Set up without asking and accept default paths
    #[arg(short, long)]
    yes: bool,
}

impl InitCommand {
    /// Execute the init command
    ///
    /// # Errors
    ///
    /// Returns an error if the project has no `package.json`.
    pub fn execute(&self, project_root: &Path) -> Result<()> {
        if !project_root.join("package.json").is_file() {
            return Err(InstallError::MissingProjectDescriptor(project_root.to_path_buf()).into());
        }

        let prompter: &dyn Prompter = if self.yes { &AssumeYes } else { &TerminalPrompter };

        println!("{}", style("Checking Tailwind CSS").cyan().bold());
        match prerequisite::ensure(project_root, &SystemRunner, prompter) {
            PrerequisiteOutcome::Provisioned { warnings: 0 } => {
                println!("\n{} Tailwind CSS is ready", style("✓").green().bold());
            }
            PrerequisiteOutcome::Provisioned { warnings } => println!(
                "\n{} Tailwind CSS installed; {warnings} step(s) need finishing by hand",
                style("!").yellow().bold()
            ),
            PrerequisiteOutcome::AlreadySatisfied
            | PrerequisiteOutcome::Declined { .. }
            | PrerequisiteOutcome::Failed { .. } => {}
        }

        Ok(())
    }
}
