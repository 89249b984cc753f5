//! Show the effective configuration

use anyhow::{Context, Result};
use clap::Args;
use componentry::config::PROJECT_CONFIG_FILE;
use componentry::ComponentryConfig;
use console::style;

/// Print the configuration after all sources are merged
#[derive(Debug, Args)]
pub struct ConfigCommand {
    /// Also list the files that are consulted
    #[arg(long)]
    sources: bool,
}

impl ConfigCommand {
    /// Execute the config command
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be rendered as TOML.
    pub fn execute(&self, config: &ComponentryConfig) -> Result<()> {
        if self.sources {
            let user = ComponentryConfig::user_config_path()
                .map_or_else(|| "(no config directory)".to_string(), |p| p.display().to_string());
            println!("{}", style("# Sources, lowest priority first").dim());
            println!("{}", style(format!("#   {user}")).dim());
            println!("{}", style(format!("#   ./{PROJECT_CONFIG_FILE}")).dim());
            println!("{}", style("#   COMPONENTRY_* environment variables").dim());
            println!();
        }

        let rendered = toml::to_string_pretty(config).context("Failed to render configuration")?;
        print!("{rendered}");
        Ok(())
    }
}
