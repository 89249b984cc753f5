//! Add components or templates to a project

use anyhow::{bail, Result};
use clap::Args;
use componentry::install::HttpFetcher;
use componentry::{
    AssumeYes, Catalog, ComponentryConfig, InstallRequest, Installer, ItemKind, OutputFormat,
    Prompter, SystemRunner, TerminalPrompter,
};
use console::style;
use std::path::{Path, PathBuf};

/// Install one or more catalog items
#[derive(Debug, Args)]
pub struct AddCommand {
    /// Items to install (asked interactively when omitted)
    names: Vec<String>,

    /// Install page templates instead of components
    #[arg(short, long)]
    template: bool,

    /// Source variant to install
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Directory, relative to the project root, to install into
    #[arg(short, long, value_name = "PATH")]
    dir: Option<PathBuf>,

    /// Answer yes to every confirmation and accept default paths
    #[arg(short, long)]
    yes: bool,

    /// Never check for or set up Tailwind CSS
    #[arg(long)]
    skip_prerequisite: bool,
}

/// Everything needed to build install requests
#[derive(Debug, PartialEq, Eq)]
struct Selection {
    kind: ItemKind,
    names: Vec<String>,
    format: OutputFormat,
    target_dir: PathBuf,
}

impl AddCommand {
    /// Execute the add command
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The project has no `package.json`
    /// - `--yes` is given without any item names
    /// - An interactive prompt cannot be answered
    pub fn execute(&self, project_root: &Path, config: &ComponentryConfig) -> Result<()> {
        let prompter: &dyn Prompter = if self.yes { &AssumeYes } else { &TerminalPrompter };
        let catalog = Catalog::builtin();

        let selection = self.select(prompter, &catalog, config)?;
        let requests: Vec<InstallRequest> = selection
            .names
            .iter()
            .map(|name| {
                InstallRequest::new(selection.kind, name, selection.format, &selection.target_dir)
            })
            .collect();

        let fetcher = HttpFetcher::new(config.registry.timeout());
        let runner = SystemRunner;
        let installer = Installer::new(project_root, &fetcher, &runner, prompter)
            .with_catalog(catalog)
            .with_config(config.clone())
            .skip_prerequisite(self.skip_prerequisite);

        let results = installer.run(&requests)?;

        let installed: Vec<_> = results.iter().filter_map(|r| r.as_ref().ok()).collect();
        let skipped = results.len() - installed.len();
        let warnings: usize = installed.iter().map(|report| report.warnings()).sum();

        println!();
        println!(
            "{} {} installed, {} skipped, {} warning{}",
            style("Done:").green().bold(),
            installed.len(),
            skipped,
            warnings,
            if warnings == 1 { "" } else { "s" }
        );
        if skipped > 0 {
            let list = match selection.kind {
                ItemKind::Component => "componentry list",
                ItemKind::Template => "componentry list --template",
            };
            println!("  Run {} to see what is available", style(list).cyan());
        }

        Ok(())
    }

    /// Fill in whatever the flags left open, asking the operator
    fn select(
        &self,
        prompter: &dyn Prompter,
        catalog: &Catalog,
        config: &ComponentryConfig,
    ) -> Result<Selection> {
        if self.yes && self.names.is_empty() {
            bail!(
                "--yes needs at least one item name. \
                 Run `componentry list` to see what is available"
            );
        }

        let kind = if self.template {
            ItemKind::Template
        } else if self.names.is_empty() {
            let labels: Vec<String> = ItemKind::ALL.iter().map(ToString::to_string).collect();
            ItemKind::ALL[prompter.select("What do you want to add?", &labels, 0)?]
        } else {
            ItemKind::Component
        };

        let names = if self.names.is_empty() {
            let items = catalog.items(kind);
            let labels: Vec<String> = items
                .iter()
                .map(|manifest| format!("{:<14} {}", manifest.name, manifest.description))
                .collect();
            let index = prompter.select(&format!("Which {kind}?"), &labels, 0)?;
            vec![items[index].name.to_string()]
        } else {
            self.names.clone()
        };

        let target_dir = match &self.dir {
            Some(dir) => dir.clone(),
            None => {
                let default = config.defaults.target_dir.display().to_string();
                let answer = prompter.input("Install into which directory?", &default)?;
                let answer = answer.trim();
                PathBuf::from(if answer.is_empty() { default.as_str() } else { answer })
            }
        };

        let format = match self.format {
            Some(format) => format,
            None => {
                let labels: Vec<String> = OutputFormat::ALL
                    .iter()
                    .map(|format| format!("{format} (.{})", format.source_extension()))
                    .collect();
                let default = OutputFormat::ALL
                    .iter()
                    .position(|format| *format == config.defaults.format)
                    .unwrap_or_default();
                OutputFormat::ALL[prompter.select("Which format?", &labels, default)?]
            }
        };

        Ok(Selection {
            kind,
            names,
            format,
            target_dir,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::VecDeque;

    /// Replays canned answers and records the questions asked
    #[derive(Default)]
    struct Scripted {
        selects: RefCell<VecDeque<usize>>,
        inputs: RefCell<VecDeque<String>>,
        asked: RefCell<Vec<String>>,
    }

    impl Scripted {
        fn new(selects: &[usize], inputs: &[&str]) -> Self {
            Self {
                selects: RefCell::new(selects.iter().copied().collect()),
                inputs: RefCell::new(inputs.iter().map(ToString::to_string).collect()),
                asked: RefCell::default(),
            }
        }
    }

    impl Prompter for Scripted {
        fn confirm(&self, message: &str, default: bool) -> Result<bool> {
            self.asked.borrow_mut().push(message.to_string());
            Ok(default)
        }

        fn input(&self, message: &str, _default: &str) -> Result<String> {
            self.asked.borrow_mut().push(message.to_string());
            Ok(self.inputs.borrow_mut().pop_front().unwrap())
        }

        fn select(&self, message: &str, _items: &[String], _default: usize) -> Result<usize> {
            self.asked.borrow_mut().push(message.to_string());
            Ok(self.selects.borrow_mut().pop_front().unwrap())
        }
    }

    fn command(args: &[&str]) -> AddCommand {
        #[derive(clap::Parser)]
        struct Wrapper {
            #[command(flatten)]
            add: AddCommand,
        }
        let argv = std::iter::once("add").chain(args.iter().copied());
        <Wrapper as clap::Parser>::parse_from(argv).add
    }

    #[test]
    fn test_flags_skip_every_prompt() {
        let prompter = Scripted::default();
        let selection = command(&["button", "toast", "--format", "untyped", "--dir", "ui"])
            .select(&prompter, &Catalog::builtin(), &ComponentryConfig::default())
            .unwrap();

        assert_eq!(
            selection,
            Selection {
                kind: ItemKind::Component,
                names: vec!["button".to_string(), "toast".to_string()],
                format: OutputFormat::Untyped,
                target_dir: PathBuf::from("ui"),
            }
        );
        assert!(prompter.asked.borrow().is_empty());
    }

    #[test]
    fn test_interactive_selection() {
        // template, coming-soon, typed
        let prompter = Scripted::new(&[1, 4, 0], &["src/pages"]);
        let selection = command(&[])
            .select(&prompter, &Catalog::builtin(), &ComponentryConfig::default())
            .unwrap();

        assert_eq!(selection.kind, ItemKind::Template);
        assert_eq!(selection.names, vec!["coming-soon".to_string()]);
        assert_eq!(selection.format, OutputFormat::Typed);
        assert_eq!(selection.target_dir, PathBuf::from("src/pages"));
        assert_eq!(prompter.asked.borrow().len(), 4);
    }

    #[test]
    fn test_template_flag_skips_kind_prompt() {
        let prompter = Scripted::new(&[0], &[""]);
        let selection = command(&["--template", "--format", "typed"])
            .select(&prompter, &Catalog::builtin(), &ComponentryConfig::default())
            .unwrap();

        assert_eq!(selection.kind, ItemKind::Template);
        assert_eq!(selection.names, vec!["not-found".to_string()]);
        // Blank answer falls back to the configured directory
        assert_eq!(selection.target_dir, PathBuf::from("src/components"));
        assert_eq!(prompter.asked.borrow()[0], "Which template?");
    }

    #[test]
    fn test_assume_yes_uses_config_defaults() {
        let mut config = ComponentryConfig::default();
        config.defaults.target_dir = PathBuf::from("src/ui");
        config.defaults.format = OutputFormat::Untyped;

        let selection = command(&["badge", "--yes"])
            .select(&AssumeYes, &Catalog::builtin(), &config)
            .unwrap();

        assert_eq!(selection.target_dir, PathBuf::from("src/ui"));
        assert_eq!(selection.format, OutputFormat::Untyped);
    }

    #[test]
    fn test_assume_yes_without_names_is_rejected() {
        let error = command(&["--yes"])
            .select(&AssumeYes, &Catalog::builtin(), &ComponentryConfig::default())
            .unwrap_err();

        assert!(error.to_string().contains("componentry list"));
    }
}
