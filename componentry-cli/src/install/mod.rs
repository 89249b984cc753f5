//! Installation workflow
//!
//! [`Installer`] runs one linear pipeline per requested item:
//!
//! 1. Validate the project (`package.json` present, checked once per run)
//! 2. Look the item up in the [`Catalog`]
//! 3. Check and optionally provision Tailwind CSS (only for items that need it)
//! 4. Fetch the item's files
//! 5. Install runtime, then dev dependencies
//! 6. Add the item to the barrel file
//!
//! Only steps 1 and 2 can abort. Everything after them is best effort: a
//! failure is printed with a way to finish by hand, recorded in the
//! [`InstallReport`], and the pipeline moves on. Nothing already written is
//! rolled back.

pub mod deps;
pub mod fetch;
pub mod index;

use console::style;
use std::path::PathBuf;

pub use deps::DependencyOutcome;
pub use fetch::{Fetch, FileOutcome, HttpFetcher};
pub use index::IndexOutcome;

use crate::catalog::{Catalog, Manifest};
use crate::config::ComponentryConfig;
use crate::error::InstallError;
use crate::package_manager::CommandRunner;
use crate::prerequisite::{self, PrerequisiteOutcome};
use crate::prompt::Prompter;
use crate::{ui, ItemKind, OutputFormat};

/// One item the operator asked for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallRequest {
    /// Component or template
    pub kind: ItemKind,
    /// Catalog name
    pub name: String,
    /// Source variant to write
    pub format: OutputFormat,
    /// Directory, relative to the project root, that receives the item
    pub target_dir: PathBuf,
}

impl InstallRequest {
    /// Create a request
    pub fn new(
        kind: ItemKind,
        name: impl Into<String>,
        format: OutputFormat,
        target_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            kind,
            name: name.into(),
            format,
            target_dir: target_dir.into(),
        }
    }
}

/// Per-step results of installing one item
#[derive(Debug)]
pub struct InstallReport {
    /// Installed manifest
    pub manifest: &'static Manifest,
    /// Requested source variant
    pub format: OutputFormat,
    /// Tailwind step, `None` when the item does not need it or it was skipped
    pub prerequisite: Option<PrerequisiteOutcome>,
    /// One entry per file written or attempted
    pub files: Vec<FileOutcome>,
    /// Runtime dependency step
    pub dependencies: DependencyOutcome,
    /// Dev dependency step
    pub dev_dependencies: DependencyOutcome,
    /// Barrel file step
    pub index: anyhow::Result<IndexOutcome>,
}

impl InstallReport {
    /// Number of files now on disk
    #[must_use]
    pub fn files_written(&self) -> usize {
        self.files.iter().filter(|file| file.is_written()).count()
    }

    /// Number of steps that need manual follow-up
    #[must_use]
    pub fn warnings(&self) -> usize {
        let prerequisite = self
            .prerequisite
            .as_ref()
            .is_some_and(PrerequisiteOutcome::is_warning);
        let files = self.files.len() - self.files_written();

        usize::from(prerequisite)
            + files
            + usize::from(self.dependencies.is_warning())
            + usize::from(self.dev_dependencies.is_warning())
            + usize::from(self.index.is_err())
    }

    /// Print the closing line for this item
    pub fn print_summary(&self) {
        let name = format!(
            "{} {}",
            style(self.manifest.name).green().bold(),
            style(format!("({})", self.format)).dim()
        );
        match self.warnings() {
            0 => println!("{} {name} installed", style("✓").green().bold()),
            1 => println!(
                "{} {name} installed with 1 warning",
                style("!").yellow().bold()
            ),
            n => println!(
                "{} {name} installed with {n} warnings",
                style("!").yellow().bold()
            ),
        }
    }
}

/// Runs the installation pipeline against one project
pub struct Installer<'a> {
    project_root: PathBuf,
    catalog: Catalog,
    config: ComponentryConfig,
    check_prerequisite: bool,
    fetcher: &'a dyn Fetch,
    runner: &'a dyn CommandRunner,
    prompter: &'a dyn Prompter,
}

impl<'a> Installer<'a> {
    /// Create an installer for the project at `project_root`
    pub fn new(
        project_root: impl Into<PathBuf>,
        fetcher: &'a dyn Fetch,
        runner: &'a dyn CommandRunner,
        prompter: &'a dyn Prompter,
    ) -> Self {
        Self {
            project_root: project_root.into(),
            catalog: Catalog::builtin(),
            config: ComponentryConfig::default(),
            check_prerequisite: true,
            fetcher,
            runner,
            prompter,
        }
    }

    /// Use a different catalog
    #[must_use]
    pub const fn with_catalog(mut self, catalog: Catalog) -> Self {
        self.catalog = catalog;
        self
    }

    /// Use loaded configuration instead of the built-in defaults
    #[must_use]
    pub fn with_config(mut self, config: ComponentryConfig) -> Self {
        self.config = config;
        self
    }

    /// Never check or provision Tailwind CSS
    #[must_use]
    pub const fn skip_prerequisite(mut self, skip: bool) -> Self {
        self.check_prerequisite = !skip;
        self
    }

    /// Make sure the project root holds a `package.json`
    ///
    /// # Errors
    ///
    /// Returns [`InstallError::MissingProjectDescriptor`] if it does not.
    pub fn validate_project(&self) -> Result<(), InstallError> {
        if self.project_root.join("package.json").is_file() {
            Ok(())
        } else {
            Err(InstallError::MissingProjectDescriptor(self.project_root.clone()))
        }
    }

    /// Validate the project once, then install each request in order
    ///
    /// Unknown items are reported in their slot of the returned list and do
    /// not stop the remaining requests.
    ///
    /// # Errors
    ///
    /// Returns [`InstallError::MissingProjectDescriptor`] before anything is
    /// written if the project has no `package.json`.
    pub fn run(
        &self,
        requests: &[InstallRequest],
    ) -> Result<Vec<Result<InstallReport, InstallError>>, InstallError> {
        self.validate_project()?;
        Ok(requests
            .iter()
            .map(|request| {
                let result = self.install(request);
                if let Err(e) = &result {
                    ui::failure(e);
                }
                result
            })
            .collect())
    }

    /// Install a single item into an already validated project
    ///
    /// # Errors
    ///
    /// Returns [`InstallError::UnknownItem`] without touching the project if
    /// the name is not in the catalog.
    pub fn install(&self, request: &InstallRequest) -> Result<InstallReport, InstallError> {
        let manifest = self
            .catalog
            .lookup(request.kind, &request.name)
            .ok_or_else(|| InstallError::UnknownItem {
                kind: request.kind,
                name: request.name.clone(),
            })?;

        tracing::info!(
            item = manifest.name,
            format = %request.format,
            target = %request.target_dir.display(),
            "installing"
        );
        println!();
        println!(
            "{} {} {} {}",
            style("Installing").green().bold(),
            style(request.kind).bold(),
            style(manifest.name).cyan().bold(),
            style(format!("({}) into {}", request.format, request.target_dir.display())).dim()
        );

        let prerequisite = (self.check_prerequisite && manifest.requires_tailwind).then(|| {
            ui::step("Checking Tailwind CSS");
            prerequisite::ensure(&self.project_root, self.runner, self.prompter)
        });

        let target_dir = self.project_root.join(&request.target_dir);
        let item_dir = target_dir.join(manifest.name);

        ui::step("Fetching files");
        let files = fetch::fetch_files(self.fetcher, manifest, request.format, &item_dir, |source| {
            self.config.source_url(source)
        });

        if !manifest.dependencies.is_empty() || !manifest.dev_dependencies.is_empty() {
            ui::step("Installing dependencies");
        }
        let dependencies = deps::install_dependencies(
            self.runner,
            &self.project_root,
            manifest.dependencies,
            false,
        );
        let dev_dependencies = deps::install_dependencies(
            self.runner,
            &self.project_root,
            manifest.dev_dependencies,
            true,
        );

        ui::step("Updating index");
        let index = index::append_export(
            &target_dir,
            manifest.export_name,
            &manifest.module_path(request.format),
            request.format,
        );
        match &index {
            Ok(IndexOutcome::Appended(path)) => {
                ui::success(format!("Added {} to {}", manifest.export_name, path.display()));
            }
            Ok(IndexOutcome::AlreadyPresent(path)) => {
                ui::info(format!(
                    "{} is already exported from {}",
                    manifest.export_name,
                    path.display()
                ));
            }
            Err(e) => {
                ui::warning(format!("{e:#}"));
                ui::info("Add this line to your index file by hand:");
                ui::command(index::export_line(
                    manifest.export_name,
                    &manifest.module_path(request.format),
                ));
            }
        }

        let report = InstallReport {
            manifest,
            format: request.format,
            prerequisite,
            files,
            dependencies,
            dev_dependencies,
            index,
        };
        report.print_summary();
        Ok(report)
    }
}
