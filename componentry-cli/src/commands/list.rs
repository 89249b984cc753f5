//! Print the catalog

use anyhow::{bail, Result};
use clap::Args;
use componentry::{Catalog, ItemKind, Manifest};
use console::style;

/// List available components and templates
#[derive(Debug, Args)]
pub struct ListCommand {
    /// Only list page templates
    #[arg(short, long)]
    template: bool,

    /// Only list templates in this category
    #[arg(short, long)]
    category: Option<String>,
}

impl ListCommand {
    /// Execute the list command
    ///
    /// # Errors
    ///
    /// Returns an error if `--category` names a category that does not exist.
    pub fn execute(&self) -> Result<()> {
        let catalog = Catalog::builtin();

        if let Some(category) = &self.category {
            if !catalog.categories().contains(&category.as_str()) {
                bail!(
                    "Unknown category '{category}'. Available: {}",
                    catalog.categories().join(", ")
                );
            }
        }

        if !self.template && self.category.is_none() {
            println!("{}", style("Components").bold().underlined());
            print_items(catalog.items(ItemKind::Component));
            println!();
        }

        println!("{}", style("Templates").bold().underlined());
        for category in catalog.categories() {
            if self.category.as_deref().is_some_and(|wanted| wanted != category) {
                continue;
            }
            println!("  {}", style(category).cyan());
            print_items(
                catalog
                    .items(ItemKind::Template)
                    .iter()
                    .filter(|manifest| manifest.category == Some(category)),
            );
        }

        println!();
        println!("{}", style("* needs Tailwind CSS").dim());
        Ok(())
    }
}

fn print_items<'a>(items: impl IntoIterator<Item = &'a Manifest>) {
    for manifest in items {
        let marker = if manifest.requires_tailwind { "*" } else { " " };
        println!(
            "  {marker} {} {}",
            style(format!("{:<14}", manifest.name)).green(),
            style(manifest.description).dim()
        );
    }
}
