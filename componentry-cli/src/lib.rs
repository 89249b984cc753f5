//! componentry CLI library
//!
//! Installs UI components and page templates from the componentry registry into
//! a JavaScript project: fetches the source files, provisions Tailwind CSS when
//! an item needs it, installs npm dependencies and keeps a barrel file of exports.

#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
#![warn(clippy::cargo)]
#![allow(clippy::cognitive_complexity)]
#![allow(clippy::multiple_crate_versions)]

pub mod catalog;
pub mod config;
pub mod error;
pub mod install;
pub mod observability;
pub mod package_manager;
pub mod prerequisite;
pub mod prompt;
pub mod ui;

use serde::{Deserialize, Serialize};
use std::fmt;

pub use catalog::{Catalog, Manifest, ManifestFile};
pub use config::ComponentryConfig;
pub use error::{CommandError, ConfigError, FetchError, InstallError};
pub use install::{InstallReport, InstallRequest, Installer};
pub use package_manager::{CommandRunner, PackageManager, SystemRunner};
pub use prompt::{AssumeYes, Prompter, TerminalPrompter};

/// Source variant written into the project
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// TypeScript sources (`.tsx`, barrel file `index.ts`)
    #[default]
    Typed,
    /// Plain JavaScript sources (`.jsx`, barrel file `index.js`)
    Untyped,
}

impl OutputFormat {
    /// Both formats, in prompt order
    pub const ALL: [Self; 2] = [Self::Typed, Self::Untyped];

    /// Extension of the barrel file for this format
    #[must_use]
    pub const fn index_extension(self) -> &'static str {
        match self {
            Self::Typed => "ts",
            Self::Untyped => "js",
        }
    }

    /// Extension of component source files for this format
    #[must_use]
    pub const fn source_extension(self) -> &'static str {
        match self {
            Self::Typed => "tsx",
            Self::Untyped => "jsx",
        }
    }

    /// Lowercase name, as used in config files and flags
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Typed => "typed",
            Self::Untyped => "untyped",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of installable item
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum ItemKind {
    /// A reusable UI component (button, toast, ...)
    #[default]
    Component,
    /// A full page template (error pages, status pages, ...)
    Template,
}

impl ItemKind {
    /// Both kinds, in prompt order
    pub const ALL: [Self; 2] = [Self::Component, Self::Template];
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Component => f.write_str("component"),
            Self::Template => f.write_str("template"),
        }
    }
}
