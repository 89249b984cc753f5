//! Error types for the installation workflow
//!
//! Only [`InstallError`] stops an installation. The other errors describe a
//! single failed step and end up in the [`crate::InstallReport`] as warnings.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::ItemKind;

/// Conditions that abort an installation
#[derive(Debug, Error)]
pub enum InstallError {
    /// The target directory is not a JavaScript project
    #[error(
        "No package.json found in {}. Run componentry from the root of your project.",
        .0.display()
    )]
    MissingProjectDescriptor(PathBuf),

    /// The requested name is not in the catalog
    #[error("Unknown {kind} '{name}'. Run `componentry list` to see what is available.")]
    UnknownItem {
        /// Kind that was searched
        kind: ItemKind,
        /// Name that was requested
        name: String,
    },
}

/// Failure to fetch or write a single registry file
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request never produced a response
    #[error("Failed to fetch {url}: {message}")]
    Network {
        /// URL that was requested
        url: String,
        /// Transport error description
        message: String,
    },

    /// The registry answered with a non-success status
    #[error("Failed to fetch {url}: HTTP {status}")]
    Status {
        /// URL that was requested
        url: String,
        /// HTTP status code
        status: u16,
    },

    /// The response body could not be read
    #[error("Failed to read response from {url}: {source}")]
    Body {
        /// URL that was requested
        url: String,
        /// Underlying read error
        source: ureq::Error,
    },

    /// The fetched content could not be written to disk
    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        /// Destination path
        path: PathBuf,
        /// Underlying I/O error
        source: io::Error,
    },
}

/// Failure of a package manager invocation
#[derive(Debug, Error)]
pub enum CommandError {
    /// The program could not be started
    #[error("Failed to run `{command}`: {source}")]
    Spawn {
        /// Command line as shown to the user
        command: String,
        /// Underlying I/O error
        source: io::Error,
    },

    /// The program ran and exited unsuccessfully
    #[error("`{command}` exited with {status}")]
    Failed {
        /// Command line as shown to the user
        command: String,
        /// Exit status description
        status: String,
    },
}

impl CommandError {
    /// Command line that failed
    #[must_use]
    pub fn command(&self) -> &str {
        match self {
            Self::Spawn { command, .. } | Self::Failed { command, .. } => command,
        }
    }
}

/// Invalid or unreadable configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Defaults could not be serialized as the base layer
    #[error("Failed to serialize default configuration: {0}")]
    Defaults(#[from] toml::ser::Error),

    /// A configuration source could not be parsed or merged
    #[error("Invalid configuration: {0}")]
    Extract(#[from] Box<figment::Error>),
}
