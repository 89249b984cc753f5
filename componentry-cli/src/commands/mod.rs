//! CLI command implementations

pub mod add;
pub mod config;
pub mod init;
pub mod list;

pub use add::AddCommand;
pub use config::ConfigCommand;
pub use init::InitCommand;
pub use list::ListCommand;
