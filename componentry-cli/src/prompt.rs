//! Operator prompts
//!
//! The installer never talks to the terminal directly: confirmations and path
//! questions go through [`Prompter`], so the workflow runs unattended with
//! [`AssumeYes`] and in tests with a mock.

use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};

/// Source of operator answers
#[cfg_attr(test, mockall::automock)]
pub trait Prompter {
    /// Ask a yes/no question
    ///
    /// # Errors
    ///
    /// Returns an error if the answer cannot be read.
    fn confirm(&self, message: &str, default: bool) -> Result<bool>;

    /// Ask for a line of text
    ///
    /// # Errors
    ///
    /// Returns an error if the answer cannot be read.
    fn input(&self, message: &str, default: &str) -> Result<String>;

    /// Ask the operator to pick one of `items`, returning its index
    ///
    /// # Errors
    ///
    /// Returns an error if the answer cannot be read.
    fn select(&self, message: &str, items: &[String], default: usize) -> Result<usize>;
}

/// Interactive prompts on the controlling terminal
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn confirm(&self, message: &str, default: bool) -> Result<bool> {
        Ok(Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(message)
            .default(default)
            .interact()?)
    }

    fn input(&self, message: &str, default: &str) -> Result<String> {
        Ok(Input::<String>::with_theme(&ColorfulTheme::default())
            .with_prompt(message)
            .default(default.to_string())
            .interact_text()?)
    }

    fn select(&self, message: &str, items: &[String], default: usize) -> Result<usize> {
        Ok(Select::with_theme(&ColorfulTheme::default())
            .with_prompt(message)
            .items(items)
            .default(default)
            .interact()?)
    }
}

/// Answers every question with "yes" or the offered default
#[derive(Debug, Default, Clone, Copy)]
pub struct AssumeYes;

impl Prompter for AssumeYes {
    fn confirm(&self, message: &str, _default: bool) -> Result<bool> {
        tracing::debug!(prompt = message, "auto-confirmed");
        Ok(true)
    }

    fn input(&self, message: &str, default: &str) -> Result<String> {
        tracing::debug!(prompt = message, answer = default, "using default answer");
        Ok(default.to_string())
    }

    fn select(&self, message: &str, items: &[String], default: usize) -> Result<usize> {
        tracing::debug!(prompt = message, answer = ?items.get(default), "using default choice");
        Ok(default)
    }
}
