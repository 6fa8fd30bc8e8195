//! Command pattern interfaces
//!
//! This module defines the core Command pattern interfaces
//! for the CLI application.

use std::path::PathBuf;

use crate::errors::FigureResult;
use crate::utils::logger::Logger;

/// Represents an executable extraction in the application
///
/// Command objects encapsulate one pipeline run, keeping argument
/// handling apart from the extraction itself.
pub trait Command {
    /// Execute the command
    ///
    /// # Returns
    /// Paths of the written crops, or an error
    fn execute(&self) -> FigureResult<Vec<PathBuf>>;
}

/// Factory for creating commands from CLI arguments
pub trait CommandFactory<'a> {
    /// Create a new Command instance based on CLI arguments
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `logger` - Journal for written figures
    ///
    /// # Returns
    /// A command that implements the Command trait, or an error
    fn create_command(&self, args: &clap::ArgMatches, logger: &'a Logger) -> FigureResult<Box<dyn Command + 'a>>;
}
