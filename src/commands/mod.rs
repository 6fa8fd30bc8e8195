//! CLI command implementations
//!
//! Each pipeline is a command built by [`FigCropCommandFactory`] from the
//! parsed command line.

pub mod command_traits;
pub mod settings;
pub mod remote_command;
pub mod local_command;
pub mod base64_command;

pub use command_traits::{Command, CommandFactory};
pub use settings::RunSettings;
pub use remote_command::RemoteExtractCommand;
pub use local_command::LocalExtractCommand;
pub use base64_command::Base64ExtractCommand;

use clap::ArgMatches;
use crate::errors::FigureResult;
use crate::utils::logger::Logger;

/// Factory for creating command instances based on CLI arguments
pub struct FigCropCommandFactory;

impl FigCropCommandFactory {
    /// Create a new factory instance
    pub fn new() -> Self {
        FigCropCommandFactory
    }
}

impl Default for FigCropCommandFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> CommandFactory<'a> for FigCropCommandFactory {
    fn create_command(&self, args: &ArgMatches, logger: &'a Logger) -> FigureResult<Box<dyn Command + 'a>> {
        let settings = RunSettings::from_args(args)?;

        if args.get_flag("base64") {
            Ok(Box::new(Base64ExtractCommand::new(args, settings, logger)?))
        } else if args.get_flag("local") {
            Ok(Box::new(LocalExtractCommand::new(args, settings, logger)?))
        } else {
            Ok(Box::new(RemoteExtractCommand::new(args, settings, logger)?))
        }
    }
}
