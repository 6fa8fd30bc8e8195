//! Base64 input extraction command
//!
//! Reads base64 image data from a file (or stdin for `-`), saves the
//! decoded image next to the crops and runs the local pipeline on it.

use clap::ArgMatches;
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use log::info;

use crate::api::{save_base64_original, DEFAULT_UPLOAD_NAME};
use crate::commands::command_traits::Command;
use crate::commands::local_command::LocalExtractCommand;
use crate::commands::settings::RunSettings;
use crate::errors::{FigureError, FigureResult};
use crate::utils::logger::Logger;

/// Command extracting figures from base64 encoded image data
pub struct Base64ExtractCommand<'a> {
    /// File holding the base64 data, `-` for stdin
    input_file: String,
    /// Base name for the saved original
    name: String,
    /// Run configuration
    settings: RunSettings,
    /// Journal for written figures
    logger: &'a Logger,
}

impl<'a> Base64ExtractCommand<'a> {
    /// Create a new base64 extraction command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `settings` - Run configuration
    /// * `logger` - Journal for written figures
    pub fn new(args: &ArgMatches, settings: RunSettings, logger: &'a Logger) -> FigureResult<Self> {
        let input_file = args.get_one::<String>("input")
            .ok_or_else(|| FigureError::Configuration("Missing base64 input".to_string()))?
            .clone();
        let name = args.get_one::<String>("name")
            .cloned()
            .unwrap_or_else(|| DEFAULT_UPLOAD_NAME.to_string());

        Ok(Base64ExtractCommand { input_file, name, settings, logger })
    }

    fn read_input(&self) -> FigureResult<String> {
        if self.input_file == "-" {
            info!("Reading base64 data from stdin");
            let mut data = String::new();
            io::stdin().read_to_string(&mut data)?;
            Ok(data)
        } else {
            info!("Reading base64 data from {}", self.input_file);
            fs::read_to_string(&self.input_file)
                .map_err(|e| FigureError::ImageRead(
                    format!("Could not read base64 data from {}: {}", self.input_file, e)))
        }
    }
}

impl<'a> Command for Base64ExtractCommand<'a> {
    fn execute(&self) -> FigureResult<Vec<PathBuf>> {
        let data = self.read_input()?;
        let original = save_base64_original(&data, &self.settings.extraction.output_folder, &self.name)?;

        LocalExtractCommand::for_path(original, self.settings.clone(), self.logger).execute()
    }
}
