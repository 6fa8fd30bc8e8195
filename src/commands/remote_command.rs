//! Vision API extraction command

use clap::ArgMatches;
use std::path::PathBuf;
use log::info;

use crate::api::run_pipeline;
use crate::commands::command_traits::Command;
use crate::commands::settings::RunSettings;
use crate::errors::{FigureError, FigureResult};
use crate::provider::{ProviderKind, RegionProviderFactory};
use crate::utils::image_utils::SourceImage;
use crate::utils::logger::Logger;

/// Command extracting figures located by the vision API
pub struct RemoteExtractCommand<'a> {
    /// Path to the input image
    input_file: PathBuf,
    /// Run configuration
    settings: RunSettings,
    /// Journal for written figures
    logger: &'a Logger,
}

impl<'a> RemoteExtractCommand<'a> {
    /// Create a new remote extraction command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `settings` - Run configuration
    /// * `logger` - Journal for written figures
    pub fn new(args: &ArgMatches, settings: RunSettings, logger: &'a Logger) -> FigureResult<Self> {
        let input_file = args.get_one::<String>("input")
            .ok_or_else(|| FigureError::Configuration("Missing input image".to_string()))?;
        info!("Input image: {}", input_file);

        Ok(RemoteExtractCommand {
            input_file: PathBuf::from(input_file),
            settings,
            logger,
        })
    }
}

impl<'a> Command for RemoteExtractCommand<'a> {
    fn execute(&self) -> FigureResult<Vec<PathBuf>> {
        let factory = RegionProviderFactory::new(&self.settings.extraction, &self.settings.vision);
        let mut provider = factory.create_provider(ProviderKind::Remote)?;

        let source = SourceImage::load(&self.input_file)?;
        let padding = self.settings.extraction.remote_padding();
        info!("Padding figures by {}%", padding);

        run_pipeline(provider.as_mut(), &source, &self.settings.extraction, padding, self.logger)
    }
}
