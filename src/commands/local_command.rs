//! Layout model / contour heuristic extraction command

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

/// Command extracting figures without network access
pub struct LocalExtractCommand<'a> {
    /// Path to the input image
    input_file: PathBuf,
    /// Run configuration
    settings: RunSettings,
    /// Journal for written figures
    logger: &'a Logger,
}

impl<'a> LocalExtractCommand<'a> {
    /// Create a new local extraction command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `settings` - Run configuration
    /// * `logger` - Journal for written figures
    pub fn new(args: &ArgMatches, settings: RunSettings, logger: &'a Logger) -> FigureResult<Self> {
        let input_file = args.get_one::<String>("input")
            .ok_or_else(|| FigureError::Configuration("Missing input image".to_string()))?;
        info!("Input image: {}", input_file);

        Ok(Self::for_path(PathBuf::from(input_file), settings, logger))
    }

    /// Create a command for an image path directly
    pub fn for_path(input_file: PathBuf, settings: RunSettings, logger: &'a Logger) -> Self {
        LocalExtractCommand { input_file, settings, logger }
    }
}

impl<'a> Command for LocalExtractCommand<'a> {
    fn execute(&self) -> FigureResult<Vec<PathBuf>> {
        let source = SourceImage::load(&self.input_file)?;

        let factory = RegionProviderFactory::new(&self.settings.extraction, &self.settings.vision);
        let mut provider = factory.create_provider(ProviderKind::Local)?;

        let padding = self.settings.extraction.local_padding();
        run_pipeline(provider.as_mut(), &source, &self.settings.extraction, padding, self.logger)
    }
}
