//! Assembling the run configuration from the command line
//!
//! Precedence, lowest first: built-in defaults, the `--config` file, the
//! process environment, command-line arguments.

use std::path::{Path, PathBuf};
use clap::ArgMatches;
use log::debug;

use crate::config::{ConfigFile, ExtractionConfig, VisionApiConfig};
use crate::errors::{FigureError, FigureResult};
use crate::region::RegionOrder;

/// Configuration of one CLI invocation
#[derive(Debug, Clone, PartialEq)]
pub struct RunSettings {
    pub extraction: ExtractionConfig,
    pub vision: VisionApiConfig,
}

impl RunSettings {
    /// Build the settings for the given arguments
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    ///
    /// # Returns
    /// The merged settings, or `Configuration` if the config file or an
    /// argument is invalid
    pub fn from_args(args: &ArgMatches) -> FigureResult<Self> {
        let mut extraction = ExtractionConfig::default();
        let mut vision = VisionApiConfig::default();

        if let Some(path) = args.get_one::<String>("config") {
            ConfigFile::from_file(Path::new(path))?.apply(&mut extraction, &mut vision)?;
        }

        vision.apply_env();

        if let Some(folder) = args.get_one::<String>("output_folder") {
            extraction.output_folder = PathBuf::from(folder);
        }
        if let Some(padding) = args.get_one::<u32>("padding_percent") {
            extraction.padding_percent = Some(*padding as f64);
        }
        if let Some(order) = args.get_one::<String>("order") {
            extraction.order = RegionOrder::from_name(order)
                .ok_or_else(|| FigureError::Configuration(format!("Unknown region order: {}", order)))?;
        }
        if let Some(model) = args.get_one::<String>("model") {
            extraction.layout.model_path = Some(PathBuf::from(model));
        }

        debug!("Output folder: {}", extraction.output_folder.display());
        debug!("Padding: {:?}, order: {:?}", extraction.padding_percent, extraction.order);

        Ok(RunSettings { extraction, vision })
    }
}
