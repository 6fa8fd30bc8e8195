//! Library entry points
//!
//! [`FigCrop`] bundles the run configuration and exposes one method per
//! pipeline. Both pipelines share [`run_pipeline`]: detect, order,
//! normalize, crop and write.

use std::fs;
use std::path::{Path, PathBuf};
use image::DynamicImage;
use log::info;

use crate::config::{ExtractionConfig, VisionApiConfig};
use crate::errors::{FigureError, FigureResult};
use crate::output::CropWriter;
use crate::provider::{ProviderKind, RegionProvider, RegionProviderFactory};
use crate::region::{normalize_all, order_regions};
use crate::utils::image_utils::{decode_base64_image, SourceImage};
use crate::utils::logger::Logger;

/// Default base name for images supplied as base64
pub const DEFAULT_UPLOAD_NAME: &str = "uploaded_image";

/// Run one image through a region provider and write the crops
///
/// # Arguments
/// * `provider` - Region detector to use
/// * `source` - The decoded source image
/// * `config` - Output folder and region order
/// * `padding` - Padding percentage applied to every region
/// * `logger` - Journal receiving one line per written figure
///
/// # Returns
/// Paths of the written crops, in emission order
pub fn run_pipeline(provider: &mut dyn RegionProvider, source: &SourceImage, config: &ExtractionConfig,
                    padding: f64, logger: &Logger) -> FigureResult<Vec<PathBuf>> {
    let (width, height) = source.dimensions();
    let writer = CropWriter::new(&config.output_folder, logger)?;

    info!("Detecting figures with the {} provider", provider.name());
    let raw_regions = provider.detect(source)?;
    info!("Provider returned {} region(s)", raw_regions.len());

    let raw_regions = order_regions(raw_regions, width, height, config.order);
    let regions = normalize_all(&raw_regions, width, height, padding);
    if regions.len() < raw_regions.len() {
        info!("Dropped {} region(s) outside the image", raw_regions.len() - regions.len());
    }

    let paths = writer.write_all(source.image(), &source.base_name(), &regions, &raw_regions)?;
    info!("Extracted {} figure(s) to {}", paths.len(), config.output_folder.display());
    Ok(paths)
}

/// Decode base64 image data and save it as `{filename}_original.jpg`
///
/// # Arguments
/// * `data` - Base64 data, optionally with a `data:` URI prefix
/// * `output_folder` - Folder receiving the image, created if needed
/// * `filename` - Base name for the saved image
///
/// # Returns
/// Path of the saved image
pub fn save_base64_original(data: &str, output_folder: &Path, filename: &str) -> FigureResult<PathBuf> {
    let image = decode_base64_image(data)?;

    fs::create_dir_all(output_folder)?;
    let original_path = output_folder.join(format!("{}_original.jpg", filename));
    DynamicImage::ImageRgb8(image.to_rgb8())
        .save(&original_path)
        .map_err(|e| FigureError::ImageWrite(format!("{}: {}", original_path.display(), e)))?;
    info!("Saved decoded image to {}", original_path.display());

    Ok(original_path)
}

/// Main interface to the figcrop library
pub struct FigCrop {
    extraction: ExtractionConfig,
    vision: VisionApiConfig,
    logger: Logger,
}

impl FigCrop {
    /// Create a new instance without a journal file
    ///
    /// # Arguments
    /// * `extraction` - Output and detection settings
    /// * `vision` - Vision API settings, used by the remote pipeline only
    pub fn new(extraction: ExtractionConfig, vision: VisionApiConfig) -> Self {
        FigCrop { extraction, vision, logger: Logger::disabled() }
    }

    /// Record written figures in `log_file`
    pub fn with_log_file(mut self, log_file: &Path) -> FigureResult<Self> {
        self.logger = Logger::new(log_file)?;
        Ok(self)
    }

    /// Extract figures located by the vision API
    ///
    /// Fails with `Configuration` before touching the network when no API
    /// credential is configured.
    pub fn extract_remote(&self, image_path: &Path) -> FigureResult<Vec<PathBuf>> {
        let mut provider = self.provider(ProviderKind::Remote)?;
        let source = SourceImage::load(image_path)?;
        run_pipeline(provider.as_mut(), &source, &self.extraction, self.extraction.remote_padding(), &self.logger)
    }

    /// Extract figures located by the layout model or the contour heuristic
    pub fn extract_local(&self, image_path: &Path) -> FigureResult<Vec<PathBuf>> {
        let source = SourceImage::load(image_path)?;
        self.extract_local_source(&source)
    }

    /// Extract figures from an image already in memory
    ///
    /// Crops are named after the file name of `name`.
    pub fn extract_local_image(&self, name: &str, image: DynamicImage) -> FigureResult<Vec<PathBuf>> {
        let source = SourceImage::from_image(Path::new(name), image);
        self.extract_local_source(&source)
    }

    /// Extract figures from base64 encoded image data
    ///
    /// The decoded image is first saved as `{filename}_original.jpg` in the
    /// output folder, then run through the local pipeline. Crops are
    /// therefore named `{filename}_original_figure_{i}.jpg`.
    ///
    /// # Arguments
    /// * `data` - Base64 data, optionally with a `data:` URI prefix
    /// * `filename` - Base name for the saved original
    pub fn extract_from_base64(&self, data: &str, filename: &str) -> FigureResult<Vec<PathBuf>> {
        let original_path = save_base64_original(data, &self.extraction.output_folder, filename)?;
        self.extract_local(&original_path)
    }

    fn extract_local_source(&self, source: &SourceImage) -> FigureResult<Vec<PathBuf>> {
        let mut provider = self.provider(ProviderKind::Local)?;
        run_pipeline(provider.as_mut(), source, &self.extraction, self.extraction.local_padding(), &self.logger)
    }

    fn provider(&self, kind: ProviderKind) -> FigureResult<Box<dyn RegionProvider>> {
        RegionProviderFactory::new(&self.extraction, &self.vision).create_provider(kind)
    }
}
