//! Cropping figure regions and writing them to disk

use std::fs;
use std::path::{Path, PathBuf};
use image::DynamicImage;
use log::{debug, info};

use crate::errors::{FigureError, FigureResult};
use crate::region::{NormalizedRegion, RawRegion};
use crate::utils::logger::Logger;
use crate::utils::progress::ProgressTracker;

/// Name of the file holding the crop of region `index`
pub fn figure_file_name(base_name: &str, index: usize) -> String {
    format!("{}_figure_{}.jpg", base_name, index)
}

/// Writes one JPEG file per region into an output folder
pub struct CropWriter<'a> {
    /// Folder receiving the crops
    output_folder: PathBuf,
    /// Journal for per-figure lines
    logger: &'a Logger,
}

impl<'a> CropWriter<'a> {
    /// Create a writer, creating the output folder (and parents) if needed
    pub fn new(output_folder: &Path, logger: &'a Logger) -> FigureResult<Self> {
        fs::create_dir_all(output_folder)?;
        Ok(CropWriter { output_folder: output_folder.to_path_buf(), logger })
    }

    /// Crop and write every region
    ///
    /// Files are named after the source image and the region's index in
    /// the provider sequence; existing files are overwritten. The first
    /// failing write aborts, leaving earlier files in place.
    ///
    /// # Arguments
    /// * `image` - The source image
    /// * `base_name` - Source file name without extension
    /// * `regions` - Normalized regions in emission order
    /// * `raw_regions` - Provider output the regions were derived from
    ///
    /// # Returns
    /// Paths of the written files, in emission order
    pub fn write_all(&self, image: &DynamicImage, base_name: &str,
                     regions: &[NormalizedRegion], raw_regions: &[RawRegion]) -> FigureResult<Vec<PathBuf>> {
        let progress = ProgressTracker::new(regions.len() as u64, "Writing figures");
        let mut written = Vec::with_capacity(regions.len());

        for region in regions {
            let path = self.output_folder.join(figure_file_name(base_name, region.source_index));
            self.write_crop(image, region, &path)?;

            let (kind, description) = raw_regions.get(region.source_index)
                .map(|raw| (raw.label.as_str(), raw.description_or_default()))
                .unwrap_or(("unknown", "no description"));
            info!("Extracted figure {}: {} - {}", region.source_index, kind, description);
            self.logger.journal(&format!("{}\t{}\t{}", path.display(), kind, description))?;

            progress.increment(1);
            written.push(path);
        }

        progress.finish();
        Ok(written)
    }

    /// Crop a single region and save it as JPEG
    pub fn write_crop(&self, image: &DynamicImage, region: &NormalizedRegion, path: &Path) -> FigureResult<()> {
        debug!("Cropping x={}, y={}, width={}, height={} to {}",
               region.x, region.y, region.width, region.height, path.display());

        let crop = image.crop_imm(region.x, region.y, region.width, region.height);
        DynamicImage::ImageRgb8(crop.to_rgb8())
            .save(path)
            .map_err(|e| FigureError::ImageWrite(format!("{}: {}", path.display(), e)))
    }
}
