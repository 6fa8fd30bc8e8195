//! Source image loading and encoding helpers

use std::fs;
use std::path::{Path, PathBuf};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use image::{DynamicImage, GenericImageView, ImageFormat};
use log::{debug, info};

use crate::errors::{FigureError, FigureResult};

/// Image being processed, decoded once per run
pub struct SourceImage {
    /// Path the image was loaded from
    path: PathBuf,
    /// Raw encoded bytes as read from disk
    bytes: Vec<u8>,
    /// Decoded pixels
    image: DynamicImage,
}

impl SourceImage {
    /// Read and decode an image file
    ///
    /// # Arguments
    /// * `path` - Path to the image file
    ///
    /// # Returns
    /// The decoded image, or `ImageRead` if the file is missing or not an image
    pub fn load(path: &Path) -> FigureResult<Self> {
        info!("Loading image {}", path.display());

        let bytes = fs::read(path)
            .map_err(|e| FigureError::ImageRead(
                format!("Could not read image from {}: {}", path.display(), e)))?;
        let image = image::load_from_memory(&bytes)
            .map_err(|e| FigureError::ImageRead(
                format!("Could not read image from {}: {}", path.display(), e)))?;

        debug!("Decoded {}x{} image", image.width(), image.height());

        Ok(SourceImage { path: path.to_path_buf(), bytes, image })
    }

    /// Wrap an already decoded image
    pub fn from_image(path: &Path, image: DynamicImage) -> Self {
        SourceImage { path: path.to_path_buf(), bytes: Vec::new(), image }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn image(&self) -> &DynamicImage {
        &self.image
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    /// File name without directory and extension, used to name the crops
    pub fn base_name(&self) -> String {
        base_name(&self.path)
    }

    /// MIME type of the encoded bytes, defaulting to JPEG when unknown
    pub fn mime_type(&self) -> &'static str {
        image::guess_format(&self.bytes)
            .map(mime_for_format)
            .unwrap_or("image/jpeg")
    }

    /// Encode the original bytes as a `data:` URI
    pub fn to_data_uri(&self) -> String {
        format!("data:{};base64,{}", self.mime_type(), STANDARD.encode(&self.bytes))
    }
}

/// File stem of a path, or `"image"` when it has none
pub fn base_name(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .filter(|stem| !stem.is_empty())
        .unwrap_or_else(|| "image".to_string())
}

fn mime_for_format(format: ImageFormat) -> &'static str {
    match format {
        ImageFormat::Png => "image/png",
        ImageFormat::Gif => "image/gif",
        ImageFormat::WebP => "image/webp",
        ImageFormat::Bmp => "image/bmp",
        ImageFormat::Tiff => "image/tiff",
        _ => "image/jpeg",
    }
}

/// Decode base64 image data
///
/// Surrounding whitespace and line breaks are ignored, as is a leading
/// `data:...;base64,` prefix.
///
/// # Returns
/// The decoded image, or `ImageDecode` if either the base64 or the image is invalid
pub fn decode_base64_image(data: &str) -> FigureResult<DynamicImage> {
    let payload = match data.find(";base64,") {
        Some(pos) if data.trim_start().starts_with("data:") => &data[pos + ";base64,".len()..],
        _ => data,
    };
    let cleaned: String = payload.chars().filter(|c| !c.is_whitespace()).collect();

    if cleaned.is_empty() {
        return Err(FigureError::ImageDecode("Could not decode base64 image: empty payload".to_string()));
    }

    let bytes = STANDARD.decode(cleaned.as_bytes())?;
    image::load_from_memory(&bytes)
        .map_err(|e| FigureError::ImageDecode(format!("Could not decode base64 image: {}", e)))
}
