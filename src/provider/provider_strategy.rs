//! Region provider strategy definitions
//!
//! This module defines the strategy pattern for the different region
//! detectors, allowing the pipelines to swap detectors freely.

use log::info;

use crate::config::{ExtractionConfig, VisionApiConfig};
use crate::errors::FigureResult;
use crate::region::RawRegion;
use crate::utils::image_utils::SourceImage;

use super::layout_strategy::LayoutRegionProvider;
use super::remote_strategy::VisionApiProvider;

/// Strategy for finding figure regions in an image
///
/// Implementations return regions in the order they discovered them;
/// percentage and pixel bounds may be mixed freely.
pub trait RegionProvider {
    /// Detect candidate figure regions
    ///
    /// # Arguments
    /// * `source` - The decoded source image
    ///
    /// # Returns
    /// Raw regions in discovery order, or an error
    fn detect(&mut self, source: &SourceImage) -> FigureResult<Vec<RawRegion>>;

    /// Short name used in diagnostics
    fn name(&self) -> &'static str;
}

/// Available region detectors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderKind {
    /// Multimodal vision API returning percentage boxes
    Remote,
    /// Learned layout model, falling back to the contour heuristic
    Local,
}

/// Factory for creating region providers
pub struct RegionProviderFactory<'a> {
    extraction: &'a ExtractionConfig,
    vision: &'a VisionApiConfig,
}

impl<'a> RegionProviderFactory<'a> {
    /// Create a new factory instance
    ///
    /// # Arguments
    /// * `extraction` - Extraction settings (thresholds, layout model)
    /// * `vision` - Vision API settings
    pub fn new(extraction: &'a ExtractionConfig, vision: &'a VisionApiConfig) -> Self {
        RegionProviderFactory { extraction, vision }
    }

    /// Create the provider for the requested strategy
    ///
    /// Constructing the remote provider fails when the API credential is
    /// missing, before any request is attempted.
    pub fn create_provider(&self, kind: ProviderKind) -> FigureResult<Box<dyn RegionProvider>> {
        match kind {
            ProviderKind::Remote => {
                info!("Using vision API provider ({})", self.vision.model);
                Ok(Box::new(VisionApiProvider::new(self.vision.clone())?))
            },
            ProviderKind::Local => {
                info!("Using layout model provider");
                Ok(Box::new(LayoutRegionProvider::new(self.extraction)))
            },
        }
    }
}
