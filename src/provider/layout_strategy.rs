//! Local region provider
//!
//! Runs the document-layout model and keeps the blocks labelled as
//! figures. Whenever the model cannot be used, the contour heuristic
//! takes over and a warning names the reason.

use log::{info, warn};

use crate::config::{ContourThresholds, ExtractionConfig};
use crate::errors::FigureResult;
use crate::region::{RawRegion, FIGURE_LABEL};
use crate::utils::image_utils::SourceImage;

use super::contour_strategy::ContourRegionProvider;
use super::layout_model::{load_layout_model, LayoutModel};
use super::provider_strategy::RegionProvider;

/// Layout-model provider with contour fallback
pub struct LayoutRegionProvider {
    model: Option<Box<dyn LayoutModel>>,
    unavailable_reason: String,
    fallback: ContourRegionProvider,
}

impl LayoutRegionProvider {
    /// Create a provider using the configured layout model, if it loads
    pub fn new(config: &ExtractionConfig) -> Self {
        match load_layout_model(&config.layout) {
            Ok(model) => Self::with_model(model, config.contour),
            Err(reason) => Self::without_model(&reason, config.contour),
        }
    }

    /// Create a provider around an already loaded model
    pub fn with_model(model: Box<dyn LayoutModel>, thresholds: ContourThresholds) -> Self {
        LayoutRegionProvider {
            model: Some(model),
            unavailable_reason: String::new(),
            fallback: ContourRegionProvider::new(thresholds),
        }
    }

    /// Create a provider that always uses the contour heuristic
    ///
    /// # Arguments
    /// * `reason` - Why no model is available, reported when falling back
    /// * `thresholds` - Contour heuristic thresholds
    pub fn without_model(reason: &str, thresholds: ContourThresholds) -> Self {
        LayoutRegionProvider {
            model: None,
            unavailable_reason: reason.to_string(),
            fallback: ContourRegionProvider::new(thresholds),
        }
    }

    /// Whether a layout model is loaded
    pub fn has_model(&self) -> bool {
        self.model.is_some()
    }
}

impl RegionProvider for LayoutRegionProvider {
    fn detect(&mut self, source: &SourceImage) -> FigureResult<Vec<RawRegion>> {
        let Some(model) = self.model.as_mut() else {
            warn!("Layout model not available, using contour fallback: {}", self.unavailable_reason);
            return self.fallback.detect(source);
        };

        match model.detect_blocks(source.image()) {
            Ok(blocks) => {
                let regions: Vec<RawRegion> = blocks
                    .into_iter()
                    .filter(|block| block.label == FIGURE_LABEL)
                    .map(|block| RawRegion::pixel(
                        block.x as i64, block.y as i64, block.width as i64, block.height as i64))
                    .collect();
                info!("Layout model found {} figure block(s)", regions.len());
                Ok(regions)
            },
            Err(e) => {
                warn!("Layout model failed, using contour fallback: {}", e);
                self.fallback.detect(source)
            },
        }
    }

    fn name(&self) -> &'static str {
        "layout"
    }
}
