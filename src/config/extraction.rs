//! Settings shared by both extraction pipelines

use std::path::PathBuf;

use crate::region::RegionOrder;

/// Folder crops are written to when none is given
pub const DEFAULT_OUTPUT_FOLDER: &str = "temp_image_storage";

/// Padding applied around boxes reported by the vision API
pub const DEFAULT_REMOTE_PADDING: f64 = 8.0;

/// Padding applied around boxes found by the local pipeline
pub const DEFAULT_LOCAL_PADDING: f64 = 0.0;

/// Acceptance thresholds of the contour heuristic
///
/// Area ratios are relative to the full image area; the aspect ratio is
/// width divided by height. All bounds are exclusive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContourThresholds {
    /// Lower hysteresis threshold of the Canny edge detector
    pub canny_low: f32,
    /// Upper hysteresis threshold of the Canny edge detector
    pub canny_high: f32,
    /// Boxes at or below this share of the image are treated as noise
    pub min_area_ratio: f64,
    /// Boxes at or above this share of the image are treated as the page itself
    pub max_area_ratio: f64,
    /// Narrowest accepted width/height ratio
    pub min_aspect_ratio: f64,
    /// Widest accepted width/height ratio
    pub max_aspect_ratio: f64,
}

impl Default for ContourThresholds {
    fn default() -> Self {
        ContourThresholds {
            canny_low: 50.0,
            canny_high: 150.0,
            min_area_ratio: 0.02,
            max_area_ratio: 0.8,
            min_aspect_ratio: 0.3,
            max_aspect_ratio: 3.0,
        }
    }
}

/// Settings of the learned document-layout model
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutModelConfig {
    /// Path to the exported model; the model is unavailable when unset
    pub model_path: Option<PathBuf>,
    /// Minimum detection score
    pub score_threshold: f32,
    /// Side length of the square model input, in pixels
    pub input_size: u32,
    /// Class names indexed by the model's label ids
    pub label_map: Vec<String>,
}

impl Default for LayoutModelConfig {
    fn default() -> Self {
        LayoutModelConfig {
            model_path: None,
            score_threshold: 0.5,
            input_size: 800,
            label_map: ["Text", "Title", "List", "Table", "Figure"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

impl LayoutModelConfig {
    /// Look up the class name of a label id
    pub fn label_name(&self, label_id: i64) -> Option<&str> {
        usize::try_from(label_id)
            .ok()
            .and_then(|index| self.label_map.get(index))
            .map(String::as_str)
    }
}

/// Configuration of one extraction run
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractionConfig {
    /// Folder the crops are written to
    pub output_folder: PathBuf,
    /// Padding percentage; `None` selects the pipeline's own default
    pub padding_percent: Option<f64>,
    /// Order in which detected regions are numbered and written
    pub order: RegionOrder,
    /// Contour heuristic thresholds
    pub contour: ContourThresholds,
    /// Layout model settings
    pub layout: LayoutModelConfig,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        ExtractionConfig {
            output_folder: PathBuf::from(DEFAULT_OUTPUT_FOLDER),
            padding_percent: None,
            order: RegionOrder::Discovery,
            contour: ContourThresholds::default(),
            layout: LayoutModelConfig::default(),
        }
    }
}

impl ExtractionConfig {
    /// Padding for the remote pipeline
    pub fn remote_padding(&self) -> f64 {
        self.padding_percent.unwrap_or(DEFAULT_REMOTE_PADDING)
    }

    /// Padding for the local pipeline
    pub fn local_padding(&self) -> f64 {
        self.padding_percent.unwrap_or(DEFAULT_LOCAL_PADDING)
    }
}
