//! Raw detections as reported by a region provider
//!
//! Remote providers report boxes as percentages of the image size, local
//! providers report them in pixels. Both are carried by the same
//! `RawRegion` type so that normalization can treat them uniformly.

/// Label attached to every region produced by the local pipeline
pub const FIGURE_LABEL: &str = "Figure";

/// Unit-tagged bounding box of a raw detection
///
/// Coordinates describe the top-left corner and the extent of the box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RegionBounds {
    /// Box expressed as percentages (0-100) of the image width and height
    Percent { x: f64, y: f64, width: f64, height: f64 },
    /// Box expressed in pixels
    Pixel { x: i64, y: i64, width: i64, height: i64 },
}

/// A provider's raw detection of a figure-like area
#[derive(Debug, Clone, PartialEq)]
pub struct RawRegion {
    /// Kind of figure ("chart", "table", "Figure", ...)
    pub label: String,
    /// Free-form description, when the provider gives one
    pub description: Option<String>,
    /// Location of the region
    pub bounds: RegionBounds,
}

impl RawRegion {
    /// Create a region whose bounds are percentages of the image size
    pub fn percent(label: &str, description: Option<&str>,
                   x: f64, y: f64, width: f64, height: f64) -> Self {
        RawRegion {
            label: label.to_string(),
            description: description.map(str::to_string),
            bounds: RegionBounds::Percent { x, y, width, height },
        }
    }

    /// Create a pixel-space region labelled as a figure
    pub fn pixel(x: i64, y: i64, width: i64, height: i64) -> Self {
        RawRegion {
            label: FIGURE_LABEL.to_string(),
            description: None,
            bounds: RegionBounds::Pixel { x, y, width, height },
        }
    }

    /// Description used in diagnostics
    pub fn description_or_default(&self) -> &str {
        self.description.as_deref().unwrap_or("no description")
    }
}
