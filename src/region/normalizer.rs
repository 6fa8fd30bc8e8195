//! Conversion of raw detections into croppable pixel rectangles
//!
//! Normalization happens in three steps: unit conversion (percentages
//! become pixels), symmetric padding, and clamping to the image bounds.
//! Clamping moves the origin first and only then limits the extent
//! against the clamped origin, so a box hanging over the top-left edge
//! never grows past the opposite edge.

use log::debug;

use super::raw_region::{RawRegion, RegionBounds};

/// Pixel rectangle ready for cropping
///
/// Represents a rectangular area defined by its top-left corner coordinates
/// and dimensions. Instances produced by [`normalize`] always lie fully
/// inside the image and have a non-zero width and height.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NormalizedRegion {
    /// X-coordinate of the top-left corner (pixels from left)
    pub x: u32,

    /// Y-coordinate of the top-left corner (pixels from top)
    pub y: u32,

    /// Width of the region in pixels
    pub width: u32,

    /// Height of the region in pixels
    pub height: u32,

    /// Position of the originating raw region in the provider's sequence
    pub source_index: usize,
}

impl NormalizedRegion {
    /// Create a new region
    ///
    /// # Arguments
    /// * `x` - X-coordinate of the top-left corner
    /// * `y` - Y-coordinate of the top-left corner
    /// * `width` - Width of the region in pixels
    /// * `height` - Height of the region in pixels
    /// * `source_index` - Index of the raw region this one was derived from
    pub fn new(x: u32, y: u32, width: u32, height: u32, source_index: usize) -> Self {
        NormalizedRegion { x, y, width, height, source_index }
    }

    /// Get the rightmost X coordinate (exclusive)
    pub fn end_x(&self) -> u32 {
        self.x + self.width
    }

    /// Get the bottommost Y coordinate (exclusive)
    pub fn end_y(&self) -> u32 {
        self.y + self.height
    }

    /// Express this region as a pixel-space raw region
    pub fn to_raw(&self) -> RawRegion {
        RawRegion::pixel(self.x as i64, self.y as i64, self.width as i64, self.height as i64)
    }
}

/// Order in which normalized regions are emitted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegionOrder {
    /// Keep the order in which the provider reported the regions
    #[default]
    Discovery,
    /// Sort by top edge, then left edge
    Position,
}

impl RegionOrder {
    /// Parse an order name ("discovery" or "position")
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "discovery" => Some(RegionOrder::Discovery),
            "position" => Some(RegionOrder::Position),
            _ => None,
        }
    }
}

/// Convert raw bounds into unpadded pixel coordinates
///
/// Percentages too large for `i64` saturate at its limits.
///
/// # Returns
/// `(x, y, width, height)` in pixels, possibly outside the image
pub fn to_pixels(region: &RawRegion, image_width: u32, image_height: u32) -> (i64, i64, i64, i64) {
    match region.bounds {
        RegionBounds::Percent { x, y, width, height } => {
            let img_w = image_width as f64;
            let img_h = image_height as f64;
            (
                (x * img_w / 100.0).round() as i64,
                (y * img_h / 100.0).round() as i64,
                (width * img_w / 100.0).round() as i64,
                (height * img_h / 100.0).round() as i64,
            )
        },
        RegionBounds::Pixel { x, y, width, height } => (x, y, width, height),
    }
}

/// Normalize a single raw region
///
/// # Arguments
/// * `region` - The raw detection
/// * `source_index` - Position of the detection in the provider's sequence
/// * `image_width` - Width of the source image in pixels
/// * `image_height` - Height of the source image in pixels
/// * `padding_percent` - Margin added on each side, as a percentage of the box size
///
/// # Returns
/// The clamped rectangle, or `None` when nothing of it remains inside the image
pub fn normalize(region: &RawRegion, source_index: usize, image_width: u32,
                 image_height: u32, padding_percent: f64) -> Option<NormalizedRegion> {
    let (mut x, mut y, mut w, mut h) = to_pixels(region, image_width, image_height);

    let pad_x = (w as f64 * padding_percent / 100.0).round() as i64;
    let pad_y = (h as f64 * padding_percent / 100.0).round() as i64;

    // Provider values are unbounded; saturate instead of overflowing
    x = x.saturating_sub(pad_x);
    y = y.saturating_sub(pad_y);
    w = w.saturating_add(pad_x.saturating_mul(2));
    h = h.saturating_add(pad_y.saturating_mul(2));

    x = x.max(0);
    y = y.max(0);
    w = w.min(image_width as i64 - x);
    h = h.min(image_height as i64 - y);

    if w <= 0 || h <= 0 {
        debug!("Dropping region {} ({}): empty after clamping (w={}, h={})",
               source_index, region.label, w, h);
        return None;
    }

    Some(NormalizedRegion::new(x as u32, y as u32, w as u32, h as u32, source_index))
}

/// Re-sequence provider output according to the requested order
///
/// `Discovery` keeps the provider's order; `Position` sorts by the
/// top-left corner of the unpadded box (top edge first). The sort is
/// stable, so boxes sharing a corner keep their relative order.
pub fn order_regions(regions: Vec<RawRegion>, image_width: u32, image_height: u32,
                     order: RegionOrder) -> Vec<RawRegion> {
    let mut regions = regions;
    if order == RegionOrder::Position {
        regions.sort_by_key(|region| {
            let (x, y, _, _) = to_pixels(region, image_width, image_height);
            (y, x)
        });
    }
    regions
}

/// Normalize every region reported by a provider
///
/// Regions that end up empty after clamping are dropped; the survivors keep
/// the index they had in the provider sequence.
pub fn normalize_all(regions: &[RawRegion], image_width: u32, image_height: u32,
                     padding_percent: f64) -> Vec<NormalizedRegion> {
    regions
        .iter()
        .enumerate()
        .filter_map(|(index, region)| {
            normalize(region, index, image_width, image_height, padding_percent)
        })
        .collect()
}
