//! Figure regions
//!
//! This module holds the two region representations used by the
//! pipelines: the raw detections reported by a provider and the
//! padded, clamped pixel rectangles that are actually cropped.

mod raw_region;
mod normalizer;
#[cfg(test)]
mod tests;

pub use raw_region::{RawRegion, RegionBounds, FIGURE_LABEL};
pub use normalizer::{normalize, normalize_all, order_regions, to_pixels, NormalizedRegion, RegionOrder};
