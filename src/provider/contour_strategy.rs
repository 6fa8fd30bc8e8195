//! Geometric contour heuristic
//!
//! A dependency-light detector used when no learned layout model is
//! available: Canny edges, outermost contours, and bounding boxes that
//! are filtered by area and aspect ratio. The area bounds discard specks
//! and boxes covering (nearly) the whole page; the aspect bounds discard
//! text-line slivers.

use image::GrayImage;
use imageproc::contours::{find_contours, BorderType};
use imageproc::edges::canny;
use log::{debug, info};

use crate::config::ContourThresholds;
use crate::errors::FigureResult;
use crate::region::RawRegion;
use crate::utils::image_utils::SourceImage;

use super::provider_strategy::RegionProvider;

/// Region provider based on edge contours
pub struct ContourRegionProvider {
    thresholds: ContourThresholds,
}

impl ContourRegionProvider {
    pub fn new(thresholds: ContourThresholds) -> Self {
        ContourRegionProvider { thresholds }
    }
}

impl RegionProvider for ContourRegionProvider {
    fn detect(&mut self, source: &SourceImage) -> FigureResult<Vec<RawRegion>> {
        let gray = source.image().to_luma8();
        let boxes = find_figure_boxes(&gray, &self.thresholds);

        info!("Contour heuristic accepted {} region(s)", boxes.len());

        Ok(boxes
            .into_iter()
            .map(|(x, y, w, h)| RawRegion::pixel(x as i64, y as i64, w as i64, h as i64))
            .collect())
    }

    fn name(&self) -> &'static str {
        "contour"
    }
}

/// Whether a bounding box looks like a figure
///
/// # Arguments
/// * `width` - Box width in pixels
/// * `height` - Box height in pixels
/// * `image_area` - Area of the whole image in pixels
/// * `thresholds` - Exclusive area-ratio and aspect-ratio bounds
pub fn is_figure_candidate(width: u32, height: u32, image_area: f64, thresholds: &ContourThresholds) -> bool {
    if width == 0 || height == 0 {
        return false;
    }

    let area = width as f64 * height as f64;
    let min_area = image_area * thresholds.min_area_ratio;
    let max_area = image_area * thresholds.max_area_ratio;
    if !(min_area < area && area < max_area) {
        return false;
    }

    let aspect_ratio = width as f64 / height as f64;
    thresholds.min_aspect_ratio < aspect_ratio && aspect_ratio < thresholds.max_aspect_ratio
}

/// Find figure-like bounding boxes in a grayscale image
///
/// # Returns
/// `(x, y, width, height)` boxes in contour discovery order (raster scan
/// order of each contour's starting pixel)
pub fn find_figure_boxes(gray: &GrayImage, thresholds: &ContourThresholds) -> Vec<(u32, u32, u32, u32)> {
    let edges = canny(gray, thresholds.canny_low, thresholds.canny_high);
    let contours = find_contours::<u32>(&edges);
    let image_area = gray.width() as f64 * gray.height() as f64;

    let mut boxes = Vec::new();
    for contour in contours.iter()
        .filter(|c| matches!(c.border_type, BorderType::Outer) && c.parent.is_none())
    {
        let Some(first) = contour.points.first() else {
            continue;
        };

        let (mut min_x, mut min_y, mut max_x, mut max_y) = (first.x, first.y, first.x, first.y);
        for point in &contour.points {
            min_x = min_x.min(point.x);
            min_y = min_y.min(point.y);
            max_x = max_x.max(point.x);
            max_y = max_y.max(point.y);
        }

        let width = max_x - min_x + 1;
        let height = max_y - min_y + 1;

        if is_figure_candidate(width, height, image_area, thresholds) {
            boxes.push((min_x, min_y, width, height));
        } else {
            debug!("Rejected contour box x={}, y={}, w={}, h={}", min_x, min_y, width, height);
        }
    }

    boxes
}
