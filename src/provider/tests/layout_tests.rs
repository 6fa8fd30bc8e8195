//! Tests for the layout provider and its fallback

use image::DynamicImage;

use crate::config::{ContourThresholds, ExtractionConfig};
use crate::errors::{FigureError, FigureResult};
use crate::provider::{LayoutBlock, LayoutModel, LayoutRegionProvider, RegionProvider};
use crate::region::{RawRegion, RegionBounds};
use super::test_utils::{page_with_rects, source_from};

struct FixedModel {
    blocks: Vec<LayoutBlock>,
}

impl LayoutModel for FixedModel {
    fn detect_blocks(&mut self, _image: &DynamicImage) -> FigureResult<Vec<LayoutBlock>> {
        Ok(self.blocks.clone())
    }
}

struct BrokenModel;

impl LayoutModel for BrokenModel {
    fn detect_blocks(&mut self, _image: &DynamicImage) -> FigureResult<Vec<LayoutBlock>> {
        Err(FigureError::Model("incompatible model interface".to_string()))
    }
}

fn block(label: &str, x: u32, y: u32, width: u32, height: u32) -> LayoutBlock {
    LayoutBlock { label: label.to_string(), score: 0.9, x, y, width, height }
}

#[test]
fn test_only_figure_blocks_are_kept() {
    let model = FixedModel {
        blocks: vec![
            block("Text", 0, 0, 100, 20),
            block("Figure", 10, 30, 50, 40),
            block("Table", 0, 80, 100, 20),
            block("Figure", 60, 30, 30, 40),
        ],
    };
    let mut provider = LayoutRegionProvider::with_model(Box::new(model), ContourThresholds::default());
    assert!(provider.has_model());

    let regions = provider.detect(&source_from(page_with_rects(100, 100, &[]))).unwrap();
    assert_eq!(regions, vec![RawRegion::pixel(10, 30, 50, 40), RawRegion::pixel(60, 30, 30, 40)]);
}

#[test]
fn test_model_failure_falls_back_to_contours() {
    let mut provider = LayoutRegionProvider::with_model(Box::new(BrokenModel), ContourThresholds::default());
    let source = source_from(page_with_rects(400, 300, &[(100, 80, 135, 90)]));

    let regions = provider.detect(&source).unwrap();
    assert_eq!(regions.len(), 1);
    assert!(matches!(regions[0].bounds, RegionBounds::Pixel { .. }));
}

#[test]
fn test_missing_model_falls_back_to_contours() {
    let mut provider = LayoutRegionProvider::without_model("no model", ContourThresholds::default());
    assert!(!provider.has_model());

    let source = source_from(page_with_rects(400, 300, &[(100, 80, 135, 90)]));
    assert_eq!(provider.detect(&source).unwrap().len(), 1);
}

#[test]
fn test_default_config_has_no_model() {
    // No model path is configured by default, so the heuristic is used
    let provider = LayoutRegionProvider::new(&ExtractionConfig::default());
    assert!(!provider.has_model());
}
