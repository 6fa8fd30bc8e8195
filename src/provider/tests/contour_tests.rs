//! Tests for the contour heuristic

use crate::config::ContourThresholds;
use crate::provider::{find_figure_boxes, is_figure_candidate, ContourRegionProvider, RegionProvider};
use crate::region::RegionBounds;
use super::test_utils::{page_with_rects, source_from};

fn close(actual: u32, expected: u32) -> bool {
    actual.abs_diff(expected) <= 3
}

#[test]
fn test_candidate_area_bounds() {
    let thresholds = ContourThresholds::default();
    let image_area = 100_000.0;

    // 2% and 80% are exclusive bounds
    assert!(!is_figure_candidate(40, 50, image_area, &thresholds));
    assert!(is_figure_candidate(41, 50, image_area, &thresholds));
    assert!(!is_figure_candidate(400, 200, image_area, &thresholds));
    assert!(is_figure_candidate(399, 200, image_area, &thresholds));
}

#[test]
fn test_candidate_aspect_bounds() {
    let thresholds = ContourThresholds::default();

    // A 1x50 sliver passes the area bounds here but not the aspect bounds
    assert!(!is_figure_candidate(1, 50, 1_000.0, &thresholds));
    assert!(!is_figure_candidate(50, 1, 1_000.0, &thresholds));
    assert!(!is_figure_candidate(300, 100, 1_000_000.0, &thresholds));
    assert!(is_figure_candidate(299, 100, 1_000_000.0, &thresholds));
    assert!(!is_figure_candidate(300, 1000, 1_000_000.0, &thresholds));
    assert!(is_figure_candidate(310, 1000, 1_000_000.0, &thresholds));
    assert!(!is_figure_candidate(0, 100, 1_000_000.0, &thresholds));
}

#[test]
fn test_single_figure_is_found() {
    // 135x90 covers about 10% of the 400x300 page, aspect ratio 1.5
    let page = page_with_rects(400, 300, &[(100, 80, 135, 90)]);
    let boxes = find_figure_boxes(&page, &ContourThresholds::default());

    assert_eq!(boxes.len(), 1, "boxes: {:?}", boxes);
    let (x, y, w, h) = boxes[0];
    assert!(close(x, 100) && close(y, 80), "origin {:?}", boxes[0]);
    assert!(close(w, 135) && close(h, 90), "size {:?}", boxes[0]);
}

#[test]
fn test_near_full_page_is_rejected() {
    // 390x292 covers about 95% of the page
    let page = page_with_rects(400, 300, &[(5, 4, 390, 292)]);
    assert!(find_figure_boxes(&page, &ContourThresholds::default()).is_empty());
}

#[test]
fn test_sliver_is_rejected() {
    let page = page_with_rects(400, 300, &[(200, 100, 1, 50)]);
    assert!(find_figure_boxes(&page, &ContourThresholds::default()).is_empty());
}

#[test]
fn test_blank_page_has_no_figures() {
    let page = page_with_rects(200, 200, &[]);
    assert!(find_figure_boxes(&page, &ContourThresholds::default()).is_empty());
}

#[test]
fn test_discovery_order_follows_raster_scan() {
    let page = page_with_rects(400, 300, &[(30, 160, 100, 80), (220, 30, 100, 70)]);
    let boxes = find_figure_boxes(&page, &ContourThresholds::default());

    assert_eq!(boxes.len(), 2, "boxes: {:?}", boxes);
    assert!(boxes[0].1 < boxes[1].1, "boxes: {:?}", boxes);
    assert!(close(boxes[0].0, 220));
    assert!(close(boxes[1].0, 30));
}

#[test]
fn test_thresholds_are_tunable() {
    let page = page_with_rects(400, 300, &[(100, 80, 135, 90)]);
    let strict = ContourThresholds { min_area_ratio: 0.2, ..ContourThresholds::default() };
    assert!(find_figure_boxes(&page, &strict).is_empty());
}

#[test]
fn test_provider_reports_pixel_figures() {
    let mut provider = ContourRegionProvider::new(ContourThresholds::default());
    let source = source_from(page_with_rects(400, 300, &[(100, 80, 135, 90)]));

    let regions = provider.detect(&source).unwrap();
    assert_eq!(regions.len(), 1);
    assert_eq!(regions[0].label, "Figure");
    assert!(matches!(regions[0].bounds, RegionBounds::Pixel { .. }));
}
