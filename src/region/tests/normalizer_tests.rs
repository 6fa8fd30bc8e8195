//! Tests for region normalization

use crate::region::{normalize, normalize_all, order_regions, NormalizedRegion, RawRegion, RegionOrder};

fn chart(x: f64, y: f64, width: f64, height: f64) -> RawRegion {
    RawRegion::percent("chart", Some("test chart"), x, y, width, height)
}

fn assert_inside(region: &NormalizedRegion, width: u32, height: u32) {
    assert!(region.width > 0 && region.height > 0, "empty region {:?}", region);
    assert!(region.end_x() <= width, "{:?} exceeds width {}", region, width);
    assert!(region.end_y() <= height, "{:?} exceeds height {}", region, height);
}

#[test]
fn test_percent_without_padding() {
    let region = normalize(&chart(10.0, 20.0, 30.0, 40.0), 0, 1000, 1000, 0.0).unwrap();
    assert_eq!(region, NormalizedRegion::new(100, 200, 300, 400, 0));
}

#[test]
fn test_percent_with_default_padding() {
    // pad_x = 300 * 8% = 24, pad_y = 400 * 8% = 32
    let region = normalize(&chart(10.0, 20.0, 30.0, 40.0), 0, 1000, 1000, 8.0).unwrap();
    assert_eq!(region, NormalizedRegion::new(76, 168, 348, 464, 0));
}

#[test]
fn test_percent_uses_each_axis() {
    let region = normalize(&chart(50.0, 50.0, 25.0, 25.0), 0, 800, 400, 0.0).unwrap();
    assert_eq!(region, NormalizedRegion::new(400, 200, 200, 100, 0));
}

#[test]
fn test_pixel_region_passes_through() {
    let raw = RawRegion::pixel(15, 25, 60, 40);
    let region = normalize(&raw, 3, 200, 200, 0.0).unwrap();
    assert_eq!(region, NormalizedRegion::new(15, 25, 60, 40, 3));
}

#[test]
fn test_clamp_origin_before_extent() {
    // Padding pushes the origin to negative coordinates; the width must be
    // limited against the clamped origin, not grow past the right edge.
    let raw = RawRegion::pixel(0, 0, 100, 100);
    let region = normalize(&raw, 0, 110, 105, 20.0).unwrap();
    assert_eq!(region, NormalizedRegion::new(0, 0, 110, 105, 0));
}

#[test]
fn test_clamp_to_bottom_right() {
    let region = normalize(&chart(90.0, 90.0, 30.0, 30.0), 0, 1000, 500, 0.0).unwrap();
    assert_eq!(region, NormalizedRegion::new(900, 450, 100, 50, 0));
}

#[test]
fn test_region_outside_image_is_dropped() {
    assert!(normalize(&chart(120.0, 10.0, 10.0, 10.0), 0, 1000, 1000, 8.0).is_none());
    assert!(normalize(&RawRegion::pixel(10, 500, 20, 20), 0, 100, 100, 0.0).is_none());
}

#[test]
fn test_zero_size_region_is_dropped() {
    assert!(normalize(&chart(10.0, 10.0, 0.0, 30.0), 0, 1000, 1000, 8.0).is_none());
    assert!(normalize(&RawRegion::pixel(10, 10, 40, 0), 0, 100, 100, 8.0).is_none());
}

#[test]
fn test_renormalizing_is_identity_without_padding() {
    let raws = vec![
        chart(10.0, 20.0, 30.0, 40.0),
        chart(-5.0, -5.0, 50.0, 50.0),
        chart(70.0, 80.0, 60.0, 60.0),
        RawRegion::pixel(3, 4, 17, 9),
    ];

    for (index, raw) in raws.iter().enumerate() {
        let first = normalize(raw, index, 640, 480, 8.0).unwrap();
        let second = normalize(&first.to_raw(), index, 640, 480, 0.0).unwrap();
        assert_eq!(first, second);
    }
}

#[test]
fn test_bounds_hold_for_many_inputs() {
    let (width, height) = (333, 517);
    let mut raws = Vec::new();
    for x in (-20..=120).step_by(17) {
        for w in (0..=130).step_by(13) {
            raws.push(chart(x as f64, (x / 2) as f64, w as f64, (130 - w) as f64));
        }
    }

    // Extreme values the response parser still accepts
    for extreme in [1e300, -1e300, 1e18, -1e18, 0.001, -0.001, -50.0] {
        raws.push(chart(extreme, 10.0, 50.0, 50.0));
        raws.push(chart(10.0, extreme, 50.0, 50.0));
        raws.push(chart(10.0, 10.0, extreme, 50.0));
        raws.push(chart(10.0, 10.0, 50.0, extreme));
        raws.push(chart(extreme, extreme, extreme, extreme));
    }
    for (a, b) in [(i64::MIN, i64::MAX), (i64::MAX, i64::MIN), (i64::MIN, i64::MIN), (i64::MAX, i64::MAX)] {
        raws.push(RawRegion::pixel(a, b, b, a));
        raws.push(RawRegion::pixel(a, a, b, b));
        raws.push(RawRegion::pixel(0, 0, a, b));
    }

    for padding in [0.0, 8.0, 25.0, 100.0] {
        let regions = normalize_all(&raws, width, height, padding);
        assert!(regions.len() <= raws.len());
        for region in &regions {
            assert_inside(region, width, height);
        }
    }
}

#[test]
fn test_huge_extent_is_clamped_not_dropped() {
    // 10% of 1000 is 100, the 50% height gets a 40px margin on each side
    let region = normalize(&chart(10.0, 10.0, 1e300, 50.0), 0, 1000, 1000, 8.0).unwrap();
    assert_eq!(region, NormalizedRegion::new(0, 60, 1000, 580, 0));

    let region = normalize(&chart(10.0, 10.0, 50.0, 1e300), 0, 1000, 1000, 8.0).unwrap();
    assert_eq!(region, NormalizedRegion::new(60, 0, 580, 1000, 0));
}

#[test]
fn test_huge_negative_origin_is_clamped() {
    let region = normalize(&chart(-1e300, 10.0, 50.0, 50.0), 0, 1000, 1000, 8.0).unwrap();
    assert_eq!(region, NormalizedRegion::new(0, 60, 580, 580, 0));

    let raw = RawRegion::pixel(i64::MIN, i64::MIN, i64::MAX, i64::MAX);
    let region = normalize(&raw, 0, 640, 480, 8.0).unwrap();
    assert_eq!(region, NormalizedRegion::new(0, 0, 640, 480, 0));
}

#[test]
fn test_huge_origin_is_dropped() {
    assert!(normalize(&chart(1e300, 10.0, 50.0, 50.0), 0, 1000, 1000, 8.0).is_none());
    assert!(normalize(&RawRegion::pixel(i64::MAX, 0, i64::MAX, 10), 0, 100, 100, 8.0).is_none());
}

#[test]
fn test_dropped_regions_keep_source_indices() {
    let raws = vec![
        chart(10.0, 10.0, 20.0, 20.0),
        chart(150.0, 10.0, 20.0, 20.0),
        chart(50.0, 50.0, 20.0, 20.0),
    ];

    let regions = normalize_all(&raws, 100, 100, 0.0);
    let indices: Vec<usize> = regions.iter().map(|r| r.source_index).collect();
    assert_eq!(indices, vec![0, 2]);
}

#[test]
fn test_position_order_sorts_top_left_first() {
    let raws = vec![
        RawRegion::pixel(50, 60, 10, 10),
        RawRegion::pixel(70, 5, 10, 10),
        RawRegion::pixel(5, 5, 10, 10),
    ];

    let discovery = order_regions(raws.clone(), 100, 100, RegionOrder::Discovery);
    assert_eq!(discovery, raws);

    let sorted = order_regions(raws.clone(), 100, 100, RegionOrder::Position);
    assert_eq!(sorted, vec![raws[2].clone(), raws[1].clone(), raws[0].clone()]);
}

#[test]
fn test_region_order_names() {
    assert_eq!(RegionOrder::from_name("Position"), Some(RegionOrder::Position));
    assert_eq!(RegionOrder::from_name("discovery"), Some(RegionOrder::Discovery));
    assert_eq!(RegionOrder::from_name("size"), None);
}
