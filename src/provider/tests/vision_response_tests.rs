//! Tests for vision API answer parsing

use crate::errors::FigureError;
use crate::provider::{parse_chat_response, parse_figures, strip_code_fences};
use crate::region::{RawRegion, RegionBounds};

const PLAIN: &str = r#"{"figures": [
    {"type": "bar_chart", "description": "Quarterly revenue", "bbox": {"x": 10, "y": 20, "width": 30, "height": 40}},
    {"type": "table", "description": "Totals", "bbox": {"x": 55.5, "y": 60, "width": 40, "height": 25.25}}
]}"#;

#[test]
fn test_parse_plain_figures() {
    let regions = parse_figures(PLAIN).unwrap();
    assert_eq!(regions.len(), 2);
    assert_eq!(regions[0], RawRegion::percent("bar_chart", Some("Quarterly revenue"), 10.0, 20.0, 30.0, 40.0));
    assert_eq!(regions[1].bounds, RegionBounds::Percent { x: 55.5, y: 60.0, width: 40.0, height: 25.25 });
}

#[test]
fn test_fenced_content_matches_plain() {
    let fenced = format!("```json\n{}\n```", PLAIN);
    assert_eq!(parse_figures(&fenced).unwrap(), parse_figures(PLAIN).unwrap());

    let bare_fence = format!("```\n{}\n```\n", PLAIN);
    assert_eq!(parse_figures(&bare_fence).unwrap(), parse_figures(PLAIN).unwrap());
}

#[test]
fn test_strip_code_fences() {
    assert_eq!(strip_code_fences("```json\n{\"figures\": []}\n```"), "{\"figures\": []}");
    assert_eq!(strip_code_fences("  {\"a\": 1}  "), "{\"a\": 1}");
}

#[test]
fn test_empty_and_missing_figures() {
    assert!(parse_figures(r#"{"figures": []}"#).unwrap().is_empty());
    assert!(parse_figures(r#"{}"#).unwrap().is_empty());
    assert!(parse_figures(r#"{"figures": null}"#).unwrap().is_empty());
}

#[test]
fn test_missing_fields_use_defaults() {
    let regions = parse_figures(r#"{"figures": [{"bbox": {"x": 5}}, {}]}"#).unwrap();
    assert_eq!(regions.len(), 2);
    assert_eq!(regions[0].label, "unknown");
    assert_eq!(regions[0].description_or_default(), "no description");
    assert_eq!(regions[0].bounds, RegionBounds::Percent { x: 5.0, y: 0.0, width: 100.0, height: 100.0 });
    assert_eq!(regions[1].bounds, RegionBounds::Percent { x: 0.0, y: 0.0, width: 100.0, height: 100.0 });
}

#[test]
fn test_malformed_content() {
    assert!(matches!(parse_figures("I found two charts."), Err(FigureError::MalformedResponse(_))));
    assert!(matches!(parse_figures(r#"[1, 2, 3]"#), Err(FigureError::MalformedResponse(_))));
    assert!(matches!(
        parse_figures(r#"{"figures": [{"bbox": {"x": "left"}}]}"#),
        Err(FigureError::MalformedResponse(_))
    ));
}

#[test]
fn test_parse_chat_response() {
    let body = r#"{"id": "chatcmpl-1", "choices": [{"index": 0, "message": {"role": "assistant", "content": "{\"figures\": []}"}}]}"#;
    assert_eq!(parse_chat_response(body).unwrap(), "{\"figures\": []}");
}

#[test]
fn test_chat_response_without_content() {
    assert!(matches!(parse_chat_response(r#"{"choices": []}"#), Err(FigureError::MalformedResponse(_))));
    assert!(matches!(
        parse_chat_response(r#"{"choices": [{"message": {"content": null}}]}"#),
        Err(FigureError::MalformedResponse(_))
    ));
    assert!(matches!(parse_chat_response("<html>bad gateway</html>"), Err(FigureError::MalformedResponse(_))));
}
