//! Parsing of vision API answers
//!
//! The chat completions envelope carries the model's answer as a string.
//! That string should be a JSON document of the form
//! `{"figures": [{"type", "description", "bbox": {"x", "y", "width", "height"}}]}`
//! with bbox values in percent, but models like to wrap it in markdown
//! code fences, which are removed before parsing.

use lazy_static::lazy_static;
use log::debug;
use regex::Regex;
use serde::Deserialize;

use crate::errors::{FigureError, FigureResult};
use crate::region::RawRegion;

lazy_static! {
    static ref CODE_FENCE: Regex = Regex::new(r"```(?:json)?").expect("valid fence pattern");
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Deserialize)]
struct ChatResponseMessage {
    content: Option<String>,
}

#[derive(Deserialize)]
struct FiguresPayload {
    #[serde(default)]
    figures: Option<Vec<FigureEntry>>,
}

#[derive(Deserialize)]
struct FigureEntry {
    #[serde(rename = "type")]
    kind: Option<String>,
    description: Option<String>,
    #[serde(default)]
    bbox: PercentBox,
}

/// Missing fields default to the whole image
#[derive(Deserialize)]
#[serde(default)]
struct PercentBox {
    x: f64,
    y: f64,
    width: f64,
    height: f64,
}

impl Default for PercentBox {
    fn default() -> Self {
        PercentBox { x: 0.0, y: 0.0, width: 100.0, height: 100.0 }
    }
}

/// Remove markdown code-fence markers and surrounding whitespace
pub fn strip_code_fences(content: &str) -> String {
    CODE_FENCE.replace_all(content, "").trim().to_string()
}

/// Extract the assistant message text from a chat completions response body
pub fn parse_chat_response(body: &str) -> FigureResult<String> {
    let response: ChatResponse = serde_json::from_str(body)
        .map_err(|e| FigureError::MalformedResponse(format!("invalid response envelope: {}", e)))?;

    response.choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .ok_or_else(|| FigureError::MalformedResponse("response contains no message content".to_string()))
}

/// Parse the figure list out of the model's answer
///
/// # Arguments
/// * `content` - The assistant message, possibly wrapped in code fences
///
/// # Returns
/// One percentage-based raw region per reported figure, in reported order
pub fn parse_figures(content: &str) -> FigureResult<Vec<RawRegion>> {
    let cleaned = strip_code_fences(content);
    debug!("Parsing figure list: {}", cleaned);

    let payload: FiguresPayload = serde_json::from_str(&cleaned)
        .map_err(|e| FigureError::MalformedResponse(format!("{} in content: {}", e, cleaned)))?;

    let regions = payload.figures
        .unwrap_or_default()
        .into_iter()
        .map(|figure| {
            RawRegion::percent(
                figure.kind.as_deref().unwrap_or("unknown"),
                figure.description.as_deref(),
                figure.bbox.x,
                figure.bbox.y,
                figure.bbox.width,
                figure.bbox.height,
            )
        })
        .collect();

    Ok(regions)
}
