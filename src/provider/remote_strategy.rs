//! Vision API region provider
//!
//! Sends the page to a vision-capable chat completions endpoint and asks
//! for the location of every chart, graph, diagram, table or figure as
//! percentages of the image size.

use log::{debug, error, info};
use reqwest::blocking::Client;
use serde::Serialize;

use crate::config::VisionApiConfig;
use crate::errors::{FigureError, FigureResult};
use crate::region::RawRegion;
use crate::utils::image_utils::SourceImage;
use crate::utils::progress::ProgressTracker;

use super::provider_strategy::RegionProvider;
use super::vision_response::{parse_chat_response, parse_figures};

/// Instruction sent alongside the image
pub const DETECTION_PROMPT: &str = r#"Analyze this image and identify any charts, graphs, diagrams, tables, or figures.
For each visual element found, provide the location as percentages of the image dimensions.

IMPORTANT: Make the bounding box GENEROUS - include some margin around each figure to avoid cutting off any content.

Return ONLY valid JSON in this exact format:
{
  "figures": [
    {
      "type": "chart_type",
      "description": "brief description",
      "bbox": {
        "x": 10,
        "y": 20,
        "width": 30,
        "height": 40
      }
    }
  ]
}

Where:
- x: left edge position (0-100% of image width)
- y: top edge position (0-100% of image height)
- width: width of the region (0-100% of image width)
- height: height of the region (0-100% of image height)

Be generous with the bounding boxes to capture the complete figure.
If no figures are found, return: {"figures": []}"#;

#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    max_tokens: u32,
}

#[derive(Serialize)]
struct ChatMessage {
    role: String,
    content: serde_json::Value,
}

/// Region provider backed by a remote vision model
pub struct VisionApiProvider {
    client: Client,
    config: VisionApiConfig,
    api_key: String,
}

impl VisionApiProvider {
    /// Create a new provider
    ///
    /// # Arguments
    /// * `config` - Endpoint, model and credential settings
    ///
    /// # Returns
    /// The provider, or `Configuration` when no credential is set
    pub fn new(config: VisionApiConfig) -> FigureResult<Self> {
        let api_key = config.require_api_key()?.to_string();

        let client = Client::builder()
            .timeout(config.timeout)
            .build()?;

        info!("Vision API configured: endpoint={}, model={}", config.endpoint, config.model);

        Ok(VisionApiProvider { client, config, api_key })
    }

    fn build_request(&self, data_uri: &str) -> ChatRequest {
        ChatRequest {
            model: self.config.model.clone(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: serde_json::json!([
                    {"type": "text", "text": DETECTION_PROMPT},
                    {"type": "image_url", "image_url": {"url": data_uri}}
                ]),
            }],
            max_tokens: self.config.max_tokens,
        }
    }
}

impl RegionProvider for VisionApiProvider {
    fn detect(&mut self, source: &SourceImage) -> FigureResult<Vec<RawRegion>> {
        info!("Analyzing image {} with {}...", source.path().display(), self.config.model);
        let spinner = ProgressTracker::spinner("Analyzing image...");

        let request = self.build_request(&source.to_data_uri());
        let result = self.client
            .post(&self.config.endpoint)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send();
        spinner.finish();

        let response = result?;
        let status = response.status();
        let body = response.text()?;

        if !status.is_success() {
            error!("Vision API returned {}", status);
            return Err(FigureError::RemoteService(body));
        }

        debug!("Vision API answered {} bytes", body.len());
        let content = parse_chat_response(&body)?;
        let regions = parse_figures(&content)?;

        info!("Vision API reported {} figure(s)", regions.len());
        Ok(regions)
    }

    fn name(&self) -> &'static str {
        "vision-api"
    }
}
