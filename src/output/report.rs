//! JSON summary printed at the end of every run

use std::path::PathBuf;
use serde::Serialize;

use crate::errors::FigureError;

/// Outcome of one invocation
///
/// Serializes to `{"success": true, "extracted_count": N, "extracted_images": [...]}`
/// or `{"success": false, "error": "..."}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExtractionReport {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extracted_count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extracted_images: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ExtractionReport {
    /// Report for a run that wrote `paths`
    pub fn success(paths: &[PathBuf]) -> Self {
        let images: Vec<String> = paths.iter().map(|p| p.display().to_string()).collect();
        ExtractionReport {
            success: true,
            extracted_count: Some(images.len()),
            extracted_images: Some(images),
            error: None,
        }
    }

    /// Report for a failed run
    pub fn failure(error: &FigureError) -> Self {
        ExtractionReport {
            success: false,
            extracted_count: None,
            extracted_images: None,
            error: Some(error.to_string()),
        }
    }

    /// Process exit status matching this report
    pub fn exit_code(&self) -> i32 {
        if self.success { 0 } else { 1 }
    }

    /// Serialize to a single-line JSON object
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|e| {
            format!("{{\"success\": false, \"error\": \"failed to serialize report: {}\"}}", e)
        })
    }
}
