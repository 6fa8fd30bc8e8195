//! TOML configuration file support
//!
//! A configuration file may contain any of the following tables; every
//! key is optional and unknown keys are ignored:
//!
//! ```toml
//! [extraction]
//! output_folder = "crops"
//! padding_percent = 8
//! order = "position"
//!
//! [contour]
//! canny_low = 50
//! canny_high = 150
//! min_area_ratio = 0.02
//! max_area_ratio = 0.8
//! min_aspect_ratio = 0.3
//! max_aspect_ratio = 3.0
//!
//! [layout]
//! model_path = "models/publaynet.onnx"
//! score_threshold = 0.5
//! input_size = 800
//! labels = ["Text", "Title", "List", "Table", "Figure"]
//!
//! [vision]
//! endpoint = "https://api.openai.com/v1/chat/completions"
//! model = "gpt-4o"
//! max_tokens = 1000
//! timeout_secs = 120
//! ```
//!
//! The API credential is never read from this file.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use log::{debug, info};

use crate::errors::{FigureError, FigureResult};
use crate::region::RegionOrder;
use super::extraction::ExtractionConfig;
use super::vision::VisionApiConfig;

/// Parsed configuration file
#[derive(Debug, Clone)]
pub struct ConfigFile {
    value: toml::Value,
}

impl ConfigFile {
    /// Parse a configuration file from a TOML string
    pub fn from_str(content: &str) -> FigureResult<Self> {
        let value: toml::Value = content.parse()
            .map_err(|e| FigureError::Configuration(format!("Failed to parse TOML: {}", e)))?;
        Ok(ConfigFile { value })
    }

    /// Load a configuration file from disk
    pub fn from_file(path: &Path) -> FigureResult<Self> {
        info!("Loading configuration from {}", path.display());
        let content = fs::read_to_string(path)
            .map_err(|e| FigureError::Configuration(
                format!("Cannot read config file {}: {}", path.display(), e)))?;
        Self::from_str(&content)
    }

    /// Overwrite configuration values with the ones present in this file
    ///
    /// # Arguments
    /// * `extraction` - Extraction settings to update
    /// * `vision` - Vision API settings to update
    pub fn apply(&self, extraction: &mut ExtractionConfig, vision: &mut VisionApiConfig) -> FigureResult<()> {
        if let Some(table) = self.table("extraction") {
            if let Some(folder) = get_str(table, "extraction", "output_folder")? {
                extraction.output_folder = PathBuf::from(folder);
            }
            if let Some(padding) = get_float(table, "extraction", "padding_percent")? {
                extraction.padding_percent = Some(padding);
            }
            if let Some(order) = get_str(table, "extraction", "order")? {
                extraction.order = RegionOrder::from_name(order)
                    .ok_or_else(|| FigureError::Configuration(
                        format!("extraction.order must be 'discovery' or 'position', got '{}'", order)))?;
            }
        }

        if let Some(table) = self.table("contour") {
            let contour = &mut extraction.contour;
            if let Some(v) = get_float(table, "contour", "canny_low")? { contour.canny_low = v as f32; }
            if let Some(v) = get_float(table, "contour", "canny_high")? { contour.canny_high = v as f32; }
            if let Some(v) = get_float(table, "contour", "min_area_ratio")? { contour.min_area_ratio = v; }
            if let Some(v) = get_float(table, "contour", "max_area_ratio")? { contour.max_area_ratio = v; }
            if let Some(v) = get_float(table, "contour", "min_aspect_ratio")? { contour.min_aspect_ratio = v; }
            if let Some(v) = get_float(table, "contour", "max_aspect_ratio")? { contour.max_aspect_ratio = v; }
        }

        if let Some(table) = self.table("layout") {
            let layout = &mut extraction.layout;
            if let Some(path) = get_str(table, "layout", "model_path")? {
                layout.model_path = Some(PathBuf::from(path));
            }
            if let Some(v) = get_float(table, "layout", "score_threshold")? {
                layout.score_threshold = v as f32;
            }
            if let Some(v) = get_uint(table, "layout", "input_size")? {
                layout.input_size = v as u32;
            }
            if let Some(labels) = table.get("labels") {
                layout.label_map = labels.as_array()
                    .map(|items| items.iter().filter_map(|l| l.as_str().map(str::to_string)).collect())
                    .ok_or_else(|| type_error("layout", "labels", "an array of strings"))?;
            }
        }

        if let Some(table) = self.table("vision") {
            if let Some(endpoint) = get_str(table, "vision", "endpoint")? {
                vision.endpoint = endpoint.to_string();
            }
            if let Some(model) = get_str(table, "vision", "model")? {
                vision.model = model.to_string();
            }
            if let Some(v) = get_uint(table, "vision", "max_tokens")? {
                vision.max_tokens = v as u32;
            }
            if let Some(v) = get_uint(table, "vision", "timeout_secs")? {
                vision.timeout = Some(Duration::from_secs(v));
            }
        }

        debug!("Configuration file applied");
        Ok(())
    }

    fn table(&self, name: &str) -> Option<&toml::value::Table> {
        self.value.get(name).and_then(|v| v.as_table())
    }
}

fn type_error(table: &str, key: &str, expected: &str) -> FigureError {
    FigureError::Configuration(format!("{}.{} must be {}", table, key, expected))
}

fn get_str<'a>(table: &'a toml::value::Table, name: &str, key: &str) -> FigureResult<Option<&'a str>> {
    match table.get(key) {
        None => Ok(None),
        Some(v) => v.as_str().map(Some).ok_or_else(|| type_error(name, key, "a string")),
    }
}

fn get_float(table: &toml::value::Table, name: &str, key: &str) -> FigureResult<Option<f64>> {
    match table.get(key) {
        None => Ok(None),
        Some(toml::Value::Float(f)) => Ok(Some(*f)),
        Some(toml::Value::Integer(i)) => Ok(Some(*i as f64)),
        Some(_) => Err(type_error(name, key, "a number")),
    }
}

fn get_uint(table: &toml::value::Table, name: &str, key: &str) -> FigureResult<Option<u64>> {
    match table.get(key) {
        None => Ok(None),
        Some(toml::Value::Integer(i)) if *i >= 0 => Ok(Some(*i as u64)),
        Some(_) => Err(type_error(name, key, "a non-negative integer")),
    }
}
