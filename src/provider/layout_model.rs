//! Learned document-layout models
//!
//! A layout model splits a page into labelled blocks (text, title, list,
//! table, figure). The ONNX Runtime backend is only compiled with the
//! `layout-model` feature; without it, or without a configured model
//! file, [`load_layout_model`] reports why no model is available so the
//! caller can fall back to the contour heuristic.

use image::DynamicImage;

use crate::config::LayoutModelConfig;
use crate::errors::FigureResult;

/// A labelled block found by a layout model, in source pixel coordinates
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutBlock {
    pub label: String,
    pub score: f32,
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// A document-layout segmentation model
pub trait LayoutModel {
    /// Segment a page into labelled blocks
    ///
    /// Blocks scoring below the model's threshold are not returned.
    fn detect_blocks(&mut self, image: &DynamicImage) -> FigureResult<Vec<LayoutBlock>>;
}

/// Load the configured layout model
///
/// # Returns
/// The model, or a human readable reason why none is available
pub fn load_layout_model(config: &LayoutModelConfig) -> Result<Box<dyn LayoutModel>, String> {
    #[cfg(feature = "layout-model")]
    {
        let Some(path) = config.model_path.as_deref() else {
            return Err("no layout model path configured".to_string());
        };
        onnx::OnnxLayoutModel::load(path, config.clone())
            .map(|model| Box::new(model) as Box<dyn LayoutModel>)
            .map_err(|e| e.to_string())
    }

    #[cfg(not(feature = "layout-model"))]
    {
        let _ = config;
        Err("built without layout-model support".to_string())
    }
}

#[cfg(feature = "layout-model")]
mod onnx {
    use std::path::Path;
    use image::imageops::FilterType;
    use image::{DynamicImage, GenericImageView};
    use log::{debug, info};
    use ndarray::Array4;
    use ort::session::Session;
    use ort::value::Value;

    use crate::config::LayoutModelConfig;
    use crate::errors::{FigureError, FigureResult};
    use super::{LayoutBlock, LayoutModel};

    /// Layout detector exported to ONNX
    ///
    /// Expects a `[1, 3, S, S]` RGB input scaled to `0..1` and three outputs:
    /// `boxes [N, 4]` as `x1, y1, x2, y2` in input pixels, `labels [N]` and
    /// `scores [N]`.
    pub struct OnnxLayoutModel {
        session: Session,
        input_name: String,
        config: LayoutModelConfig,
    }

    impl OnnxLayoutModel {
        pub fn load(path: &Path, config: LayoutModelConfig) -> FigureResult<Self> {
            if !path.exists() {
                return Err(FigureError::Model(format!("layout model not found: {}", path.display())));
            }

            info!("Loading layout model from {}", path.display());
            let session = Session::builder()?.commit_from_file(path)?;

            let input_name = session.inputs
                .first()
                .map(|input| input.name.clone())
                .unwrap_or_else(|| "images".to_string());
            if session.outputs.len() < 3 {
                return Err(FigureError::Model(format!(
                    "expected boxes, labels and scores outputs, model has {}", session.outputs.len())));
            }

            Ok(OnnxLayoutModel { session, input_name, config })
        }

        fn preprocess(&self, image: &DynamicImage) -> Array4<f32> {
            let size = self.config.input_size;
            let resized = image.resize_exact(size, size, FilterType::Triangle).to_rgb8();

            let mut tensor = Array4::<f32>::zeros((1, 3, size as usize, size as usize));
            for (x, y, pixel) in resized.enumerate_pixels() {
                for channel in 0..3 {
                    tensor[[0, channel, y as usize, x as usize]] = pixel[channel] as f32 / 255.0;
                }
            }
            tensor
        }
    }

    impl LayoutModel for OnnxLayoutModel {
        fn detect_blocks(&mut self, image: &DynamicImage) -> FigureResult<Vec<LayoutBlock>> {
            let (width, height) = image.dimensions();
            let input = Value::from_array(self.preprocess(image))?;

            let outputs = self.session.run(ort::inputs![&self.input_name => input])?;
            let boxes = outputs[0].try_extract_array::<f32>()?;
            let labels: Vec<i64> = match outputs[1].try_extract_array::<i64>() {
                Ok(values) => values.iter().copied().collect(),
                Err(_) => outputs[1].try_extract_array::<f32>()?.iter().map(|v| *v as i64).collect(),
            };
            let scores = outputs[2].try_extract_array::<f32>()?;

            let boxes: Vec<f32> = boxes.iter().copied().collect();
            let scores: Vec<f32> = scores.iter().copied().collect();
            if boxes.len() != labels.len() * 4 || scores.len() != labels.len() {
                return Err(FigureError::Model(format!(
                    "inconsistent output sizes: {} box values, {} labels, {} scores",
                    boxes.len(), labels.len(), scores.len())));
            }

            let scale_x = width as f32 / self.config.input_size as f32;
            let scale_y = height as f32 / self.config.input_size as f32;

            let mut blocks = Vec::new();
            for (i, (&label_id, &score)) in labels.iter().zip(scores.iter()).enumerate() {
                if score < self.config.score_threshold {
                    continue;
                }
                let Some(label) = self.config.label_name(label_id) else {
                    continue;
                };

                let x1 = (boxes[i * 4] * scale_x).clamp(0.0, width as f32);
                let y1 = (boxes[i * 4 + 1] * scale_y).clamp(0.0, height as f32);
                let x2 = (boxes[i * 4 + 2] * scale_x).clamp(0.0, width as f32);
                let y2 = (boxes[i * 4 + 3] * scale_y).clamp(0.0, height as f32);

                blocks.push(LayoutBlock {
                    label: label.to_string(),
                    score,
                    x: x1.round() as u32,
                    y: y1.round() as u32,
                    width: (x2 - x1).max(0.0).round() as u32,
                    height: (y2 - y1).max(0.0).round() as u32,
                });
            }

            debug!("Layout model kept {} block(s) above {}", blocks.len(), self.config.score_threshold);
            Ok(blocks)
        }
    }
}
