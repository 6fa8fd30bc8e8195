//! Region providers
//!
//! This module provides the strategies that find figure regions in a
//! document image. Every strategy implements [`RegionProvider`], so the
//! extraction pipeline never depends on a concrete detector.

mod provider_strategy;
mod vision_response;
mod remote_strategy;
mod contour_strategy;
mod layout_model;
mod layout_strategy;
#[cfg(test)]
mod tests;

pub use provider_strategy::{ProviderKind, RegionProvider, RegionProviderFactory};
pub use vision_response::{parse_chat_response, parse_figures, strip_code_fences};
pub use remote_strategy::{VisionApiProvider, DETECTION_PROMPT};
pub use contour_strategy::{find_figure_boxes, is_figure_candidate, ContourRegionProvider};
pub use layout_model::{load_layout_model, LayoutBlock, LayoutModel};
pub use layout_strategy::LayoutRegionProvider;
