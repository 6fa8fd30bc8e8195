pub mod errors;
pub mod config;
pub mod region;
pub mod provider;
pub mod output;
pub mod utils;
pub mod commands;
pub mod cli;
pub mod api;

pub use crate::api::{run_pipeline, FigCrop};
pub use crate::errors::{FigureError, FigureResult};

pub use config::{ExtractionConfig, VisionApiConfig};
pub use region::{NormalizedRegion, RawRegion, RegionOrder};
pub use provider::{ContourRegionProvider, LayoutRegionProvider, RegionProvider, VisionApiProvider};
pub use output::ExtractionReport;
