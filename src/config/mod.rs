//! Run configuration
//!
//! Configuration is assembled once at start-up from built-in defaults,
//! an optional TOML file, the process environment and the command line,
//! and then handed to the pipelines as plain values.

mod extraction;
mod vision;
mod loader;

pub use extraction::{
    ContourThresholds, ExtractionConfig, LayoutModelConfig,
    DEFAULT_LOCAL_PADDING, DEFAULT_OUTPUT_FOLDER, DEFAULT_REMOTE_PADDING,
};
pub use vision::{load_env_file, VisionApiConfig, API_KEY_VAR, API_URL_VAR, MODEL_VAR};
pub use loader::ConfigFile;
