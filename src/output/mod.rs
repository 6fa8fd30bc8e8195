//! Writing crops and reporting results

mod cropper;
mod report;

pub use cropper::{figure_file_name, CropWriter};
pub use report::ExtractionReport;
