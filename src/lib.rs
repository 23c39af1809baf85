//! Pascal VOC to YOLO format converter
//!
//! This library converts Pascal VOC XML bounding-box annotations into YOLO
//! label files with normalized center/size coordinates.

pub mod config;
pub mod conversion;
pub mod dataset;
pub mod error;
pub mod io;
pub mod labels;
pub mod parser;
pub mod types;
pub mod utils;

// Re-export commonly used types and functions
pub use config::Args;
pub use conversion::{convert_annotation, convert_to_yolo_format, process_annotation};
pub use dataset::{process_dataset, RunOptions};
pub use error::ConvertError;
pub use labels::{ClassMap, DEFAULT_CLASSES};
pub use parser::{parse_annotation, read_and_parse_xml};
pub use types::{AnnotationFile, BoundingBox, NormalizedRecord, ProcessingStats, Region};
