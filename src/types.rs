use serde::Deserialize;
use std::path::PathBuf;

// Extension of the annotation documents picked up from the input directory
pub const ANNOTATION_EXTENSION: &str = "xml";

// Extension of the generated label files
pub const LABEL_EXTENSION: &str = "txt";

// Axis-aligned box in pixel coordinates, as stored in a VOC <bndbox> element
#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub xmin: f64,
    pub ymin: f64,
    pub xmax: f64,
    pub ymax: f64,
}

// A labeled rectangle, one VOC <object> element
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Region {
    pub name: String,
    #[serde(rename = "bndbox")]
    pub bbox: BoundingBox,
}

// The <size> block of a VOC document
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct ImageSize {
    pub width: u32,
    pub height: u32,
}

// Raw layout of a VOC annotation document; unrelated elements are ignored
#[derive(Debug, Deserialize, Clone)]
pub struct VocDocument {
    pub size: ImageSize,
    #[serde(rename = "object", default)]
    pub objects: Vec<Region>,
}

// The AnnotationFile struct representing one parsed annotation document
#[derive(Debug, Clone, PartialEq)]
pub struct AnnotationFile {
    pub identifier: String,
    pub image_width: u32,
    pub image_height: u32,
    pub regions: Vec<Region>,
}

/// A region expressed as YOLO class id plus normalized center/size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizedRecord {
    pub class_id: usize,
    pub x_center: f64,
    pub y_center: f64,
    pub width: f64,
    pub height: f64,
}

impl NormalizedRecord {
    /// Render as one YOLO label line, newline included
    pub fn to_line(&self) -> String {
        format!(
            "{} {:.6} {:.6} {:.6} {:.6}\n",
            self.class_id, self.x_center, self.y_center, self.width, self.height
        )
    }
}

// Outcome of converting one annotation file
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionReport {
    pub source: PathBuf,
    pub output: PathBuf,
    pub records_written: usize,
    pub skipped_classes: Vec<String>,
}

// Struct to hold processing statistics
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ProcessingStats {
    pub total_files_processed: usize,
    pub successful_conversions: usize,
    pub records_written: usize,
    pub skipped_regions: usize,
}

impl ProcessingStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold a finished file into the totals
    pub fn record(&mut self, report: &ConversionReport) {
        self.successful_conversions += 1;
        self.records_written += report.records_written;
        self.skipped_regions += report.skipped_classes.len();
    }

    pub fn increment_total(&mut self) {
        self.total_files_processed += 1;
    }

    pub fn print_summary(&self) {
        log::info!("=== Processing Summary ===");
        log::info!("Total files processed: {}", self.total_files_processed);
        log::info!("Successful conversions: {}", self.successful_conversions);
        log::info!("Label lines written: {}", self.records_written);

        if self.skipped_regions > 0 {
            log::warn!(
                "Skipped {} region(s) with unknown class names",
                self.skipped_regions
            );
        }
    }
}
