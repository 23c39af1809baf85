use clap::Parser;
use std::path::PathBuf;

use crate::labels::ClassMap;

/// Command-line arguments parser for converting Pascal VOC XML to YOLO format.
#[derive(Parser, Debug, Clone)]
#[command(version, long_about = None)]
pub struct Args {
    /// Directory containing Pascal VOC XML annotation files
    #[arg(short = 'i', long = "input_dir")]
    pub input_dir: PathBuf,

    /// Directory where YOLO label files are written
    #[arg(short = 'o', long = "output_dir")]
    pub output_dir: PathBuf,

    /// Also write classes.txt with the class names in id order
    #[arg(long = "write_classes")]
    pub write_classes: bool,

    /// Ordered list of class names, replacing the built-in class map
    #[arg(use_value_delimiter = true)]
    pub label_list: Vec<String>,
}

impl Args {
    /// Build the class map used for this run
    pub fn class_map(&self) -> ClassMap {
        if self.label_list.is_empty() {
            ClassMap::default()
        } else {
            ClassMap::from_labels(self.label_list.as_slice())
        }
    }
}
