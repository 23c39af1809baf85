use glob::{glob, Pattern};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::ConvertError;
use crate::labels::ClassMap;
use crate::types::ANNOTATION_EXTENSION;

/// Name of the class list written next to the label files
pub const CLASSES_FILE_NAME: &str = "classes.txt";

/// Create the output directory if it is absent. Existing files are kept.
pub fn setup_output_directory(path: &Path) -> Result<PathBuf, ConvertError> {
    if path.exists() {
        log::info!("Writing labels into existing directory {:?}", path);
    } else {
        fs::create_dir_all(path).map_err(|e| ConvertError::io(path, e))?;
    }
    Ok(path.to_path_buf())
}

/// List the annotation files directly inside `dirname`, in lexical order
pub fn collect_annotation_files(dirname: &Path) -> Result<Vec<PathBuf>, ConvertError> {
    if !dirname.is_dir() {
        return Err(ConvertError::InputDirNotFound(dirname.to_path_buf()));
    }

    let xml_pattern = format!(
        "{}/*.{}",
        Pattern::escape(&dirname.to_string_lossy()),
        ANNOTATION_EXTENSION
    );

    let mut xml_entries = Vec::new();
    for entry in glob(&xml_pattern)? {
        let path = entry.map_err(|e| {
            let path = e.path().to_path_buf();
            ConvertError::io(path, e.into_error())
        })?;
        if path.is_file() {
            xml_entries.push(path);
        }
    }

    Ok(xml_entries)
}

/// Write the class names in id order, one per line
pub fn write_classes_file(output_dir: &Path, class_map: &ClassMap) -> Result<PathBuf, ConvertError> {
    let classes_path = output_dir.join(CLASSES_FILE_NAME);
    let file = File::create(&classes_path).map_err(|e| ConvertError::io(&classes_path, e))?;
    let mut writer = BufWriter::new(file);

    let mut content = String::new();
    for name in class_map.names() {
        content.push_str(name);
        content.push('\n');
    }
    writer
        .write_all(content.as_bytes())
        .and_then(|_| writer.flush())
        .map_err(|e| ConvertError::io(&classes_path, e))?;

    Ok(classes_path)
}
