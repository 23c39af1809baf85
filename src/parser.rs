use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::error::ConvertError;
use crate::types::{AnnotationFile, VocDocument};

/// Read and parse a single VOC XML file into an AnnotationFile.
/// The document is deserialized straight from a buffered file stream.
pub fn read_and_parse_xml(path: &Path) -> Result<AnnotationFile, ConvertError> {
    let file = File::open(path).map_err(|e| ConvertError::io(path, e))?;

    let document: VocDocument =
        quick_xml::de::from_reader(BufReader::new(file)).map_err(|source| ConvertError::Xml {
            path: path.to_path_buf(),
            source,
        })?;

    Ok(into_annotation(identifier_of(path), document))
}

/// Parse an in-memory VOC document. `identifier` names the source in errors.
pub fn parse_annotation(identifier: &str, content: &str) -> Result<AnnotationFile, ConvertError> {
    let document: VocDocument =
        quick_xml::de::from_str(content).map_err(|source| ConvertError::Xml {
            path: identifier.into(),
            source,
        })?;

    Ok(into_annotation(identifier.to_string(), document))
}

fn identifier_of(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn into_annotation(identifier: String, document: VocDocument) -> AnnotationFile {
    AnnotationFile {
        identifier,
        image_width: document.size.width,
        image_height: document.size.height,
        regions: document.objects,
    }
}
