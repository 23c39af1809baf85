use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::ConvertError;
use crate::labels::ClassMap;
use crate::parser::read_and_parse_xml;
use crate::types::{AnnotationFile, ConversionReport, NormalizedRecord, Region, LABEL_EXTENSION};

/// Records kept for one annotation plus the class names that were dropped
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Conversion {
    pub records: Vec<NormalizedRecord>,
    pub skipped_classes: Vec<String>,
}

/// Convert a single annotation file and write its YOLO label file into `labels_dir`
pub fn process_annotation(
    xml_path: &Path,
    labels_dir: &Path,
    class_map: &ClassMap,
) -> Result<ConversionReport, ConvertError> {
    let annotation = read_and_parse_xml(xml_path)?;
    let conversion = convert_annotation(&annotation, class_map)?;

    let label_output_path = label_path_for(xml_path, labels_dir);
    let file = File::create(&label_output_path)
        .map_err(|e| ConvertError::io(&label_output_path, e))?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(convert_to_yolo_format(&conversion.records).as_bytes())
        .and_then(|_| writer.flush())
        .map_err(|e| ConvertError::io(&label_output_path, e))?;

    Ok(ConversionReport {
        source: xml_path.to_path_buf(),
        output: label_output_path,
        records_written: conversion.records.len(),
        skipped_classes: conversion.skipped_classes,
    })
}

/// Output path `<labels_dir>/<stem>.txt` for an annotation file
pub fn label_path_for(xml_path: &Path, labels_dir: &Path) -> std::path::PathBuf {
    let stem = xml_path
        .file_stem()
        .map(|stem| stem.to_string_lossy())
        .unwrap_or_default();
    let sanitized_name = sanitize_filename::sanitize(stem);
    labels_dir.join(format!("{}.{}", sanitized_name, LABEL_EXTENSION))
}

/// Normalize every region and resolve its class. Regions with an unknown
/// class are collected in `skipped_classes` instead of failing.
pub fn convert_annotation(
    annotation: &AnnotationFile,
    class_map: &ClassMap,
) -> Result<Conversion, ConvertError> {
    let mut conversion = Conversion {
        records: Vec::with_capacity(annotation.regions.len()),
        skipped_classes: Vec::new(),
    };

    for region in &annotation.regions {
        let (x_center, y_center, width, height) = calculate_bounding_box(annotation, region)?;

        let class_id = match class_map.resolve(&region.name) {
            Some(class_id) => class_id,
            None => {
                conversion.skipped_classes.push(region.name.clone());
                continue;
            }
        };

        conversion.records.push(NormalizedRecord {
            class_id,
            x_center,
            y_center,
            width,
            height,
        });
    }

    Ok(conversion)
}

/// Serialize records as YOLO label lines
pub fn convert_to_yolo_format(records: &[NormalizedRecord]) -> String {
    let mut yolo_data = String::with_capacity(records.len() * 48);
    for record in records {
        yolo_data.push_str(&record.to_line());
    }
    yolo_data
}

/// Calculate the normalized bounding box of a region
pub fn calculate_bounding_box(
    annotation: &AnnotationFile,
    region: &Region,
) -> Result<(f64, f64, f64, f64), ConvertError> {
    if annotation.image_width == 0 || annotation.image_height == 0 {
        return Err(ConvertError::ZeroDimension {
            path: annotation.identifier.clone().into(),
            width: annotation.image_width,
            height: annotation.image_height,
        });
    }

    let bbox = &region.bbox;
    let image_width = annotation.image_width as f64;
    let image_height = annotation.image_height as f64;

    let x_center = (bbox.xmin + bbox.xmax) / (2.0 * image_width);
    let y_center = (bbox.ymin + bbox.ymax) / (2.0 * image_height);
    let width = (bbox.xmax - bbox.xmin) / image_width;
    let height = (bbox.ymax - bbox.ymin) / image_height;

    Ok((x_center, y_center, width, height))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::BoundingBox;

    fn annotation(width: u32, height: u32) -> AnnotationFile {
        AnnotationFile {
            identifier: "sample.xml".to_string(),
            image_width: width,
            image_height: height,
            regions: vec![],
        }
    }

    fn region(name: &str, xmin: f64, ymin: f64, xmax: f64, ymax: f64) -> Region {
        Region {
            name: name.to_string(),
            bbox: BoundingBox {
                xmin,
                ymin,
                xmax,
                ymax,
            },
        }
    }

    #[test]
    fn test_calculate_bounding_box() {
        let (x_center, y_center, width, height) =
            calculate_bounding_box(&annotation(100, 200), &region("echinus", 10.0, 20.0, 50.0, 100.0))
                .unwrap();

        assert!((x_center - 0.3).abs() < 1e-12);
        assert!((y_center - 0.3).abs() < 1e-12);
        assert!((width - 0.4).abs() < 1e-12);
        assert!((height - 0.4).abs() < 1e-12);
    }

    #[test]
    fn test_out_of_bounds_box_passes_through() {
        let (x_center, _, width, _) =
            calculate_bounding_box(&annotation(100, 100), &region("scallop", 50.0, 0.0, 250.0, 10.0))
                .unwrap();

        assert!((x_center - 1.5).abs() < 1e-12);
        assert!((width - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_zero_dimension_is_an_error() {
        let result =
            calculate_bounding_box(&annotation(0, 100), &region("starfish", 1.0, 1.0, 2.0, 2.0));
        assert!(matches!(
            result,
            Err(ConvertError::ZeroDimension { width: 0, height: 100, .. })
        ));
    }

    #[test]
    fn test_label_path_for() {
        let path = label_path_for(Path::new("in/000123.xml"), Path::new("out"));
        assert_eq!(path, Path::new("out").join("000123.txt"));
    }
}
