use log::{info, warn};
use std::path::Path;

use crate::conversion::process_annotation;
use crate::error::ConvertError;
use crate::io::{collect_annotation_files, setup_output_directory, write_classes_file};
use crate::labels::ClassMap;
use crate::types::{ConversionReport, ProcessingStats};
use crate::utils::create_progress_bar;

/// Options for a conversion run
#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
    pub write_classes: bool,
}

/// Main conversion pipeline. Files are handled one at a time; the first
/// fatal error stops the run and leaves the remaining files untouched.
pub fn process_dataset(
    input_dir: &Path,
    output_dir: &Path,
    class_map: &ClassMap,
    options: RunOptions,
) -> Result<ProcessingStats, ConvertError> {
    let xml_files = collect_annotation_files(input_dir)?;
    let labels_dir = setup_output_directory(output_dir)?;
    info!(
        "Found {} annotation file(s) in {}",
        xml_files.len(),
        input_dir.display()
    );

    let mut stats = ProcessingStats::new();
    let pb = create_progress_bar(xml_files.len() as u64, "Convert");

    for xml_path in &xml_files {
        stats.increment_total();
        let report = match process_annotation(xml_path, &labels_dir, class_map) {
            Ok(report) => report,
            Err(e) => {
                pb.abandon();
                return Err(e);
            }
        };
        pb.suspend(|| report_file(&report));
        stats.record(&report);
        pb.inc(1);
    }
    pb.finish_with_message("Conversion complete");

    if options.write_classes {
        let classes_path = write_classes_file(&labels_dir, class_map)?;
        info!("Wrote class names to {}", classes_path.display());
    }

    stats.print_summary();
    Ok(stats)
}

fn report_file(report: &ConversionReport) {
    let file_name = report
        .source
        .file_name()
        .map(|name| name.to_string_lossy())
        .unwrap_or_default();

    for class_name in &report.skipped_classes {
        warn!(
            "Unknown class '{}' in {}, region skipped",
            class_name, file_name
        );
    }
    info!(
        "Converted {} -> {} ({} label(s))",
        file_name,
        report.output.display(),
        report.records_written
    );
}
