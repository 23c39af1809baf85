use clap::Parser;
use log::{error, info};
use std::process::ExitCode;

use voc2yolo::{process_dataset, Args, RunOptions};

fn main() -> ExitCode {
    // Initialize the logger
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    if !args.input_dir.exists() {
        error!(
            "The specified input_dir does not exist: {}",
            args.input_dir.display()
        );
        return ExitCode::FAILURE;
    }

    info!("Starting the conversion process...");

    let class_map = args.class_map();
    let options = RunOptions {
        write_classes: args.write_classes,
    };

    match process_dataset(&args.input_dir, &args.output_dir, &class_map, options) {
        Ok(_) => {
            info!("Conversion process completed successfully.");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Failed to convert annotations: {}", e);
            ExitCode::FAILURE
        }
    }
}
