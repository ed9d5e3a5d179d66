//! Generate a default engine configuration file
//!
//! Creates a JSON config with all default parameters

use std::{env, path::Path, process};
use swatchbook::EngineConfig;

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <output_config.json>", args[0]);
        eprintln!();
        eprintln!("Example:");
        eprintln!("  {} config/swatchbook.json", args[0]);
        process::exit(1);
    }

    let output_path = Path::new(&args[1]);

    if let Some(parent) = output_path.parent() {
        if let Err(e) = std::fs::create_dir_all(parent) {
            eprintln!("Error creating directory: {}", e);
            process::exit(1);
        }
    }

    let config = EngineConfig::default();

    match config.to_json_file(output_path) {
        Ok(()) => {
            eprintln!("Configuration saved to {}", output_path.display());
            eprintln!();
            eprintln!("Config summary:");
            eprintln!(
                "  Extraction: every {} pixel(s), top {}, max side {}px",
                config.extraction.sample_stride,
                config.extraction.top_k,
                config.extraction.max_dimension
            );
            eprintln!(
                "  Palettes:   {} shades, {} tints",
                config.palette.shade_count, config.palette.tint_count
            );
            eprintln!(
                "  Gradient:   {} steps at {}deg",
                config.gradient.steps, config.gradient.angle_degrees
            );
        }
        Err(e) => {
            eprintln!("Error saving config: {}", e);
            process::exit(1);
        }
    }
}
