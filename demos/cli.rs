//! Describe a color, or extract a palette from an image
//!
//! ```text
//! cargo run --example cli -- "#3B82F6" [config.json]
//! cargo run --example cli -- photo.jpg [config.json]
//! ```
//!
//! Set `RUST_LOG=swatchbook=debug` to see extraction statistics.

use std::{env, path::Path, process};

use swatchbook::harmony::to_hex_strings;
use swatchbook::image_loader::{is_supported_extension, load_pixels};
use swatchbook::logging::{init_logging, LoggingConfig};
use swatchbook::{
    check_contrast, describe_color, generate_harmony, readable_text_color, EngineConfig,
    HarmonyScheme, PaletteExtractor, Rgb, SwatchError,
};

fn load_config(path: Option<&Path>) -> swatchbook::Result<EngineConfig> {
    match path {
        Some(path) => EngineConfig::from_json_file(path),
        None => Ok(EngineConfig::default()),
    }
}

fn describe(input: &str, config: &EngineConfig) -> swatchbook::Result<()> {
    let color: Rgb = input.parse()?;
    let formats = describe_color(input, None);

    println!("{} ({})", formats.hex, formats.name);
    println!("  {}", formats.rgb);
    println!("  {}", formats.hsl);
    println!("  {}", formats.hsv);
    println!("  {}", formats.cmyk);

    let text = readable_text_color(color);
    let contrast = check_contrast(text, color);
    println!(
        "  text {} at {:.2}:1 (AA {}, AAA {})",
        text, contrast.ratio, contrast.meets_aa, contrast.meets_aaa
    );

    for scheme in HarmonyScheme::ALL {
        let palette = generate_harmony(color, scheme);
        println!("  {:<20} {}", scheme.as_str(), to_hex_strings(&palette).join(" "));
    }

    println!("  {:<20} {}", "shades", to_hex_strings(&config.palette.shades(color)).join(" "));
    println!("  {:<20} {}", "tints", to_hex_strings(&config.palette.tints(color)).join(" "));
    println!("  {}", config.gradient.css(&[color, text]));
    Ok(())
}

fn extract(path: &Path, config: &EngineConfig) -> swatchbook::Result<()> {
    let pixels = load_pixels(path, config.extraction.max_dimension)?;
    let result = PaletteExtractor::from_config(&config.extraction).analyze(&pixels);

    println!(
        "{}: {}x{}, {} sampled pixels, {} distinct colors",
        path.display(),
        pixels.width(),
        pixels.height(),
        result.sampled_pixels,
        result.distinct_colors
    );
    for entry in &result.colors {
        println!("  {} x{}", entry.color, entry.count);
    }
    Ok(())
}

fn main() {
    init_logging(LoggingConfig::default());

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: {} <#RRGGBB | image> [config.json]", args[0]);
        process::exit(1);
    }

    let input = Path::new(&args[1]);
    let is_image = input
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(is_supported_extension);

    let outcome = load_config(args.get(2).map(Path::new)).and_then(|config| {
        if is_image {
            extract(input, &config)
        } else {
            describe(&args[1], &config)
        }
    });

    if let Err(e) = outcome {
        log::error!("{e}");
        eprintln!("{}", SwatchError::user_message(&e));
        process::exit(1);
    }
}
