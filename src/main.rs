use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use const_png::{Pixel, PngEncoder};

/// Write a solid color PNG, e.g. an application icon.
#[derive(Parser, Debug)]
#[command(name = "const_png", version, about)]
struct Args {
    /// Image width in pixels
    #[arg(short = 'W', long, default_value_t = 512)]
    width: u32,

    /// Image height in pixels
    #[arg(short = 'H', long, default_value_t = 512)]
    height: u32,

    /// Fill color as #rrggbb or #rrggbbaa
    #[arg(short, long, default_value = "#3b82f6ff")]
    color: Pixel,

    /// zlib compression level, 0 to 10
    #[arg(short, long, default_value_t = 6)]
    level: u8,

    /// Where to write the image; missing parent directories are created
    #[arg(short, long, default_value = "public/logo.png")]
    output: PathBuf,
}

fn run(args: &Args) -> Result<usize> {
    let png = PngEncoder::new()
        .with_compression(args.level)
        .with_context(|| format!("Invalid compression level {}", args.level))?
        .encode(args.width, args.height, args.color)
        .with_context(|| format!("Failed to encode {}x{} image", args.width, args.height))?;

    if let Some(parent) = args.output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }
    fs::write(&args.output, &png)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;
    Ok(png.len())
}

fn main() {
    let args = Args::parse();
    match run(&args) {
        Ok(bytes) => println!("Wrote {} ({} bytes)", args.output.display(), bytes),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
    }
}
