use std::path::PathBuf;
use std::process;

use clap::Parser;
use icon_master::{GenerateEvent, IconConfig, TargetBundle};

#[derive(Parser)]
#[command(name = "icon-master")]
#[command(version)]
#[command(about = "Generate icons for Linux, Windows, and macOS")]
struct Cli {
    /// Path to the source image file
    source: PathBuf,

    /// Directory to save the generated icons (defaults to <source>_icons)
    output_dir: Option<PathBuf>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    if !cli.source.exists() {
        eprintln!("Error: Source file '{}' does not exist.", cli.source.display());
        process::exit(1);
    }

    let result = icon_master::generate(
        &cli.source,
        cli.output_dir.as_deref(),
        &IconConfig::default(),
        |event| match event {
            GenerateEvent::LowResolution {
                width,
                height,
                recommended,
            } => {
                eprintln!(
                    "Warning: Input image is {}x{}. For best results, use an image at least {}x{}.",
                    width, height, recommended, recommended
                );
            }
            GenerateEvent::BundleWritten { bundle, path } => match bundle {
                TargetBundle::Linux => println!("Linux icons generated in {}", path.display()),
                TargetBundle::Windows => println!("Windows icon generated: {}", path.display()),
                TargetBundle::MacOs => println!("macOS icon generated: {}", path.display()),
            },
        },
    );

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
