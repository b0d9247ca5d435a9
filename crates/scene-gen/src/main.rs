//! Write the preset scenes as raytracer scene files.

use std::path::PathBuf;

use clap::Parser;
use scene_gen::{write_presets, Preset, DEFAULT_OUTPUT_DIR};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Generate raytracer scene files from the built-in presets.
#[derive(Parser)]
#[command(name = "write_scenes")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Preset to write: gallery, solar, chess, temple, crystals or city.
    /// Writes every preset when omitted.
    preset: Option<Preset>,

    /// Output directory
    #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
    output: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder().with_max_level(log_level).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let selected: Vec<Preset> = match cli.preset {
        Some(preset) => vec![preset],
        None => Preset::ALL.to_vec(),
    };

    let written = write_presets(&cli.output, &selected)?;
    for path in &written {
        println!("{}", path.display());
    }
    println!("{} scene(s) written to {}", written.len(), cli.output.display());
    Ok(())
}
