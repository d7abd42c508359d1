use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use log::{info, warn};
use rand::Rng;

use pixelmark::config::{DEFAULT_MESSAGE, DEFAULT_SEED_RANGE, DEFAULT_STRENGTH};
use pixelmark::{imaging, inspect, pipeline, WatermarkConfig};

/// pixelmark — hide a text watermark in the least-significant bits of an image.
#[derive(Parser)]
#[command(name = "pixelmark", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Embed a message into an image (output is always PNG)
    Embed {
        /// Input image path
        #[arg(short, long)]
        input: PathBuf,

        /// Output PNG path
        #[arg(short, long)]
        output: PathBuf,

        /// Message to embed (single-byte characters only)
        #[arg(short, long, default_value = DEFAULT_MESSAGE)]
        message: String,

        /// Seed for pixel selection (random if omitted; keep it for extraction)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Watermark strength (advisory)
        #[arg(long, default_value_t = DEFAULT_STRENGTH)]
        strength: f64,
    },

    /// Recover a message from a watermarked image
    Extract {
        /// Watermarked image path
        #[arg(short, long)]
        input: PathBuf,

        /// Expected message; only its length is used to know how much to read
        #[arg(short, long, default_value = DEFAULT_MESSAGE)]
        message: String,

        /// Seed used at embed time
        #[arg(short, long)]
        seed: u64,
    },

    /// Check whether an image carries the watermark signature
    Detect {
        /// Image path
        #[arg(short, long)]
        input: PathBuf,
    },

    /// Show how many characters an image can carry
    Capacity {
        /// Image path
        #[arg(short, long)]
        input: PathBuf,
    },

    /// Compare an original image with its watermarked copy
    Diff {
        /// Original image path
        #[arg(long)]
        original: PathBuf,

        /// Watermarked image path
        #[arg(long)]
        marked: PathBuf,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Embed {
            input,
            output,
            message,
            seed,
            strength,
        } => {
            let seed = seed.unwrap_or_else(|| {
                let seed = rand::thread_rng().gen_range(DEFAULT_SEED_RANGE);
                info!("no seed given, using random seed {}", seed);
                seed
            });
            let cfg = WatermarkConfig::with_strength(message, seed, strength)?;

            pipeline::embed::embed_file(&input, &output, &cfg)?;
            println!("seed: {}", seed);
        }

        Commands::Extract {
            input,
            message,
            seed,
        } => {
            let cfg = WatermarkConfig::new(message, seed)?;

            match pipeline::extract::extract_file(&input, &cfg)? {
                Some(text) => {
                    if text != cfg.message() {
                        warn!("recovered text differs from the expected message");
                    }
                    println!("{}", text);
                }
                None => bail!("no watermark found in {}", input.display()),
            }
        }

        Commands::Detect { input } => {
            if pipeline::extract::detect_file(&input)? {
                println!("watermarked");
            } else {
                println!("not watermarked");
                bail!("{} carries no watermark signature", input.display());
            }
        }

        Commands::Capacity { input } => {
            let pixels = imaging::load_pixels(&input)?;
            let cap = inspect::capacity(&pixels);
            println!(
                "{} pixels, {} reserved for the signature, {} message bits ({} characters)",
                cap.pixels, cap.reserved, cap.message_bits, cap.message_chars
            );
        }

        Commands::Diff { original, marked } => {
            let a = imaging::load_pixels(&original)?;
            let b = imaging::load_pixels(&marked)?;
            let report = inspect::diff(&a, &b)?;
            println!(
                "{} of {} pixels changed: {} blue LSB flips, {} alpha LSB flips, {} other changes",
                report.changed_pixels,
                report.pixels,
                report.blue_lsb_flips,
                report.alpha_lsb_flips,
                report.other_changes
            );
            if !report.is_lsb_only() {
                warn!("images differ beyond LSB flips");
            }
        }
    }

    Ok(())
}
