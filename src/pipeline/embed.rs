use std::path::Path;

use anyhow::{Context, Result};
use log::info;

use crate::config::WatermarkConfig;
use crate::imaging;
use crate::integrity;
use crate::watermark;

/// Full embed pipeline: image file -> pixels -> watermark -> PNG file.
///
/// Returns the SHA-256 hex digest of the written pixel data.
pub fn embed_file(input_path: &Path, output_path: &Path, cfg: &WatermarkConfig) -> Result<String> {
    // Step 1: Decode the carrier
    info!("reading carrier: {}", input_path.display());
    let carrier = imaging::load_pixels(input_path)?;

    // Step 2: Embed the message
    info!(
        "embedding {} characters with seed {} (strength {})",
        cfg.message().chars().count(),
        cfg.seed(),
        cfg.strength()
    );
    let marked = watermark::embed(&carrier, cfg).context("failed to embed watermark")?;

    // Step 3: Persist losslessly
    imaging::save_png(output_path, &marked)?;

    let digest = integrity::pixel_digest(&marked);
    info!("embed complete! output: {} (pixels sha256 {})", output_path.display(), digest);
    Ok(digest)
}
