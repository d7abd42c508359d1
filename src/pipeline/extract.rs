use std::path::Path;

use anyhow::{Context, Result};
use log::info;

use crate::config::WatermarkConfig;
use crate::imaging;
use crate::watermark;

/// Full extract pipeline: image file -> pixels -> signature check -> message.
pub fn extract_file(input_path: &Path, cfg: &WatermarkConfig) -> Result<Option<String>> {
    info!("reading image: {}", input_path.display());
    let pixels = imaging::load_pixels(input_path)?;

    let recovered = watermark::extract(&pixels, cfg).context("failed to extract watermark")?;
    match &recovered {
        Some(text) => info!("watermark found, {} characters recovered", text.chars().count()),
        None => info!("no watermark signature in {}", input_path.display()),
    }
    Ok(recovered)
}

/// Signature check only; needs no message or seed.
pub fn detect_file(input_path: &Path) -> Result<bool> {
    let pixels = imaging::load_pixels(input_path)?;
    Ok(watermark::detect(&pixels))
}
