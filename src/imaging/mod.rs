use std::path::Path;

use anyhow::{Context, Result};
use image::{ImageFormat, RgbaImage};
use log::info;

use crate::buffer::PixelBuffer;

/// Decode any supported image file into an RGBA pixel buffer.
pub fn load_pixels(path: &Path) -> Result<PixelBuffer> {
    let img = image::open(path)
        .with_context(|| format!("failed to decode image {}", path.display()))?
        .to_rgba8();
    let (width, height) = img.dimensions();
    info!("loaded {} ({}x{})", path.display(), width, height);
    Ok(PixelBuffer::from_rgba(width, height, img.into_raw())?)
}

/// Encode a pixel buffer as PNG. Lossless output is required for the
/// watermark bits to survive.
pub fn save_png(path: &Path, buffer: &PixelBuffer) -> Result<()> {
    let img = RgbaImage::from_raw(buffer.width(), buffer.height(), buffer.as_bytes().to_vec())
        .context("pixel buffer does not match its dimensions")?;
    img.save_with_format(path, ImageFormat::Png)
        .with_context(|| format!("failed to write PNG {}", path.display()))?;
    info!("wrote {} ({}x{})", path.display(), buffer.width(), buffer.height());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_png_roundtrip_is_bit_exact() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pixels.png");

        let data: Vec<u8> = (0..12 * 9 * 4).map(|i| (i * 37 % 256) as u8).collect();
        let buffer = PixelBuffer::from_rgba(12, 9, data).unwrap();

        save_png(&path, &buffer).unwrap();
        let loaded = load_pixels(&path).unwrap();
        assert_eq!(loaded, buffer);
    }

    #[test]
    fn test_missing_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_pixels(&dir.path().join("nope.png")).is_err());
    }
}
