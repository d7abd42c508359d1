use std::path::{Path, PathBuf};

use anyhow::Result;
use pixelmark::{
    detect_file, embed_file, extract_file, imaging, inspect, roundtrip, NoopHook, PipelineHook,
    PixelBuffer, WatermarkConfig,
};

fn write_carrier(path: &Path, width: u32, height: u32) {
    let mut data = Vec::with_capacity((width * height * 4) as usize);
    for y in 0..height {
        for x in 0..width {
            data.extend_from_slice(&[
                (x * 3) as u8,
                (y * 5) as u8,
                ((x + y) * 7) as u8,
                255,
            ]);
        }
    }
    let buffer = PixelBuffer::from_rgba(width, height, data).unwrap();
    imaging::save_png(path, &buffer).unwrap();
}

/// Copies the file somewhere else, as an upload/download would.
struct CopyHook(PathBuf);

impl PipelineHook for CopyHook {
    fn after_embed(&self, marked_path: &Path) -> Result<PathBuf> {
        std::fs::copy(marked_path, &self.0)?;
        Ok(self.0.clone())
    }
}

/// Re-encodes as JPEG, which destroys the LSBs.
struct JpegHook(PathBuf);

impl PipelineHook for JpegHook {
    fn after_embed(&self, marked_path: &Path) -> Result<PathBuf> {
        let img = image::open(marked_path)?.to_rgb8();
        img.save_with_format(&self.0, image::ImageFormat::Jpeg)?;
        Ok(self.0.clone())
    }
}

#[test]
fn embed_then_extract_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("carrier.png");
    let output = dir.path().join("marked.png");
    write_carrier(&input, 64, 48);

    let cfg = WatermarkConfig::new(r#"{"owner":"acme","id":7}"#, 424_242).unwrap();
    let digest = embed_file(&input, &output, &cfg).unwrap();
    assert_eq!(digest.len(), 64);

    assert!(detect_file(&output).unwrap());
    assert!(!detect_file(&input).unwrap());
    assert_eq!(
        extract_file(&output, &cfg).unwrap().as_deref(),
        Some(cfg.message())
    );
    assert_eq!(extract_file(&input, &cfg).unwrap(), None);

    let original = imaging::load_pixels(&input).unwrap();
    let marked = imaging::load_pixels(&output).unwrap();
    assert!(inspect::diff(&original, &marked).unwrap().is_lsb_only());
}

#[test]
fn roundtrip_through_noop_and_copy_hooks() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("carrier.png");
    let marked = dir.path().join("marked.png");
    write_carrier(&input, 40, 40);
    let cfg = WatermarkConfig::new("hello there", 9).unwrap();

    let result = roundtrip(&input, &marked, &cfg, &NoopHook).unwrap();
    assert!(result.matched);
    assert!(result.pixels_preserved());

    let copy = CopyHook(dir.path().join("copied.png"));
    let result = roundtrip(&input, &marked, &cfg, &copy).unwrap();
    assert!(result.matched);
    assert_eq!(result.recovered.as_deref(), Some("hello there"));
}

#[test]
fn lossy_hook_loses_watermark() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("carrier.png");
    let marked = dir.path().join("marked.png");
    write_carrier(&input, 64, 64);
    let cfg = WatermarkConfig::new("fragile", 3).unwrap();

    let hook = JpegHook(dir.path().join("lossy.jpg"));
    let result = roundtrip(&input, &marked, &cfg, &hook).unwrap();
    assert!(!result.pixels_preserved());
    assert!(!result.matched);
}

#[test]
fn tiny_image_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("tiny.png");
    write_carrier(&input, 4, 4);
    let cfg = WatermarkConfig::new("{}", 42).unwrap();

    assert!(embed_file(&input, &dir.path().join("out.png"), &cfg).is_err());
    assert_eq!(extract_file(&input, &cfg).unwrap(), None);
}
