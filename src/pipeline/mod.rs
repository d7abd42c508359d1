pub mod embed;
pub mod extract;
pub mod hook;

use std::path::Path;

use anyhow::Result;

use crate::config::WatermarkConfig;
use crate::imaging;
use crate::integrity;
use hook::PipelineHook;

/// Result of a full embed → hook → extract roundtrip.
#[derive(Debug, Clone)]
pub struct RoundtripResult {
    /// Text read back, `None` if the signature did not survive.
    pub recovered: Option<String>,
    /// `true` if the recovered text equals the configured message.
    pub matched: bool,
    /// SHA-256 of the pixels as embedded.
    pub embedded_digest: String,
    /// SHA-256 of the pixels read back after the hook.
    pub returned_digest: String,
}

impl RoundtripResult {
    /// Whether the hook preserved every pixel bit-for-bit.
    pub fn pixels_preserved(&self) -> bool {
        self.embedded_digest == self.returned_digest
    }
}

/// Run a full embed → hook → extract roundtrip.
///
/// Steps:
/// 1. Embeds `cfg` into `input`, writing a PNG to `marked_path`.
/// 2. Calls `hook.after_embed(marked_path)`.
/// 3. Extracts from the path returned by the hook with the same config.
/// 4. Compares the message and the pixel digests.
///
/// # Example
///
/// ```rust,no_run
/// use std::path::Path;
/// use pixelmark::{roundtrip, NoopHook, WatermarkConfig};
///
/// let cfg = WatermarkConfig::new("owner: acme", 42).unwrap();
/// let result = roundtrip(Path::new("photo.png"), Path::new("marked.png"), &cfg, &NoopHook).unwrap();
///
/// assert!(result.matched, "watermark lost, recovered {:?}", result.recovered);
/// ```
pub fn roundtrip<H: PipelineHook>(
    input: &Path,
    marked_path: &Path,
    cfg: &WatermarkConfig,
    hook: &H,
) -> Result<RoundtripResult> {
    let embedded_digest = embed::embed_file(input, marked_path, cfg)?;

    let extract_from = hook.after_embed(marked_path)?;

    let returned = imaging::load_pixels(&extract_from)?;
    let returned_digest = integrity::pixel_digest(&returned);
    let recovered = crate::watermark::extract(&returned, cfg)?;
    let matched = recovered.as_deref() == Some(cfg.message());

    Ok(RoundtripResult {
        recovered,
        matched,
        embedded_digest,
        returned_digest,
    })
}
