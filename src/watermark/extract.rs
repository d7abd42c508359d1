use log::debug;

use crate::bits::{self, BitString};
use crate::buffer::{PixelBuffer, BLUE};
use crate::config::WatermarkConfig;
use crate::slots::SlotSelector;

use super::{signature, WatermarkError};

/// Whether `buffer` carries the watermark signature.
pub fn detect(buffer: &PixelBuffer) -> bool {
    signature::matches(buffer)
}

/// Recover the embedded message, or `None` when the signature is absent.
///
/// The number of bits read is taken from the length of `config.message()`;
/// its contents are not consulted. A config whose message length differs from
/// the embedded one yields unrelated text rather than an error.
pub fn extract(buffer: &PixelBuffer, config: &WatermarkConfig) -> Result<Option<String>, WatermarkError> {
    config.validate()?;

    if !signature::matches(buffer) {
        debug!("signature not found");
        return Ok(None);
    }

    // Any k <= N distinct slots can be read back, so no embed-side budget here.
    let expected_bits = bits::text_to_bits(config.message())?.len();
    let pixels = buffer.pixel_count();

    let slots = SlotSelector::with_seed(pixels, config.seed()).select(expected_bits)?;
    let read: Vec<u8> = slots.iter().map(|&slot| buffer.lsb(slot, BLUE)).collect();
    let text = bits::bits_to_text(&BitString::from(read))?;

    debug!("extracted {} bits (seed {})", expected_bits, config.seed());
    Ok(Some(text))
}

/// Extract and compare against `config.message()`.
pub fn verify(buffer: &PixelBuffer, config: &WatermarkConfig) -> Result<bool, WatermarkError> {
    Ok(extract(buffer, config)?.as_deref() == Some(config.message()))
}
