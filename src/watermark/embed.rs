use log::debug;

use crate::bits;
use crate::buffer::{PixelBuffer, BLUE};
use crate::config::WatermarkConfig;
use crate::slots::SlotSelector;

use super::{check_capacity, signature, WatermarkError};

/// Embed `config.message` into a copy of `buffer`.
///
/// Bit i of the message lands in the blue LSB of the i-th pixel drawn from a
/// selector seeded with `config.seed()`. The signature is written to the alpha
/// LSBs of the last 64 pixels regardless of the seed. `buffer` is not modified.
pub fn embed(buffer: &PixelBuffer, config: &WatermarkConfig) -> Result<PixelBuffer, WatermarkError> {
    config.validate()?;

    let message_bits = bits::text_to_bits(config.message())?;
    let pixels = buffer.pixel_count();
    check_capacity(pixels, message_bits.len())?;

    let mut marked = buffer.clone();

    let slots = SlotSelector::with_seed(pixels, config.seed()).select(message_bits.len())?;
    for (&slot, &bit) in slots.iter().zip(message_bits.as_slice()) {
        marked.set_lsb(slot, BLUE, bit);
    }

    signature::write(&mut marked);

    debug!(
        "embedded {} message bits into {}x{} image (seed {})",
        message_bits.len(),
        buffer.width(),
        buffer.height(),
        config.seed()
    );
    Ok(marked)
}
