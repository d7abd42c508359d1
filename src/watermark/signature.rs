use log::debug;

use crate::bits::{self, BitString};
use crate::buffer::{PixelBuffer, ALPHA};
use crate::config;

/// Bits of the signature literal, capped at [`config::SIGNATURE_BITS`].
pub fn signature_bits() -> BitString {
    // The literal is ASCII, so encoding cannot fail.
    bits::text_to_bits(config::SIGNATURE_TEXT)
        .unwrap_or_default()
        .truncated(config::SIGNATURE_BITS)
}

/// First pixel index of the reserved trailing range, if the image is large enough.
pub fn reserved_start(pixels: usize) -> Option<usize> {
    pixels.checked_sub(config::SIGNATURE_BITS)
}

/// Write the signature into the alpha LSBs of the reserved range.
///
/// The caller guarantees the buffer has at least `SIGNATURE_BITS` pixels.
pub(crate) fn write(buffer: &mut PixelBuffer) {
    let Some(start) = reserved_start(buffer.pixel_count()) else {
        return;
    };
    for (i, &bit) in signature_bits().as_slice().iter().enumerate() {
        buffer.set_lsb(start + i, ALPHA, bit);
    }
}

/// Compare the alpha LSBs of the reserved range against the signature.
pub fn matches(buffer: &PixelBuffer) -> bool {
    let Some(start) = reserved_start(buffer.pixel_count()) else {
        debug!(
            "image has {} pixels, too small to carry a signature",
            buffer.pixel_count()
        );
        return false;
    };
    signature_bits()
        .as_slice()
        .iter()
        .enumerate()
        .all(|(i, &bit)| buffer.lsb(start + i, ALPHA) == bit)
}
