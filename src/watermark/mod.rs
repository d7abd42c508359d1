//! LSB watermark codec.
//!
//! Message bits go into the blue-channel LSB of pixels picked by a
//! [`SlotSelector`](crate::slots::SlotSelector) seeded from the config. A fixed
//! signature goes into the alpha-channel LSB of the last
//! [`SIGNATURE_BITS`](crate::config::SIGNATURE_BITS) pixels and is the only
//! thing the extractor uses to decide whether an image is watermarked.

pub mod embed;
pub mod extract;
pub mod signature;

use thiserror::Error;

use crate::bits::CodecError;
use crate::config::{self, ConfigError};
use crate::slots::SlotError;

pub use embed::embed;
pub use extract::{detect, extract, verify};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum WatermarkError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("message encoding failed: {0}")]
    Codec(#[from] CodecError),
    #[error("image has {pixels} pixels, at least {required} are needed for the signature")]
    ImageTooSmall { pixels: usize, required: usize },
    #[error("message needs {needed} bits but the image only has room for {available}")]
    CapacityExceeded { needed: usize, available: usize },
    #[error("slot selection failed: {0}")]
    Slots(#[from] SlotError),
}

/// Number of message bits an image of `pixels` pixels can carry.
///
/// One pixel per bit, keeping the count strictly below the pixels left over
/// after the signature range.
pub fn message_capacity_bits(pixels: usize) -> usize {
    pixels.saturating_sub(config::SIGNATURE_BITS).saturating_sub(1)
}

pub(crate) fn check_capacity(pixels: usize, needed: usize) -> Result<(), WatermarkError> {
    if pixels < config::SIGNATURE_BITS {
        return Err(WatermarkError::ImageTooSmall {
            pixels,
            required: config::SIGNATURE_BITS,
        });
    }
    let available = message_capacity_bits(pixels);
    if needed > available {
        return Err(WatermarkError::CapacityExceeded { needed, available });
    }
    Ok(())
}
