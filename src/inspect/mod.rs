use rayon::prelude::*;

use crate::buffer::{BufferError, PixelBuffer, ALPHA, BLUE, CHANNELS};
use crate::config;
use crate::watermark;

/// How much message an image can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capacity {
    pub pixels: usize,
    /// Pixels holding the signature.
    pub reserved: usize,
    pub message_bits: usize,
    /// Single-byte characters, 8 bits each.
    pub message_chars: usize,
}

pub fn capacity(buffer: &PixelBuffer) -> Capacity {
    let pixels = buffer.pixel_count();
    let message_bits = watermark::message_capacity_bits(pixels);
    Capacity {
        pixels,
        reserved: pixels.min(config::SIGNATURE_BITS),
        message_bits,
        message_chars: message_bits / 8,
    }
}

/// Per-pixel differences between two same-sized buffers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiffReport {
    pub pixels: usize,
    pub changed_pixels: usize,
    pub blue_lsb_flips: usize,
    pub alpha_lsb_flips: usize,
    /// Changes that are not a single LSB flip in the blue or alpha channel.
    pub other_changes: usize,
}

impl DiffReport {
    fn merge(self, other: Self) -> Self {
        Self {
            pixels: self.pixels + other.pixels,
            changed_pixels: self.changed_pixels + other.changed_pixels,
            blue_lsb_flips: self.blue_lsb_flips + other.blue_lsb_flips,
            alpha_lsb_flips: self.alpha_lsb_flips + other.alpha_lsb_flips,
            other_changes: self.other_changes + other.other_changes,
        }
    }

    /// True when every difference is an LSB flip the watermark could have made.
    pub fn is_lsb_only(&self) -> bool {
        self.other_changes == 0
    }
}

fn diff_pixel(a: &[u8], b: &[u8]) -> DiffReport {
    let mut report = DiffReport {
        pixels: 1,
        ..Default::default()
    };
    if a == b {
        return report;
    }
    report.changed_pixels = 1;
    for channel in 0..CHANNELS {
        let delta = a[channel] ^ b[channel];
        match (channel, delta) {
            (_, 0) => {}
            (BLUE, 1) => report.blue_lsb_flips += 1,
            (ALPHA, 1) => report.alpha_lsb_flips += 1,
            _ => report.other_changes += 1,
        }
    }
    report
}

/// Compare two buffers pixel by pixel.
pub fn diff(original: &PixelBuffer, marked: &PixelBuffer) -> Result<DiffReport, BufferError> {
    if original.dimensions() != marked.dimensions() {
        return Err(BufferError::DimensionMismatch {
            left: original.dimensions(),
            right: marked.dimensions(),
        });
    }

    Ok(original
        .as_bytes()
        .par_chunks_exact(CHANNELS)
        .zip(marked.as_bytes().par_chunks_exact(CHANNELS))
        .map(|(a, b)| diff_pixel(a, b))
        .reduce(DiffReport::default, DiffReport::merge))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::RED;
    use crate::config::WatermarkConfig;

    #[test]
    fn test_capacity_of_ten_by_ten() {
        let buf = PixelBuffer::filled(10, 10, [0, 0, 0, 0]).unwrap();
        let cap = capacity(&buf);
        assert_eq!(cap.pixels, 100);
        assert_eq!(cap.reserved, 64);
        assert_eq!(cap.message_bits, 35);
        assert_eq!(cap.message_chars, 4);
    }

    #[test]
    fn test_capacity_of_tiny_image() {
        let buf = PixelBuffer::filled(3, 3, [0, 0, 0, 0]).unwrap();
        let cap = capacity(&buf);
        assert_eq!(cap.reserved, 9);
        assert_eq!(cap.message_chars, 0);
    }

    #[test]
    fn test_identical_buffers() {
        let buf = PixelBuffer::filled(16, 16, [1, 2, 3, 4]).unwrap();
        let report = diff(&buf, &buf.clone()).unwrap();
        assert_eq!(report.pixels, 256);
        assert_eq!(report.changed_pixels, 0);
        assert!(report.is_lsb_only());
    }

    #[test]
    fn test_classifies_changes() {
        let a = PixelBuffer::filled(4, 4, [10, 10, 10, 10]).unwrap();
        let mut b = a.clone();
        b.set_lsb(0, BLUE, 1);
        b.set_lsb(1, ALPHA, 1);
        *b.channel_mut(2, RED) = 200;
        *b.channel_mut(3, BLUE) = 12;

        let report = diff(&a, &b).unwrap();
        assert_eq!(report.changed_pixels, 4);
        assert_eq!(report.blue_lsb_flips, 1);
        assert_eq!(report.alpha_lsb_flips, 1);
        assert_eq!(report.other_changes, 2);
        assert!(!report.is_lsb_only());
    }

    #[test]
    fn test_embedding_is_lsb_only() {
        let original = PixelBuffer::filled(32, 32, [100, 100, 100, 255]).unwrap();
        let cfg = WatermarkConfig::new("watermarked!", 31).unwrap();
        let marked = watermark::embed(&original, &cfg).unwrap();
        let report = diff(&original, &marked).unwrap();
        assert!(report.is_lsb_only());
        assert!(report.blue_lsb_flips > 0);
        assert!(report.alpha_lsb_flips > 0);
        assert!(report.blue_lsb_flips <= 96);
        assert!(report.alpha_lsb_flips <= 64);
    }

    #[test]
    fn test_dimension_mismatch() {
        let a = PixelBuffer::filled(2, 3, [0, 0, 0, 0]).unwrap();
        let b = PixelBuffer::filled(3, 2, [0, 0, 0, 0]).unwrap();
        assert!(matches!(
            diff(&a, &b),
            Err(BufferError::DimensionMismatch { .. })
        ));
    }
}
