use sha2::{Digest, Sha256};

use crate::buffer::PixelBuffer;

/// SHA-256 digest type.
pub type Sha256Digest = [u8; 32];

/// Compute SHA-256 over the dimensions and RGBA bytes of a buffer.
pub fn pixel_sha256(buffer: &PixelBuffer) -> Sha256Digest {
    let mut hasher = Sha256::new();
    hasher.update(buffer.width().to_le_bytes());
    hasher.update(buffer.height().to_le_bytes());
    hasher.update(buffer.as_bytes());
    let result = hasher.finalize();
    let mut digest = [0u8; 32];
    digest.copy_from_slice(&result);
    digest
}

/// Hex form of [`pixel_sha256`], independent of the file encoding.
pub fn pixel_digest(buffer: &PixelBuffer) -> String {
    pixel_sha256(buffer)
        .iter()
        .map(|b| format!("{:02x}", b))
        .collect()
}
