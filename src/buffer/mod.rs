use thiserror::Error;

/// Bytes per pixel: red, green, blue, alpha.
pub const CHANNELS: usize = 4;

pub const RED: usize = 0;
pub const GREEN: usize = 1;
pub const BLUE: usize = 2;
pub const ALPHA: usize = 3;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BufferError {
    #[error("image dimensions must be positive, got {width}x{height}")]
    ZeroDimension { width: u32, height: u32 },
    #[error("pixel data length mismatch: expected {expected} bytes, got {got}")]
    LengthMismatch { expected: usize, got: usize },
    #[error("buffers differ in size: {left:?} vs {right:?}")]
    DimensionMismatch {
        left: (u32, u32),
        right: (u32, u32),
    },
}

/// Decoded RGBA image, row-major, 8 bits per channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelBuffer {
    pub fn from_rgba(width: u32, height: u32, data: Vec<u8>) -> Result<Self, BufferError> {
        if width == 0 || height == 0 {
            return Err(BufferError::ZeroDimension { width, height });
        }
        let expected = width as usize * height as usize * CHANNELS;
        if data.len() != expected {
            return Err(BufferError::LengthMismatch {
                expected,
                got: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// A buffer with every pixel set to `rgba`.
    pub fn filled(width: u32, height: u32, rgba: [u8; 4]) -> Result<Self, BufferError> {
        let pixels = width as usize * height as usize;
        Self::from_rgba(width, height, rgba.repeat(pixels))
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    pub fn pixel(&self, index: usize) -> [u8; 4] {
        let off = index * CHANNELS;
        [
            self.data[off + RED],
            self.data[off + GREEN],
            self.data[off + BLUE],
            self.data[off + ALPHA],
        ]
    }

    pub fn channel(&self, index: usize, channel: usize) -> u8 {
        self.data[index * CHANNELS + channel]
    }

    pub fn channel_mut(&mut self, index: usize, channel: usize) -> &mut u8 {
        &mut self.data[index * CHANNELS + channel]
    }

    pub fn lsb(&self, index: usize, channel: usize) -> u8 {
        self.channel(index, channel) & 1
    }

    /// Force the least-significant bit of one channel, leaving the other bits alone.
    pub fn set_lsb(&mut self, index: usize, channel: usize, bit: u8) {
        let value = self.channel_mut(index, channel);
        if bit & 1 == 1 {
            *value |= 1;
        } else {
            *value &= !1;
        }
    }
}
