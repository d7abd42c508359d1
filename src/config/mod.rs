use thiserror::Error;

/// Literal whose bit pattern marks an image as watermarked.
pub const SIGNATURE_TEXT: &str = "WATERMARK";
/// Signature length cap, also the size of the reserved trailing pixel range.
pub const SIGNATURE_BITS: usize = 64;

// Generator parameters
pub const PRNG_SCALE: f64 = 10_000.0;
/// Largest seed whose counter is still exactly representable as an `f64`.
pub const MAX_SEED: u64 = 1 << 53;

// Slot selection
/// Floor on consecutive collisions tolerated while drawing one slot.
pub const MAX_REDRAWS: usize = 10_000;
/// Redraws allowed per image pixel; the cap is the larger of the two.
pub const REDRAWS_PER_PIXEL: usize = 16;

/// Collision cap for an image of `total_pixels` pixels.
///
/// The last free pixels of a nearly full image are found with probability
/// `free / total` per draw, so the cap has to grow with the image.
pub fn redraw_cap(total_pixels: usize) -> usize {
    MAX_REDRAWS.max(total_pixels.saturating_mul(REDRAWS_PER_PIXEL))
}

// Defaults
pub const DEFAULT_STRENGTH: f64 = 0.3;
pub const DEFAULT_MESSAGE: &str = r#"{"watermark":true}"#;
/// Range the CLI draws from when no seed is supplied.
pub const DEFAULT_SEED_RANGE: std::ops::RangeInclusive<u64> = 1..=1_000_000;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("invalid seed {0}: must be between 1 and 2^53")]
    InvalidSeed(u64),
    #[error("invalid strength {0}: must be within [0, 1]")]
    InvalidStrength(f64),
}

/// Parameters shared by a matching embed/extract pair.
///
/// Extraction only recovers the message when it is given the same seed and a
/// message of the same length as the one used at embed time.
#[derive(Debug, Clone, PartialEq)]
pub struct WatermarkConfig {
    strength: f64,
    message: String,
    seed: u64,
}

impl WatermarkConfig {
    pub fn new(message: impl Into<String>, seed: u64) -> Result<Self, ConfigError> {
        Self::with_strength(message, seed, DEFAULT_STRENGTH)
    }

    pub fn with_strength(
        message: impl Into<String>,
        seed: u64,
        strength: f64,
    ) -> Result<Self, ConfigError> {
        let cfg = Self {
            strength,
            message: message.into(),
            seed,
        };
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.seed == 0 || self.seed > MAX_SEED {
            return Err(ConfigError::InvalidSeed(self.seed));
        }
        if !(0.0..=1.0).contains(&self.strength) {
            return Err(ConfigError::InvalidStrength(self.strength));
        }
        Ok(())
    }

    /// Advisory only; the bit-level scheme does not read it.
    pub fn strength(&self) -> f64 {
        self.strength
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}
