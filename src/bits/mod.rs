use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    #[error("character {ch:?} at position {position} is outside the single-byte range")]
    UnencodableChar { ch: char, position: usize },
    #[error("bit count {bits} is not a multiple of 8")]
    PartialByte { bits: usize },
    #[error("invalid binary digit {0:?}")]
    InvalidDigit(char),
}

/// Ordered binary digits, one `0`/`1` per element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BitString(Vec<u8>);

impl BitString {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    /// Keep at most the first `max` bits.
    pub fn truncated(mut self, max: usize) -> Self {
        self.0.truncate(max);
        self
    }
}

impl From<Vec<u8>> for BitString {
    /// Any non-zero element is read as a `1`.
    fn from(bits: Vec<u8>) -> Self {
        Self(bits.into_iter().map(|b| (b != 0) as u8).collect())
    }
}

impl FromStr for BitString {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.chars()
            .map(|c| match c {
                '0' => Ok(0),
                '1' => Ok(1),
                other => Err(CodecError::InvalidDigit(other)),
            })
            .collect::<Result<Vec<u8>, _>>()
            .map(Self)
    }
}

impl fmt::Display for BitString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &bit in &self.0 {
            f.write_str(if bit == 1 { "1" } else { "0" })?;
        }
        Ok(())
    }
}

/// Encode each character's code point as 8 bits, MSB first.
pub fn text_to_bits(text: &str) -> Result<BitString, CodecError> {
    let mut bits = Vec::with_capacity(text.len() * 8);
    for (position, ch) in text.chars().enumerate() {
        let code = u8::try_from(u32::from(ch))
            .map_err(|_| CodecError::UnencodableChar { ch, position })?;
        for bit_pos in (0..8).rev() {
            bits.push((code >> bit_pos) & 1);
        }
    }
    Ok(BitString(bits))
}

/// Decode groups of 8 bits (MSB first) into Latin-1 characters.
pub fn bits_to_text(bits: &BitString) -> Result<String, CodecError> {
    if bits.len() % 8 != 0 {
        return Err(CodecError::PartialByte { bits: bits.len() });
    }
    Ok(bits
        .0
        .chunks_exact(8)
        .map(|byte| char::from(byte.iter().fold(0u8, |acc, &b| (acc << 1) | b)))
        .collect())
}
