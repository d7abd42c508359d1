use std::collections::HashSet;

use log::debug;
use thiserror::Error;

use crate::config;
use crate::prng::SeededSequence;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SlotError {
    #[error("requested {requested} slots but only {available} pixels exist")]
    Oversubscribed { requested: usize, available: usize },
    #[error("no free pixel found after {redraws} redraws ({consumed} of {total} pixels consumed)")]
    Exhausted {
        redraws: usize,
        consumed: usize,
        total: usize,
    },
}

/// Draws distinct pixel indices in `[0, total_pixels)` from a seeded sequence.
///
/// Draw order is the bit order: the i-th slot returned carries message bit i,
/// so embedding and extraction must construct the selector identically.
pub struct SlotSelector {
    total_pixels: usize,
    sequence: SeededSequence,
    consumed: HashSet<usize>,
    redraw_cap: usize,
}

impl SlotSelector {
    pub fn new(total_pixels: usize, sequence: SeededSequence) -> Self {
        Self {
            total_pixels,
            sequence,
            consumed: HashSet::new(),
            redraw_cap: config::redraw_cap(total_pixels),
        }
    }

    /// Override the number of consecutive collisions tolerated per slot.
    pub fn with_redraw_cap(mut self, redraw_cap: usize) -> Self {
        self.redraw_cap = redraw_cap;
        self
    }

    pub fn with_seed(total_pixels: usize, seed: u64) -> Self {
        Self::new(total_pixels, SeededSequence::new(seed))
    }

    pub fn consumed(&self) -> usize {
        self.consumed.len()
    }

    /// Draw the next unused index, redrawing on collisions.
    pub fn next_slot(&mut self) -> Result<usize, SlotError> {
        if self.consumed.len() >= self.total_pixels {
            return Err(SlotError::Oversubscribed {
                requested: self.consumed.len() + 1,
                available: self.total_pixels,
            });
        }

        for _ in 0..=self.redraw_cap {
            let r = self.sequence.next_f64();
            // r < 1 in practice; the clamp keeps a rounded-up 1.0 in range
            let index = ((r * self.total_pixels as f64).floor() as usize).min(self.total_pixels - 1);
            if self.consumed.insert(index) {
                return Ok(index);
            }
        }

        Err(SlotError::Exhausted {
            redraws: self.redraw_cap,
            consumed: self.consumed.len(),
            total: self.total_pixels,
        })
    }

    /// Draw `count` distinct indices in draw order.
    pub fn select(&mut self, count: usize) -> Result<Vec<usize>, SlotError> {
        let requested = self.consumed.len() + count;
        if requested > self.total_pixels {
            return Err(SlotError::Oversubscribed {
                requested,
                available: self.total_pixels,
            });
        }

        let mut slots = Vec::with_capacity(count);
        for _ in 0..count {
            slots.push(self.next_slot()?);
        }
        debug!(
            "selected {} slots from {} pixels ({} consumed)",
            count,
            self.total_pixels,
            self.consumed.len()
        );
        Ok(slots)
    }
}
