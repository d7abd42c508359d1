use crate::config;

/// Reproducible sequence of values in `[0, 1)` derived from an integer seed.
///
/// Each step takes the fractional part of `sin(counter) * 10000` and then
/// advances the counter. This is not a statistically strong or secure source;
/// it only has to produce the same stream for the same seed, including across
/// images watermarked by other implementations of the scheme.
#[derive(Debug, Clone)]
pub struct SeededSequence {
    counter: u64,
}

impl SeededSequence {
    pub fn new(seed: u64) -> Self {
        Self { counter: seed }
    }

    pub fn next_f64(&mut self) -> f64 {
        let x = (self.counter as f64).sin() * config::PRNG_SCALE;
        self.counter += 1;
        x - x.floor()
    }
}

impl Iterator for SeededSequence {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        Some(self.next_f64())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_sequence() {
        let a: Vec<f64> = SeededSequence::new(42).take(100).collect();
        let b: Vec<f64> = SeededSequence::new(42).take(100).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn test_different_seed_different_sequence() {
        let a: Vec<f64> = SeededSequence::new(1).take(16).collect();
        let b: Vec<f64> = SeededSequence::new(2).take(16).collect();
        assert_ne!(a, b);
    }

    #[test]
    fn test_values_in_unit_interval() {
        for v in SeededSequence::new(987_654).take(10_000) {
            assert!((0.0..1.0).contains(&v), "value out of range: {}", v);
        }
    }

    #[test]
    fn test_first_value_uses_seed_before_increment() {
        let mut seq = SeededSequence::new(1);
        let x = 1f64.sin() * 10_000.0;
        assert_eq!(seq.next_f64(), x - x.floor());
        let y = 2f64.sin() * 10_000.0;
        assert_eq!(seq.next_f64(), y - y.floor());
    }

    #[test]
    fn test_offset_seed_is_shifted_stream() {
        let a: Vec<f64> = SeededSequence::new(10).skip(1).take(8).collect();
        let b: Vec<f64> = SeededSequence::new(11).take(8).collect();
        assert_eq!(a, b);
    }
}
