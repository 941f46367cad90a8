//! Bounded player health.

use crate::types::MAX_HEALTH;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Health {
    current: u32,
    max: u32,
}

impl Health {
    /// Full health with the given maximum
    pub fn new(max: u32) -> Self {
        Self { current: max, max }
    }

    pub fn current(&self) -> u32 {
        self.current
    }

    pub fn max(&self) -> u32 {
        self.max
    }

    /// Subtract `amount`, stopping at zero.
    pub fn damage(&mut self, amount: u32) {
        self.current = self.current.saturating_sub(amount);
    }

    /// Add `amount`, stopping at `max`.
    pub fn heal(&mut self, amount: u32) {
        self.current = self.current.saturating_add(amount).min(self.max);
    }

    pub fn is_alive(&self) -> bool {
        self.current > 0
    }

    /// `current / max` in 0.0..=1.0
    pub fn fraction(&self) -> f32 {
        if self.max == 0 {
            return 0.0;
        }
        self.current as f32 / self.max as f32
    }
}

impl Default for Health {
    fn default() -> Self {
        Self::new(MAX_HEALTH)
    }
}
