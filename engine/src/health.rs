//! Health core.
//!
//! Tracks a bounded health value and reports every mutation as a list of
//! [`HealthEvent`]s for whatever displays it. The character controller never
//! reads health.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum HealthError {
    #[error("health range is empty: min {min} must be below max {max}")]
    EmptyRange { min: f32, max: f32 },
}

/// Notification emitted when health changes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HealthEvent {
    /// Health moved by `delta` (signed) to `current`
    Changed { current: f32, max: f32, delta: f32 },
    /// Health dropped by `amount` (always positive)
    DamageTaken { amount: f32 },
    /// Health reached the minimum
    Died,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "HealthRecord")]
pub struct Health {
    max: f32,
    min: f32,
    current: f32,
}

/// Unchecked serialized form, validated on the way in.
#[derive(Deserialize)]
struct HealthRecord {
    max: f32,
    min: f32,
    current: f32,
}

impl TryFrom<HealthRecord> for Health {
    type Error = HealthError;

    fn try_from(record: HealthRecord) -> Result<Self, Self::Error> {
        let mut health = Self::with_range(record.min, record.max)?;
        if record.current.is_finite() {
            health.current = record.current.clamp(record.min, record.max);
        }
        Ok(health)
    }
}

impl Default for Health {
    fn default() -> Self {
        Self {
            max: 100.0,
            min: 0.0,
            current: 100.0,
        }
    }
}

impl Health {
    /// Full health in the range `0..=max`. `max` must be finite and positive.
    pub fn new(max: f32) -> Result<Self, HealthError> {
        Self::with_range(0.0, max)
    }

    /// Full health in the range `min..=max`.
    pub fn with_range(min: f32, max: f32) -> Result<Self, HealthError> {
        if !min.is_finite() || !max.is_finite() || min >= max {
            return Err(HealthError::EmptyRange { min, max });
        }
        Ok(Self { max, min, current: max })
    }

    pub fn current(&self) -> f32 {
        self.current
    }

    pub fn max(&self) -> f32 {
        self.max
    }

    pub fn min(&self) -> f32 {
        self.min
    }

    pub fn is_dead(&self) -> bool {
        self.current <= self.min
    }

    /// Current health as a fraction of the range, 0.0 to 1.0.
    pub fn fraction(&self) -> f32 {
        ((self.current - self.min) / (self.max - self.min)).clamp(0.0, 1.0)
    }

    /// Adds `delta` (negative for damage).
    ///
    /// Landing at or below the minimum kills: health is pinned to the minimum
    /// and [`HealthEvent::Died`] is emitted. Heals stop at the maximum. A dead
    /// entity ignores further changes until [`Health::set`] or
    /// [`Health::restore_to_full`].
    pub fn change(&mut self, delta: f32) -> Vec<HealthEvent> {
        if self.is_dead() || delta == 0.0 || !delta.is_finite() {
            return Vec::new();
        }

        let target = self.current + delta;
        if target > self.min {
            self.set(target)
        } else {
            let mut events = self.apply(self.min);
            tracing::debug!(max = self.max, "entity died");
            events.push(HealthEvent::Died);
            events
        }
    }

    /// Sets health directly, clamped to the range. Never emits `Died`.
    pub fn set(&mut self, value: f32) -> Vec<HealthEvent> {
        if !value.is_finite() {
            return Vec::new();
        }
        self.apply(value.clamp(self.min, self.max))
    }

    pub fn restore_to_full(&mut self) -> Vec<HealthEvent> {
        self.set(self.max)
    }

    fn apply(&mut self, value: f32) -> Vec<HealthEvent> {
        let delta = value - self.current;
        if delta == 0.0 {
            return Vec::new();
        }
        self.current = value;
        tracing::trace!(current = self.current, delta, "health changed");

        let mut events = vec![HealthEvent::Changed {
            current: self.current,
            max: self.max,
            delta,
        }];
        if delta < 0.0 {
            events.push(HealthEvent::DamageTaken { amount: -delta });
        }
        events
    }
}
