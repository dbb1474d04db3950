//! Mutable per-character affliction state.

use affliction_data::affliction::AfflictionSpec;
use std::sync::Arc;

/// Runtime record for one affliction definition on one target. Created the
/// first time the definition shows up in a sync message; never deleted —
/// a strength of zero means "absent" and the record is inert.
#[derive(Debug, Clone)]
pub struct Affliction {
    def: Arc<AfflictionSpec>,
    strength: f32,
    /// Last synced elapsed value per periodic effect, in declaration order.
    periodic_timers: Vec<f32>,
    damage_per_second: f32,
    last_strength_change: f64,
}

impl Affliction {
    #[must_use]
    pub fn new(def: Arc<AfflictionSpec>, strength: f32, now: f64) -> Self {
        let strength = strength.clamp(0.0, def.max_strength);
        let periodic_timers = def.periodic_effects.iter().map(|p| p.min_interval).collect();
        Self {
            def,
            strength,
            periodic_timers,
            damage_per_second: 0.0,
            last_strength_change: now,
        }
    }

    #[must_use]
    pub fn def(&self) -> &Arc<AfflictionSpec> {
        &self.def
    }

    #[must_use]
    pub fn strength(&self) -> f32 {
        self.strength
    }

    /// Rate the strength has been rising at, per the last two changes.
    /// Zero when steady or falling.
    #[must_use]
    pub fn damage_per_second(&self) -> f32 {
        self.damage_per_second
    }

    /// Update strength (clamped to the definition's range), refreshing the
    /// damage-per-second estimate from the change over elapsed time.
    pub fn set_strength(&mut self, value: f32, now: f64) {
        let value = value.clamp(0.0, self.def.max_strength);
        if now > self.last_strength_change {
            let dt = now - self.last_strength_change;
            self.damage_per_second = (f64::from(value - self.strength) / dt).max(0.0) as f32;
            self.last_strength_change = now;
        }
        self.strength = value;
    }

    /// Stored elapsed value for one periodic effect slot.
    #[must_use]
    pub fn periodic_timer(&self, effect_index: usize) -> f32 {
        self.periodic_timers.get(effect_index).copied().unwrap_or(0.0)
    }

    pub(crate) fn set_periodic_timer(&mut self, effect_index: usize, value: f32) {
        if let Some(t) = self.periodic_timers.get_mut(effect_index) {
            *t = value;
        }
    }

    /// Whether the affliction is strong enough to surface in the UI.
    #[must_use]
    pub fn should_show_icon(&self) -> bool {
        self.strength > self.def.activation_threshold
    }
}
