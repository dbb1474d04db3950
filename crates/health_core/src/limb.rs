//! Per-limb affliction containers, addressed by stable health index.

use crate::affliction::Affliction;
use crate::state::VitalityCurve;
use affliction_data::affliction::AfflictionSpec;
use std::sync::Arc;

/// Affliction list for one limb. At most one instance per definition.
#[derive(Debug, Clone, Default)]
pub struct LimbHealth {
    afflictions: Vec<Affliction>,
}

impl LimbHealth {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn afflictions(&self) -> &[Affliction] {
        &self.afflictions
    }

    pub(crate) fn afflictions_mut(&mut self) -> &mut [Affliction] {
        &mut self.afflictions
    }

    #[must_use]
    pub fn find(&self, affliction_id: u32) -> Option<&Affliction> {
        self.afflictions.iter().find(|a| a.def().id == affliction_id)
    }

    pub(crate) fn push(&mut self, affliction: Affliction) {
        self.afflictions.push(affliction);
    }

    /// Existing instance for the definition, or a fresh one at `strength`.
    pub(crate) fn upsert(
        &mut self,
        def: &Arc<AfflictionSpec>,
        strength: f32,
        now: f64,
    ) -> &mut Affliction {
        let idx = match self.afflictions.iter().position(|a| a.def().id == def.id) {
            Some(i) => i,
            None => {
                self.push(Affliction::new(def.clone(), strength, now));
                self.afflictions.len() - 1
            }
        };
        &mut self.afflictions[idx]
    }

    /// Summed vitality decrease of the limb's non-buff afflictions.
    #[must_use]
    pub fn total_damage(&self, curve: &dyn VitalityCurve) -> f32 {
        self.afflictions
            .iter()
            .filter(|a| !a.def().is_buff)
            .map(|a| curve.vitality_decrease(a.def(), a.strength()))
            .sum()
    }

    /// Average burn overlay weight across the limb's afflictions.
    #[must_use]
    pub fn burn_overlay_strength(&self) -> f32 {
        self.overlay_strength(|a| a.def().burn_overlay_alpha)
    }

    /// Average damage overlay weight across the limb's afflictions.
    #[must_use]
    pub fn damage_overlay_strength(&self) -> f32 {
        self.overlay_strength(|a| a.def().damage_overlay_alpha)
    }

    fn overlay_strength(&self, alpha: impl Fn(&Affliction) -> f32) -> f32 {
        if self.afflictions.is_empty() {
            return 0.0;
        }
        let sum: f32 = self
            .afflictions
            .iter()
            .map(|a| a.strength() / a.def().max_strength * alpha(a))
            .sum();
        sum / self.afflictions.len() as f32
    }
}
