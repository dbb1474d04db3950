//! Character health aggregate and the sync reconciliation pass.

use crate::affliction::Affliction;
use crate::limb::LimbHealth;
use affliction_data::affliction::AfflictionSpec;
use affliction_data::catalog::AfflictionCatalog;
use anyhow::Result;
use health_net::bits::BitReader;
use health_net::sync::{AfflictionEntry, HealthSyncMsg};
use std::sync::Arc;

/// Damage-curve seam: converts one affliction's strength into vitality lost.
pub trait VitalityCurve {
    fn vitality_decrease(&self, def: &AfflictionSpec, strength: f32) -> f32;
}

/// Default curve: debuffs cost their full strength, buffs credit a fifth of
/// theirs back.
#[derive(Default, Debug, Clone, Copy)]
pub struct StandardCurve;

impl VitalityCurve for StandardCurve {
    fn vitality_decrease(&self, def: &AfflictionSpec, strength: f32) -> f32 {
        if def.is_buff {
            -strength * 0.2
        } else {
            strength
        }
    }
}

/// One periodic effect firing detected during reconciliation. Applying the
/// definition's status effects is the caller's job; `effect_index` points
/// into `def.periodic_effects`.
#[derive(Debug, Clone)]
pub struct PeriodicFire {
    /// Health index of the owning limb; `None` for character-wide afflictions.
    pub limb: Option<usize>,
    pub def: Arc<AfflictionSpec>,
    pub effect_index: usize,
}

/// Aggregate health state for one character. The sole mutator of affliction
/// strengths; everything else reads.
#[derive(Debug)]
pub struct CharacterHealth {
    max_vitality: f32,
    vitality: f32,
    displayed_vitality: f32,
    stun: f32,
    afflictions: Vec<Affliction>,
    limbs: Vec<LimbHealth>,
}

impl CharacterHealth {
    #[must_use]
    pub fn new(max_vitality: f32, limb_count: usize) -> Self {
        Self {
            max_vitality,
            vitality: max_vitality,
            displayed_vitality: max_vitality,
            stun: 0.0,
            afflictions: Vec::new(),
            limbs: (0..limb_count).map(|_| LimbHealth::new()).collect(),
        }
    }

    #[must_use]
    pub fn max_vitality(&self) -> f32 {
        self.max_vitality
    }

    /// Current vitality. Signed: goes negative when afflictions outweigh
    /// the maximum.
    #[must_use]
    pub fn vitality(&self) -> f32 {
        self.vitality
    }

    /// Vitality as last published to the UI by a completed sync pass.
    #[must_use]
    pub fn displayed_vitality(&self) -> f32 {
        self.displayed_vitality
    }

    /// Strength of the designated stun affliction, as of the last sync.
    #[must_use]
    pub fn stun(&self) -> f32 {
        self.stun
    }

    #[must_use]
    pub fn afflictions(&self) -> &[Affliction] {
        &self.afflictions
    }

    #[must_use]
    pub fn limbs(&self) -> &[LimbHealth] {
        &self.limbs
    }

    #[must_use]
    pub fn limb(&self, health_index: usize) -> Option<&LimbHealth> {
        self.limbs.get(health_index)
    }

    #[must_use]
    pub fn limb_count(&self) -> usize {
        self.limbs.len()
    }

    /// Every affliction: character-wide first, then per limb in health-index
    /// order.
    pub fn all_afflictions(&self) -> impl Iterator<Item = &Affliction> {
        self.afflictions
            .iter()
            .chain(self.limbs.iter().flat_map(|l| l.afflictions().iter()))
    }

    /// Recompute vitality from every contained affliction.
    pub fn calculate_vitality(&mut self, curve: &dyn VitalityCurve) {
        let decrease: f32 = self
            .all_afflictions()
            .map(|a| curve.vitality_decrease(a.def(), a.strength()))
            .sum();
        self.vitality = self.max_vitality - decrease;
    }

    /// Decode a sync payload and reconcile it in one step. The message is
    /// parsed completely before any state changes, so a malformed buffer
    /// leaves the character untouched.
    pub fn apply_message(
        &mut self,
        bytes: &[u8],
        catalog: &AfflictionCatalog,
        curve: &dyn VitalityCurve,
        now: f64,
    ) -> Result<Vec<PeriodicFire>> {
        let mut rd = BitReader::new(bytes);
        let msg = HealthSyncMsg::decode(&mut rd, catalog, self.limbs.len())?;
        Ok(self.apply_sync(&msg, catalog, curve, now))
    }

    /// Reconcile a decoded message into this state.
    ///
    /// The message is the full set of afflictions the server still considers
    /// active: anything of ours it does not mention is forced to zero, and
    /// every mentioned entry is upserted in place, keeping its periodic
    /// timers. Returns the periodic effects whose timers wrapped since the
    /// previous snapshot.
    pub fn apply_sync(
        &mut self,
        msg: &HealthSyncMsg,
        catalog: &AfflictionCatalog,
        curve: &dyn VitalityCurve,
        now: f64,
    ) -> Vec<PeriodicFire> {
        let mut fires = Vec::new();
        let stun_id = catalog.stun().map(|d| d.id);

        // deactivate character-wide afflictions the message no longer carries
        for a in &mut self.afflictions {
            if !msg.afflictions.iter().any(|e| e.def.id == a.def().id) {
                a.set_strength(0.0, now);
            }
        }
        for entry in &msg.afflictions {
            let idx = match self
                .afflictions
                .iter()
                .position(|a| a.def().id == entry.def.id)
            {
                Some(i) => i,
                None => {
                    self.afflictions
                        .push(Affliction::new(entry.def.clone(), entry.strength, now));
                    self.afflictions.len() - 1
                }
            };
            self.afflictions[idx].set_strength(entry.strength, now);
            if stun_id == Some(entry.def.id) {
                self.stun = self.afflictions[idx].strength();
            }
            detect_wraps(&mut self.afflictions[idx], entry, None, &mut fires);
        }

        // same pass per limb
        for (health_index, limb) in self.limbs.iter_mut().enumerate() {
            for a in limb.afflictions_mut() {
                let still_active = msg
                    .limb_afflictions
                    .iter()
                    .any(|e| e.limb_index == health_index && e.entry.def.id == a.def().id);
                if !still_active {
                    a.set_strength(0.0, now);
                }
            }
        }
        for la in &msg.limb_afflictions {
            let Some(limb) = self.limbs.get_mut(la.limb_index) else {
                continue;
            };
            let a = limb.upsert(&la.entry.def, la.entry.strength, now);
            a.set_strength(la.entry.strength, now);
            detect_wraps(a, &la.entry, Some(la.limb_index), &mut fires);
        }

        self.calculate_vitality(curve);
        self.displayed_vitality = self.vitality;
        fires
    }
}

/// Compare each decoded timer reading against the stored elapsed value.
///
/// Intervals are re-rolled per occurrence between min and max, so a plain
/// "decreased" check is unreliable; a jump of more than half the minimum
/// interval is taken to mean the timer wrapped and the effect fired. This is
/// a best-effort edge detector over two noisy snapshots, not an event
/// notification: it can miss fires and can false-positive on a fresh record.
fn detect_wraps(
    a: &mut Affliction,
    entry: &AfflictionEntry,
    limb: Option<usize>,
    fires: &mut Vec<PeriodicFire>,
) {
    let def = a.def().clone();
    for (effect_index, &reading) in entry.periodic_timers.iter().enumerate() {
        let Some(pe) = def.periodic_effects.get(effect_index) else {
            break;
        };
        if reading - a.periodic_timer(effect_index) > pe.min_interval / 2.0 {
            a.set_periodic_timer(effect_index, reading);
            fires.push(PeriodicFire {
                limb,
                def: def.clone(),
                effect_index,
            });
        }
    }
}
