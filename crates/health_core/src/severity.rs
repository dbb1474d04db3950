//! Severity-ordered views over a character's afflictions, used to decide
//! what the UI surfaces first.

use crate::affliction::Affliction;
use crate::state::{CharacterHealth, VitalityCurve};
use affliction_data::affliction::AfflictionSpec;
use std::sync::Arc;

/// Order afflictions by descending damage-per-second. Equal rates are an
/// outright tie and keep their input order (the sort is stable); there is
/// no secondary key.
#[must_use = "returns a sorted view without touching the input"]
pub fn sort_by_severity<'a, I>(afflictions: I, exclude_buffs: bool) -> Vec<&'a Affliction>
where
    I: IntoIterator<Item = &'a Affliction>,
{
    let mut out: Vec<&Affliction> = afflictions
        .into_iter()
        .filter(|a| !(exclude_buffs && a.def().is_buff))
        .collect();
    out.sort_by(|a, b| b.damage_per_second().total_cmp(&a.damage_per_second()));
    out
}

/// One row of the merged, display-ready affliction list.
#[derive(Debug, Clone)]
pub struct DisplayedAffliction {
    pub def: Arc<AfflictionSpec>,
    /// Summed across limbs, clamped to the definition's maximum.
    pub strength: f32,
    pub damage_per_second: f32,
}

/// The character's afflictions as the UI should list them: the same
/// definition merged across targets, strength-zero and below-threshold
/// records dropped, most severe first.
#[must_use]
pub fn displayed_afflictions(health: &CharacterHealth) -> Vec<DisplayedAffliction> {
    let mut merged: Vec<DisplayedAffliction> = Vec::new();
    for a in health.all_afflictions() {
        match merged.iter_mut().find(|m| m.def.id == a.def().id) {
            Some(m) => {
                m.strength = (m.strength + a.strength()).min(m.def.max_strength);
                m.damage_per_second = m.damage_per_second.max(a.damage_per_second());
            }
            None => merged.push(DisplayedAffliction {
                def: a.def().clone(),
                strength: a.strength(),
                damage_per_second: a.damage_per_second(),
            }),
        }
    }
    merged.retain(|m| m.strength > m.def.activation_threshold);
    merged.sort_by(|x, y| y.damage_per_second.total_cmp(&x.damage_per_second));
    merged
}

/// Which limb the health UI should highlight when the user has not picked
/// one: the limb owning the most severe affliction if any registers, else
/// the limb carrying the most accumulated damage. `None` for limbless
/// characters.
#[must_use]
pub fn default_limb_selection(
    health: &CharacterHealth,
    curve: &dyn VitalityCurve,
) -> Option<usize> {
    let mut best: Option<(usize, f32, f32)> = None;
    for (health_index, limb) in health.limbs().iter().enumerate() {
        for a in limb.afflictions() {
            if a.def().is_buff {
                continue;
            }
            let better = match best {
                Some((_, dps, _)) => a.damage_per_second() > dps,
                None => true,
            };
            if better {
                best = Some((health_index, a.damage_per_second(), a.strength()));
            }
        }
    }
    if let Some((health_index, dps, strength)) = best {
        if dps > 0.0 || strength > 0.0 {
            return Some(health_index);
        }
    }

    let mut most_damaged: Option<(usize, f32)> = None;
    for (health_index, limb) in health.limbs().iter().enumerate() {
        let damage = limb.total_damage(curve);
        let better = match most_damaged {
            Some((_, d)) => damage > d,
            None => true,
        };
        if better {
            most_damaged = Some((health_index, damage));
        }
    }
    most_damaged.map(|(health_index, _)| health_index)
}
