//! Treatment recommendation: which items are worth applying to a limb (or
//! to the whole character), given what currently afflicts it.

use crate::affliction::Affliction;
use crate::state::CharacterHealth;
use std::collections::HashSet;

/// How many recommendations the UI shows.
pub const RECOMMENDED_TREATMENT_COUNT: usize = 5;
/// Items the character already carries are preferred by this factor.
const INVENTORY_SUITABILITY_MULTIPLIER: f32 = 10.0;

#[derive(Debug, Clone, PartialEq)]
pub struct TreatmentScore {
    pub item: String,
    pub score: f32,
}

/// Score candidate treatments for `limb` (or for the whole character when
/// `None`), normalize by the largest magnitude, boost items in `inventory`,
/// and return the best `RECOMMENDED_TREATMENT_COUNT` in descending order.
/// Equal scores keep their first-seen (content) order.
#[must_use]
pub fn recommend_treatments(
    health: &CharacterHealth,
    limb: Option<usize>,
    inventory: &HashSet<String>,
) -> Vec<TreatmentScore> {
    let mut scores: Vec<TreatmentScore> = Vec::new();
    match limb {
        Some(health_index) => {
            if let Some(l) = health.limb(health_index) {
                accumulate(&mut scores, l.afflictions().iter());
            }
        }
        None => accumulate(&mut scores, health.all_afflictions()),
    }

    let max_magnitude = scores.iter().map(|s| s.score.abs()).fold(0.0f32, f32::max);
    if max_magnitude > 0.0 {
        for s in &mut scores {
            s.score /= max_magnitude;
        }
    }
    for s in &mut scores {
        if inventory.contains(&s.item) {
            s.score *= INVENTORY_SUITABILITY_MULTIPLIER;
        }
    }
    scores.sort_by(|a, b| b.score.total_cmp(&a.score));
    scores.truncate(RECOMMENDED_TREATMENT_COUNT);
    scores
}

fn accumulate<'a>(scores: &mut Vec<TreatmentScore>, afflictions: impl Iterator<Item = &'a Affliction>) {
    for a in afflictions {
        if a.strength() <= 0.0 {
            continue;
        }
        // stronger afflictions pull their treatments up the list
        let weight = a.strength() / a.def().max_strength;
        for t in &a.def().treatments {
            let contribution = t.suitability * weight;
            match scores.iter_mut().find(|s| s.item == t.item) {
                Some(s) => s.score += contribution,
                None => scores.push(TreatmentScore {
                    item: t.item.clone(),
                    score: contribution,
                }),
            }
        }
    }
}
