//! Affliction definitions: the content-side description of a damage or
//! status effect, its recurring sub-effects and its treatment table.

use serde::Deserialize;

/// One status effect applied when a periodic effect fires. Interpretation of
/// `kind`/`amount` belongs to the gameplay layer, not to this crate.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StatusEffectSpec {
    pub kind: String,
    #[serde(default)]
    pub amount: f32,
}

/// Recurring sub-effect of an affliction. The interval is re-rolled between
/// `min_interval` and `max_interval` for every occurrence, so two snapshots
/// of the elapsed timer never line up exactly.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PeriodicEffectSpec {
    pub min_interval: f32,
    pub max_interval: f32,
    #[serde(default)]
    pub effects: Vec<StatusEffectSpec>,
}

/// Suitability of one treatment item against the owning affliction.
/// Negative values mark counterproductive treatments.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TreatmentSpec {
    pub item: String,
    pub suitability: f32,
}

/// Immutable affliction definition. Loaded once at content-load time and
/// shared by reference across every character's runtime state.
#[derive(Debug, Clone, Deserialize)]
pub struct AfflictionSpec {
    pub identifier: String,
    /// Stable numeric id used on the wire.
    pub id: u32,
    #[serde(default)]
    pub name: String,
    pub max_strength: f32,
    #[serde(default)]
    pub is_buff: bool,
    /// Strength at or below which the affliction is hidden from display.
    #[serde(default)]
    pub activation_threshold: f32,
    #[serde(default)]
    pub burn_overlay_alpha: f32,
    #[serde(default)]
    pub damage_overlay_alpha: f32,
    #[serde(default)]
    pub periodic_effects: Vec<PeriodicEffectSpec>,
    #[serde(default)]
    pub treatments: Vec<TreatmentSpec>,
}

impl AfflictionSpec {
    /// Suitability of `item` against this affliction; 0 when unlisted.
    #[must_use]
    pub fn treatment_suitability(&self, item: &str) -> f32 {
        self.treatments
            .iter()
            .find(|t| t.item == item)
            .map_or(0.0, |t| t.suitability)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_minimal_spec() {
        let json = r#"{ "identifier": "bleeding", "id": 3, "max_strength": 100.0 }"#;
        let spec: AfflictionSpec = serde_json::from_str(json).expect("parse");
        assert_eq!(spec.identifier, "bleeding");
        assert!(!spec.is_buff);
        assert!(spec.periodic_effects.is_empty());
        assert!(spec.treatments.is_empty());
    }

    #[test]
    fn treatment_lookup_defaults_to_zero() {
        let json = r#"{
            "identifier": "burn", "id": 4, "max_strength": 100.0,
            "treatments": [ { "item": "bandage", "suitability": 2.0 } ]
        }"#;
        let spec: AfflictionSpec = serde_json::from_str(json).expect("parse");
        assert!((spec.treatment_suitability("bandage") - 2.0).abs() < f32::EPSILON);
        assert!(spec.treatment_suitability("morphine").abs() < f32::EPSILON);
    }
}
