//! Treatment recommendation: scoring scope, normalization, the inventory
//! boost and top-N truncation.

use affliction_data::catalog::AfflictionCatalog;
use health_core::state::{CharacterHealth, StandardCurve};
use health_core::treatment::{RECOMMENDED_TREATMENT_COUNT, recommend_treatments};
use health_net::sync::{AfflictionEntry, HealthSyncMsg, LimbAfflictionEntry};
use std::collections::HashSet;

fn catalog() -> AfflictionCatalog {
    let specs = serde_json::from_str(
        r#"[
            { "identifier": "bleeding", "id": 2, "max_strength": 100.0,
              "treatments": [ { "item": "bandage", "suitability": 2.0 },
                              { "item": "tonicliquid", "suitability": 0.2 } ] },
            { "identifier": "burn", "id": 3, "max_strength": 100.0,
              "treatments": [ { "item": "antidama1", "suitability": 1.0 },
                              { "item": "bandage", "suitability": 0.5 } ] },
            { "identifier": "husk_parasite", "id": 6, "max_strength": 100.0,
              "treatments": [ { "item": "antiparasitic", "suitability": 4.0 },
                              { "item": "bandage", "suitability": -1.0 },
                              { "item": "fentanyl", "suitability": 0.1 },
                              { "item": "tonicliquid", "suitability": 0.1 },
                              { "item": "oxygenitetank", "suitability": 0.05 } ] }
        ]"#,
    )
    .expect("specs");
    AfflictionCatalog::from_specs(specs).expect("catalog")
}

fn limb_msg(cat: &AfflictionCatalog, entries: &[(usize, u32, f32)]) -> HealthSyncMsg {
    HealthSyncMsg {
        afflictions: vec![],
        limb_afflictions: entries
            .iter()
            .map(|&(limb_index, id, strength)| LimbAfflictionEntry {
                limb_index,
                entry: AfflictionEntry {
                    def: cat.lookup(id).expect("id").clone(),
                    strength,
                    periodic_timers: vec![],
                },
            })
            .collect(),
    }
}

#[test]
fn scores_are_normalized_and_sorted() {
    let cat = catalog();
    let mut health = CharacterHealth::new(100.0, 4);
    health.apply_sync(
        &limb_msg(&cat, &[(0, 2, 100.0)]),
        &cat,
        &StandardCurve,
        1.0,
    );
    let scores = recommend_treatments(&health, Some(0), &HashSet::new());
    assert_eq!(scores.len(), 2);
    assert_eq!(scores[0].item, "bandage");
    assert!((scores[0].score - 1.0).abs() < 1.0e-6, "top score normalizes to 1");
    assert!((scores[1].score - 0.1).abs() < 1.0e-6);
}

#[test]
fn inventory_items_are_boosted() {
    let cat = catalog();
    let mut health = CharacterHealth::new(100.0, 4);
    health.apply_sync(
        &limb_msg(&cat, &[(0, 2, 80.0), (0, 3, 80.0)]),
        &cat,
        &StandardCurve,
        1.0,
    );
    let empty_handed = recommend_treatments(&health, Some(0), &HashSet::new());
    assert_eq!(empty_handed[0].item, "bandage"); // 2.0 + 0.5 beats 1.0

    // carrying the burn salve outweighs the better raw suitability
    let inventory: HashSet<String> = ["antidama1".to_string()].into_iter().collect();
    let carrying = recommend_treatments(&health, Some(0), &inventory);
    assert_eq!(carrying[0].item, "antidama1");
}

#[test]
fn negative_suitability_survives_normalization() {
    let cat = catalog();
    let mut health = CharacterHealth::new(100.0, 4);
    health.apply_sync(
        &limb_msg(&cat, &[(1, 6, 100.0)]),
        &cat,
        &StandardCurve,
        1.0,
    );
    let scores = recommend_treatments(&health, Some(1), &HashSet::new());
    let bandage = scores
        .iter()
        .find(|s| s.item == "bandage")
        .expect("bandage listed");
    assert!(bandage.score < 0.0, "counterproductive treatments stay negative");
    assert_eq!(scores.last().expect("nonempty").item, "bandage");
}

#[test]
fn recommendations_are_capped() {
    let cat = catalog();
    let mut health = CharacterHealth::new(100.0, 4);
    // husk (5 items) + bleeding + burn share two of theirs = 6 distinct items
    health.apply_sync(
        &limb_msg(&cat, &[(2, 6, 50.0), (2, 2, 50.0), (2, 3, 50.0)]),
        &cat,
        &StandardCurve,
        1.0,
    );
    let scores = recommend_treatments(&health, Some(2), &HashSet::new());
    assert_eq!(scores.len(), RECOMMENDED_TREATMENT_COUNT);
}

#[test]
fn whole_character_scope_sees_every_limb() {
    let cat = catalog();
    let mut health = CharacterHealth::new(100.0, 4);
    health.apply_sync(
        &limb_msg(&cat, &[(0, 2, 100.0), (3, 3, 100.0)]),
        &cat,
        &StandardCurve,
        1.0,
    );
    let all = recommend_treatments(&health, None, &HashSet::new());
    assert!(all.iter().any(|s| s.item == "antidama1"));
    let only_limb0 = recommend_treatments(&health, Some(0), &HashSet::new());
    assert!(only_limb0.iter().all(|s| s.item != "antidama1"));
}
