//! Checks that the shipped content files parse and index cleanly.

use affliction_data::loader;

#[test]
fn default_afflictions_load_and_index() {
    let cat = loader::load_catalog("afflictions.json").expect("load catalog");
    assert!(!cat.is_empty());
    let bleeding = cat.by_identifier("bleeding").expect("bleeding");
    assert_eq!(bleeding.id, 2);
    assert_eq!(bleeding.periodic_effects.len(), 1);
    assert!((bleeding.periodic_effects[0].min_interval - 2.0).abs() < f32::EPSILON);
    // the stun definition must be present for the sync shortcut to work
    assert!(cat.stun().is_some());
}

#[test]
fn humanoid_limb_layout_loads() {
    let layout = loader::load_limb_layout("limbs/humanoid.json").expect("load limbs");
    assert_eq!(layout.len(), 6);
    assert_eq!(layout.name(0), Some("head"));
    assert_eq!(layout.name(6), None);
}

#[test]
fn catalog_insertion_order_is_stable() {
    let cat = loader::load_catalog("afflictions.json").expect("load catalog");
    let ids: Vec<u32> = cat.iter().map(|d| d.id).collect();
    let mut sorted = ids.clone();
    sorted.sort_unstable();
    assert_eq!(ids, sorted, "content file lists definitions in id order");
}
