//! Limb layout: the ordered list of limbs whose position in the list is the
//! stable health index. Distinct from any transient ragdoll/object ordering.

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct LimbSpec {
    pub name: String,
}

/// Ordered limb list for one character species. Position == health index.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LimbLayout {
    pub limbs: Vec<LimbSpec>,
}

impl LimbLayout {
    #[must_use]
    pub fn len(&self) -> usize {
        self.limbs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.limbs.is_empty()
    }

    #[must_use]
    pub fn name(&self, health_index: usize) -> Option<&str> {
        self.limbs.get(health_index).map(|l| l.name.as_str())
    }
}
