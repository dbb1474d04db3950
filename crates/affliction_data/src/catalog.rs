//! Catalog: canonical read-only index of affliction definitions.
//!
//! Built once from content specs and then only read, so it can be shared
//! freely across threads (behind an `Arc`) without locking.

use crate::affliction::AfflictionSpec;
use anyhow::{Result, bail};
use std::collections::HashMap;
use std::sync::Arc;

/// Identifier of the definition whose strength drives the character's stun
/// state during reconciliation.
pub const STUN_IDENTIFIER: &str = "stun";

#[derive(Debug, Default)]
pub struct AfflictionCatalog {
    defs: Vec<Arc<AfflictionSpec>>,
    by_id: HashMap<u32, usize>,
    by_identifier: HashMap<String, usize>,
}

impl AfflictionCatalog {
    /// Index the given specs. Rejects duplicate ids/identifiers and
    /// malformed strength or interval ranges up front, so lookups never
    /// have to re-validate.
    pub fn from_specs(specs: Vec<AfflictionSpec>) -> Result<Self> {
        let mut cat = Self::default();
        for spec in specs {
            if spec.max_strength <= 0.0 {
                bail!(
                    "affliction {:?}: max_strength must be positive",
                    spec.identifier
                );
            }
            for (i, pe) in spec.periodic_effects.iter().enumerate() {
                if pe.min_interval < 0.0 || pe.max_interval < pe.min_interval {
                    bail!(
                        "affliction {:?}: periodic effect {i} has interval range [{}, {}]",
                        spec.identifier,
                        pe.min_interval,
                        pe.max_interval
                    );
                }
            }
            if cat.by_id.contains_key(&spec.id) {
                bail!("duplicate affliction id {} ({})", spec.id, spec.identifier);
            }
            if cat.by_identifier.contains_key(&spec.identifier) {
                bail!("duplicate affliction identifier {:?}", spec.identifier);
            }
            let idx = cat.defs.len();
            cat.by_id.insert(spec.id, idx);
            cat.by_identifier.insert(spec.identifier.clone(), idx);
            cat.defs.push(Arc::new(spec));
        }
        Ok(cat)
    }

    #[must_use]
    pub fn lookup(&self, id: u32) -> Option<&Arc<AfflictionSpec>> {
        self.by_id.get(&id).map(|&i| &self.defs[i])
    }

    #[must_use]
    pub fn by_identifier(&self, identifier: &str) -> Option<&Arc<AfflictionSpec>> {
        self.by_identifier.get(identifier).map(|&i| &self.defs[i])
    }

    /// The designated stun definition, when the content set carries one.
    #[must_use]
    pub fn stun(&self) -> Option<&Arc<AfflictionSpec>> {
        self.by_identifier(STUN_IDENTIFIER)
    }

    /// Definitions in insertion (content) order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<AfflictionSpec>> {
        self.defs.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.defs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }
}
