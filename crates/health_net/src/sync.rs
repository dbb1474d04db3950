//! Health sync message: character-wide afflictions, then limb afflictions.
//!
//! There is no length-prefix framing inside the message, so the only way to
//! get past an entry whose id the catalog cannot resolve is to consume its
//! fields at their declared widths anyway. The decoder does exactly that and
//! reports the entry instead of failing the whole message.

use crate::bits::{BitReader, BitWriter};
use affliction_data::affliction::AfflictionSpec;
use affliction_data::catalog::AfflictionCatalog;
use anyhow::{Result, bail};
use std::sync::Arc;

pub const STRENGTH_BITS: u32 = 8;
pub const TIMER_BITS: u32 = 8;
/// Range used to consume the strength field of an entry whose id did not
/// resolve. The value is discarded; only the width matters.
const SKIP_STRENGTH_MAX: f32 = 100.0;

/// One decoded character-wide affliction.
#[derive(Debug, Clone)]
pub struct AfflictionEntry {
    pub def: Arc<AfflictionSpec>,
    pub strength: f32,
    /// One elapsed-timer reading per periodic effect, in declaration order.
    pub periodic_timers: Vec<f32>,
}

/// One decoded limb-scoped affliction, addressed by stable health index.
#[derive(Debug, Clone)]
pub struct LimbAfflictionEntry {
    pub limb_index: usize,
    pub entry: AfflictionEntry,
}

#[derive(Debug, Clone, Default)]
pub struct HealthSyncMsg {
    pub afflictions: Vec<AfflictionEntry>,
    pub limb_afflictions: Vec<LimbAfflictionEntry>,
}

impl HealthSyncMsg {
    /// Parse a full message. Entries with unresolvable ids, out-of-range
    /// limb indices or timer counts that disagree with the definition are
    /// consumed and dropped (logged); only a truncated buffer is an `Err`.
    /// Nothing is decoded lazily, so a returned message is complete.
    pub fn decode(
        rd: &mut BitReader<'_>,
        catalog: &AfflictionCatalog,
        limb_count: usize,
    ) -> Result<Self> {
        let mut msg = Self::default();
        let affliction_count = rd.read_u8()?;
        for _ in 0..affliction_count {
            if let Some(entry) = read_entry(rd, catalog)? {
                msg.afflictions.push(entry);
            }
        }
        let limb_affliction_count = rd.read_u8()?;
        if limb_affliction_count > 0 && limb_count == 0 {
            bail!("limb afflictions for a character with no limbs");
        }
        for _ in 0..limb_affliction_count {
            let raw = rd.read_ranged_int(0, limb_count as u32 - 1)?;
            let limb_index = if (raw as usize) < limb_count {
                Some(raw as usize)
            } else {
                log::error!("limb index {raw} out of range (limb count {limb_count})");
                None
            };
            // the entry fields are consumed either way to keep the cursor aligned
            let entry = read_entry(rd, catalog)?;
            if let (Some(limb_index), Some(entry)) = (limb_index, entry) {
                msg.limb_afflictions.push(LimbAfflictionEntry { limb_index, entry });
            }
        }
        Ok(msg)
    }

    /// Write the message in the same layout the decoder expects.
    pub fn encode(&self, wr: &mut BitWriter, limb_count: usize) {
        wr.write_u8(u8::try_from(self.afflictions.len()).expect("affliction count fits u8"));
        for entry in &self.afflictions {
            write_entry(wr, entry);
        }
        wr.write_u8(
            u8::try_from(self.limb_afflictions.len()).expect("limb affliction count fits u8"),
        );
        for la in &self.limb_afflictions {
            debug_assert!(la.limb_index < limb_count);
            wr.write_ranged_int(la.limb_index as u32, 0, limb_count as u32 - 1);
            write_entry(wr, &la.entry);
        }
    }
}

fn read_entry(
    rd: &mut BitReader<'_>,
    catalog: &AfflictionCatalog,
) -> Result<Option<AfflictionEntry>> {
    let id = rd.read_u32()?;
    let Some(def) = catalog.lookup(id) else {
        log::warn!("affliction with the id {id} not found; skipping entry");
        let _ = rd.read_ranged_f32(0.0, SKIP_STRENGTH_MAX, STRENGTH_BITS)?;
        let periodic_count = rd.read_u8()?;
        for _ in 0..periodic_count {
            let _ = rd.read_bits(TIMER_BITS)?;
        }
        return Ok(None);
    };
    let strength = rd.read_ranged_f32(0.0, def.max_strength, STRENGTH_BITS)?;
    let periodic_count = usize::from(rd.read_u8()?);
    let declared = def.periodic_effects.len();
    let mut periodic_timers = Vec::with_capacity(periodic_count.min(declared));
    for j in 0..periodic_count {
        // past the declared list there is no range to map the raw bits onto
        if let Some(pe) = def.periodic_effects.get(j) {
            periodic_timers.push(rd.read_ranged_f32(pe.min_interval, pe.max_interval, TIMER_BITS)?);
        } else {
            let _ = rd.read_bits(TIMER_BITS)?;
        }
    }
    if periodic_count != declared {
        log::error!(
            "affliction {:?}: wire carries {periodic_count} periodic timers, definition declares {declared}; dropping entry",
            def.identifier
        );
        return Ok(None);
    }
    Ok(Some(AfflictionEntry {
        def: def.clone(),
        strength,
        periodic_timers,
    }))
}

fn write_entry(wr: &mut BitWriter, entry: &AfflictionEntry) {
    wr.write_u32(entry.def.id);
    wr.write_ranged_f32(entry.strength, 0.0, entry.def.max_strength, STRENGTH_BITS);
    wr.write_u8(u8::try_from(entry.periodic_timers.len()).expect("periodic count fits u8"));
    for (timer, pe) in entry
        .periodic_timers
        .iter()
        .zip(&entry.def.periodic_effects)
    {
        wr.write_ranged_f32(*timer, pe.min_interval, pe.max_interval, TIMER_BITS);
    }
}
