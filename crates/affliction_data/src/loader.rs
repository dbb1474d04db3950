//! Loaders for affliction and limb content under `data/`.

use crate::affliction::AfflictionSpec;
use crate::catalog::AfflictionCatalog;
use crate::limb::LimbLayout;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

fn data_root() -> PathBuf {
    // Prefer top-level workspace `data/` so tests and tools can run from any crate.
    let here = std::path::Path::new(env!("CARGO_MANIFEST_DIR"));
    let ws = here.join("../../data");
    if ws.is_dir() { ws } else { here.join("data") }
}

/// Read a raw JSON file under `data/` and return its string.
pub fn read_json(rel: impl AsRef<Path>) -> Result<String> {
    let path = data_root().join(rel);
    let s = fs::read_to_string(&path).with_context(|| format!("read data: {}", path.display()))?;
    Ok(s)
}

/// Load and deserialize an affliction list (from data/afflictions.json or similar).
pub fn load_affliction_specs(rel: impl AsRef<Path>) -> Result<Vec<AfflictionSpec>> {
    let txt = read_json(rel)?;
    let specs: Vec<AfflictionSpec> =
        serde_json::from_str(&txt).context("parse affliction json")?;
    Ok(specs)
}

/// Load an affliction list and index it into a catalog.
pub fn load_catalog(rel: impl AsRef<Path>) -> Result<AfflictionCatalog> {
    AfflictionCatalog::from_specs(load_affliction_specs(rel)?)
}

/// Load a limb layout (from data/limbs/*).
pub fn load_limb_layout(rel: impl AsRef<Path>) -> Result<LimbLayout> {
    let txt = read_json(rel)?;
    let layout: LimbLayout = serde_json::from_str(&txt).context("parse limb json")?;
    Ok(layout)
}
