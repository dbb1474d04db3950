//! affliction_data: content schemas and loaders for the health model.
//!
//! Extracted into its own crate so the wire and state crates can depend on a
//! stable data API. Everything here is immutable after load and shared by
//! reference (`Arc`) across characters.

pub mod affliction;
pub mod catalog;
pub mod limb;
pub mod loader;

pub use affliction::{AfflictionSpec, PeriodicEffectSpec, StatusEffectSpec, TreatmentSpec};
pub use catalog::AfflictionCatalog;
pub use limb::{LimbLayout, LimbSpec};
