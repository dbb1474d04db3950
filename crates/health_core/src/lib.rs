//! `health_core`: client-side character health state.
//!
//! Responsibilities
//! - Owns affliction instances, character-wide and per-limb
//! - Reconciles incoming sync messages into that state
//! - Serves vitality, severity and treatment queries to the UI layer
//!
//! One decode-and-apply runs to completion before any query observes the
//! result; callers serialize mutation of a given character.
#![deny(warnings, clippy::all, clippy::pedantic)]
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::implicit_hasher
)]

pub mod affliction;
pub mod limb;
pub mod severity;
pub mod state;
pub mod treatment;

pub use affliction::Affliction;
pub use limb::LimbHealth;
pub use state::{CharacterHealth, PeriodicFire, StandardCurve, VitalityCurve};
