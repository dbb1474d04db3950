//! `health_net`: wire format for character health synchronization.
//!
//! Scope
//! - LSB-first bit cursor over byte buffers
//! - Ranged fixed-point value codec (bounded quantization error)
//! - Encode/decode of the two-section affliction sync message
//!
//! The transport (framing, reliability, compression) lives elsewhere; this
//! crate consumes an already-delivered, already-ordered byte buffer.
#![deny(warnings, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]
#![allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]

pub mod bits;
pub mod sync;
