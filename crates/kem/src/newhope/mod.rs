// kem/src/newhope/mod.rs

//! NewHope reconciliation.
//!
//! The responder calls [`helprec`] on its noisy polynomial `v` with a fresh
//! [`HelpRecSeed`], sends the hint inside message B, and keeps
//! `rec(v, hint)` as its key. The initiator runs [`rec`] on its own, slightly
//! different, polynomial with the received hint and obtains the same key.

mod encode;
mod reconcile;
mod types;

pub use self::encode::{decode_a, decode_b, encode_a, encode_b, pack_hint, unpack_hint};
pub use self::reconcile::{f, g, helprec, ld_decode, rec, validate_hint};
pub use self::types::{HelpRecSeed, SharedKey};
