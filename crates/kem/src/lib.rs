//! NewHope reconciliation and key-exchange message layer
//!
//! This crate turns a noisy ring element into a 32-byte shared key that both
//! parties agree on: [`helprec`] quantizes the responder's polynomial and
//! emits a 2-bit hint, [`rec`] decodes a peer's polynomial against that hint.
//! Message encoding for the two key-exchange messages sits on top.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod error;
pub mod newhope;

// Re-exports
pub use error::{Error, Result};
pub use newhope::{
    decode_a, decode_b, encode_a, encode_b, helprec, pack_hint, rec, unpack_hint, HelpRecSeed,
    SharedKey,
};
