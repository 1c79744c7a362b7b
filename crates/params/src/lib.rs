//! Constant values for the NewHope primitives
//!
//! Every size and arithmetic constant that has to agree byte-for-byte with a
//! peer implementation lives here, so the algorithm crates never spell a
//! magic number twice.

#![no_std]
#![forbid(unsafe_code)]

pub mod pqc;
pub mod utils;
