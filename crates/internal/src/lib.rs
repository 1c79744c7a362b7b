//! Internal utilities for the NewHope crates
//!
//! Nothing in here is part of the public API contract; the helpers exist so
//! that the algorithm crates express every secret-dependent decision as
//! integer masking instead of control flow.

#![no_std]
#![forbid(unsafe_code)]

pub mod constant_time;
