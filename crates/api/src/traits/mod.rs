//! Trait definitions for the NewHope API

pub mod serialize;

pub use serialize::{Serialize, SerializeSecret};
