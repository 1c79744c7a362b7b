//! ChaCha20 with the NewHope state layout

pub mod chacha20;

pub use chacha20::ChaCha20;
