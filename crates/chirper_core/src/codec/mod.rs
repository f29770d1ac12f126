//! Wire-format codecs for chirps.
//!
//! # Responsibility
//! - Translate between `Chirp` values and external document formats.
//!
//! # Invariants
//! - Codecs are pure and hold no state between calls.
//! - Decoding never trusts a client-supplied timestamp.

pub mod json_api;
