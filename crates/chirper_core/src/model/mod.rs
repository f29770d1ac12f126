//! Domain model for short text posts.
//!
//! # Responsibility
//! - Define the immutable `Chirp` value and its ordered collection.
//!
//! # Invariants
//! - Every `Chirp` carries all four fields; newly built chirps have
//!   non-empty `id`, `text` and `author`.
//! - Values are never mutated after construction.

pub mod chirp;
