//! Chirp value entity and ordered collection.
//!
//! # Responsibility
//! - Hold the canonical record shared by the codec and persistence layers.
//! - Preserve construction order for collections read from storage.
//!
//! # Invariants
//! - `id` is opaque and caller-supplied; it is never generated here.
//! - `Chirp::new` rejects empty `id`, `text` or `author`; rows read back
//!   from storage are taken verbatim.
//! - `created_at` is a `YYYY-MM-DD HH:MM:SS` string and is kept verbatim.
//! - Equality is field-by-field; collection equality is order-sensitive.

use thiserror::Error;

/// Format used for `created_at` values on the wire and in storage.
pub const CREATED_AT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Validation errors raised while constructing a `Chirp`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ChirpValidationError {
    #[error("chirp id must not be empty")]
    EmptyId,
    #[error("chirp text must not be empty")]
    EmptyText,
    #[error("chirp author must not be empty")]
    EmptyAuthor,
}

/// A single short text post.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Chirp {
    id: String,
    text: String,
    author: String,
    created_at: String,
}

impl Chirp {
    /// Creates a chirp from its four fields.
    ///
    /// # Errors
    /// - Returns `ChirpValidationError` when `id`, `text` or `author` is empty.
    pub fn new(
        id: impl Into<String>,
        text: impl Into<String>,
        author: impl Into<String>,
        created_at: impl Into<String>,
    ) -> Result<Self, ChirpValidationError> {
        let chirp = Self {
            id: id.into(),
            text: text.into(),
            author: author.into(),
            created_at: created_at.into(),
        };
        chirp.validate()?;
        Ok(chirp)
    }

    /// Materializes a stored row field-for-field without validation.
    pub(crate) fn from_storage(
        id: String,
        text: String,
        author: String,
        created_at: String,
    ) -> Self {
        Self {
            id,
            text,
            author,
            created_at,
        }
    }

    fn validate(&self) -> Result<(), ChirpValidationError> {
        if self.id.is_empty() {
            return Err(ChirpValidationError::EmptyId);
        }
        if self.text.is_empty() {
            return Err(ChirpValidationError::EmptyText);
        }
        if self.author.is_empty() {
            return Err(ChirpValidationError::EmptyAuthor);
        }
        Ok(())
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    /// Creation timestamp as `YYYY-MM-DD HH:MM:SS`.
    pub fn created_at(&self) -> &str {
        &self.created_at
    }
}

/// Ordered, read-only sequence of chirps.
///
/// Keeps the order it was built with; no deduplication or re-sorting.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChirpCollection {
    chirps: Vec<Chirp>,
}

impl ChirpCollection {
    pub fn new(chirps: Vec<Chirp>) -> Self {
        Self { chirps }
    }

    pub fn len(&self) -> usize {
        self.chirps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chirps.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Chirp> {
        self.chirps.iter()
    }

    pub fn as_slice(&self) -> &[Chirp] {
        &self.chirps
    }

    pub fn into_vec(self) -> Vec<Chirp> {
        self.chirps
    }
}

impl From<Vec<Chirp>> for ChirpCollection {
    fn from(value: Vec<Chirp>) -> Self {
        Self::new(value)
    }
}

impl FromIterator<Chirp> for ChirpCollection {
    fn from_iter<I: IntoIterator<Item = Chirp>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl IntoIterator for ChirpCollection {
    type Item = Chirp;
    type IntoIter = std::vec::IntoIter<Chirp>;

    fn into_iter(self) -> Self::IntoIter {
        self.chirps.into_iter()
    }
}

impl<'a> IntoIterator for &'a ChirpCollection {
    type Item = &'a Chirp;
    type IntoIter = std::slice::Iter<'a, Chirp>;

    fn into_iter(self) -> Self::IntoIter {
        self.chirps.iter()
    }
}
