//! JSON:API codec for chirps.
//!
//! # Responsibility
//! - Decode a JSON:API resource document into a `Chirp`.
//! - Encode chirps and chirp collections into JSON:API documents.
//!
//! # Invariants
//! - "Not JSON" (`MalformedDocument`) and "JSON with the wrong shape"
//!   (`InvalidDocumentShape`) are always reported as different kinds.
//! - Required elements are checked in a fixed order; the first failure wins.
//! - `created_at` on decode is the decode time, never a wire value.

use crate::model::chirp::{Chirp, ChirpCollection, ChirpValidationError, CREATED_AT_FORMAT};
use chrono::{DateTime, Utc};
use serde_json::{json, Map, Value};
use thiserror::Error;

/// JSON:API resource type for chirps.
const CHIRP_RESOURCE_TYPE: &str = "chirp";

pub type TransformResult<T> = Result<T, TransformError>;

/// Decode failures for JSON:API chirp documents.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransformError {
    /// Payload is not syntactically valid JSON.
    #[error("malformed JSON document: {message}")]
    MalformedDocument { message: String },
    /// Payload is JSON but misses or mistypes a required JSON:API element.
    #[error("invalid JSON:API document at `{element}`: {message}")]
    InvalidDocumentShape {
        element: &'static str,
        message: String,
    },
}

impl TransformError {
    fn missing(element: &'static str) -> Self {
        Self::InvalidDocumentShape {
            element,
            message: format!("required element `{element}` is missing"),
        }
    }

    fn wrong_type(element: &'static str, expected: &str) -> Self {
        Self::InvalidDocumentShape {
            element,
            message: format!("element `{element}` must be {expected}"),
        }
    }

    /// Returns the offending element path for shape errors.
    pub fn element(&self) -> Option<&'static str> {
        match self {
            Self::MalformedDocument { .. } => None,
            Self::InvalidDocumentShape { element, .. } => Some(element),
        }
    }
}

/// Stateless JSON:API transformer for `Chirp`.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonApiChirpTransformer;

impl JsonApiChirpTransformer {
    pub fn new() -> Self {
        Self
    }

    /// Decodes a resource document, stamping `created_at` with the current
    /// UTC time.
    ///
    /// # Errors
    /// - `MalformedDocument` when `raw` is not valid JSON.
    /// - `InvalidDocumentShape` when a required element is missing, mistyped,
    ///   empty, or `data.type` is not `chirp`.
    pub fn to_chirp(&self, raw: &str) -> TransformResult<Chirp> {
        self.to_chirp_at(raw, Utc::now())
    }

    /// Decodes a resource document using `now` as the creation time.
    pub fn to_chirp_at(&self, raw: &str, now: DateTime<Utc>) -> TransformResult<Chirp> {
        let document: Value =
            serde_json::from_str(raw).map_err(|err| TransformError::MalformedDocument {
                message: err.to_string(),
            })?;

        let data = required_object(document.get("data"), "data")?;

        let kind = required_string(data.get("type"), "data.type")?;
        if kind != CHIRP_RESOURCE_TYPE {
            return Err(TransformError::InvalidDocumentShape {
                element: "data.type",
                message: format!("expected resource type `{CHIRP_RESOURCE_TYPE}`, got `{kind}`"),
            });
        }

        let id = required_string(data.get("id"), "data.id")?;
        let attributes = required_object(data.get("attributes"), "data.attributes")?;
        let text = required_string(attributes.get("text"), "data.attributes.text")?;
        let author = required_string(attributes.get("author"), "data.attributes.author")?;

        let created_at = now.format(CREATED_AT_FORMAT).to_string();
        Chirp::new(id, text, author, created_at).map_err(|err| {
            let element = match err {
                ChirpValidationError::EmptyId => "data.id",
                ChirpValidationError::EmptyText => "data.attributes.text",
                ChirpValidationError::EmptyAuthor => "data.attributes.author",
            };
            TransformError::InvalidDocumentShape {
                element,
                message: err.to_string(),
            }
        })
    }

    /// Encodes one chirp as a JSON:API resource document.
    pub fn to_json(&self, chirp: &Chirp) -> String {
        json!({ "data": resource(chirp) }).to_string()
    }

    /// Encodes a collection as a JSON:API collection document, keeping order.
    pub fn to_json_collection(&self, chirps: &ChirpCollection) -> String {
        let data: Vec<Value> = chirps.iter().map(resource).collect();
        json!({ "data": data }).to_string()
    }
}

fn resource(chirp: &Chirp) -> Value {
    json!({
        "id": chirp.id(),
        "type": CHIRP_RESOURCE_TYPE,
        "attributes": {
            "text": chirp.text(),
            "author": chirp.author(),
            "created_at": chirp.created_at(),
        }
    })
}

// `null` is treated as absent.
fn required_object<'a>(
    value: Option<&'a Value>,
    element: &'static str,
) -> TransformResult<&'a Map<String, Value>> {
    match value {
        None | Some(Value::Null) => Err(TransformError::missing(element)),
        Some(Value::Object(map)) => Ok(map),
        Some(_) => Err(TransformError::wrong_type(element, "an object")),
    }
}

fn required_string<'a>(value: Option<&'a Value>, element: &'static str) -> TransformResult<&'a str> {
    match value {
        None | Some(Value::Null) => Err(TransformError::missing(element)),
        Some(Value::String(text)) => Ok(text.as_str()),
        Some(_) => Err(TransformError::wrong_type(element, "a string")),
    }
}
