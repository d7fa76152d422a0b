//! # Documents
//!
//! The unit of storage in the document store. A [`Document`] is an id plus a JSON object of
//! fields; a [`NewDocument`] is what a client hands to the store for writing.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt::Display;

/// JSON object holding a document's fields.
pub type Fields = Map<String, Value>;

/// Store-assigned identifier of a document.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DocumentId(pub String);

impl DocumentId {
    /// Generates a fresh identifier, the way the store does on `Add`.
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().simple().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for DocumentId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for DocumentId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl Display for DocumentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A stored document as returned by `List` and `Get`.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub id: DocumentId,
    pub fields: Fields,
}

impl Document {
    pub fn new(id: impl Into<DocumentId>, fields: Fields) -> Self {
        Self {
            id: id.into(),
            fields,
        }
    }

    /// Returns the field as a string, if present and a string.
    pub fn str_field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).and_then(Value::as_str)
    }

    /// Returns the field as a number. Integers and floats are both accepted.
    pub fn number_field(&self, name: &str) -> Option<f64> {
        self.fields.get(name).and_then(Value::as_f64)
    }

    /// Returns the field as a list of strings. Non-string entries are skipped.
    pub fn string_list_field(&self, name: &str) -> Option<Vec<String>> {
        self.fields.get(name).and_then(Value::as_array).map(|values| {
            values
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
    }
}

/// Payload for writing a new document.
///
/// Field names listed in `server_timestamps` are filled in by the store with its own clock at
/// write time, overwriting whatever the client put there.
#[derive(Debug, Clone, PartialEq)]
pub struct NewDocument {
    pub fields: Value,
    pub server_timestamps: Vec<String>,
}

impl NewDocument {
    pub fn new(fields: Value) -> Self {
        Self {
            fields,
            server_timestamps: Vec::new(),
        }
    }

    /// Asks the store to stamp `field` with the server write time.
    pub fn with_server_timestamp(mut self, field: impl Into<String>) -> Self {
        self.server_timestamps.push(field.into());
        self
    }

    /// Builds a document from any serializable record.
    pub fn from_record<R: Serialize>(record: &R) -> Result<Self, serde_json::Error> {
        Ok(Self::new(serde_json::to_value(record)?))
    }
}
