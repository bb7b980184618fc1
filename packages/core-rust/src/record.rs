//! Land parcel record schema and its JSON codec.
//!
//! A [`Record`] is persisted under its `name` as a JSON object. The wire
//! field names (`docType`, `landprice`) match the records already written by
//! the deployed ledger, so stored state stays readable across versions.

use serde::{Deserialize, Serialize};

/// Discriminator written into every record created by the registry.
///
/// A shared state store may interleave other record types; `docType`
/// tells them apart.
pub const LAND_DOC_TYPE: &str = "land";

/// Errors from encoding or decoding a [`Record`].
#[derive(Debug, thiserror::Error)]
pub enum RecordCodecError {
    #[error("invalid record encoding: {0}")]
    Json(#[from] serde_json::Error),
}

/// A land parcel ownership record, one per parcel.
///
/// Every field except `owner` is fixed at registration; `owner` changes only
/// through a transfer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Record type discriminator. Records written before the discriminator
    /// was populated decode with an empty `kind`.
    #[serde(rename = "docType", default)]
    pub kind: String,
    /// Unique parcel name; also the store key.
    pub name: String,
    /// Free-form size descriptor.
    pub dimension: String,
    /// Free-form location descriptor.
    pub locality: String,
    /// Free-form price descriptor, stored as text.
    #[serde(rename = "landprice")]
    pub price: String,
    /// Current owner identifier.
    pub owner: String,
}

impl Record {
    /// Creates a land record. The owner is stored exactly as given.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        dimension: impl Into<String>,
        locality: impl Into<String>,
        price: impl Into<String>,
        owner: impl Into<String>,
    ) -> Self {
        Self {
            kind: LAND_DOC_TYPE.to_string(),
            name: name.into(),
            dimension: dimension.into(),
            locality: locality.into(),
            price: price.into(),
            owner: owner.into(),
        }
    }

    /// Returns a copy of this record owned by `new_owner`, lowercased.
    ///
    /// Ownership identity is case-insensitive, so the stored owner is always
    /// the lowercase form after a transfer.
    #[must_use]
    pub fn with_owner(mut self, new_owner: &str) -> Self {
        self.owner = new_owner.to_lowercase();
        self
    }

    /// Serializes the record to its stored JSON form.
    ///
    /// # Errors
    ///
    /// Returns [`RecordCodecError::Json`] if serialization fails. This cannot
    /// happen for a record made of plain strings, but the error is surfaced
    /// rather than discarded.
    pub fn encode(&self) -> Result<Vec<u8>, RecordCodecError> {
        Ok(serde_json::to_vec(self)?)
    }

    /// Parses a record from its stored JSON form.
    ///
    /// Unknown fields are ignored. A missing `docType` decodes as an empty
    /// `kind`; any other missing field is an error.
    ///
    /// # Errors
    ///
    /// Returns [`RecordCodecError::Json`] for malformed or foreign-schema data.
    pub fn decode(bytes: &[u8]) -> Result<Self, RecordCodecError> {
        Ok(serde_json::from_slice(bytes)?)
    }
}
