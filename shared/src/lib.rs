//! ==============================================================================
//! lib.rs - shared types for the museum admin dashboard
//! ==============================================================================
//!
//! purpose:
//!     defines the records exchanged with the museum collection endpoint.
//!     the backend owns these records; the dashboard only reads and writes
//!     them over http.
//!
//! relationships:
//!     - used by: dashboard/api (request bodies, response decoding)
//!     - used by: dashboard/screen (list reconciliation, form payloads)
//!
//! wire format:
//!     json, camelCase keys. `openingHours` is the only multi-word field.
//!     `id` is omitted when absent so a create body never carries one.
//!
//! ==============================================================================

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// backend-assigned museum identifier
pub type MuseumId = u64;

// ==============================================================================
// museum records
// ==============================================================================

/// a museum as stored by the backend
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Museum {
    /// absent until the backend has persisted the record
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<MuseumId>,
    pub name: String,
    pub city: String,
    /// postal code
    pub zip: String,
    pub address: String,
    pub opening_hours: String,
    pub description: String,
    #[serde(default)]
    pub exhibitions: Vec<Exhibition>,
}

/// an exhibition nested inside a museum
///
/// the dashboard never edits these, so every field it does not name is kept
/// in `extra` and written back untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Exhibition {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(default)]
    pub name: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// editable museum fields as submitted by the form
///
/// used as the update body; exhibitions are not part of the form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MuseumDraft {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<MuseumId>,
    pub name: String,
    pub city: String,
    pub zip: String,
    pub address: String,
    pub opening_hours: String,
    pub description: String,
}

impl MuseumDraft {
    /// copy the editable fields out of a stored record
    pub fn from_museum(museum: &Museum) -> Self {
        Self {
            id: museum.id,
            name: museum.name.clone(),
            city: museum.city.clone(),
            zip: museum.zip.clone(),
            address: museum.address.clone(),
            opening_hours: museum.opening_hours.clone(),
            description: museum.description.clone(),
        }
    }

    /// build a new, unsaved museum with no exhibitions
    pub fn into_new_museum(self) -> Museum {
        Museum {
            id: None,
            name: self.name,
            city: self.city,
            zip: self.zip,
            address: self.address,
            opening_hours: self.opening_hours,
            description: self.description,
            exhibitions: Vec::new(),
        }
    }
}

// ==============================================================================
// query types
// ==============================================================================

/// list filter; an empty string means "no filter" for that field
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MuseumQuery {
    pub city: String,
    pub name: String,
}

impl MuseumQuery {
    pub fn new(city: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            city: city.into(),
            name: name.into(),
        }
    }

    /// query string pairs; both keys are always sent, even when empty
    pub fn pairs(&self) -> [(&'static str, &str); 2] {
        [("city", self.city.as_str()), ("name", self.name.as_str())]
    }
}

// ==============================================================================
// tests
// ==============================================================================
