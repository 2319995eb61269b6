//! Coordinator profiles.

use serde::{Deserialize, Serialize};

use crate::camp::CampRef;
use crate::search::Searchable;

/// A district coordinator profile as served by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coordinator {
    /// Backend-assigned identifier.
    pub id: i64,
    /// Full name.
    pub name: String,
    /// Contact email.
    pub email: String,
    /// Contact phone number.
    pub phone: String,
    /// Optional URL of the profile picture.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_picture: Option<String>,
    /// Free-text profile description.
    pub description: String,
    /// Assigned district label, e.g. "District 2231".
    pub district: String,
    /// Camps this coordinator has run, most recent editions included.
    #[serde(default)]
    pub camps: Vec<CampRef>,
}

impl Searchable for Coordinator {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.name, &self.district]
    }
}
