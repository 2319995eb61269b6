//! Camp records and the creation DTO.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::coordinator::Coordinator;
use crate::search::Searchable;

/// Lifecycle status of a camp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CampStatus {
    /// Accepting applications.
    #[default]
    Open,
    /// No longer accepting applications.
    Closed,
    /// Cancelled before taking place.
    Cancelled,
    /// Moved to the archive after its edition ended.
    Archived,
}

/// A camp as served by the backend.
///
/// The schema is owned by the backend; the client treats the record as
/// opaque apart from the fields it displays and filters on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Camp {
    /// Backend-assigned identifier.
    pub id: i64,
    /// Camp name.
    pub name: String,
    /// Free-text description.
    pub description: String,
    /// Host country.
    pub country: String,
    /// The coordinator responsible for the camp.
    pub coordinator: Coordinator,
    /// First day of the camp.
    pub date_start: NaiveDate,
    /// Last day of the camp.
    pub date_end: NaiveDate,
    /// Minimum participant age.
    pub age_min: u8,
    /// Maximum participant age.
    pub age_max: u8,
    /// Participation fee in EUR.
    pub price: f64,
    /// Current lifecycle status.
    pub status: CampStatus,
    /// Optional URL of the camp flyer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flyer_pdf: Option<String>,
    /// Optional URL of the camp image.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Total participant limit.
    pub entire_limit: u32,
    /// Limit on male participants.
    pub male_limit: u32,
    /// Limit on female participants.
    pub female_limit: u32,
    /// Limit per sending country.
    pub limit_per_country: u32,
}

impl Searchable for Camp {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.name, &self.country, &self.description]
    }
}

/// Payload for creating a new camp.
///
/// Server-owned fields (`id`, `coordinator`, attachments) are absent; the
/// backend assigns them and returns the full [`Camp`]. New camps are always
/// created `Open`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CampDraft {
    /// Camp name.
    pub name: String,
    /// Free-text description.
    pub description: String,
    /// Host country.
    pub country: String,
    /// First day of the camp.
    pub date_start: NaiveDate,
    /// Last day of the camp.
    pub date_end: NaiveDate,
    /// Minimum participant age.
    pub age_min: u8,
    /// Maximum participant age.
    pub age_max: u8,
    /// Participation fee in EUR.
    pub price: f64,
    /// Always [`CampStatus::Open`] on creation.
    pub status: CampStatus,
    /// Total participant limit.
    pub entire_limit: u32,
    /// Limit on male participants.
    pub male_limit: u32,
    /// Limit on female participants.
    pub female_limit: u32,
    /// Limit per sending country.
    pub limit_per_country: u32,
}

/// Abbreviated camp reference embedded in coordinator profiles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CampRef {
    /// Backend-assigned identifier.
    pub id: i64,
    /// Camp name.
    pub name: String,
    /// Edition year.
    pub year: i32,
}
