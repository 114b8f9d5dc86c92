//! Calendar event entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use satsang_core::types::DocumentId;

use crate::persisted::Persisted;
use crate::status::PublishStatus;

/// A calendar event shown in the app.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEvent {
    /// Unique event identifier.
    pub id: DocumentId,
    /// Display title.
    pub title: String,
    /// Display description.
    pub description: String,
    /// Event date as an ISO `YYYY-MM-DD` string, kept as stored.
    pub date: String,
    /// Optional venue/location text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Publication status.
    pub status: PublishStatus,
    /// When the event was created.
    pub created_at: DateTime<Utc>,
    /// When the event was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a new event.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCalendarEvent {
    pub title: String,
    pub description: String,
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub status: PublishStatus,
}

/// Partial update for an event.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEventPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<PublishStatus>,
}

impl Persisted for CalendarEvent {
    const COLLECTION: &'static str = "events";
    type Create = CreateCalendarEvent;
    type Patch = CalendarEventPatch;

    fn id(&self) -> &DocumentId {
        &self.id
    }

    fn created_at(&self) -> chrono::DateTime<chrono::Utc> {
        self.created_at
    }

    fn display_label(&self) -> &str {
        &self.title
    }
}
