//! Book entity model.
//!
//! Books mirror the audio tree structurally but collapsed to two
//! levels: chapter parts are embedded in the book document as an
//! ordered array instead of living in their own collection.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use satsang_core::types::DocumentId;

use crate::persisted::{lenient_order, Persisted};
use crate::status::PublishStatus;

/// A book in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    /// Unique book identifier.
    pub id: DocumentId,
    /// Display title.
    pub title: String,
    /// Author name.
    pub author: String,
    /// Display description.
    pub description: String,
    /// Optional cover image URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_image_url: Option<String>,
    /// BCP-47 language tag of the text.
    pub language: String,
    /// Publication status.
    pub status: PublishStatus,
    /// Embedded chapter parts, displayed by `order` ascending.
    #[serde(default)]
    pub chapters: Vec<BookPart>,
    /// When the book was created.
    pub created_at: DateTime<Utc>,
    /// When the book was last updated.
    pub updated_at: DateTime<Utc>,
}

/// An embedded chapter part of a book.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookPart {
    /// Part title.
    pub title: String,
    /// Part body text.
    pub content: String,
    /// Advisory sort key.
    #[serde(
        default = "lenient_order::default",
        deserialize_with = "lenient_order::deserialize"
    )]
    pub order: i64,
}

/// Data required to create a new book.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBook {
    pub title: String,
    pub author: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_image_url: Option<String>,
    pub language: String,
    pub status: PublishStatus,
    #[serde(default)]
    pub chapters: Vec<BookPart>,
}

/// Partial update for a book.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<PublishStatus>,
    /// Replaces the whole embedded part array when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chapters: Option<Vec<BookPart>>,
}

impl Persisted for Book {
    const COLLECTION: &'static str = "books";
    type Create = CreateBook;
    type Patch = BookPatch;

    fn id(&self) -> &DocumentId {
        &self.id
    }

    fn created_at(&self) -> chrono::DateTime<chrono::Utc> {
        self.created_at
    }

    fn display_label(&self) -> &str {
        &self.title
    }

    fn media_url(&self) -> Option<&str> {
        self.cover_image_url.as_deref()
    }
}
