//! Nested read views of the AI-audio tree for display.

use serde::{Deserialize, Serialize};

use super::model::{AudioCategory, AudioChapter, AudioItem};

/// A chapter with its items embedded, sorted for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChapterWithItems {
    /// The chapter record.
    #[serde(flatten)]
    pub chapter: AudioChapter,
    /// Items sorted by `order` ascending, ties in fetch order. Empty
    /// when the item fetch for this chapter failed (partial reads are
    /// preferred over failing the whole tree).
    #[serde(rename = "audioItems")]
    pub audio_items: Vec<AudioItem>,
}

/// A category with its chapters (and their items) embedded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryWithContent {
    /// The category record.
    #[serde(flatten)]
    pub category: AudioCategory,
    /// Chapters sorted by `order` ascending, ties in fetch order.
    pub chapters: Vec<ChapterWithItems>,
}

impl CategoryWithContent {
    /// A category view with no children (assembly fallback).
    pub fn bare(category: AudioCategory) -> Self {
        Self {
            category,
            chapters: Vec::new(),
        }
    }

    /// Total number of items across all chapters.
    pub fn item_count(&self) -> usize {
        self.chapters.iter().map(|c| c.audio_items.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::status::PublishStatus;
    use chrono::Utc;
    use satsang_core::types::DocumentId;

    #[test]
    fn view_flattens_category_fields() {
        let category = AudioCategory {
            id: DocumentId::new("cat1"),
            name: "Meditation".into(),
            description: "Guided".into(),
            status: PublishStatus::Draft,
            cover_image_url: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        let view = CategoryWithContent::bare(category);
        let value = serde_json::to_value(&view).unwrap();
        assert_eq!(value["name"], "Meditation");
        assert_eq!(value["status"], "Draft");
        assert!(value["chapters"].as_array().unwrap().is_empty());
    }
}
