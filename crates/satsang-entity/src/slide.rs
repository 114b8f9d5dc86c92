//! Promotional slide entity model.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use satsang_core::types::DocumentId;

use crate::persisted::{lenient_order, Persisted};
use crate::status::PublishStatus;

/// A promotional slide on the app home screen.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromoSlide {
    /// Unique slide identifier.
    pub id: DocumentId,
    /// Durable URL of the slide image.
    pub image_url: String,
    /// Optional deep link opened on tap.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link_url: Option<String>,
    /// Caption per BCP-47 language tag (e.g., `"en"`, `"hi"`).
    #[serde(default)]
    pub captions: HashMap<String, String>,
    /// Advisory sort key within the slideshow.
    #[serde(
        default = "lenient_order::default",
        deserialize_with = "lenient_order::deserialize"
    )]
    pub order: i64,
    /// Publication status.
    pub status: PublishStatus,
    /// When the slide was created.
    pub created_at: DateTime<Utc>,
    /// When the slide was last updated.
    pub updated_at: DateTime<Utc>,
}

impl PromoSlide {
    /// Caption for a language, falling back to English.
    pub fn caption(&self, language: &str) -> Option<&str> {
        self.captions
            .get(language)
            .or_else(|| self.captions.get("en"))
            .map(String::as_str)
    }
}

/// Data required to create a new slide.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePromoSlide {
    pub image_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link_url: Option<String>,
    #[serde(default)]
    pub captions: HashMap<String, String>,
    pub order: i64,
    pub status: PublishStatus,
}

/// Partial update for a slide. A present `captions` map replaces the
/// whole stored map.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromoSlidePatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub captions: Option<HashMap<String, String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<PublishStatus>,
}

impl Persisted for PromoSlide {
    const COLLECTION: &'static str = "slides";
    type Create = CreatePromoSlide;
    type Patch = PromoSlidePatch;

    fn id(&self) -> &DocumentId {
        &self.id
    }

    fn created_at(&self) -> chrono::DateTime<chrono::Utc> {
        self.created_at
    }

    fn display_label(&self) -> &str {
        self.caption("en").unwrap_or(&self.image_url)
    }

    fn media_url(&self) -> Option<&str> {
        Some(&self.image_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn caption_falls_back_to_english() {
        let mut captions = HashMap::new();
        captions.insert("en".to_string(), "Welcome".to_string());
        captions.insert("hi".to_string(), "स्वागत".to_string());
        let slide = PromoSlide {
            id: DocumentId::new("s1"),
            image_url: "https://cdn.example/s1.jpg".into(),
            link_url: None,
            captions,
            order: 1,
            status: PublishStatus::Published,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        assert_eq!(slide.caption("hi"), Some("स्वागत"));
        assert_eq!(slide.caption("ta"), Some("Welcome"));
    }
}
