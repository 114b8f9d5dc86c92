//! Content tree CRUD with cascading lifecycle management.
//!
//! The three collections behind the AI-audio tree have no referential
//! integrity of their own; this service maintains it. Parents are
//! validated on create, and deletes cascade child-before-parent in
//! sequence so a partially failed cascade can always be reissued from
//! the top: deleting an already-deleted record is a no-op throughout.
//!
//! There is no multi-document transaction underneath. A cascade that
//! fails partway leaves already-processed children gone and the parent
//! record in place, and surfaces a `CascadeDelete` error telling the
//! operator that partial cleanup may have occurred.

use std::sync::Arc;

use tracing::{info, warn};

use satsang_core::error::AppError;
use satsang_core::result::AppResult;
use satsang_core::traits::MediaResolver;
use satsang_core::types::DocumentId;
use satsang_entity::audio_tree::{
    AudioCategory, AudioCategoryPatch, AudioChapter, AudioChapterPatch, AudioItem, AudioItemPatch,
    CategoryWithContent, ChapterWithItems, CreateAudioCategory, CreateAudioChapter,
    CreateAudioItem,
};
use satsang_store::repositories::{CategoryRepository, ChapterRepository, ItemRepository};

/// Manages the category → chapter → item tree.
#[derive(Debug, Clone)]
pub struct ContentTreeService {
    categories: Arc<CategoryRepository>,
    chapters: Arc<ChapterRepository>,
    items: Arc<ItemRepository>,
    media: Arc<dyn MediaResolver>,
}

impl ContentTreeService {
    /// Create a new content tree service.
    pub fn new(
        categories: Arc<CategoryRepository>,
        chapters: Arc<ChapterRepository>,
        items: Arc<ItemRepository>,
        media: Arc<dyn MediaResolver>,
    ) -> Self {
        Self {
            categories,
            chapters,
            items,
            media,
        }
    }

    // ── Create ───────────────────────────────────────────────────

    /// Create a new category.
    pub async fn create_category(&self, payload: CreateAudioCategory) -> AppResult<AudioCategory> {
        let category = self.categories.create(&payload).await?;
        info!(category_id = %category.id, name = %category.name, "Category created");
        Ok(category)
    }

    /// Create a new chapter under an existing category.
    ///
    /// The owning category is fetched first; creating a chapter under a
    /// missing category is rejected rather than silently orphaned.
    pub async fn create_chapter(&self, payload: CreateAudioChapter) -> AppResult<AudioChapter> {
        self.require_category(&payload.category_id).await?;
        let chapter = self.chapters.create(&payload).await?;
        info!(
            chapter_id = %chapter.id,
            category_id = %chapter.category_id,
            title = %chapter.title,
            "Chapter created"
        );
        Ok(chapter)
    }

    /// Create a new item under an existing chapter.
    ///
    /// The caller supplies the denormalized `category_id`; it must equal
    /// the owning chapter's, otherwise the tree would disagree with
    /// itself on per-category item queries.
    pub async fn create_item(&self, payload: CreateAudioItem) -> AppResult<AudioItem> {
        let chapter = self.require_chapter(&payload.chapter_id).await?;
        if chapter.category_id != payload.category_id {
            return Err(AppError::validation(format!(
                "categoryId '{}' does not match the owning chapter's category '{}'",
                payload.category_id, chapter.category_id
            )));
        }
        let item = self.items.create(&payload).await?;
        info!(
            item_id = %item.id,
            chapter_id = %item.chapter_id,
            title = %item.title,
            "Item created"
        );
        Ok(item)
    }

    // ── Update ───────────────────────────────────────────────────

    /// Merge a partial update into a category and return the result.
    pub async fn update_category(
        &self,
        id: &DocumentId,
        patch: AudioCategoryPatch,
    ) -> AppResult<AudioCategory> {
        let category = self.categories.update(id, &patch).await?;
        info!(category_id = %id, "Category updated");
        Ok(category)
    }

    /// Merge a partial update into a chapter and return the result.
    /// The owning category reference is not patchable.
    pub async fn update_chapter(
        &self,
        id: &DocumentId,
        patch: AudioChapterPatch,
    ) -> AppResult<AudioChapter> {
        let chapter = self.chapters.update(id, &patch).await?;
        info!(chapter_id = %id, "Chapter updated");
        Ok(chapter)
    }

    /// Merge a partial update into an item and return the result.
    ///
    /// The media pair can be attached or replaced independently of the
    /// other fields; fields absent from the patch are left untouched.
    pub async fn update_item(
        &self,
        id: &DocumentId,
        patch: AudioItemPatch,
    ) -> AppResult<AudioItem> {
        let item = self.items.update(id, &patch).await?;
        info!(item_id = %id, "Item updated");
        Ok(item)
    }

    // ── Delete (cascading) ───────────────────────────────────────

    /// Delete a category and, first, everything it owns.
    ///
    /// Chapters are cascaded sequentially, each fully removed (items
    /// included) before the next starts. If any step fails the category
    /// record itself is left in place and the error reports that
    /// partial cleanup may have occurred.
    pub async fn delete_category(&self, id: &DocumentId) -> AppResult<()> {
        let chapters = self
            .chapters
            .find_by_category(id)
            .await
            .map_err(|e| cascade_failure("category", id, "list chapters", e))?;

        for chapter in &chapters {
            self.delete_chapter(&chapter.id)
                .await
                .map_err(|e| cascade_failure("category", id, "delete chapter", e))?;
        }

        self.categories
            .delete(id)
            .await
            .map_err(|e| cascade_failure("category", id, "delete category record", e))?;
        info!(category_id = %id, chapters = chapters.len(), "Category deleted");
        Ok(())
    }

    /// Delete a chapter and, first, all of its items.
    pub async fn delete_chapter(&self, id: &DocumentId) -> AppResult<()> {
        let items = self
            .items
            .find_by_chapter(id)
            .await
            .map_err(|e| cascade_failure("chapter", id, "list items", e))?;

        for item in &items {
            self.delete_item(&item.id)
                .await
                .map_err(|e| cascade_failure("chapter", id, "delete item", e))?;
        }

        self.chapters
            .delete(id)
            .await
            .map_err(|e| cascade_failure("chapter", id, "delete chapter record", e))?;
        info!(chapter_id = %id, items = items.len(), "Chapter deleted");
        Ok(())
    }

    /// Delete an item, best-effort deleting its media asset first.
    ///
    /// Media failures are logged and the record delete proceeds.
    /// Deleting an id that no longer exists is a no-op, which keeps
    /// cascade retries safe.
    pub async fn delete_item(&self, id: &DocumentId) -> AppResult<()> {
        if let Some(item) = self.items.find_by_id(id).await? {
            if let Some(url) = &item.audio_url {
                if let Err(e) = self.media.delete_by_url(url).await {
                    warn!(item_id = %id, %url, error = %e, "Media delete failed, keeping record delete");
                }
            }
        }
        self.items.delete(id).await?;
        info!(item_id = %id, "Item deleted");
        Ok(())
    }

    // ── Read / tree assembly ─────────────────────────────────────

    /// Assemble a category with its chapters and their items embedded.
    ///
    /// Chapters and items are sorted by `order` ascending with stable
    /// ties. A failed item fetch degrades that chapter to an empty
    /// item list; partial results beat total failure on a read path.
    /// A failed category fetch fails the whole call.
    pub async fn get_category_with_content(
        &self,
        id: &DocumentId,
    ) -> AppResult<CategoryWithContent> {
        let category = self.require_category(id).await?;
        let chapters = self.chapters.find_by_category(id).await?;
        Ok(self.assemble(category, chapters).await)
    }

    /// Assemble every category with its content, newest category first.
    ///
    /// Per-category assembly failures degrade to a bare category with
    /// no chapters rather than omitting the category or failing the
    /// list.
    pub async fn get_all_categories_with_content(&self) -> AppResult<Vec<CategoryWithContent>> {
        let categories = self.categories.find_all().await?;
        let mut views = Vec::with_capacity(categories.len());
        for category in categories {
            let view = match self.chapters.find_by_category(&category.id).await {
                Ok(chapters) => self.assemble(category, chapters).await,
                Err(e) => {
                    warn!(
                        category_id = %category.id,
                        error = %e,
                        "Chapter listing failed, returning category without content"
                    );
                    CategoryWithContent::bare(category)
                }
            };
            views.push(view);
        }
        Ok(views)
    }

    /// List bare categories, newest first.
    pub async fn list_categories(&self) -> AppResult<Vec<AudioCategory>> {
        self.categories.find_all().await
    }

    /// List a category's chapters without items.
    pub async fn list_chapters(&self, category_id: &DocumentId) -> AppResult<Vec<AudioChapter>> {
        self.chapters.find_by_category(category_id).await
    }

    /// List a chapter's items.
    pub async fn list_items(&self, chapter_id: &DocumentId) -> AppResult<Vec<AudioItem>> {
        self.items.find_by_chapter(chapter_id).await
    }

    /// Fetch a single item.
    pub async fn get_item(&self, id: &DocumentId) -> AppResult<AudioItem> {
        self.items
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Item '{id}' not found")))
    }

    async fn assemble(
        &self,
        category: AudioCategory,
        chapters: Vec<AudioChapter>,
    ) -> CategoryWithContent {
        let mut assembled = Vec::with_capacity(chapters.len());
        for chapter in chapters {
            let audio_items = match self.items.find_by_chapter(&chapter.id).await {
                Ok(items) => items,
                Err(e) => {
                    warn!(
                        chapter_id = %chapter.id,
                        error = %e,
                        "Item listing failed, returning chapter without items"
                    );
                    Vec::new()
                }
            };
            assembled.push(ChapterWithItems {
                chapter,
                audio_items,
            });
        }
        CategoryWithContent {
            category,
            chapters: assembled,
        }
    }

    async fn require_category(&self, id: &DocumentId) -> AppResult<AudioCategory> {
        self.categories
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Category '{id}' not found")))
    }

    async fn require_chapter(&self, id: &DocumentId) -> AppResult<AudioChapter> {
        self.chapters
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Chapter '{id}' not found")))
    }
}

fn cascade_failure(kind: &str, id: &DocumentId, step: &str, cause: AppError) -> AppError {
    AppError::cascade_delete(format!(
        "Deleting {kind} '{id}' failed at step '{step}': {cause}. \
         Partial cleanup may have occurred; verify remaining children before retrying."
    ))
}
