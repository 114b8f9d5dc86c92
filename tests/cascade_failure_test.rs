//! Service-level tests for cascade failure handling and the
//! partial-result read policy, using a fault-injecting store.

mod helpers;

use std::sync::Arc;

use satsang_core::error::ErrorKind;
use satsang_core::traits::{DocumentStore, MediaResolver};
use satsang_core::types::ListQuery;
use satsang_entity::audio_tree::{
    AudioCategory, AudioChapter, AudioItem, AudioItemPatch, CreateAudioCategory,
    CreateAudioChapter, CreateAudioItem,
};
use satsang_entity::PublishStatus;
use satsang_media::MemoryResolver;
use satsang_service::ContentTreeService;
use satsang_store::repositories::{CategoryRepository, ChapterRepository, ItemRepository};

use helpers::{FlakyResolver, FlakyStore};

fn tree_service(store: Arc<FlakyStore>) -> ContentTreeService {
    tree_service_with_media(store, Arc::new(MemoryResolver::new()))
}

fn tree_service_with_media(
    store: Arc<FlakyStore>,
    media: Arc<dyn MediaResolver>,
) -> ContentTreeService {
    let store: Arc<dyn DocumentStore> = store;
    ContentTreeService::new(
        Arc::new(CategoryRepository::new(Arc::clone(&store))),
        Arc::new(ChapterRepository::new(Arc::clone(&store))),
        Arc::new(ItemRepository::new(Arc::clone(&store))),
        media,
    )
}

async fn seed_tree(service: &ContentTreeService) -> satsang_core::types::DocumentId {
    let category = service
        .create_category(CreateAudioCategory {
            name: "Pravachan".into(),
            description: "Daily talks".into(),
            status: PublishStatus::Draft,
            cover_image_url: None,
        })
        .await
        .unwrap();

    let chapter = service
        .create_chapter(CreateAudioChapter {
            category_id: category.id.clone(),
            title: "Morning".into(),
            description: "".into(),
            order: 1,
        })
        .await
        .unwrap();

    for title in ["Sunrise", "Stillness"] {
        service
            .create_item(CreateAudioItem {
                chapter_id: chapter.id.clone(),
                category_id: category.id.clone(),
                title: title.into(),
                text: "Om".into(),
                status: PublishStatus::Draft,
                order: 1,
            })
            .await
            .unwrap();
    }

    category.id
}

#[tokio::test]
async fn failed_cascade_reports_and_stays_retryable() {
    let store = FlakyStore::new();
    let service = tree_service(Arc::clone(&store));
    let category_id = seed_tree(&service).await;

    store.fail_collection(AudioItem::COLLECTION).await;

    let err = service.delete_category(&category_id).await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::CascadeDelete);
    assert!(err.message.contains("Partial cleanup may have occurred"));

    // The cascade stopped before the parent rows, so nothing is orphaned
    // from above: category and chapter survive.
    assert_eq!(
        store
            .count(AudioCategory::COLLECTION, &ListQuery::all())
            .await
            .unwrap(),
        1
    );
    assert_eq!(
        store
            .count(AudioChapter::COLLECTION, &ListQuery::all())
            .await
            .unwrap(),
        1
    );

    // Once the store recovers, the same call finishes the job.
    store.heal().await;
    service.delete_category(&category_id).await.unwrap();

    for collection in [
        AudioCategory::COLLECTION,
        AudioChapter::COLLECTION,
        AudioItem::COLLECTION,
    ] {
        assert_eq!(store.count(collection, &ListQuery::all()).await.unwrap(), 0);
    }
}

#[tokio::test]
async fn bulk_tree_read_degrades_per_category() {
    let store = FlakyStore::new();
    let service = tree_service(Arc::clone(&store));
    seed_tree(&service).await;

    store.fail_collection(AudioChapter::COLLECTION).await;

    // The category itself still comes back, just without children.
    let tree = service.get_all_categories_with_content().await.unwrap();
    assert_eq!(tree.len(), 1);
    assert!(tree[0].chapters.is_empty());

    store.heal().await;
    let tree = service.get_all_categories_with_content().await.unwrap();
    assert_eq!(tree[0].chapters.len(), 1);
    assert_eq!(tree[0].chapters[0].audio_items.len(), 2);
}

#[tokio::test]
async fn item_delete_removes_its_media_asset() {
    let resolver = FlakyResolver::new();
    let service =
        tree_service_with_media(FlakyStore::new(), Arc::clone(&resolver) as Arc<dyn MediaResolver>);
    let category_id = seed_tree(&service).await;

    let tree = service
        .get_category_with_content(&category_id)
        .await
        .unwrap();
    let item_id = tree.chapters[0].audio_items[0].id.clone();

    let upload = resolver
        .upload(bytes::Bytes::from_static(b"om-audio"), "sunrise.mp3", "ai-audio")
        .await
        .unwrap();
    service
        .update_item(
            &item_id,
            AudioItemPatch {
                audio_url: Some(upload.url.clone()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    service.delete_item(&item_id).await.unwrap();
    assert!(!resolver.contains(&upload.url).await);
}

#[tokio::test]
async fn media_failure_does_not_block_item_delete() {
    let store = FlakyStore::new();
    let resolver = FlakyResolver::new();
    let service =
        tree_service_with_media(Arc::clone(&store), Arc::clone(&resolver) as Arc<dyn MediaResolver>);
    let category_id = seed_tree(&service).await;

    let tree = service
        .get_category_with_content(&category_id)
        .await
        .unwrap();
    let item_id = tree.chapters[0].audio_items[0].id.clone();

    let upload = resolver
        .upload(bytes::Bytes::from_static(b"om-audio"), "sunrise.mp3", "ai-audio")
        .await
        .unwrap();
    service
        .update_item(
            &item_id,
            AudioItemPatch {
                audio_url: Some(upload.url.clone()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    resolver.fail_deletes().await;

    // The asset delete fails but the record delete still goes through.
    service.delete_item(&item_id).await.unwrap();
    assert!(service.get_item(&item_id).await.is_err());
    assert!(resolver.contains(&upload.url).await);
}

#[tokio::test]
async fn item_read_failure_leaves_chapter_level_intact() {
    let store = FlakyStore::new();
    let service = tree_service(Arc::clone(&store));
    let category_id = seed_tree(&service).await;

    store.fail_collection(AudioItem::COLLECTION).await;

    let tree = service
        .get_category_with_content(&category_id)
        .await
        .unwrap();
    assert_eq!(tree.chapters.len(), 1);
    assert!(tree.chapters[0].audio_items.is_empty());
}
