//! AI-audio content tree domain entities.

pub mod model;
pub mod tree;

pub use model::{
    AudioCategory, AudioCategoryPatch, AudioChapter, AudioChapterPatch, AudioItem, AudioItemPatch,
    CreateAudioCategory, CreateAudioChapter, CreateAudioItem,
};
pub use tree::{CategoryWithContent, ChapterWithItems};
