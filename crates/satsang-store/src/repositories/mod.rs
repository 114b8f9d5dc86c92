//! Typed repositories over the document store.

pub mod catalog;
pub mod category;
pub mod chapter;
pub mod item;

pub use catalog::CatalogRepository;
pub use category::CategoryRepository;
pub use chapter::ChapterRepository;
pub use item::ItemRepository;
