// src/index/mod.rs
// =============================================================================
// The full-text index the crawler feeds.
//
// Submodules:
// - postings: the term -> page -> count structure and term counting
// - memory: MemoryIndex, kept only in RAM
// - file: FileIndex, persisted as a JSON file
//
// Both implement IndexStore, which is all the crawler depends on.
// =============================================================================

mod file;
mod memory;
mod postings;

pub use file::FileIndex;
pub use memory::MemoryIndex;

use crate::error::IndexError;
use crate::page::{PageId, Paragraph};
use async_trait::async_trait;
use std::collections::BTreeMap;

#[async_trait]
pub trait IndexStore: Send + Sync {
    /// Whether `page` has been indexed before.
    async fn is_indexed(&self, page: &PageId) -> Result<bool, IndexError>;

    /// Records the term counts of `page`, replacing any earlier postings for it.
    async fn index_page(&mut self, page: &PageId, paragraphs: &[Paragraph]) -> Result<(), IndexError>;

    /// Occurrences of `term` per page. Terms are matched case-insensitively.
    async fn get_counts(&self, term: &str) -> Result<BTreeMap<PageId, u32>, IndexError>;

    /// Occurrences of `term` on one page, 0 if absent.
    async fn get_count(&self, page: &PageId, term: &str) -> Result<u32, IndexError>;

    async fn indexed_pages(&self) -> Result<Vec<PageId>, IndexError>;
}
