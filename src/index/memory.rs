// src/index/memory.rs
// In-process index. Nothing survives the process; used by --ephemeral and tests.

use super::postings::Postings;
use super::IndexStore;
use crate::error::IndexError;
use crate::page::{PageId, Paragraph};
use async_trait::async_trait;
use std::collections::BTreeMap;

#[derive(Debug, Default)]
pub struct MemoryIndex {
    postings: Postings,
}

impl MemoryIndex {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl IndexStore for MemoryIndex {
    async fn is_indexed(&self, page: &PageId) -> Result<bool, IndexError> {
        Ok(self.postings.contains(page))
    }

    async fn index_page(&mut self, page: &PageId, paragraphs: &[Paragraph]) -> Result<(), IndexError> {
        self.postings.replace_page(page, paragraphs);
        Ok(())
    }

    async fn get_counts(&self, term: &str) -> Result<BTreeMap<PageId, u32>, IndexError> {
        Ok(self.postings.counts(term))
    }

    async fn get_count(&self, page: &PageId, term: &str) -> Result<u32, IndexError> {
        Ok(self.postings.count(page, term))
    }

    async fn indexed_pages(&self) -> Result<Vec<PageId>, IndexError> {
        Ok(self.postings.pages())
    }
}
