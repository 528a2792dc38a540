// src/source/mod.rs
// =============================================================================
// This module produces the paragraphs of a page.
//
// Submodules:
// - parse: turns article HTML into Paragraphs (text + links)
// - fetcher: WikiFetcher, which loads HTML live over HTTP or from a snapshot
//   directory on disk
//
// The crawler only sees the ContentSource trait, so tests can hand it a fake
// source instead of touching the network.
// =============================================================================

mod fetcher;
mod parse;

pub use fetcher::WikiFetcher;

use crate::error::SourceError;
use crate::page::{PageId, Paragraph};
use async_trait::async_trait;

/// Where page content comes from.
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// Fetches the current version of the page from the live site.
    async fn fetch_live(&self, page: &PageId) -> Result<Vec<Paragraph>, SourceError>;

    /// Loads the page from a fixed snapshot. Deterministic; a page without a
    /// snapshot is an error, not an empty page.
    async fn fetch_snapshot(&self, page: &PageId) -> Result<Vec<Paragraph>, SourceError>;
}
