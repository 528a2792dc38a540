// src/lib.rs
// =============================================================================
// wiki-crawler: a breadth-first Wikipedia crawler feeding a term index.
//
// Modules:
// - page: PageId, Paragraph and Link
// - extract: internal-link extraction
// - source: where page content comes from (live site or snapshots)
// - index: the term -> page -> count index
// - crawl: the frontier and the crawler itself
// - error: error types shared by all of the above
// =============================================================================

pub mod crawl;
pub mod error;
pub mod extract;
pub mod index;
pub mod page;
pub mod source;

pub use crawl::{CrawlOutcome, CrawlReport, Crawler, Frontier};
pub use error::{CrawlError, IndexError, SourceError};
pub use extract::extract_internal_links;
pub use index::{FileIndex, IndexStore, MemoryIndex};
pub use page::{Link, PageId, Paragraph};
pub use source::{ContentSource, WikiFetcher};
