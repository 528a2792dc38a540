// src/error.rs
// =============================================================================
// Error types for the crawler and its collaborators.
//
// - SourceError: a page could not be fetched or parsed
// - IndexError: the index store could not be read or written
// - CrawlError: what a single crawl step can fail with
//
// The binary wraps these in anyhow::Error; the library side keeps them typed
// so callers (and tests) can match on what went wrong.
// =============================================================================

use crate::page::PageId;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("failed to fetch {url}: HTTP {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("no snapshot stored at {}", path.display())]
    MissingSnapshot { path: PathBuf },

    #[error("could not read snapshot: {0}")]
    Io(#[from] std::io::Error),

    #[error("{page} has no article content")]
    MissingContent { page: PageId },

    #[error("{page} is not an http(s) URL")]
    UnsupportedScheme { page: PageId },

    #[error("{page} does not map to a path inside the snapshot directory")]
    UnsafeSnapshotPath { page: PageId },
}

#[derive(Debug, Error)]
pub enum IndexError {
    #[error("index storage failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("index file is corrupt: {0}")]
    Decode(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum CrawlError {
    /// The page was already removed from the frontier and is not restored.
    #[error("could not retrieve {page}")]
    Retrieval {
        page: PageId,
        #[source]
        source: SourceError,
    },

    /// Same as above: the page is gone from the frontier.
    #[error("index unavailable while crawling {page}")]
    IndexUnavailable {
        page: PageId,
        #[source]
        source: IndexError,
    },
}

impl CrawlError {
    /// The page the failed call was working on. After a failed `crawl` step
    /// it is no longer in the frontier.
    pub fn lost_page(&self) -> &PageId {
        match self {
            CrawlError::Retrieval { page, .. } | CrawlError::IndexUnavailable { page, .. } => page,
        }
    }
}
