// src/crawl/crawler.rs
// =============================================================================
// The crawler: one breadth-first step at a time.
//
// Each call to crawl() does exactly one of three things:
// 1. Frontier empty        -> FrontierEmpty, nothing touched
// 2. Head already indexed  -> SkippedAlreadyIndexed, page dropped, no links
//    queued (live mode only; replay mode never skips)
// 3. Otherwise             -> fetch, index, queue every internal link,
//                             return Indexed
//
// Replay mode reads pages from the snapshot source instead of the live site,
// so a crawl can be re-run against fixed content and give the same result.
//
// A page whose fetch or index call fails has already been popped from the
// frontier and is not put back. The error names the page so the caller can
// re-add it.
// =============================================================================

use super::frontier::Frontier;
use crate::error::{CrawlError, IndexError};
use crate::extract::extract_internal_links;
use crate::index::IndexStore;
use crate::page::{PageId, Paragraph};
use crate::source::ContentSource;
use serde::Serialize;

/// What a single crawl step did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", content = "page", rename_all = "snake_case")]
pub enum CrawlOutcome {
    /// The page was fetched, indexed and its links queued
    Indexed(PageId),
    /// The page was already in the index and was dropped without fetching
    SkippedAlreadyIndexed(PageId),
    /// There was nothing left to crawl
    FrontierEmpty,
}

/// Summary of a run of crawl steps.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CrawlReport {
    /// The page indexed by the final step, if any
    pub indexed: Option<PageId>,
    /// Pages dropped because they were already indexed, in order
    pub skipped: Vec<PageId>,
    /// Number of crawl steps taken
    pub steps: usize,
}

pub struct Crawler<S, I> {
    source: PageId,
    frontier: Frontier,
    fetcher: S,
    index: I,
}

impl<S: ContentSource, I: IndexStore> Crawler<S, I> {
    /// Starts a session with `source` as the only queued page.
    pub fn new(source: PageId, fetcher: S, index: I) -> Self {
        Self::with_frontier(source, Vec::new(), fetcher, index)
    }

    /// Starts a session with `source` queued first, followed by `extra`.
    pub fn with_frontier(
        source: PageId,
        extra: impl IntoIterator<Item = PageId>,
        fetcher: S,
        index: I,
    ) -> Self {
        let mut frontier = Frontier::new();
        frontier.push(source.clone());
        frontier.extend(extra);

        Self {
            source,
            frontier,
            fetcher,
            index,
        }
    }

    pub fn source(&self) -> &PageId {
        &self.source
    }

    pub fn queue_size(&self) -> usize {
        self.frontier.len()
    }

    pub fn frontier(&self) -> &Frontier {
        &self.frontier
    }

    pub fn index(&self) -> &I {
        &self.index
    }

    /// Adds a page at the tail of the frontier.
    pub fn enqueue(&mut self, page: PageId) {
        self.frontier.push(page);
    }

    /// Adds pages at the tail of the frontier, keeping their order.
    pub fn enqueue_all(&mut self, pages: impl IntoIterator<Item = PageId>) {
        self.frontier.extend(pages);
    }

    /// Queues the internal links of `paragraphs`, returning how many were added.
    pub fn queue_internal_links(&mut self, paragraphs: &[Paragraph]) -> usize {
        let links = extract_internal_links(paragraphs);
        let added = links.len();
        self.frontier.extend(links);
        added
    }

    // Fetches the source page and queues its internal links without indexing it
    //
    // The source itself stays at the head of the frontier, so the first
    // crawl step still indexes it.
    pub async fn preload(&mut self, replay: bool) -> Result<usize, CrawlError> {
        let source = self.source.clone();
        let paragraphs = self.fetch(&source, replay).await?;
        let added = self.queue_internal_links(&paragraphs);
        tracing::info!(page = %source, links = added, "preloaded frontier");
        Ok(added)
    }

    /// Runs one crawl step.
    pub async fn crawl(&mut self, replay: bool) -> Result<CrawlOutcome, CrawlError> {
        let Some(page) = self.frontier.pop() else {
            return Ok(CrawlOutcome::FrontierEmpty);
        };

        if !replay {
            let indexed = self
                .index
                .is_indexed(&page)
                .await
                .map_err(|source| index_unavailable(&page, source))?;
            if indexed {
                tracing::debug!(%page, "already indexed, skipping");
                return Ok(CrawlOutcome::SkippedAlreadyIndexed(page));
            }
        }

        let paragraphs = self.fetch(&page, replay).await?;
        self.index
            .index_page(&page, &paragraphs)
            .await
            .map_err(|source| index_unavailable(&page, source))?;

        let added = self.queue_internal_links(&paragraphs);
        tracing::info!(
            %page,
            paragraphs = paragraphs.len(),
            links = added,
            queued = self.frontier.len(),
            "indexed page"
        );

        Ok(CrawlOutcome::Indexed(page))
    }

    // Crawls until a page is newly indexed, the frontier runs dry, or
    // `max_steps` steps have been taken
    pub async fn crawl_until_indexed(
        &mut self,
        replay: bool,
        max_steps: usize,
    ) -> Result<CrawlReport, CrawlError> {
        let mut report = CrawlReport::default();

        while report.steps < max_steps {
            report.steps += 1;
            match self.crawl(replay).await? {
                CrawlOutcome::Indexed(page) => {
                    report.indexed = Some(page);
                    break;
                }
                CrawlOutcome::SkippedAlreadyIndexed(page) => report.skipped.push(page),
                CrawlOutcome::FrontierEmpty => break,
            }
        }

        Ok(report)
    }

    async fn fetch(&self, page: &PageId, replay: bool) -> Result<Vec<Paragraph>, CrawlError> {
        let result = if replay {
            self.fetcher.fetch_snapshot(page).await
        } else {
            self.fetcher.fetch_live(page).await
        };

        result.map_err(|source| {
            tracing::warn!(%page, error = %source, "failed to retrieve page");
            CrawlError::Retrieval {
                page: page.clone(),
                source,
            }
        })
    }
}

fn index_unavailable(page: &PageId, source: IndexError) -> CrawlError {
    tracing::warn!(%page, error = %source, "index unavailable");
    CrawlError::IndexUnavailable {
        page: page.clone(),
        source,
    }
}
