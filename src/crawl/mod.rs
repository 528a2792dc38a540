// src/crawl/mod.rs
// =============================================================================
// This module handles crawling.
//
// Features:
// - Breadth-first crawling from a seed page through a FIFO frontier
// - Skips pages the index already has (except in replay mode)
// - Every crawled page is indexed before its links are queued
//
// Rust concepts:
// - Generics: the crawler works with any ContentSource and IndexStore
// - Enums: CrawlOutcome says exactly what a step did
// =============================================================================

mod crawler;
mod frontier;

pub use crawler::{CrawlOutcome, CrawlReport, Crawler};
pub use frontier::Frontier;
