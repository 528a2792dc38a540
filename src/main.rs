// src/main.rs
// =============================================================================
// This is the entry point of the crawler binary.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Open the index (a JSON file, or memory only with --ephemeral)
// 3. Crawl until one page is newly indexed or the frontier is exhausted
// 4. Print how often the report term appears on each indexed page
// 5. Exit with proper code (0 = page indexed, 1 = nothing new, 2 = error)
//
// Progress goes to stderr through tracing; stdout only carries the report,
// so --json output can be piped straight into other tools.
// =============================================================================

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use wiki_crawler::{CrawlReport, Crawler, FileIndex, IndexStore, MemoryIndex, PageId, WikiFetcher};

// Snapshot root used when --replay isn't given (only --preload/replay read it)
const DEFAULT_SNAPSHOT_ROOT: &str = "resources";

// How many upcoming frontier entries the report shows
const NEXT_UP: usize = 5;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            tracing::error!("{:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// Returns:
//   Ok(0) = a page was newly indexed
//   Ok(1) = frontier exhausted (or step budget spent) without indexing
//   Err   = fetch or index failure
async fn run() -> Result<i32> {
    let cli = Cli::parse();

    let snapshot_root = cli
        .replay
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_SNAPSHOT_ROOT));
    let fetcher = WikiFetcher::new(snapshot_root).context("failed to set up the page fetcher")?;

    if cli.ephemeral {
        tracing::info!("using an in-memory index");
        run_session(&cli, fetcher, MemoryIndex::new()).await
    } else {
        let index = FileIndex::open(&cli.index)
            .await
            .with_context(|| format!("failed to open index {}", cli.index.display()))?;
        tracing::info!(path = %index.path().display(), "using file index");
        run_session(&cli, fetcher, index).await
    }
}

// Everything printed at the end of a session
#[derive(Debug, Serialize)]
struct SessionSummary {
    #[serde(flatten)]
    report: CrawlReport,
    queue_size: usize,
    next_up: Vec<PageId>,
    term: String,
    counts: BTreeMap<PageId, u32>,
}

async fn run_session<I: IndexStore>(cli: &Cli, fetcher: WikiFetcher, index: I) -> Result<i32> {
    let replay = cli.replay.is_some();
    if replay {
        tracing::info!(root = %fetcher.snapshot_root().display(), "replaying from snapshots");
    }

    let mut crawler = Crawler::new(PageId::new(cli.seed.clone()), fetcher, index);
    tracing::info!(seed = %crawler.source(), "starting crawl");

    if cli.preload {
        crawler
            .preload(replay)
            .await
            .context("failed to preload the frontier from the seed page")?;
    }

    let report = crawler
        .crawl_until_indexed(replay, cli.max_steps)
        .await
        .context("crawl step failed")?;

    let counts = crawler
        .index()
        .get_counts(&cli.term)
        .await
        .context("failed to read term counts")?;

    let indexed = report.indexed.is_some();
    let summary = SessionSummary {
        report,
        queue_size: crawler.queue_size(),
        next_up: crawler.frontier().iter().take(NEXT_UP).cloned().collect(),
        term: cli.term.clone(),
        counts,
    };
    print_summary(&summary, cli.json)?;

    Ok(if indexed { 0 } else { 1 })
}

fn print_summary(summary: &SessionSummary, json: bool) -> Result<()> {
    if json {
        let json_output = serde_json::to_string_pretty(summary)?;
        println!("{}", json_output);
    } else {
        print_table(summary);
    }
    Ok(())
}

fn print_table(summary: &SessionSummary) {
    match &summary.report.indexed {
        Some(page) => println!("✅ Indexed: {}", page),
        None => println!("⚠️  No new page indexed"),
    }
    println!(
        "📊 Steps: {}   Skipped: {}   Queued: {}",
        summary.report.steps,
        summary.report.skipped.len(),
        summary.queue_size
    );
    for page in &summary.next_up {
        println!("   next: {}", page);
    }
    println!();

    println!("{:<80} {:>8}", format!("PAGE (term: \"{}\")", summary.term), "COUNT");
    println!("{}", "=".repeat(89));
    for (page, count) in &summary.counts {
        // Truncate long URLs so the count column stays aligned
        let url = page.as_str();
        let url_display = if url.chars().count() > 77 {
            format!("{}...", url.chars().take(77).collect::<String>())
        } else {
            url.to_string()
        };
        println!("{:<80} {:>8}", url_display, count);
    }
}
