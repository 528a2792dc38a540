// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// There is a single command: crawl from a seed page until one new page has
// been indexed (or there is nothing left to crawl), then print how often a
// term appears on every indexed page.
// =============================================================================

use clap::Parser;
use std::path::PathBuf;
use url::Url;

pub const DEFAULT_SEED: &str = "https://en.wikipedia.org/wiki/Java_(programming_language)";

#[derive(Parser, Debug)]
#[command(
    name = "wiki-crawler",
    version,
    about = "Crawl Wikipedia breadth-first and build a term index",
    long_about = "wiki-crawler starts from a seed article, skips pages that are already in the index, \
                  and indexes the next new page it reaches. Internal links of every indexed page are \
                  queued for later steps. Set RUST_LOG=debug to follow each step."
)]
pub struct Cli {
    /// Article to start crawling from (absolute URL)
    #[arg(default_value = DEFAULT_SEED, value_parser = parse_seed)]
    pub seed: String,

    /// Path of the JSON index file
    ///
    /// Created on the first write if it doesn't exist yet.
    #[arg(long, default_value = "wiki-index.json", conflicts_with = "ephemeral")]
    pub index: PathBuf,

    /// Keep the index in memory only
    #[arg(long)]
    pub ephemeral: bool,

    /// Read pages from a snapshot directory instead of the live site
    ///
    /// The snapshot of https://en.wikipedia.org/wiki/X is read from
    /// DIR/en.wikipedia.org/wiki/X. Replay mode also re-indexes pages that
    /// are already in the index.
    #[arg(long, value_name = "DIR")]
    pub replay: Option<PathBuf>,

    /// Fetch the seed once and queue its links before crawling
    #[arg(long)]
    pub preload: bool,

    /// Term to report counts for
    #[arg(long, default_value = "the")]
    pub term: String,

    /// Give up after this many crawl steps
    #[arg(long, default_value_t = 1000)]
    pub max_steps: usize,

    /// Output the report in JSON format instead of a table
    #[arg(long)]
    pub json: bool,
}

// The seed is kept exactly as typed (page ids are compared as strings), so
// Url is only used to reject things that aren't absolute URLs.
fn parse_seed(value: &str) -> Result<String, String> {
    let url = Url::parse(value).map_err(|e| format!("invalid URL '{}': {}", value, e))?;
    match url.scheme() {
        "http" | "https" => Ok(value.to_string()),
        other => Err(format!("unsupported scheme '{}', expected http or https", other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["wiki-crawler"]).unwrap();
        assert_eq!(cli.seed, DEFAULT_SEED);
        assert_eq!(cli.index, PathBuf::from("wiki-index.json"));
        assert_eq!(cli.term, "the");
        assert_eq!(cli.max_steps, 1000);
        assert!(cli.replay.is_none());
        assert!(!cli.ephemeral && !cli.preload && !cli.json);
    }

    #[test]
    fn test_seed_is_kept_verbatim() {
        let seed = "https://en.wikipedia.org/wiki/C%2B%2B";
        let cli = Cli::try_parse_from(["wiki-crawler", seed]).unwrap();
        assert_eq!(cli.seed, seed);
    }

    #[test]
    fn test_rejects_relative_seed() {
        assert!(Cli::try_parse_from(["wiki-crawler", "/wiki/Java"]).is_err());
        assert!(Cli::try_parse_from(["wiki-crawler", "ftp://example.com/x"]).is_err());
    }

    #[test]
    fn test_ephemeral_conflicts_with_index() {
        let result = Cli::try_parse_from(["wiki-crawler", "--ephemeral", "--index", "x.json"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_replay_dir() {
        let cli = Cli::try_parse_from(["wiki-crawler", "--replay", "resources", "--json"]).unwrap();
        assert_eq!(cli.replay, Some(PathBuf::from("resources")));
        assert!(cli.json);
    }
}
