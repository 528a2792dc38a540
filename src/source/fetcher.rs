// src/source/fetcher.rs
// =============================================================================
// WikiFetcher loads article HTML and hands it to the paragraph parser.
//
// Two ways to get a page:
// - live: HTTP GET of the page URL with a shared reqwest client
// - snapshot: read a saved copy from disk. The file for
//   "https://en.wikipedia.org/wiki/Java" is
//   "<snapshot_root>/en.wikipedia.org/wiki/Java"
//
// Snapshots keep replay runs repeatable even when the live article changes.
// =============================================================================

use super::parse::parse_paragraphs;
use super::ContentSource;
use crate::error::SourceError;
use crate::page::{PageId, Paragraph};
use async_trait::async_trait;
use reqwest::Client;
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};
use std::time::Duration;

const USER_AGENT: &str = concat!("wiki-crawler/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct WikiFetcher {
    client: Client,
    snapshot_root: PathBuf,
}

impl WikiFetcher {
    // Creates a fetcher whose snapshots are read from `snapshot_root`
    //
    // The HTTP client is built once and reused for every live fetch
    // (connection pooling).
    pub fn new(snapshot_root: impl Into<PathBuf>) -> Result<Self, SourceError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            client,
            snapshot_root: snapshot_root.into(),
        })
    }

    pub fn snapshot_root(&self) -> &Path {
        &self.snapshot_root
    }

    /// Where the snapshot for `page` is expected on disk.
    ///
    /// Ids that would resolve outside the snapshot root (`..`, absolute
    /// segments) are rejected.
    pub fn snapshot_path(&self, page: &PageId) -> Result<PathBuf, SourceError> {
        let url = page.as_str();
        let relative = url
            .strip_prefix("https://")
            .or_else(|| url.strip_prefix("http://"))
            .ok_or_else(|| SourceError::UnsupportedScheme { page: page.clone() })?;

        let relative = Path::new(relative);
        let escapes = relative
            .components()
            .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));
        if escapes {
            return Err(SourceError::UnsafeSnapshotPath { page: page.clone() });
        }

        Ok(self.snapshot_root.join(relative))
    }

    async fn download(&self, page: &PageId) -> Result<String, SourceError> {
        let url = page.as_str();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(SourceError::UnsupportedScheme { page: page.clone() });
        }

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status {
                url: url.to_string(),
                status,
            });
        }

        Ok(response.text().await?)
    }
}

#[async_trait]
impl ContentSource for WikiFetcher {
    async fn fetch_live(&self, page: &PageId) -> Result<Vec<Paragraph>, SourceError> {
        tracing::debug!(%page, "fetching live page");
        let html = self.download(page).await?;
        parse_paragraphs(page, &html)
    }

    async fn fetch_snapshot(&self, page: &PageId) -> Result<Vec<Paragraph>, SourceError> {
        let path = self.snapshot_path(page)?;
        tracing::debug!(%page, path = %path.display(), "reading snapshot");

        let html = match tokio::fs::read_to_string(&path).await {
            Ok(html) => html,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(SourceError::MissingSnapshot { path });
            }
            Err(e) => return Err(SourceError::Io(e)),
        };

        parse_paragraphs(page, &html)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::{Method::GET, MockServer};

    const ARTICLE: &str = r#"
        <html><body><div id="mw-content-text">
            <p>Alpha links to <a href="/wiki/Beta">Beta</a>.</p>
        </div></body></html>
    "#;

    fn fixtures() -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/snapshots")
    }

    #[test]
    fn test_snapshot_path_strips_scheme() {
        let fetcher = WikiFetcher::new("resources").unwrap();
        let path = fetcher
            .snapshot_path(&PageId::from("https://en.wikipedia.org/wiki/Java_(programming_language)"))
            .unwrap();
        assert_eq!(
            path,
            PathBuf::from("resources/en.wikipedia.org/wiki/Java_(programming_language)")
        );
    }

    #[test]
    fn test_snapshot_path_rejects_other_schemes() {
        let fetcher = WikiFetcher::new("resources").unwrap();
        let result = fetcher.snapshot_path(&PageId::from("ftp://en.wikipedia.org/wiki/Java"));
        assert!(matches!(result, Err(SourceError::UnsupportedScheme { .. })));
    }

    #[tokio::test]
    async fn test_snapshot_path_stays_inside_root() {
        let dir = tempfile::tempdir().unwrap();
        let fetcher = WikiFetcher::new(dir.path().join("snapshots")).unwrap();
        std::fs::write(dir.path().join("secret"), "<p>outside</p>").unwrap();

        for id in [
            "https://en.wikipedia.org/wiki/../../../secret",
            "https://en.wikipedia.org/../../secret",
            "https:///secret",
        ] {
            let page = PageId::from(id);
            assert!(
                matches!(fetcher.snapshot_path(&page), Err(SourceError::UnsafeSnapshotPath { .. })),
                "{id} was not rejected"
            );
            assert!(matches!(
                fetcher.fetch_snapshot(&page).await,
                Err(SourceError::UnsafeSnapshotPath { .. })
            ));
        }
    }

    #[tokio::test]
    async fn test_fetch_snapshot_from_fixtures() {
        let fetcher = WikiFetcher::new(fixtures()).unwrap();
        let page = PageId::from("https://en.wikipedia.org/wiki/Java_(programming_language)");

        let paragraphs = fetcher.fetch_snapshot(&page).await.unwrap();

        assert_eq!(paragraphs.len(), 2);
        assert!(paragraphs[0].text.contains("Java is a high-level"));
        assert_eq!(paragraphs[0].links[0].href, "/wiki/Object-oriented_programming");
        assert_eq!(paragraphs[0].links.len(), 3);
    }

    #[tokio::test]
    async fn test_fetch_snapshot_missing_is_hard_error() {
        let dir = tempfile::tempdir().unwrap();
        let fetcher = WikiFetcher::new(dir.path()).unwrap();
        let page = PageId::from("https://en.wikipedia.org/wiki/Nowhere");

        let result = fetcher.fetch_snapshot(&page).await;

        match result {
            Err(SourceError::MissingSnapshot { path }) => {
                assert_eq!(path, dir.path().join("en.wikipedia.org/wiki/Nowhere"));
            }
            other => panic!("expected MissingSnapshot, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_fetch_live_parses_response() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/wiki/Alpha");
                then.status(200).body(ARTICLE);
            })
            .await;

        let fetcher = WikiFetcher::new("unused").unwrap();
        let page = PageId::new(server.url("/wiki/Alpha"));
        let paragraphs = fetcher.fetch_live(&page).await.unwrap();

        assert_eq!(paragraphs.len(), 1);
        assert_eq!(paragraphs[0].links[0].href, "/wiki/Beta");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_fetch_live_not_found() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/wiki/Gone");
                then.status(404);
            })
            .await;

        let fetcher = WikiFetcher::new("unused").unwrap();
        let page = PageId::new(server.url("/wiki/Gone"));
        let result = fetcher.fetch_live(&page).await;

        assert!(matches!(
            result,
            Err(SourceError::Status { status, .. }) if status == reqwest::StatusCode::NOT_FOUND
        ));
    }
}
