// src/index/file.rs
// =============================================================================
// An index persisted as a single JSON file.
//
// The whole index is loaded when the file is opened and rewritten after every
// indexed page. Writes go to "<path>.tmp" first and are then renamed over the
// real file, so a crash mid-write never leaves a half-written index behind.
// The in-memory postings only change once the write has succeeded.
// =============================================================================

use super::postings::Postings;
use super::IndexStore;
use crate::error::IndexError;
use crate::page::{PageId, Paragraph};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::ffi::OsString;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub struct FileIndex {
    path: PathBuf,
    postings: Postings,
}

impl FileIndex {
    // Opens the index at `path`
    //
    // A missing file is an empty index; it is created on the first write.
    // An unreadable or corrupt file is an error.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, IndexError> {
        let path = path.into();
        let postings = match tokio::fs::read(&path).await {
            Ok(bytes) => serde_json::from_slice(&bytes)?,
            Err(e) if e.kind() == ErrorKind::NotFound => Postings::default(),
            Err(e) => return Err(IndexError::Io(e)),
        };

        tracing::debug!(path = %path.display(), pages = postings.pages().len(), "opened index");
        Ok(Self { path, postings })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn save(&self, postings: &Postings) -> Result<(), IndexError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }

        let mut tmp = OsString::from(self.path.as_os_str());
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);

        let bytes = serde_json::to_vec(postings)?;
        tokio::fs::write(&tmp, bytes).await?;
        tokio::fs::rename(&tmp, &self.path).await?;
        Ok(())
    }
}

#[async_trait]
impl IndexStore for FileIndex {
    async fn is_indexed(&self, page: &PageId) -> Result<bool, IndexError> {
        Ok(self.postings.contains(page))
    }

    async fn index_page(&mut self, page: &PageId, paragraphs: &[Paragraph]) -> Result<(), IndexError> {
        let mut next = self.postings.clone();
        next.replace_page(page, paragraphs);
        self.save(&next).await?;
        self.postings = next;
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
