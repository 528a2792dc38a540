// src/page.rs
// =============================================================================
// Core data types shared by the fetcher, the link extractor, the index and
// the crawler.
//
// - PageId: the absolute URL identifying a page
// - Paragraph: one content block of a page (its text plus its links)
// - Link: a raw href found inside a paragraph
// =============================================================================

use serde::{Deserialize, Serialize};
use std::fmt;

/// Absolute URL identifying a page.
///
/// Two ids are equal only if their strings are equal. No normalization is
/// applied: `http://` and `https://`, or a trailing slash, make distinct ids.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PageId(String);

impl PageId {
    pub fn new(url: impl Into<String>) -> Self {
        Self(url.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for PageId {
    fn from(url: String) -> Self {
        Self(url)
    }
}

impl From<&str> for PageId {
    fn from(url: &str) -> Self {
        Self(url.to_string())
    }
}

/// A hyperlink as it appears in the markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    /// The raw `href` attribute, untouched (often site-relative, e.g. `/wiki/Rust`)
    pub href: String,
    /// The anchor text of the link
    pub text: String,
}

impl Link {
    pub fn new(href: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            text: text.into(),
        }
    }
}

/// One content block ("paragraph") of a page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Paragraph {
    /// Visible text of the paragraph, used for term counting
    pub text: String,
    /// Links inside the paragraph, in document order
    pub links: Vec<Link>,
}

impl Paragraph {
    pub fn new(text: impl Into<String>, links: Vec<Link>) -> Self {
        Self {
            text: text.into(),
            links,
        }
    }
}
