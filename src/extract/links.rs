// src/extract/links.rs
// =============================================================================
// This module picks the internal (same-wiki) links out of a page's paragraphs.
//
// A link is internal when its raw href starts with "/wiki/". Those links are
// turned into absolute page ids by gluing the wiki origin in front of the
// href, exactly as written. Everything else (external sites, "#anchors",
// protocol-relative links) is dropped.
//
// Nothing is deduplicated here: if a page links to the same article twice,
// both copies come back, in document order.
// =============================================================================

use crate::page::{PageId, Paragraph};

/// Scheme and host every internal link is resolved against.
const WIKI_ORIGIN: &str = "https://en.wikipedia.org";

/// Path prefix that marks a link as pointing at another wiki page.
const WIKI_PREFIX: &str = "/wiki/";

// Extracts internal links from a page's paragraphs
//
// Parameters:
//   paragraphs: the content blocks of a page, in document order
//
// Returns: Vec<PageId> of absolute URLs, paragraph order first, then link
// order inside each paragraph
//
// Example:
//   href = "/wiki/Rust_(programming_language)"
//   result = ["https://en.wikipedia.org/wiki/Rust_(programming_language)"]
pub fn extract_internal_links(paragraphs: &[Paragraph]) -> Vec<PageId> {
    paragraphs
        .iter()
        .flat_map(|paragraph| paragraph.links.iter())
        .filter_map(|link| resolve_internal(&link.href))
        .collect()
}

// Resolves a raw href to an absolute page id, or None if it isn't internal
//
// No percent-decoding, fragment stripping or query handling happens here:
//   "/wiki/Java#History" -> "https://en.wikipedia.org/wiki/Java#History"
fn resolve_internal(href: &str) -> Option<PageId> {
    if href.starts_with(WIKI_PREFIX) {
        Some(PageId::new(format!("{}{}", WIKI_ORIGIN, href)))
    } else {
        None
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What does flat_map do?
//    - Each paragraph holds a Vec of links
//    - flat_map turns "a list of lists" into one flat stream of links
//    - Order is kept: all links of paragraph 1, then paragraph 2, etc.
//
// 2. Why filter_map?
//    - resolve_internal returns Option<PageId>
//    - filter_map keeps the Some(...) values and drops the None ones
//    - It's a filter and a map in one step
//
// 3. Why is this a plain function and not a method on the crawler?
//    - It has no state and does no I/O
//    - That makes it trivial to test with hand-built paragraphs
// -----------------------------------------------------------------------------
