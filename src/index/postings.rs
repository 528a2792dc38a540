// src/index/postings.rs
// =============================================================================
// The inverted index itself: term -> page -> number of occurrences.
//
// A reverse map (page -> terms) is kept alongside so that re-indexing a page
// can remove its old postings first. That is what makes indexing idempotent:
// indexing the same page twice leaves exactly one set of counts behind.
// =============================================================================

use crate::page::{PageId, Paragraph};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::sync::LazyLock;

// Unicode punctuation runs; symbols such as `+` or `$` are not included
#[allow(clippy::expect_used)]
static PUNCTUATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\p{P}+").expect("valid regex"));

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Postings {
    terms: BTreeMap<String, BTreeMap<PageId, u32>>,
    pages: BTreeMap<PageId, BTreeSet<String>>,
}

impl Postings {
    pub fn contains(&self, page: &PageId) -> bool {
        self.pages.contains_key(page)
    }

    /// Replaces everything recorded for `page` with the counts from `paragraphs`.
    pub fn replace_page(&mut self, page: &PageId, paragraphs: &[Paragraph]) {
        self.remove_page(page);

        let counts = count_terms(paragraphs);
        let mut terms = BTreeSet::new();
        for (term, count) in counts {
            self.terms
                .entry(term.clone())
                .or_default()
                .insert(page.clone(), count);
            terms.insert(term);
        }
        self.pages.insert(page.clone(), terms);
    }

    fn remove_page(&mut self, page: &PageId) {
        let Some(old_terms) = self.pages.remove(page) else {
            return;
        };
        for term in old_terms {
            if let Some(by_page) = self.terms.get_mut(&term) {
                by_page.remove(page);
                if by_page.is_empty() {
                    self.terms.remove(&term);
                }
            }
        }
    }

    pub fn counts(&self, term: &str) -> BTreeMap<PageId, u32> {
        self.terms
            .get(&normalize_term(term))
            .cloned()
            .unwrap_or_default()
    }

    pub fn count(&self, page: &PageId, term: &str) -> u32 {
        self.terms
            .get(&normalize_term(term))
            .and_then(|by_page| by_page.get(page))
            .copied()
            .unwrap_or(0)
    }

    pub fn pages(&self) -> Vec<PageId> {
        self.pages.keys().cloned().collect()
    }
}

// Counts the terms of a page
//
// Punctuation becomes whitespace, then the text is split on whitespace and
// lowercased. "Java's" counts as "java" and "s"; "C++" stays "c++".
pub fn count_terms(paragraphs: &[Paragraph]) -> BTreeMap<String, u32> {
    let mut counts = BTreeMap::new();
    for paragraph in paragraphs {
        let text = PUNCTUATION.replace_all(&paragraph.text, " ");
        for term in text.split_whitespace() {
            *counts.entry(term.to_lowercase()).or_insert(0) += 1;
        }
    }
    counts
}

fn normalize_term(term: &str) -> String {
    term.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(name: &str) -> PageId {
        PageId::new(format!("https://en.wikipedia.org/wiki/{}", name))
    }

    fn text(body: &str) -> Vec<Paragraph> {
        vec![Paragraph::new(body, vec![])]
    }

    #[test]
    fn test_count_terms() {
        let paragraphs = vec![
            Paragraph::new("The cat, the hat.", vec![]),
            Paragraph::new("THE end", vec![]),
        ];
        let counts = count_terms(&paragraphs);
        assert_eq!(counts.get("the"), Some(&3));
        assert_eq!(counts.get("cat"), Some(&1));
        assert_eq!(counts.get("end"), Some(&1));
        assert_eq!(counts.len(), 4);
    }

    #[test]
    fn test_count_terms_keeps_symbols() {
        let paragraphs = vec![Paragraph::new(
            "C++ and C# cost $5 (roughly); Java's syntax\u{2014}like C++.",
            vec![],
        )];
        let counts = count_terms(&paragraphs);
        assert_eq!(counts.get("c++"), Some(&2));
        assert_eq!(counts.get("$5"), Some(&1));
        assert_eq!(counts.get("java"), Some(&1));
        assert_eq!(counts.get("s"), Some(&1));
        assert_eq!(counts.get("syntax"), Some(&1));
        assert_eq!(counts.get("like"), Some(&1));
        // `#` is punctuation, not a symbol
        assert_eq!(counts.get("c"), Some(&1));
        assert_eq!(counts.get("roughly"), Some(&1));
    }

    #[test]
    fn test_reindex_is_idempotent() {
        let mut once = Postings::default();
        once.replace_page(&page("A"), &text("the java the"));

        let mut twice = Postings::default();
        twice.replace_page(&page("A"), &text("the java the"));
        twice.replace_page(&page("A"), &text("the java the"));

        assert_eq!(once, twice);
        assert_eq!(twice.count(&page("A"), "the"), 2);
    }

    #[test]
    fn test_reindex_drops_stale_terms() {
        let mut postings = Postings::default();
        postings.replace_page(&page("A"), &text("old words"));
        postings.replace_page(&page("A"), &text("new words"));

        assert!(postings.counts("old").is_empty());
        assert_eq!(postings.count(&page("A"), "new"), 1);
        assert_eq!(postings.count(&page("A"), "words"), 1);
    }

    #[test]
    fn test_counts_across_pages() {
        let mut postings = Postings::default();
        postings.replace_page(&page("A"), &text("the the"));
        postings.replace_page(&page("B"), &text("the"));

        let counts = postings.counts("The");
        assert_eq!(counts.get(&page("A")), Some(&2));
        assert_eq!(counts.get(&page("B")), Some(&1));
        assert_eq!(postings.pages(), vec![page("A"), page("B")]);
    }

    #[test]
    fn test_page_without_text_is_still_indexed() {
        let mut postings = Postings::default();
        postings.replace_page(&page("Empty"), &[]);
        assert!(postings.contains(&page("Empty")));
    }
}
