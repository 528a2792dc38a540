// src/crawl/frontier.rs
// =============================================================================
// The frontier: pages waiting to be crawled, oldest first.
//
// It is a plain FIFO queue. Duplicates are allowed on purpose: if two pages
// link to the same article before it gets crawled, it is queued twice, and
// the crawler's "already indexed?" check deals with the second copy later.
// =============================================================================

use crate::page::PageId;
use std::collections::VecDeque;

#[derive(Debug, Clone, Default)]
pub struct Frontier {
    queue: VecDeque<PageId>,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a page at the tail.
    pub fn push(&mut self, page: PageId) {
        self.queue.push_back(page);
    }

    /// Removes and returns the page at the head.
    pub fn pop(&mut self) -> Option<PageId> {
        self.queue.pop_front()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Pages in dequeue order, without removing them.
    pub fn iter(&self) -> impl Iterator<Item = &PageId> {
        self.queue.iter()
    }
}

impl Extend<PageId> for Frontier {
    fn extend<T: IntoIterator<Item = PageId>>(&mut self, pages: T) {
        self.queue.extend(pages);
    }
}

impl FromIterator<PageId> for Frontier {
    fn from_iter<T: IntoIterator<Item = PageId>>(pages: T) -> Self {
        Self {
            queue: pages.into_iter().collect(),
        }
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why wrap VecDeque instead of using it directly?
//    - The crawler only ever needs push-at-tail and pop-at-head
//    - Hiding the other VecDeque methods (push_front, remove, ...) makes it
//      impossible to break FIFO order by accident
//
// 2. What are Extend and FromIterator?
//    - Standard traits that let you write frontier.extend(links) and
//      links.into_iter().collect::<Frontier>()
//    - Implementing them makes our type feel like a built-in collection
// -----------------------------------------------------------------------------
