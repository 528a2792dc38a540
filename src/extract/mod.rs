// src/extract/mod.rs
// =============================================================================
// Link extraction from parsed page content.
//
// Submodules:
// - links: internal-link filter and resolver
// =============================================================================

mod links;

pub use links::extract_internal_links;
