// src/specs/mod.rs
//! # Page "specs"
//!
//! Each spec knows how to read one kind of GREC page and nothing else.
//!
//! ## What lives here
//! - **Pure document reading** over already-parsed `scraper::Html` trees:
//!   `listing` reads the catalog and result-list pages, `publication` reads
//!   one detail page into a [`Record`](crate::record::Record).
//! - **Selector choice** (`td` text for row titles, `p.consultac` for the
//!   declared count, `p.llista` for entries, `<b>` for field labels).
//! - **Tolerant extraction**: a field that cannot be read becomes an empty
//!   value; only structural misses (no such row, no count) are errors.
//!
//! ## What does **not** live here
//! - Fetching, pagination order, pauses: `scrape`.
//! - Classification and serialization: `record`, `rdf`, `file`.
//!
//! ## Typical call chain
//! ```text
//! cli → scrape::harvest → Fetch::document
//!                       ↘ specs::listing::{links_in_row, publication_count, entry_links}
//!                       ↘ specs::publication::extract_record
//! ```
//!
//! ## Testing notes
//! Specs are tested offline against inline HTML snippets shaped like the
//! live pages.
pub mod listing;
pub mod publication;
