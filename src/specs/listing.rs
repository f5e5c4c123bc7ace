// src/specs/listing.rs

use std::sync::LazyLock;

use scraper::{Html, Selector};
use url::Url;

use crate::config::consts::PAGE_PARAM;
use crate::core::html::{ancestor, clean_href, text_of};
use crate::core::net::resolve;
use crate::error::{Error, Result};

static TD: LazyLock<Selector> = selector!("td");
static ANCHOR: LazyLock<Selector> = selector!("a[href]");
static COUNT: LazyLock<Selector> = selector!("p.consultac");
static ENTRY: LazyLock<Selector> = selector!("p.llista");

/// Declared size of a result list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ListingSize {
    pub total: usize,
    pub per_page: usize,
    pub pages: usize,
}

/// Every link in the table row whose label cell reads exactly `row_name`.
pub fn links_in_row(doc: &Html, base: &Url, row_name: &str) -> Result<Vec<Url>> {
    let wanted = row_name.trim();
    let cell = doc
        .select(&TD)
        .find(|td| text_of(*td) == wanted)
        .ok_or_else(|| Error::RowNotFound(s!(wanted)))?;
    let row = ancestor(cell, "tr").ok_or_else(|| Error::RowNotFound(s!(wanted)))?;

    row.select(&ANCHOR)
        .filter_map(|a| a.value().attr("href"))
        .map(|href| resolve(base, href))
        .collect()
}

/// Read `"<label>: N"` from the count paragraph and the entries on this page.
pub fn publication_count(doc: &Html, page: &Url) -> Result<ListingSize> {
    let missing = || Error::MissingCount(page.to_string());

    let text = doc.select(&COUNT).next().map(text_of).ok_or_else(missing)?;
    let total: usize = text
        .split(':')
        .nth(1)
        .and_then(|n| n.trim().parse().ok())
        .ok_or_else(missing)?;

    let per_page = doc.select(&ENTRY).count();
    let pages = if per_page == 0 { 0 } else { total.div_ceil(per_page) };

    Ok(ListingSize { total, per_page, pages })
}

/// `link` with its page parameter replaced by `page` (1-based).
pub fn page_url(link: &Url, page: usize) -> Result<Url> {
    let mut raw = link.as_str().to_owned();
    if let Some(at) = raw.find(PAGE_PARAM) {
        raw.truncate(at);
    }
    raw.push_str(PAGE_PARAM);
    raw.push_str(&page.to_string());
    crate::core::net::parse_url(&raw)
}

/// Detail-page URL of every entry on a result page.
pub fn entry_links(doc: &Html, page: &Url) -> Vec<Url> {
    doc.select(&ENTRY)
        .filter_map(|p| p.select(&ANCHOR).next())
        .filter_map(|a| a.value().attr("href"))
        .filter_map(|href| match resolve(page, clean_href(href)) {
            Ok(url) => Some(url),
            Err(e) => {
                logw!("Skipping entry link: {e}");
                None
            }
        })
        .collect()
}
