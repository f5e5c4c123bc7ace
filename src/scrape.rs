// src/scrape.rs

use std::thread;

use url::Url;

use crate::{
    config::options::HarvestOptions,
    core::net::{parse_url, Fetch},
    error::Result,
    progress::Progress,
    record::Record,
    specs::{listing, publication},
};

/// Crawl every requested row of the catalog listing and scrape each
/// publication detail page into a [`Record`], in listing order.
///
/// Failing to read the listing or a result page aborts the harvest.
/// A detail page that cannot be fetched is logged and skipped.
pub fn harvest(
    fetcher: &dyn Fetch,
    opts: &HarvestOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Result<Vec<Record>> {
    let result = harvest_rows(fetcher, opts, progress.as_deref_mut().map(|p| p as &mut dyn Progress));

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    result
}

fn harvest_rows(
    fetcher: &dyn Fetch,
    opts: &HarvestOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Result<Vec<Record>> {
    let listing_url = parse_url(&opts.listing_url)?;
    let catalog = fetcher.document(&listing_url)?;

    let mut records = Vec::new();
    for row in &opts.rows {
        let links = listing::links_in_row(&catalog, &listing_url, row)?;
        logf!("Row {row:?}: {} listing link(s)", links.len());

        for link in &links {
            let p = progress.as_deref_mut().map(|p| p as &mut dyn Progress);
            harvest_listing(fetcher, opts, link, &mut records, p)?;
        }
    }
    Ok(records)
}

fn harvest_listing(
    fetcher: &dyn Fetch,
    opts: &HarvestOptions,
    link: &Url,
    records: &mut Vec<Record>,
    mut progress: Option<&mut dyn Progress>,
) -> Result<()> {
    let first = fetcher.document(link)?;
    let size = listing::publication_count(&first, link)?;

    let msg = format!("{} pages and {} pubs found", size.pages, size.total);
    logf!("{msg}");
    if let Some(p) = progress.as_deref_mut() {
        p.begin(size.total);
        p.log(&msg);
    }

    for page in 1..=size.pages {
        let page_url = listing::page_url(link, page)?;
        let doc = fetcher.document(&page_url)?;
        let entries = listing::entry_links(&doc, &page_url);
        logd!("Page {page}/{}: {} entries", size.pages, entries.len());

        for entry in entries {
            match fetcher.document(&entry) {
                Ok(detail) => {
                    records.push(publication::extract_record(&detail));
                    if let Some(p) = progress.as_deref_mut() {
                        p.item_done(entry.as_str());
                    }
                }
                Err(e) => {
                    loge!("Skipping {entry}: {e}");
                    if let Some(p) = progress.as_deref_mut() {
                        p.item_failed(entry.as_str(), &e.to_string());
                    }
                }
            }
            if !opts.pause.is_zero() {
                thread::sleep(opts.pause); // be polite
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::time::Duration;

    use super::*;
    use crate::error::Error;

    struct Pages(HashMap<&'static str, &'static str>);

    impl Fetch for Pages {
        fn get(&self, url: &Url) -> Result<String> {
            self.0
                .get(url.as_str())
                .map(|body| s!(*body))
                .ok_or_else(|| Error::Status { url: url.to_string(), status: 404 })
        }
    }

    #[derive(Default)]
    struct Counts {
        begun: usize,
        done: usize,
        finished: usize,
    }

    impl Progress for Counts {
        fn begin(&mut self, total: usize) {
            self.begun += total;
        }
        fn item_done(&mut self, _url: &str) {
            self.done += 1;
        }
        fn finish(&mut self) {
            self.finished += 1;
        }
    }

    const ONE_ENTRY: &str = r#"<p class="consultac">Total: 1</p>
        <p class="llista"><a href="fitxa.cgi?ID=1">x</a></p>"#;

    fn pages() -> Pages {
        Pages(HashMap::from([
            (
                "http://grec.test/llista.cgi",
                r#"<table><tr><td>Articles</td>
                     <td><a href="a.cgi?Q=1">1</a></td><td><a href="a.cgi?Q=2">2</a></td></tr>
                   <tr><td>Tesis</td><td><a href="t.cgi?Q=3">3</a></td></tr></table>"#,
            ),
            ("http://grec.test/a.cgi?Q=1", ONE_ENTRY),
            ("http://grec.test/a.cgi?Q=1&PAG=1", ONE_ENTRY),
            ("http://grec.test/a.cgi?Q=2", ONE_ENTRY),
            ("http://grec.test/a.cgi?Q=2&PAG=1", ONE_ENTRY),
            ("http://grec.test/t.cgi?Q=3", ONE_ENTRY),
            ("http://grec.test/t.cgi?Q=3&PAG=1", ONE_ENTRY),
            ("http://grec.test/fitxa.cgi?ID=1", "<table><tr><td><b>Id. GREC:</b> 1</td></tr></table>"),
        ]))
    }

    fn opts(rows: &[&str]) -> HarvestOptions {
        HarvestOptions {
            rows: rows.iter().map(|r| s!(*r)).collect(),
            listing_url: s!("http://grec.test/llista.cgi"),
            pause: Duration::ZERO,
            ..HarvestOptions::default()
        }
    }

    #[test]
    fn progress_spans_every_row_and_link() {
        let mut counts = Counts::default();
        let records = harvest(&pages(), &opts(&["Articles", "Tesis"]), Some(&mut counts)).unwrap();

        assert_eq!(records.len(), 3);
        assert_eq!(counts.begun, 3);
        assert_eq!(counts.done, 3);
        assert_eq!(counts.finished, 1);
    }

    #[test]
    fn finish_reported_on_abort() {
        let mut counts = Counts::default();
        let err = harvest(&pages(), &opts(&["Tesis", "Llibres"]), Some(&mut counts)).unwrap_err();

        assert!(matches!(err, Error::RowNotFound(_)));
        assert_eq!(counts.done, 1);
        assert_eq!(counts.finished, 1);
    }

    #[test]
    fn runs_without_progress() {
        assert_eq!(harvest(&pages(), &opts(&["Tesis"]), None).unwrap().len(), 1);
    }
}
