// src/core/net.rs

// Blocking HTTP GET + HTML parse behind the `Fetch` seam

use std::time::Duration;

use scraper::Html;
use url::Url;

use crate::config::consts::{TIMEOUT_SECS, USER_AGENT};
use crate::error::{Error, Result};

/// Source of pages. The harvester only ever needs "GET this URL".
pub trait Fetch {
    /// Raw body of `url`, decoded to text.
    fn get(&self, url: &Url) -> Result<String>;

    /// Body of `url` parsed into a navigable document.
    fn document(&self, url: &Url) -> Result<Html> {
        let body = self.get(url)?;
        Ok(Html::parse_document(&body))
    }
}

pub struct HttpFetcher {
    client: reqwest::blocking::Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(TIMEOUT_SECS))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|source| Error::Http { url: s!(), source })?;
        Ok(Self { client })
    }
}

impl Fetch for HttpFetcher {
    fn get(&self, url: &Url) -> Result<String> {
        logd!("GET {url}");
        let http_err = |source| Error::Http { url: url.to_string(), source };

        let resp = self.client.get(url.clone()).send().map_err(http_err)?;
        let status = resp.status();
        if !status.is_success() {
            return Err(Error::Status { url: url.to_string(), status: status.as_u16() });
        }
        resp.text().map_err(http_err)
    }
}

/// Parse an absolute URL, tagging failures with the offending text.
pub fn parse_url(s: &str) -> Result<Url> {
    Url::parse(s).map_err(|source| Error::Url { url: s!(s), source })
}

/// Resolve `href` (absolute or relative) against the page it came from.
pub fn resolve(base: &Url, href: &str) -> Result<Url> {
    base.join(href.trim()).map_err(|source| Error::Url { url: s!(href), source })
}
