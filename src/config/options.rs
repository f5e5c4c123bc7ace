// src/config/options.rs
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::time::Duration;

use super::consts::*;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppOptions {
    pub harvest: HarvestOptions,
    pub output: OutputOptions,
}

/// What to crawl and how politely.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HarvestOptions {
    /// Row titles of the catalog listing, harvested in order.
    pub rows: Vec<String>,
    pub listing_url: String,
    /// Prefix of every minted URI (publications, people, journals, books).
    pub base_uri: String,
    /// Pause between detail-page requests.
    pub pause: Duration,
}

impl Default for HarvestOptions {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            listing_url: s!(LISTING_URL),
            base_uri: s!(PUB_BASE_URI),
            pause: Duration::from_millis(REQUEST_PAUSE_MS),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Pretty RDF/XML graph
    Rdf,
    /// N-Triples graph
    Nt,
    /// Plain JSON record list
    Json,
}

impl OutputFormat {
    pub fn ext(&self) -> &'static str {
        match self {
            OutputFormat::Rdf => "rdf",
            OutputFormat::Nt => "nt",
            OutputFormat::Json => "json",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutputOptions {
    pub format: OutputFormat,
    out_path: OutputPath,
    /// Indent JSON output.
    pub pretty: bool,
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self {
            format: OutputFormat::Rdf,
            out_path: OutputPath::default(),
            pretty: false,
        }
    }
}

impl OutputOptions {
    /// Final file path. A user-given file name is kept verbatim (extension
    /// included); the default stem gets the format's extension.
    pub fn out_path(&self) -> PathBuf {
        let mut path = self.out_path.dir.clone();
        match &self.out_path.file_name {
            Some(name) => path.push(name),
            None => {
                let stem = DEFAULT_FILE;
                path.push(join!(stem, ".", self.format.ext()));
            }
        }
        path
    }

    /// Parse user text into dir + file name.
    /// Trailing separator or an existing directory → default file inside it.
    pub fn set_path(&mut self, text: &str) {
        let s = text.trim();
        if s.is_empty() {
            self.out_path = OutputPath::default();
            return;
        }

        let p = Path::new(s);
        if crate::file::looks_like_dir_hint(p) || p.is_dir() {
            self.out_path = OutputPath { dir: p.to_path_buf(), file_name: None };
            return;
        }

        let dir = p.parent().map(Path::to_path_buf).unwrap_or_default();
        self.out_path = OutputPath { dir, file_name: p.file_name().map(|f| f.to_os_string()) };
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutputPath {
    dir: PathBuf,
    file_name: Option<OsString>, // None = "<DEFAULT_FILE>.<ext>"
}

impl Default for OutputPath {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_OUT_DIR),
            file_name: None,
        }
    }
}
