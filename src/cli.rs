// src/cli.rs
use std::{path::PathBuf, time::Duration};

use clap::Parser;

use crate::config::consts::{LISTING_URL, PUB_BASE_URI, REQUEST_PAUSE_MS};
use crate::config::options::{AppOptions, HarvestOptions, OutputFormat, OutputOptions};
use crate::core::net::HttpFetcher;
use crate::progress::Progress;
use crate::rdf::Minter;
use crate::{file, log, scrape};

/// Harvest GREC publications and write them as RDF or JSON.
#[derive(Parser, Debug)]
#[command(name = "grec_harvest", version, about)]
pub struct Args {
    /// Listing row titles to harvest (e.g. "Articles")
    #[arg(required = true, num_args = 1..)]
    pub rows: Vec<String>,

    /// Output format
    #[arg(short = 't', long = "type", value_enum, default_value_t = OutputFormat::Rdf)]
    pub format: OutputFormat,

    /// Output file, or a directory ending in '/'
    #[arg(short = 'f', long = "file")]
    pub file: Option<PathBuf>,

    #[arg(long, default_value = LISTING_URL)]
    pub listing_url: String,

    /// Prefix for minted URIs
    #[arg(long, default_value = PUB_BASE_URI)]
    pub base_uri: String,

    /// Pause between detail-page requests, in milliseconds
    #[arg(long, default_value_t = REQUEST_PAUSE_MS)]
    pub delay_ms: u64,

    /// Indent JSON output
    #[arg(long)]
    pub pretty: bool,

    /// More logging (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    pub fn to_options(&self) -> AppOptions {
        let mut output = OutputOptions::default();
        output.format = self.format;
        output.pretty = self.pretty;
        if let Some(f) = &self.file {
            output.set_path(&f.to_string_lossy());
        }

        AppOptions {
            harvest: HarvestOptions {
                rows: self.rows.clone(),
                listing_url: self.listing_url.clone(),
                base_uri: self.base_uri.clone(),
                pause: Duration::from_millis(self.delay_ms),
            },
            output,
        }
    }
}

pub fn run() -> color_eyre::Result<()> {
    let args = Args::parse();
    log::init(args.verbose);

    let opts = args.to_options();
    let fetcher = HttpFetcher::new()?;
    let mut progress = ConsoleProgress::default();

    let records = scrape::harvest(&fetcher, &opts.harvest, Some(&mut progress))?;
    let minter = Minter::new(&opts.harvest.base_uri);
    let path = file::write_output(&opts.output, &records, &minter)?;

    println!("Output written in {}", path.display());
    Ok(())
}

/// Per-item progress on stderr.
#[derive(Default)]
struct ConsoleProgress {
    done: usize,
    failed: usize,
    total: usize,
}

impl Progress for ConsoleProgress {
    fn begin(&mut self, total: usize) {
        self.total += total;
    }
    fn item_done(&mut self, url: &str) {
        self.done += 1;
        logd!("[{}/{}] {url}", self.done + self.failed, self.total);
    }
    fn item_failed(&mut self, _url: &str, _reason: &str) {
        self.failed += 1;
    }
    fn finish(&mut self) {
        if self.failed == 0 {
            logf!("Harvest complete ({} records)", self.done);
        } else {
            logw!("Harvest complete ({} records, {} skipped)", self.done, self.failed);
        }
    }
}
