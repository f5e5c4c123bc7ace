// src/config/consts.rs

// Net config
pub const LISTING_URL: &str = "http://webgrec.udl.es/cgi-bin/DADREC/crcx1.cgi?PID=312186&IDI=CAT&FONT=3&QUE=CRXD&CRXDCODI=1605&CONSULTA=Fer+la+consulta";
pub const USER_AGENT: &str = concat!("grec_harvest/", env!("CARGO_PKG_VERSION"));
pub const TIMEOUT_SECS: u64 = 15;
pub const PAGE_PARAM: &str = "&PAG=";

// Scrape
pub const REQUEST_PAUSE_MS: u64 = 75; // be polite
pub const MAX_LABEL_CHARS: usize = 25;

// URI scheme
pub const PUB_BASE_URI: &str = "http://www.diei.udl.cat";
pub const URI_PERSON: &str = "person";
pub const URI_PUB: &str = "pub";
pub const URI_JOURNAL: &str = "journal";
pub const URI_BOOK: &str = "book";

// Vocabularies
pub const NS_RDF: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
pub const NS_RDFS: &str = "http://www.w3.org/2000/01/rdf-schema#";
pub const NS_DC: &str = "http://purl.org/dc/elements/1.1/";
pub const NS_UNI: &str = "http://swrc.ontoware.org/ontology#";

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_FILE: &str = "publications";
