// src/error.rs

/// Everything that can stop a harvest.
///
/// Field-level parse problems never show up here: those are swallowed by
/// the record extractor and stored as empty values.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("HTTP request to {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("HTTP {status} from {url}")]
    Status { url: String, status: u16 },

    #[error("Invalid URL {url:?}: {source}")]
    Url {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Row {0:?} not found in the catalog listing")]
    RowNotFound(String),

    #[error("Publication count missing or malformed on {0}")]
    MissingCount(String),

    #[error("No predicate prefix bound for {0}")]
    UnboundNamespace(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
