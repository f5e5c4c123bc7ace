// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod specs;

pub mod file;
pub mod names;
pub mod progress;
pub mod rdf;
pub mod record;
pub mod scrape;

pub use error::{Error, Result};
pub use record::{Field, PubKind, Record};
pub use scrape::harvest;
