// src/file.rs

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::config::options::{OutputFormat, OutputOptions};
use crate::error::Result;
use crate::rdf::{self, Minter};
use crate::record::Record;

/// Serialize `records` per `output` and write the single output file.
/// Returns the final path written to.
pub fn write_output(
    output: &OutputOptions,
    records: &[Record],
    minter: &Minter,
) -> Result<PathBuf> {
    let path = output.out_path();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    let contents = render(output, records, minter)?;
    fs::write(&path, &contents)?;
    logd!("{} bytes of {} output", contents.len(), output.format.ext());
    Ok(path)
}

/// Serialized output as text, without touching the filesystem.
pub fn render(output: &OutputOptions, records: &[Record], minter: &Minter) -> Result<String> {
    let text = match output.format {
        OutputFormat::Json if output.pretty => serde_json::to_string_pretty(records)?,
        OutputFormat::Json => serde_json::to_string(records)?,
        OutputFormat::Rdf => rdf::xml::to_rdf_xml(&rdf::records_to_graph(records, minter))?,
        OutputFormat::Nt => rdf::ntriples::to_ntriples(&rdf::records_to_graph(records, minter)),
    };
    Ok(text)
}

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        let msg = format!("Path exists but is not a directory: {}", dir.display());
        return Err(std::io::Error::other(msg).into());
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

pub fn looks_like_dir_hint(p: &Path) -> bool {
    let s = p.to_string_lossy();
    s.ends_with('/') || s.ends_with('\\')
}
