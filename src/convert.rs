//! TSV to JSON level conversion
//!
//! The source is parsed completely before the destination is opened, so a
//! malformed level never creates or truncates its output file.

use crate::{
    level::{format::parse_level, JsonStyle, Level},
    LevelError, Result,
};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Options for a single conversion
#[derive(Debug, Clone, Copy, Default)]
pub struct ConvertOptions {
    pub style: JsonStyle,
}

/// What a successful conversion produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionSummary {
    pub source: PathBuf,
    pub destination: PathBuf,
    pub blocks: usize,
    pub pigs: usize,
    /// Size of the JSON document written
    pub bytes: usize,
}

/// Convert the TSV level at `source` into a JSON level at `destination`
pub fn convert_file(
    source: &Path,
    destination: &Path,
    options: &ConvertOptions,
) -> Result<ConversionSummary> {
    debug!(source = %source.display(), "reading level");
    let contents = std::fs::read_to_string(source).map_err(|e| LevelError::Read {
        path: source.to_path_buf(),
        source: e,
    })?;

    let parsed = parse_level(&contents)?;
    let json = parsed.level.to_json(options.style)?;
    write_json(destination, &json)?;

    let summary = ConversionSummary {
        source: source.to_path_buf(),
        destination: destination.to_path_buf(),
        blocks: parsed.level.blocks.len(),
        pigs: parsed.level.pigs.len(),
        bytes: json.len(),
    };

    info!(
        source = %source.display(),
        destination = %destination.display(),
        blocks = summary.blocks,
        pigs = summary.pigs,
        "converted level"
    );

    Ok(summary)
}

/// Write a level as JSON, creating or overwriting `destination`
pub fn write_level(destination: &Path, level: &Level, style: JsonStyle) -> Result<()> {
    let json = level.to_json(style)?;
    write_json(destination, &json)
}

fn write_json(destination: &Path, json: &str) -> Result<()> {
    let write_err = |source: std::io::Error| LevelError::Write {
        path: destination.to_path_buf(),
        source,
    };

    let file = File::create(destination).map_err(write_err)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(json.as_bytes()).map_err(write_err)?;
    writer.flush().map_err(write_err)?;
    Ok(())
}
