//! Batch conversion of the game's level set
//!
//! The game ships a fixed campaign of standard levels and a few custom level
//! slots. Each one is converted independently; a failing file is recorded in
//! the report and the remaining levels are still converted.

use crate::{
    convert::{convert_file, ConversionSummary, ConvertOptions},
    level::JsonStyle,
    Result,
};
use std::fmt;
use std::path::PathBuf;
use tracing::{info, warn};

/// Number of levels in the standard campaign
pub const STANDARD_LEVEL_COUNT: u32 = 8;

/// Number of custom level slots
pub const CUSTOM_LEVEL_COUNT: u32 = 3;

/// Which level set a level belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LevelKind {
    Standard,
    Custom,
}

/// Identifies one level of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LevelDescriptor {
    pub kind: LevelKind,
    /// 1-based level number within its set
    pub number: u32,
}

impl LevelDescriptor {
    pub fn standard(number: u32) -> Self {
        LevelDescriptor {
            kind: LevelKind::Standard,
            number,
        }
    }

    pub fn custom(number: u32) -> Self {
        LevelDescriptor {
            kind: LevelKind::Custom,
            number,
        }
    }

    /// File name of the TSV source
    pub fn source_name(&self) -> String {
        match self.kind {
            LevelKind::Standard => format!("level{}.tsv", self.number),
            LevelKind::Custom => format!("customlevel{}.tsv", self.number),
        }
    }

    /// File name of the JSON destination
    pub fn destination_name(&self) -> String {
        match self.kind {
            LevelKind::Standard => format!("standard_{}.json", self.number),
            LevelKind::Custom => format!("custom_{}.json", self.number),
        }
    }
}

impl fmt::Display for LevelDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            LevelKind::Standard => write!(f, "standard level {}", self.number),
            LevelKind::Custom => write!(f, "custom level {}", self.number),
        }
    }
}

/// Standard levels 1..=8 followed by custom levels 1..=3
pub fn standard_batch() -> Vec<LevelDescriptor> {
    (1..=STANDARD_LEVEL_COUNT)
        .map(LevelDescriptor::standard)
        .chain((1..=CUSTOM_LEVEL_COUNT).map(LevelDescriptor::custom))
        .collect()
}

/// Settings for a batch run
#[derive(Debug, Clone)]
pub struct BatchConfig {
    /// Directory holding both the TSV sources and the JSON outputs
    pub levels_dir: PathBuf,
    pub style: JsonStyle,
    /// Stop at the first failing level instead of continuing
    pub fail_fast: bool,
}

impl Default for BatchConfig {
    fn default() -> Self {
        BatchConfig {
            levels_dir: PathBuf::from("levels"),
            style: JsonStyle::Compact,
            fail_fast: false,
        }
    }
}

impl BatchConfig {
    pub fn source_path(&self, desc: &LevelDescriptor) -> PathBuf {
        self.levels_dir.join(desc.source_name())
    }

    pub fn destination_path(&self, desc: &LevelDescriptor) -> PathBuf {
        self.levels_dir.join(desc.destination_name())
    }
}

/// Outcome of converting one level
#[derive(Debug)]
pub struct BatchEntry {
    pub descriptor: LevelDescriptor,
    pub outcome: Result<ConversionSummary>,
}

/// Outcomes of a batch run, in the order the levels were attempted
#[derive(Debug, Default)]
pub struct BatchReport {
    pub entries: Vec<BatchEntry>,
}

impl BatchReport {
    pub fn succeeded(&self) -> usize {
        self.entries.iter().filter(|e| e.outcome.is_ok()).count()
    }

    pub fn failures(&self) -> impl Iterator<Item = &BatchEntry> {
        self.entries.iter().filter(|e| e.outcome.is_err())
    }

    pub fn is_success(&self) -> bool {
        self.failures().next().is_none()
    }
}

/// Convert every level in `levels`, collecting one entry per attempted level
pub fn run_batch(config: &BatchConfig, levels: &[LevelDescriptor]) -> BatchReport {
    let options = ConvertOptions {
        style: config.style,
    };
    let mut report = BatchReport::default();

    for desc in levels {
        let outcome = convert_level(config, desc, &options);
        let failed = outcome.is_err();

        if let Err(e) = &outcome {
            warn!(level = %desc, error = %e, "conversion failed");
        }
        report.entries.push(BatchEntry {
            descriptor: *desc,
            outcome,
        });

        if failed && config.fail_fast {
            warn!("stopping batch after first failure");
            break;
        }
    }

    info!(
        attempted = report.entries.len(),
        succeeded = report.succeeded(),
        "batch finished"
    );
    report
}

fn convert_level(
    config: &BatchConfig,
    desc: &LevelDescriptor,
    options: &ConvertOptions,
) -> Result<ConversionSummary> {
    let source = config.source_path(desc);
    let destination = config.destination_path(desc);
    convert_file(&source, &destination, options)
}
