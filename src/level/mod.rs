//! Level data model
//!
//! A level is a starting offset, a bird count and the pigs and blocks placed
//! in the world. This is the shape the game loads from `standard_N.json` and
//! `custom_N.json`.

pub mod block;
pub mod format;

pub use block::BlockType;
pub use format::{LevelHeader, ParsedLevel};

use crate::{LevelError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A complete level
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Level {
    /// Offset that all x-coordinates are relative to
    pub start: i64,
    /// Number of birds provided
    pub birds: i64,
    /// Centers of the pigs
    pub pigs: Vec<Pig>,
    pub blocks: Vec<Block>,
}

/// A rectangular obstacle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    #[serde(rename = "type")]
    pub kind: BlockType,
    pub x: i64,
    pub y: i64,
    pub w: i64,
    pub h: i64,
}

/// A target placed at a point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pig {
    pub x: i64,
    pub y: i64,
}

/// Layout of the JSON written for a level
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum JsonStyle {
    /// Single line, no whitespace
    #[default]
    Compact,
    /// Two-space indentation
    Pretty,
}

impl Level {
    /// Load a level from a TSV file on disk
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|source| LevelError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&contents)
    }

    /// Parse a level from TSV contents
    pub fn parse(contents: &str) -> Result<Self> {
        format::parse_level(contents).map(|parsed| parsed.level)
    }

    /// Read a level back from its JSON form
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Render the level as a JSON document
    pub fn to_json(&self, style: JsonStyle) -> Result<String> {
        let json = match style {
            JsonStyle::Compact => serde_json::to_string(self)?,
            JsonStyle::Pretty => serde_json::to_string_pretty(self)?,
        };
        Ok(json)
    }

    /// Number of blocks of the given material
    pub fn count_blocks(&self, kind: BlockType) -> usize {
        self.blocks.iter().filter(|b| b.kind == kind).count()
    }
}
