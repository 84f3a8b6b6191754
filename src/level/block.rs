//! Block materials
//!
//! Level files store a block's material as a small integer code. The table is
//! closed: any code outside it is rejected rather than mapped to a default.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Material of a block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockType {
    Wood,
    Steel,
    Lead,
}

impl BlockType {
    /// All materials, in code order
    pub const ALL: [BlockType; 3] = [BlockType::Wood, BlockType::Steel, BlockType::Lead];

    /// Resolve a TSV type code
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(BlockType::Wood),
            1 => Some(BlockType::Steel),
            2 => Some(BlockType::Lead),
            _ => None,
        }
    }

    /// TSV type code for this material
    pub fn code(self) -> i64 {
        match self {
            BlockType::Wood => 0,
            BlockType::Steel => 1,
            BlockType::Lead => 2,
        }
    }

    /// Name used in the JSON output
    pub fn name(self) -> &'static str {
        match self {
            BlockType::Wood => "wood",
            BlockType::Steel => "steel",
            BlockType::Lead => "lead",
        }
    }
}

impl fmt::Display for BlockType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
