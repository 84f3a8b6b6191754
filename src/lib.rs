//! Slingshot level tools
//!
//! Converts the tab-separated level descriptions of the slingshot physics
//! puzzle into the JSON documents the game loads.

pub mod batch;
pub mod convert;
pub mod error;
pub mod level;

pub use error::{LevelError, Result};
pub use level::{Block, BlockType, Level, Pig};
