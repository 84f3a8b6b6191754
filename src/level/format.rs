//! TSV level file parser
//!
//! A level file is read in three phases over the same line cursor:
//! one header record, `blocks` block records, then `pigs` pig records.
//! Every record is a tab-separated list of integers with a fixed arity.

use crate::{
    level::{Block, BlockType, Level, Pig},
    LevelError, Result,
};
use nom::{character::complete::i64 as signed_int, combinator::all_consuming, IResult};
use smallvec::SmallVec;
use tracing::{debug, warn};

/// Fields of the first line of a level file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelHeader {
    pub birds: i64,
    pub blocks: usize,
    pub pigs: usize,
    pub start_x: i64,
    /// Fifth header field. Carried along but has no known meaning.
    pub reserved: i64,
}

/// A parsed level together with the header it was read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLevel {
    pub header: LevelHeader,
    pub level: Level,
}

/// Parse the contents of a TSV level file
pub fn parse_level(contents: &str) -> Result<ParsedLevel> {
    let mut cursor = LineCursor::new(contents);

    let header = parse_header(&mut cursor)?;
    debug!(
        birds = header.birds,
        blocks = header.blocks,
        pigs = header.pigs,
        start_x = header.start_x,
        reserved = header.reserved,
        "parsed header"
    );

    let blocks = parse_blocks(&mut cursor, header.blocks)?;
    let pigs = parse_pigs(&mut cursor, header.pigs)?;
    warn_trailing(&cursor);

    let level = Level {
        start: header.start_x,
        birds: header.birds,
        pigs,
        blocks,
    };

    Ok(ParsedLevel { header, level })
}

fn parse_header(cursor: &mut LineCursor<'_>) -> Result<LevelHeader> {
    let line = cursor.line_number();
    let [birds, blocks, pigs, start_x, reserved] = cursor.take_record::<5>("header")?;

    Ok(LevelHeader {
        birds,
        blocks: record_count(blocks, "block", line)?,
        pigs: record_count(pigs, "pig", line)?,
        start_x,
        reserved,
    })
}

fn parse_blocks(cursor: &mut LineCursor<'_>, count: usize) -> Result<Vec<Block>> {
    let mut blocks = Vec::with_capacity(count.min(cursor.remaining()));

    for index in 0..count {
        let line = cursor.line_number();
        let record = format!("block record {} of {}", index + 1, count);
        let [w, h, x, y, code] = cursor.take_record::<5>(&record)?;

        let kind =
            BlockType::from_code(code).ok_or(LevelError::UnknownBlockType { line, code })?;
        blocks.push(Block { kind, x, y, w, h });
    }

    debug!(count = blocks.len(), "parsed blocks");
    Ok(blocks)
}

fn parse_pigs(cursor: &mut LineCursor<'_>, count: usize) -> Result<Vec<Pig>> {
    let mut pigs = Vec::with_capacity(count.min(cursor.remaining()));

    for index in 0..count {
        let record = format!("pig record {} of {}", index + 1, count);
        let [x, y] = cursor.take_record::<2>(&record)?;
        pigs.push(Pig { x, y });
    }

    debug!(count = pigs.len(), "parsed pigs");
    Ok(pigs)
}

fn warn_trailing(cursor: &LineCursor<'_>) {
    let ignored = cursor
        .rest()
        .iter()
        .filter(|line| !line.trim().is_empty())
        .count();

    if ignored > 0 {
        warn!(
            line = cursor.line_number(),
            ignored, "ignoring lines after the last pig record"
        );
    }
}

fn record_count(value: i64, what: &str, line: usize) -> Result<usize> {
    usize::try_from(value).map_err(|_| {
        LevelError::parse(
            line,
            format!("{what} count must be non-negative, got {value}"),
        )
    })
}

/// Parse one field as a signed decimal integer
fn parse_int(field: &str) -> Option<i64> {
    let result: IResult<&str, i64> = all_consuming(signed_int)(field.trim());
    result.ok().map(|(_, value)| value)
}

/// Explicit position over the materialized lines of a file
struct LineCursor<'a> {
    lines: Vec<&'a str>,
    pos: usize,
}

impl<'a> LineCursor<'a> {
    fn new(contents: &'a str) -> Self {
        LineCursor {
            lines: contents.lines().collect(),
            pos: 0,
        }
    }

    /// 1-based number of the next line to be read
    fn line_number(&self) -> usize {
        self.pos + 1
    }

    fn remaining(&self) -> usize {
        self.lines.len() - self.pos
    }

    fn rest(&self) -> &[&'a str] {
        &self.lines[self.pos..]
    }

    /// Consume the next line as a record of exactly `N` integer fields
    fn take_record<const N: usize>(&mut self, record: &str) -> Result<[i64; N]> {
        let line_no = self.line_number();
        let line = self.lines.get(self.pos).ok_or_else(|| {
            LevelError::parse(line_no, format!("expected {record}, found end of input"))
        })?;
        self.pos += 1;

        let fields: SmallVec<[&str; 5]> = line.trim().split('\t').collect();
        if fields.len() != N {
            return Err(LevelError::parse(
                line_no,
                format!("{record} has {} fields, expected {N}", fields.len()),
            ));
        }

        let mut values = [0i64; N];
        for (i, (slot, field)) in values.iter_mut().zip(fields.iter()).enumerate() {
            *slot = parse_int(field).ok_or_else(|| {
                LevelError::parse(
                    line_no,
                    format!("{record} field {} is not an integer: {:?}", i + 1, field),
                )
            })?;
        }

        Ok(values)
    }
}
