//! FASTA-style record markup for encoded sequences.
//!
//! A record is a `>` marker line carrying an identifier, followed by the
//! sequence wrapped at a fixed line width. Every line, the last included,
//! is newline-terminated. The markup exists so encoded payloads can move
//! through ordinary sequence tooling; it carries no codec parameters.

use std::io::Write;

use loligo_core::{LoligoError, Result};

/// Marker byte that introduces a record.
pub const MARKER: u8 = b'>';

/// Default sequence line width.
pub const DEFAULT_LINE_WIDTH: usize = 60;

/// One named sequence record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// Identifier from the marker line, whitespace-trimmed.
    pub id: String,
    /// Sequence bytes with all line breaks removed.
    pub sequence: Vec<u8>,
}

impl Record {
    /// Build a record from an identifier and sequence.
    pub fn new(id: impl Into<String>, sequence: Vec<u8>) -> Self {
        Self {
            id: id.into(),
            sequence,
        }
    }
}

/// Write one record, wrapping the sequence at `width` bases per line.
///
/// # Errors
///
/// Returns `LoligoError::InvalidArgument` for a zero width, and
/// `LoligoError::Io` for sink failures.
pub fn write_record<W: Write>(out: &mut W, record: &Record, width: usize) -> Result<()> {
    if width == 0 {
        return Err(LoligoError::InvalidArgument(
            "record line width must be positive".to_string(),
        ));
    }
    writeln!(out, "{}{}", MARKER as char, record.id)?;
    for line in record.sequence.chunks(width) {
        out.write_all(line)?;
        out.write_all(b"\n")?;
    }
    Ok(())
}

/// Write a series of records back to back.
pub fn write_records<W: Write>(out: &mut W, records: &[Record], width: usize) -> Result<()> {
    for record in records {
        write_record(out, record, width)?;
    }
    Ok(())
}

/// Parse concatenated records from text.
///
/// Blank lines are skipped anywhere; sequence lines are whitespace-trimmed
/// and concatenated under the most recent marker.
///
/// # Errors
///
/// Returns `LoligoError::InvalidFormat` when sequence data appears before
/// any marker line, or when the input contains no marker at all.
pub fn parse_records(input: &str) -> Result<Vec<Record>> {
    let mut records: Vec<Record> = Vec::new();
    for line in input.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if let Some(id) = trimmed.strip_prefix(MARKER as char) {
            records.push(Record {
                id: id.trim().to_string(),
                sequence: Vec::new(),
            });
        } else {
            match records.last_mut() {
                Some(record) => record.sequence.extend_from_slice(trimmed.as_bytes()),
                None => {
                    return Err(LoligoError::InvalidFormat(
                        "sequence data before any record marker".to_string(),
                    ))
                }
            }
        }
    }
    if records.is_empty() {
        return Err(LoligoError::InvalidFormat(
            "no record marker found".to_string(),
        ));
    }
    Ok(records)
}
