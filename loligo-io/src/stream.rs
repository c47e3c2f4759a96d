//! Constant-memory streaming encode and decode.
//!
//! The in-memory codecs hold whole payloads; these pipelines hold one
//! chunk. [`encode_stream`] pulls fixed-size byte chunks from any `Read`,
//! maps them through the direct ATCG codec, and writes marker-framed,
//! line-wrapped text to any `Write`. [`decode_stream`] reads that text
//! back line by line, buffering symbols only until a whole chunk's worth
//! can be decoded. Output is byte-identical to the in-memory codec for
//! every chunk size, including chunk sizes that do not divide the payload
//! length.
//!
//! With a parity configuration, the encoder interleaves one parity base
//! per data block and the decoder strips and verifies them. Parity blocks
//! are cut from the logical base stream, so line width and chunk size
//! never move a block boundary.

use std::io::{BufRead, Read, Write};

use loligo_codec::nucleotide;
use loligo_core::{AtcgAlphabet, LoligoError, Result};
use loligo_fec::parity::ParityRule;

use crate::record::{DEFAULT_LINE_WIDTH, MARKER};

/// Default payload bytes pulled per chunk.
pub const DEFAULT_CHUNK_SIZE: usize = 4096;

/// Parameters for a streaming encode pass.
#[derive(Debug, Clone)]
pub struct StreamEncodeConfig {
    /// Payload bytes pulled from the source per chunk (default 4096).
    pub chunk_size: usize,
    /// Bases per sequence line (default 60).
    pub line_width: usize,
    /// Identifier written on the marker line.
    pub record_id: String,
    /// Optional parity interleave: data bases per block, and the rule.
    pub parity: Option<(usize, ParityRule)>,
}

impl Default for StreamEncodeConfig {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            line_width: DEFAULT_LINE_WIDTH,
            record_id: "payload".to_string(),
            parity: None,
        }
    }
}

/// Totals from a streaming encode pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreamEncodeReport {
    /// Payload bytes consumed from the source.
    pub bytes_in: u64,
    /// Bases written, parity included.
    pub bases_out: u64,
    /// Sequence lines written (the marker line is not counted).
    pub lines_out: u64,
}

/// Parameters for a streaming decode pass.
#[derive(Debug, Clone)]
pub struct StreamDecodeConfig {
    /// Decoded bytes emitted per chunk; the base buffer holds four times
    /// this many symbols (default 4096).
    pub chunk_size: usize,
    /// Optional parity strip: data bases per block, and the rule.
    pub parity: Option<(usize, ParityRule)>,
}

impl Default for StreamDecodeConfig {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            parity: None,
        }
    }
}

/// Totals from a streaming decode pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamDecodeReport {
    /// Payload bytes written to the sink.
    pub bytes_out: u64,
    /// Indices of parity blocks that failed verification, in stream order.
    pub parity_errors: Vec<usize>,
}

// ---------------------------------------------------------------------------
// Encode
// ---------------------------------------------------------------------------

/// Accumulates bases and flushes complete fixed-width lines.
struct LineBuffer<'a, W: Write> {
    dst: &'a mut W,
    width: usize,
    line: Vec<u8>,
    bases: u64,
    lines: u64,
}

impl<'a, W: Write> LineBuffer<'a, W> {
    fn new(dst: &'a mut W, width: usize) -> Self {
        Self {
            dst,
            width,
            line: Vec::with_capacity(width),
            bases: 0,
            lines: 0,
        }
    }

    fn push(&mut self, base: u8) -> Result<()> {
        self.line.push(base);
        self.bases += 1;
        if self.line.len() == self.width {
            self.dst.write_all(&self.line)?;
            self.dst.write_all(b"\n")?;
            self.lines += 1;
            self.line.clear();
        }
        Ok(())
    }

    fn push_all(&mut self, bases: &[u8]) -> Result<()> {
        for &base in bases {
            self.push(base)?;
        }
        Ok(())
    }

    fn finish(mut self) -> Result<(u64, u64)> {
        if !self.line.is_empty() {
            self.dst.write_all(&self.line)?;
            self.dst.write_all(b"\n")?;
            self.lines += 1;
        }
        Ok((self.bases, self.lines))
    }
}

/// Fill `buf` from `src`, tolerating short reads; 0 means end of input.
fn read_chunk<R: Read>(src: &mut R, buf: &mut [u8]) -> Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match src.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        }
    }
    Ok(filled)
}

/// Encode a byte stream into marker-framed nucleotide text.
///
/// Memory use is bounded by the chunk size, not the payload size.
///
/// # Errors
///
/// Returns `LoligoError::InvalidArgument` for a zero chunk size, line
/// width, or parity block size, and `LoligoError::Io` for source or sink
/// failures.
pub fn encode_stream<R: Read, W: Write>(
    mut src: R,
    dst: &mut W,
    config: &StreamEncodeConfig,
) -> Result<StreamEncodeReport> {
    if config.chunk_size == 0 {
        return Err(LoligoError::InvalidArgument(
            "stream chunk size must be positive".to_string(),
        ));
    }
    if config.line_width == 0 {
        return Err(LoligoError::InvalidArgument(
            "stream line width must be positive".to_string(),
        ));
    }
    if let Some((block_size, _)) = config.parity {
        if block_size == 0 {
            return Err(LoligoError::InvalidArgument(
                "parity block size must be positive".to_string(),
            ));
        }
    }

    writeln!(dst, "{}{}", MARKER as char, config.record_id)?;

    let mut lines = LineBuffer::new(dst, config.line_width);
    let mut chunk = vec![0u8; config.chunk_size];
    let mut pending: Vec<u8> = Vec::new(); // parity block under construction
    let mut bytes_in = 0u64;

    loop {
        let n = read_chunk(&mut src, &mut chunk)?;
        if n == 0 {
            break;
        }
        bytes_in += n as u64;
        let bases = nucleotide::encode::<AtcgAlphabet>(&chunk[..n]);
        match config.parity {
            None => lines.push_all(&bases)?,
            Some((block_size, rule)) => {
                for &base in &bases {
                    pending.push(base);
                    if pending.len() == block_size {
                        lines.push_all(&pending)?;
                        lines.push(rule.parity_base(&pending))?;
                        pending.clear();
                    }
                }
            }
        }
    }

    // A short final parity block still gets its parity base.
    if let Some((_, rule)) = config.parity {
        if !pending.is_empty() {
            lines.push_all(&pending)?;
            lines.push(rule.parity_base(&pending))?;
        }
    }

    let (bases_out, lines_out) = lines.finish()?;
    Ok(StreamEncodeReport {
        bytes_in,
        bases_out,
        lines_out,
    })
}

// ---------------------------------------------------------------------------
// Decode
// ---------------------------------------------------------------------------

/// Decode marker-framed nucleotide text back into a byte stream.
///
/// The first non-blank line must be a marker line; further marker lines
/// are treated as framing and skipped. Bases are buffered until
/// `chunk_size * 4` of them are available, decoded, and written out; the
/// remainder is decoded at end of input.
///
/// # Errors
///
/// - `LoligoError::InvalidArgument` for a zero chunk size or parity block
///   size
/// - `LoligoError::InvalidFormat` when the leading marker line is missing
/// - `LoligoError::InvalidCharacter` / `LoligoError::InvalidLength` from
///   the base codec
/// - `LoligoError::Io` for source or sink failures
pub fn decode_stream<R: BufRead, W: Write>(
    src: R,
    dst: &mut W,
    config: &StreamDecodeConfig,
) -> Result<StreamDecodeReport> {
    if config.chunk_size == 0 {
        return Err(LoligoError::InvalidArgument(
            "stream chunk size must be positive".to_string(),
        ));
    }
    if let Some((block_size, _)) = config.parity {
        if block_size == 0 {
            return Err(LoligoError::InvalidArgument(
                "parity block size must be positive".to_string(),
            ));
        }
    }

    let buffer_bases = config.chunk_size * 4;
    let mut saw_marker = false;
    let mut bases: Vec<u8> = Vec::with_capacity(buffer_bases);
    let mut raw: Vec<u8> = Vec::new(); // parity-carrying bases not yet cut into blocks
    let mut bytes_out = 0u64;
    let mut parity_errors: Vec<usize> = Vec::new();
    let mut block_index = 0usize;

    for line in src.lines() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if trimmed.as_bytes()[0] == MARKER {
            saw_marker = true;
            continue;
        }
        if !saw_marker {
            return Err(LoligoError::InvalidFormat(
                "stream does not start with a record marker line".to_string(),
            ));
        }

        match config.parity {
            None => bases.extend_from_slice(trimmed.as_bytes()),
            Some((block_size, rule)) => {
                raw.extend_from_slice(trimmed.as_bytes());
                let chunk_len = block_size + 1;
                let complete = raw.len() / chunk_len * chunk_len;
                for piece in raw[..complete].chunks_exact(chunk_len) {
                    let (data, parity) = piece.split_at(block_size);
                    if rule.parity_base(data) != parity[0] {
                        parity_errors.push(block_index);
                    }
                    bases.extend_from_slice(data);
                    block_index += 1;
                }
                raw.drain(..complete);
            }
        }

        while bases.len() >= buffer_bases {
            let data = nucleotide::decode::<AtcgAlphabet>(&bases[..buffer_bases])?;
            dst.write_all(&data)?;
            bytes_out += data.len() as u64;
            bases.drain(..buffer_bases);
        }
    }

    if !saw_marker {
        return Err(LoligoError::InvalidFormat(
            "stream does not start with a record marker line".to_string(),
        ));
    }

    // End of input: a short parity chunk is data plus one unverified
    // trailing parity base.
    if config.parity.is_some() && !raw.is_empty() {
        bases.extend_from_slice(&raw[..raw.len() - 1]);
    }
    if !bases.is_empty() {
        let data = nucleotide::decode::<AtcgAlphabet>(&bases)?;
        dst.write_all(&data)?;
        bytes_out += data.len() as u64;
    }

    Ok(StreamDecodeReport {
        bytes_out,
        parity_errors,
    })
}
