//! Structured per-payload metadata exchanged between codec stages.
//!
//! Every transformation the encoder applies leaves behind the parameters
//! the decoder needs to reverse it: the payload method, a Huffman code
//! table, parity layout, balancing bounds, and the FEC scheme. These travel
//! as plain structs; rendering them into an on-disk header line is the job
//! of an outer storage layer, not of this workspace.

use std::collections::BTreeMap;

/// Payload transformation applied before the nucleotide mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Method {
    /// Raw bytes, 4 nucleotides per byte.
    Direct,
    /// Per-payload Huffman code over the byte alphabet.
    Huffman,
    /// DEFLATE-compressed bytes, then direct mapping.
    Gzip,
    /// Zstandard-compressed bytes, then direct mapping.
    Zstd,
}

/// Huffman code table plus the bit padding recorded at encode time.
///
/// `codes` maps each byte value that occurred in the payload to its
/// bit-string code (`'0'`/`'1'` characters). `pad_bits` is the number of
/// zero bits appended to reach an even bit count, always 0 or 1.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HuffmanMeta {
    /// Byte value -> bit-string code.
    pub codes: BTreeMap<u8, String>,
    /// Zero bits appended after the coded payload (0 or 1).
    pub pad_bits: u8,
}

/// Parity layer layout: block size and the rule identifier.
///
/// The rule is carried as its string identifier so that headers written by
/// a newer encoder remain representable; resolving the identifier to an
/// implementation happens at decode time and may fail.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParityMeta {
    /// Data symbols per parity block.
    pub block_size: usize,
    /// Parity rule identifier (e.g. "gc-count").
    pub rule: String,
}

/// GC-content and homopolymer bounds for the balancer.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GcBounds {
    /// Minimum acceptable GC fraction (default 0.4).
    pub gc_min: f64,
    /// Maximum acceptable GC fraction (default 0.6).
    pub gc_max: f64,
    /// Longest acceptable run of one base (default 3).
    pub max_homopolymer: usize,
}

impl Default for GcBounds {
    fn default() -> Self {
        Self {
            gc_min: 0.4,
            gc_max: 0.6,
            max_homopolymer: 3,
        }
    }
}

/// Forward-error-correction scheme with its per-scheme bookkeeping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FecMeta {
    /// Hamming(7,4) with the trailing zero-bit count of the packed stream.
    Hamming {
        /// Trailing zero bits in the final byte (0-7, always even).
        pad_bits: u8,
    },
    /// Three-fold symbol repetition.
    TripleRepeat,
    /// Reed-Solomon over GF(2^8) with `parity_count` parity bytes per block.
    ReedSolomon {
        /// Parity bytes appended to each data block (1-254).
        parity_count: usize,
    },
}

/// Complete per-payload header.
///
/// Optional stages that were not applied stay `None`; the decoder reverses
/// exactly the stages that are present, outermost first.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PayloadHeader {
    /// Payload transformation.
    pub method: Method,
    /// Huffman table and padding, when `method` is [`Method::Huffman`].
    pub huffman: Option<HuffmanMeta>,
    /// Parity layout, when a parity layer was added.
    pub parity: Option<ParityMeta>,
    /// Balancer bounds, when the sequence was balance-encoded.
    pub balance: Option<GcBounds>,
    /// FEC scheme, when one was applied.
    pub fec: Option<FecMeta>,
}

impl PayloadHeader {
    /// Header for a plain direct encoding with no optional stages.
    pub fn direct() -> Self {
        Self {
            method: Method::Direct,
            huffman: None,
            parity: None,
            balance: None,
            fec: None,
        }
    }
}
