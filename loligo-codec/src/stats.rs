//! Density and composition metrics for encoded sequences.

use crate::balance::max_homopolymer_run;

/// Storage-density metrics for one encoded payload.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EncodingStats {
    /// Payload size in bytes before encoding.
    pub payload_bytes: usize,
    /// Emitted sequence length in bases.
    pub sequence_len: usize,
    /// Payload bits carried per emitted base (2.0 for the direct codec).
    pub bits_per_base: f64,
    /// Direct-encoding length over actual length; above 1.0 means the
    /// sequence is denser than 4 bases per byte.
    pub compression_ratio: f64,
}

impl EncodingStats {
    /// Compute the metrics for a payload/sequence pair.
    ///
    /// Both ratios are 0.0 when the sequence is empty.
    pub fn new(payload_bytes: usize, sequence_len: usize) -> Self {
        let (bits_per_base, compression_ratio) = if sequence_len == 0 {
            (0.0, 0.0)
        } else {
            (
                (payload_bytes * 8) as f64 / sequence_len as f64,
                (payload_bytes * 4) as f64 / sequence_len as f64,
            )
        };
        Self {
            payload_bytes,
            sequence_len,
            bits_per_base,
            compression_ratio,
        }
    }
}

/// Base composition of a nucleotide sequence.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SequenceStats {
    /// Total sequence length.
    pub len: usize,
    /// Counts of `A`, `C`, `G`, `T`.
    pub a: usize,
    pub c: usize,
    pub g: usize,
    pub t: usize,
    /// Bytes outside the four bases (signal prefixes, corruption).
    pub other: usize,
    /// GC fraction over the whole sequence (0.0 when empty).
    pub gc_fraction: f64,
    /// Longest single-base run.
    pub max_homopolymer: usize,
}

/// Tally the composition of a sequence.
pub fn sequence_stats(seq: &[u8]) -> SequenceStats {
    let mut a = 0;
    let mut c = 0;
    let mut g = 0;
    let mut t = 0;
    let mut other = 0;
    for &base in seq {
        match base {
            b'A' => a += 1,
            b'C' => c += 1,
            b'G' => g += 1,
            b'T' => t += 1,
            _ => other += 1,
        }
    }
    let gc_fraction = if seq.is_empty() {
        0.0
    } else {
        (g + c) as f64 / seq.len() as f64
    };
    SequenceStats {
        len: seq.len(),
        a,
        c,
        g,
        t,
        other,
        gc_fraction,
        max_homopolymer: max_homopolymer_run(seq),
    }
}
